use uuid::Uuid;

use super::*;
use crate::model::{Project, Scene, Widget};
use crate::registry::WidgetKind;

fn scene(position: i64, widgets: Vec<Widget>) -> Scene {
    Scene {
        id: Uuid::new_v4(),
        name: format!("Scene {position}"),
        slug: format!("scene-{position}"),
        width: 1920.0,
        height: 1080.0,
        background: "transparent".to_owned(),
        position,
        widgets,
    }
}

fn snapshot(project: Project) -> LiveSnapshot {
    LiveSnapshot { project, hunt: None, current_game: None }
}

fn widget(kind: WidgetKind, z_index: i64) -> Widget {
    let mut w = Widget::with_defaults(Uuid::new_v4(), kind);
    w.z_index = z_index;
    w
}

#[test]
fn empty_project_composes_nothing() {
    let project = Project {
        id: Uuid::new_v4(),
        name: "Overlay".to_owned(),
        slug: "overlay".to_owned(),
        active_scene_id: None,
        active_hunt_id: None,
        scenes: Vec::new(),
    };
    assert!(render_scene(&snapshot(project)).is_none());
}

#[test]
fn unset_pointer_falls_back_to_lowest_position_scene() {
    let first = scene(0, vec![widget(WidgetKind::Timer, 0)]);
    let second = scene(1, Vec::new());
    let first_id = first.id;
    let project = Project {
        id: Uuid::new_v4(),
        name: "Overlay".to_owned(),
        slug: "overlay".to_owned(),
        active_scene_id: None,
        active_hunt_id: None,
        // Deliberately out of position order.
        scenes: vec![second, first],
    };
    let composed = render_scene(&snapshot(project)).unwrap();
    assert_eq!(composed.scene_id, first_id);
    assert_eq!(composed.layers.len(), 1);
}

#[test]
fn hidden_widgets_are_skipped_and_layers_are_in_paint_order() {
    let mut hidden = widget(WidgetKind::CustomText, 5);
    hidden.visible = false;
    let back = widget(WidgetKind::Image, 1);
    let front = widget(WidgetKind::Timer, 9);
    let back_id = back.id;
    let front_id = front.id;

    let s = scene(0, vec![front, hidden, back]);
    let scene_id = s.id;
    let project = Project {
        id: Uuid::new_v4(),
        name: "Overlay".to_owned(),
        slug: "overlay".to_owned(),
        active_scene_id: Some(scene_id),
        active_hunt_id: None,
        scenes: vec![s],
    };

    let composed = render_scene(&snapshot(project)).unwrap();
    let ids: Vec<Uuid> = composed.layers.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![back_id, front_id]);
}

#[test]
fn layers_carry_transform_and_scene_carries_canvas() {
    let mut w = widget(WidgetKind::CustomText, 0);
    w.x = 120.0;
    w.y = 40.0;
    w.rotation = 15.0;
    w.opacity = 0.5;
    let s = scene(0, vec![w]);
    let project = Project {
        id: Uuid::new_v4(),
        name: "Overlay".to_owned(),
        slug: "overlay".to_owned(),
        active_scene_id: Some(s.id),
        active_hunt_id: None,
        scenes: vec![s],
    };

    let composed = render_scene(&snapshot(project)).unwrap();
    assert_eq!(composed.width, 1920.0);
    assert_eq!(composed.height, 1080.0);
    assert_eq!(composed.background, "transparent");
    let layer = &composed.layers[0];
    assert_eq!(layer.x, 120.0);
    assert_eq!(layer.y, 40.0);
    assert_eq!(layer.rotation, 15.0);
    assert_eq!(layer.opacity, 0.5);
    assert!(matches!(layer.visual, Visual::Frame { .. }));
}
