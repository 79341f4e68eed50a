use serde_json::json;
use uuid::Uuid;

use super::*;

fn empty_project() -> Project {
    Project {
        id: Uuid::new_v4(),
        name: "Stream Overlay".to_owned(),
        slug: "stream-overlay".to_owned(),
        active_scene_id: None,
        active_hunt_id: None,
        scenes: Vec::new(),
    }
}

fn doc_with_scene() -> (ProjectDoc, Uuid) {
    let mut doc = ProjectDoc::new(empty_project());
    let scene_id = doc.add_scene("Main").unwrap().id;
    (doc, scene_id)
}

// =============================================================
// Slugs
// =============================================================

#[test]
fn slugify_collapses_and_lowercases() {
    assert_eq!(slugify("Main Scene"), "main-scene");
    assert_eq!(slugify("  BIG!! Win?? "), "big-win");
    assert_eq!(slugify("already-fine"), "already-fine");
    assert_eq!(slugify("!!!"), "");
}

// =============================================================
// Scenes
// =============================================================

#[test]
fn new_scenes_get_broadcast_defaults_and_increasing_positions() {
    let (mut doc, first) = doc_with_scene();
    let second = doc.add_scene("Break").unwrap().id;

    let scene = doc.scene(first).unwrap();
    assert_eq!((scene.width, scene.height), (1920.0, 1080.0));
    assert_eq!(scene.background, "transparent");
    assert_eq!(scene.slug, "main");
    assert!(doc.scene(first).unwrap().position < doc.scene(second).unwrap().position);
}

#[test]
fn blank_scene_name_is_rejected() {
    let mut doc = ProjectDoc::new(empty_project());
    assert!(matches!(doc.add_scene("   "), Err(Error::Validation(_))));
    assert!(doc.project().scenes.is_empty());
}

#[test]
fn active_scene_falls_back_to_lowest_position() {
    let (mut doc, first) = doc_with_scene();
    let second = doc.add_scene("Break").unwrap().id;

    // No pointer set: lowest position wins.
    assert_eq!(doc.active_scene().unwrap().id, first);

    doc.set_active_scene(second).unwrap();
    assert_eq!(doc.active_scene().unwrap().id, second);
}

#[test]
fn deleting_the_active_scene_repoints_to_the_lowest_survivor() {
    let (mut doc, first) = doc_with_scene();
    let second = doc.add_scene("Break").unwrap().id;
    doc.set_active_scene(first).unwrap();

    doc.delete_scene(first).unwrap();
    assert_eq!(doc.project().active_scene_id, Some(second));

    doc.delete_scene(second).unwrap();
    assert_eq!(doc.project().active_scene_id, None);
    assert!(doc.active_scene().is_none());
}

#[test]
fn deleting_an_inactive_scene_leaves_the_pointer_alone() {
    let (mut doc, first) = doc_with_scene();
    let second = doc.add_scene("Break").unwrap().id;
    doc.set_active_scene(first).unwrap();

    doc.delete_scene(second).unwrap();
    assert_eq!(doc.project().active_scene_id, Some(first));
}

#[test]
fn scene_patch_updates_slug_with_name() {
    let (mut doc, scene_id) = doc_with_scene();
    doc.patch_scene(
        scene_id,
        &ScenePatch { name: Some("Intermission View".to_owned()), ..ScenePatch::default() },
    )
    .unwrap();
    let scene = doc.scene(scene_id).unwrap();
    assert_eq!(scene.name, "Intermission View");
    assert_eq!(scene.slug, "intermission-view");
}

// =============================================================
// Widgets
// =============================================================

#[test]
fn new_widget_spawns_from_registry_defaults_on_top() {
    let (mut doc, scene_id) = doc_with_scene();
    let first = doc.add_widget(scene_id, WidgetKind::HuntTable).unwrap().id;
    let second = doc.add_widget(scene_id, WidgetKind::Timer).unwrap().id;

    let w = doc.widget(first).unwrap();
    assert_eq!((w.x, w.y), (50.0, 50.0));
    assert_eq!((w.width, w.height), (600.0, 400.0));
    assert_eq!(w.label.as_deref(), Some("Hunt Table"));
    assert!(w.visible);
    assert_eq!(w.opacity, 1.0);
    assert!(doc.widget(second).unwrap().z_index > w.z_index);
}

#[test]
fn patch_clamps_size_floors_and_opacity() {
    let (mut doc, scene_id) = doc_with_scene();
    let id = doc.add_widget(scene_id, WidgetKind::CustomText).unwrap().id;

    doc.patch_widget(
        id,
        &WidgetPatch {
            width: Some(10.0),
            height: Some(-5.0),
            opacity: Some(1.8),
            ..WidgetPatch::default()
        },
    )
    .unwrap();

    let w = doc.widget(id).unwrap();
    assert_eq!((w.width, w.height), (50.0, 30.0));
    assert_eq!(w.opacity, 1.0);
}

#[test]
fn patch_rejects_config_of_a_different_kind() {
    let (mut doc, scene_id) = doc_with_scene();
    let id = doc.add_widget(scene_id, WidgetKind::Timer).unwrap().id;

    let err = doc
        .patch_widget(
            id,
            &WidgetPatch {
                config: Some(WidgetKind::Image.default_config()),
                ..WidgetPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    // Nothing changed.
    assert_eq!(doc.widget(id).unwrap().config.kind(), WidgetKind::Timer);
}

#[test]
fn patching_a_missing_widget_is_not_found() {
    let (mut doc, _) = doc_with_scene();
    let err = doc.patch_widget(Uuid::new_v4(), &WidgetPatch::geometry(0.0, 0.0, 100.0, 100.0));
    assert!(matches!(err, Err(Error::NotFound(_))));
}

#[test]
fn delete_leaves_sibling_z_indexes_untouched() {
    let (mut doc, scene_id) = doc_with_scene();
    let a = doc.add_widget(scene_id, WidgetKind::Timer).unwrap().id;
    let b = doc.add_widget(scene_id, WidgetKind::Image).unwrap().id;
    let c = doc.add_widget(scene_id, WidgetKind::CustomText).unwrap().id;
    let z_before: Vec<i64> = [a, c].iter().map(|id| doc.widget(*id).unwrap().z_index).collect();

    let removed = doc.delete_widget(b).unwrap();
    assert_eq!(removed.id, b);
    let z_after: Vec<i64> = [a, c].iter().map(|id| doc.widget(*id).unwrap().z_index).collect();
    assert_eq!(z_before, z_after);
}

// =============================================================
// Z-order
// =============================================================

#[test]
fn paint_order_is_z_index_with_id_ties() {
    let (mut doc, scene_id) = doc_with_scene();
    let a = doc.add_widget(scene_id, WidgetKind::Timer).unwrap().id;
    let b = doc.add_widget(scene_id, WidgetKind::Image).unwrap().id;
    // Force a tie.
    doc.patch_widget(b, &WidgetPatch { z_index: Some(0), ..WidgetPatch::default() }).unwrap();

    let order: Vec<Uuid> = doc.sorted_widgets(scene_id).iter().map(|w| w.id).collect();
    let expected = if a < b { vec![a, b] } else { vec![b, a] };
    assert_eq!(order, expected);
}

#[test]
fn bring_to_front_goes_above_everything() {
    let (mut doc, scene_id) = doc_with_scene();
    let a = doc.add_widget(scene_id, WidgetKind::Timer).unwrap().id;
    let b = doc.add_widget(scene_id, WidgetKind::Image).unwrap().id;

    doc.bring_to_front(a).unwrap();
    assert!(doc.widget(a).unwrap().z_index > doc.widget(b).unwrap().z_index);
    assert_eq!(doc.sorted_widgets(scene_id).last().unwrap().id, a);
}

#[test]
fn reorder_assigns_list_index_as_z() {
    let (mut doc, scene_id) = doc_with_scene();
    let a = doc.add_widget(scene_id, WidgetKind::Timer).unwrap().id;
    let b = doc.add_widget(scene_id, WidgetKind::Image).unwrap().id;
    let c = doc.add_widget(scene_id, WidgetKind::CustomText).unwrap().id;

    doc.reorder_widgets(scene_id, &[c, a, b]).unwrap();
    let order: Vec<Uuid> = doc.sorted_widgets(scene_id).iter().map(|w| w.id).collect();
    assert_eq!(order, vec![c, a, b]);
}

#[test]
fn reorder_with_a_bad_list_changes_nothing() {
    let (mut doc, scene_id) = doc_with_scene();
    let a = doc.add_widget(scene_id, WidgetKind::Timer).unwrap().id;
    let b = doc.add_widget(scene_id, WidgetKind::Image).unwrap().id;
    let before: Vec<i64> =
        doc.sorted_widgets(scene_id).iter().map(|w| w.z_index).collect();

    // Wrong length.
    assert!(matches!(doc.reorder_widgets(scene_id, &[a]), Err(Error::Validation(_))));
    // Right length, foreign id.
    assert!(matches!(
        doc.reorder_widgets(scene_id, &[a, Uuid::new_v4()]),
        Err(Error::Validation(_))
    ));
    let after: Vec<i64> = doc.sorted_widgets(scene_id).iter().map(|w| w.z_index).collect();
    assert_eq!(before, after);
    let _ = b;
}

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn widget_decodes_config_by_kind_and_applies_defaults() {
    let w: Widget = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "type": "progress-bar",
        "x": 10,
        "y": 20,
        "width": 400,
        "height": 50,
        "config": {"barColor": "#22c55e"}
    }))
    .unwrap();
    assert_eq!(w.kind, WidgetKind::ProgressBar);
    assert!(w.visible);
    assert_eq!(w.opacity, 1.0);
    let WidgetConfig::ProgressBar(cfg) = w.config else {
        panic!("wrong config variant");
    };
    assert_eq!(cfg.bar_color, "#22c55e");
    assert!(cfg.show_label);
}

#[test]
fn widget_without_config_body_takes_registry_defaults() {
    let w: Widget = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "type": "hunt-table",
        "width": 600,
        "height": 400
    }))
    .unwrap();
    assert_eq!(w.config, WidgetKind::HuntTable.default_config());

    // An explicit null body behaves the same as an absent one.
    let w: Widget = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "type": "timer",
        "width": 200,
        "height": 60,
        "config": null
    }))
    .unwrap();
    assert_eq!(w.config, WidgetKind::Timer.default_config());
}

#[test]
fn widget_decoding_clamps_undersized_boxes() {
    let w: Widget = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "type": "timer",
        "width": 5,
        "height": 5,
        "opacity": 7.0
    }))
    .unwrap();
    assert_eq!((w.width, w.height), (50.0, 30.0));
    assert_eq!(w.opacity, 1.0);
}

#[test]
fn widget_with_mismatched_config_fails_to_decode() {
    // A timer body handed a string where a number belongs.
    let result = serde_json::from_value::<Widget>(json!({
        "id": Uuid::new_v4(),
        "type": "timer",
        "width": 200,
        "height": 60,
        "config": {"fontSize": "huge"}
    }));
    assert!(result.is_err());
}

#[test]
fn geometry_patch_serializes_only_present_fields() {
    let patch = WidgetPatch { x: Some(10.0), y: Some(20.0), ..WidgetPatch::default() };
    let wire = serde_json::to_value(&patch).unwrap();
    assert_eq!(wire, json!({"x": 10.0, "y": 20.0}));
    assert!(patch.touches_geometry());
    assert!(!WidgetPatch::default().touches_geometry());
}
