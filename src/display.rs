//! Public display composition: the read-only render path the broadcast
//! page uses.
//!
//! The display has no selection, handles, or gestures; it resolves the
//! scene to show, filters to visible widgets, and renders each through the
//! same [`crate::render::render`] the editor preview uses, so what the
//! editor shows is exactly what the stream shows. Output is a flat layer
//! list in paint order with the per-widget transform (position, size,
//! rotation, opacity) kept separate from the kind's visual tree.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use serde::Serialize;
use uuid::Uuid;

use crate::render::{self, LiveData, Visual};
use crate::sync::LiveSnapshot;

/// One positioned widget ready to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetLayer {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub z_index: i64,
    pub visual: Visual,
}

/// A fully composed scene frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneVisual {
    pub scene_id: Uuid,
    pub width: f64,
    pub height: f64,
    pub background: String,
    /// Layers in paint order, back to front.
    pub layers: Vec<WidgetLayer>,
}

/// Compose the snapshot's active scene for display.
///
/// Hidden widgets are skipped entirely; everything else renders, with
/// missing hunt data degrading to per-widget placeholders inside
/// [`render::render`]. Returns `None` only when the project has no scenes
/// at all.
#[must_use]
pub fn render_scene(snapshot: &LiveSnapshot) -> Option<SceneVisual> {
    let scene = snapshot.project.active_scene()?;
    let live = LiveData {
        hunt: snapshot.hunt.as_ref(),
        current_game: snapshot.current_game.as_ref(),
    };

    let layers = scene
        .sorted_widgets()
        .into_iter()
        .filter(|w| w.visible)
        .map(|w| WidgetLayer {
            id: w.id,
            x: w.x,
            y: w.y,
            width: w.width,
            height: w.height,
            rotation: w.rotation,
            opacity: w.opacity,
            z_index: w.z_index,
            visual: render::render(w, &live),
        })
        .collect();

    Some(SceneVisual {
        scene_id: scene.id,
        width: scene.width,
        height: scene.height,
        background: scene.background.clone(),
        layers,
    })
}
