//! Document model: the overlay project, its scenes and widgets, and the
//! in-memory store that mutates them while preserving invariants.
//!
//! Data flows into this layer from the record store (JSON deserialization,
//! kind-directed config decoding) and from the editor (gesture patches).
//! The renderer reads widgets in paint order via
//! [`ProjectDoc::sorted_widgets`].
//!
//! Invariants held here: widget boxes never drop below the size floors,
//! opacity stays in `[0,1]`, z-order ties break by id, and the project's
//! active-scene pointer never dangles after a scene deletion.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::WidgetConfig;
use crate::consts::{DEFAULT_WIDGET_X, DEFAULT_WIDGET_Y, MIN_WIDGET_HEIGHT, MIN_WIDGET_WIDTH};
use crate::error::Error;
use crate::registry::WidgetKind;

/// A positioned, typed, configurable element within a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    #[serde(default)]
    pub label: Option<String>,
    /// Top-left corner, scene-local pixels.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise degrees.
    pub rotation: f64,
    /// Paint order; relative only, ties broken by id.
    pub z_index: i64,
    pub visible: bool,
    pub locked: bool,
    /// Whole-widget opacity in `[0,1]`.
    pub opacity: f64,
    pub config: WidgetConfig,
}

impl Widget {
    /// A fresh widget of `kind` at the default spawn point, sized and
    /// configured from the registry.
    #[must_use]
    pub fn with_defaults(id: Uuid, kind: WidgetKind) -> Self {
        let def = kind.def();
        Self {
            id,
            kind,
            label: Some(def.label.to_owned()),
            x: DEFAULT_WIDGET_X,
            y: DEFAULT_WIDGET_Y,
            width: def.default_width,
            height: def.default_height,
            rotation: 0.0,
            z_index: 0,
            visible: true,
            locked: false,
            opacity: 1.0,
            config: kind.default_config(),
        }
    }
}

/// Wire shape for a widget before the config body is bound to its kind.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWidget {
    id: Uuid,
    #[serde(rename = "type")]
    kind: WidgetKind,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    z_index: i64,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    locked: bool,
    #[serde(default = "default_opacity")]
    opacity: f64,
    #[serde(default)]
    config: serde_json::Value,
}

fn default_true() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

impl<'de> Deserialize<'de> for Widget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawWidget::deserialize(deserializer)?;
        // An absent config body means "all defaults", same as `{}`.
        let config_value = if raw.config.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            raw.config
        };
        let config = WidgetConfig::from_kind_value(raw.kind, config_value)
            .map_err(serde::de::Error::custom)?;
        Ok(Self {
            id: raw.id,
            kind: raw.kind,
            label: raw.label,
            x: raw.x,
            y: raw.y,
            width: raw.width.max(MIN_WIDGET_WIDTH),
            height: raw.height.max(MIN_WIDGET_HEIGHT),
            rotation: raw.rotation,
            z_index: raw.z_index,
            visible: raw.visible,
            locked: raw.locked,
            opacity: raw.opacity.clamp(0.0, 1.0),
            config,
        })
    }
}

/// A fixed-size canvas owning widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub width: f64,
    pub height: f64,
    /// `"transparent"` or a CSS color.
    pub background: String,
    /// Ordinal among sibling scenes.
    pub position: i64,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Scene {
    /// Widgets in paint order `(z_index, id)`.
    #[must_use]
    pub fn sorted_widgets(&self) -> Vec<&Widget> {
        let mut widgets: Vec<&Widget> = self.widgets.iter().collect();
        widgets.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        widgets
    }
}

/// The top-level composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub active_scene_id: Option<Uuid>,
    #[serde(default)]
    pub active_hunt_id: Option<Uuid>,
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

impl Project {
    #[must_use]
    pub fn scene(&self, id: Uuid) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// The scene the project points at, falling back to the lowest
    /// `position` when the pointer is unset.
    #[must_use]
    pub fn active_scene(&self) -> Option<&Scene> {
        self.active_scene_id
            .and_then(|id| self.scene(id))
            .or_else(|| self.scenes.iter().min_by_key(|s| s.position))
    }
}

/// Sparse update for a widget. Only present fields are applied; geometry
/// and opacity are clamped, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<WidgetConfig>,
}

impl WidgetPatch {
    /// A geometry-only patch, as emitted at the end of a gesture.
    #[must_use]
    pub fn geometry(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Whether the patch touches position or size.
    #[must_use]
    pub fn touches_geometry(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.width.is_some() || self.height.is_some()
    }
}

/// Sparse update for a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Lowercase the name and collapse runs of non-alphanumerics into single
/// hyphens, matching the store's slug convention.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// In-memory store of one project's scenes and widgets.
///
/// All mutations are synchronous and total: they either apply fully or
/// return an error having changed nothing. Persistence is the caller's
/// concern.
#[derive(Debug, Clone)]
pub struct ProjectDoc {
    project: Project,
}

impl ProjectDoc {
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Replace the whole project with a fresh server snapshot.
    pub fn load_snapshot(&mut self, project: Project) {
        self.project = project;
    }

    // --- Scene queries ---

    #[must_use]
    pub fn scene(&self, id: Uuid) -> Option<&Scene> {
        self.project.scene(id)
    }

    /// See [`Project::active_scene`].
    #[must_use]
    pub fn active_scene(&self) -> Option<&Scene> {
        self.project.active_scene()
    }

    /// Widgets of a scene in paint order `(z_index, id)`.
    #[must_use]
    pub fn sorted_widgets(&self, scene_id: Uuid) -> Vec<&Widget> {
        self.scene(scene_id).map(Scene::sorted_widgets).unwrap_or_default()
    }

    #[must_use]
    pub fn widget(&self, id: Uuid) -> Option<&Widget> {
        self.project.scenes.iter().flat_map(|s| &s.widgets).find(|w| w.id == id)
    }

    /// The scene owning a widget.
    #[must_use]
    pub fn scene_of_widget(&self, widget_id: Uuid) -> Option<&Scene> {
        self.project
            .scenes
            .iter()
            .find(|s| s.widgets.iter().any(|w| w.id == widget_id))
    }

    // --- Scene mutations ---

    /// Create a scene appended after the existing ones.
    ///
    /// # Errors
    ///
    /// `Validation` when the name is blank.
    pub fn add_scene(&mut self, name: &str) -> Result<&Scene, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("scene name is required".into()));
        }
        let position = self.project.scenes.iter().map(|s| s.position + 1).max().unwrap_or(0);
        let scene = Scene {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            slug: slugify(name),
            width: 1920.0,
            height: 1080.0,
            background: "transparent".to_owned(),
            position,
            widgets: Vec::new(),
        };
        tracing::debug!(scene = %scene.id, name, "scene created");
        self.project.scenes.push(scene);
        Ok(self.project.scenes.last().expect("just pushed"))
    }

    /// Delete a scene. If it was the active scene, the pointer moves to
    /// the surviving scene with the lowest `position`, or `None` when the
    /// project has no scenes left.
    ///
    /// # Errors
    ///
    /// `NotFound` when no scene has this id.
    pub fn delete_scene(&mut self, id: Uuid) -> Result<(), Error> {
        let idx = self
            .project
            .scenes
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(format!("scene {id}")))?;
        self.project.scenes.remove(idx);
        if self.project.active_scene_id == Some(id) {
            self.project.active_scene_id = self
                .project
                .scenes
                .iter()
                .min_by_key(|s| s.position)
                .map(|s| s.id);
            tracing::debug!(next = ?self.project.active_scene_id, "active scene deleted, repointed");
        }
        Ok(())
    }

    /// Apply a sparse scene update.
    ///
    /// # Errors
    ///
    /// `NotFound` when no scene has this id.
    pub fn patch_scene(&mut self, id: Uuid, patch: &ScenePatch) -> Result<(), Error> {
        let scene = self
            .project
            .scenes
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(format!("scene {id}")))?;
        if let Some(ref name) = patch.name {
            scene.name = name.clone();
            scene.slug = slugify(name);
        }
        if let Some(w) = patch.width {
            scene.width = w.max(1.0);
        }
        if let Some(h) = patch.height {
            scene.height = h.max(1.0);
        }
        if let Some(ref bg) = patch.background {
            scene.background = bg.clone();
        }
        Ok(())
    }

    /// Point the project at a different scene.
    ///
    /// # Errors
    ///
    /// `NotFound` when no scene has this id.
    pub fn set_active_scene(&mut self, id: Uuid) -> Result<(), Error> {
        if self.scene(id).is_none() {
            return Err(Error::NotFound(format!("scene {id}")));
        }
        self.project.active_scene_id = Some(id);
        Ok(())
    }

    /// Link or unlink the live hunt.
    pub fn set_active_hunt(&mut self, hunt_id: Option<Uuid>) {
        self.project.active_hunt_id = hunt_id;
    }

    // --- Widget mutations ---

    /// Create a widget from registry defaults, stacked on top.
    ///
    /// # Errors
    ///
    /// `NotFound` when the scene does not exist.
    pub fn add_widget(&mut self, scene_id: Uuid, kind: WidgetKind) -> Result<&Widget, Error> {
        let scene = self
            .project
            .scenes
            .iter_mut()
            .find(|s| s.id == scene_id)
            .ok_or_else(|| Error::NotFound(format!("scene {scene_id}")))?;
        let z_index = scene.widgets.iter().map(|w| w.z_index + 1).max().unwrap_or(0);
        let mut widget = Widget::with_defaults(Uuid::new_v4(), kind);
        widget.z_index = z_index;
        tracing::debug!(widget = %widget.id, ?kind, "widget created");
        scene.widgets.push(widget);
        Ok(scene.widgets.last().expect("just pushed"))
    }

    /// Apply a sparse widget update, clamping geometry to the size floors
    /// and opacity to `[0,1]`.
    ///
    /// Patches coming from direct manipulation must be gated on `locked`
    /// by the editor; explicit property edits (this call) always apply.
    ///
    /// # Errors
    ///
    /// `NotFound` when no widget has this id.
    pub fn patch_widget(&mut self, id: Uuid, patch: &WidgetPatch) -> Result<(), Error> {
        let widget = self
            .project
            .scenes
            .iter_mut()
            .flat_map(|s| &mut s.widgets)
            .find(|w| w.id == id)
            .ok_or_else(|| Error::NotFound(format!("widget {id}")))?;
        if let Some(x) = patch.x {
            widget.x = x;
        }
        if let Some(y) = patch.y {
            widget.y = y;
        }
        if let Some(w) = patch.width {
            widget.width = w.max(MIN_WIDGET_WIDTH);
        }
        if let Some(h) = patch.height {
            widget.height = h.max(MIN_WIDGET_HEIGHT);
        }
        if let Some(r) = patch.rotation {
            widget.rotation = r;
        }
        if let Some(z) = patch.z_index {
            widget.z_index = z;
        }
        if let Some(v) = patch.visible {
            widget.visible = v;
        }
        if let Some(l) = patch.locked {
            widget.locked = l;
        }
        if let Some(o) = patch.opacity {
            widget.opacity = o.clamp(0.0, 1.0);
        }
        if let Some(ref label) = patch.label {
            widget.label = Some(label.clone());
        }
        if let Some(ref config) = patch.config {
            if config.kind() != widget.kind {
                return Err(Error::Validation(format!(
                    "config shape {:?} does not match widget kind {:?}",
                    config.kind(),
                    widget.kind
                )));
            }
            widget.config = config.clone();
        }
        Ok(())
    }

    /// Delete a widget. Sibling z-indexes are untouched.
    ///
    /// # Errors
    ///
    /// `NotFound` when no widget has this id.
    pub fn delete_widget(&mut self, id: Uuid) -> Result<Widget, Error> {
        for scene in &mut self.project.scenes {
            if let Some(idx) = scene.widgets.iter().position(|w| w.id == id) {
                return Ok(scene.widgets.remove(idx));
            }
        }
        Err(Error::NotFound(format!("widget {id}")))
    }

    /// Restack a widget above everything else in its scene.
    ///
    /// # Errors
    ///
    /// `NotFound` when no widget has this id.
    pub fn bring_to_front(&mut self, id: Uuid) -> Result<(), Error> {
        let scene = self
            .project
            .scenes
            .iter_mut()
            .find(|s| s.widgets.iter().any(|w| w.id == id))
            .ok_or_else(|| Error::NotFound(format!("widget {id}")))?;
        let top = scene.widgets.iter().map(|w| w.z_index + 1).max().unwrap_or(0);
        let widget = scene.widgets.iter_mut().find(|w| w.id == id).expect("scene was matched");
        widget.z_index = top;
        Ok(())
    }

    /// Reassign z-order for a whole scene from an explicit id list
    /// (index in the list becomes the z-index). Transactional: the list
    /// must be a permutation of the scene's widget ids or nothing changes.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing scene, `Validation` for a list that is not
    /// a permutation of the scene's widgets.
    pub fn reorder_widgets(&mut self, scene_id: Uuid, ordered_ids: &[Uuid]) -> Result<(), Error> {
        let scene = self
            .project
            .scenes
            .iter_mut()
            .find(|s| s.id == scene_id)
            .ok_or_else(|| Error::NotFound(format!("scene {scene_id}")))?;
        if ordered_ids.len() != scene.widgets.len() {
            return Err(Error::Validation(format!(
                "reorder list has {} ids, scene has {} widgets",
                ordered_ids.len(),
                scene.widgets.len()
            )));
        }
        for widget in &scene.widgets {
            if !ordered_ids.contains(&widget.id) {
                return Err(Error::Validation(format!(
                    "reorder list is missing widget {}",
                    widget.id
                )));
            }
        }
        for (z, id) in ordered_ids.iter().enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            let z = z as i64;
            if let Some(widget) = scene.widgets.iter_mut().find(|w| w.id == *id) {
                widget.z_index = z;
            }
        }
        Ok(())
    }
}
