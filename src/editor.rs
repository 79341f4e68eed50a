//! Direct-manipulation editor: the gesture state machine and the
//! action-emitting editor core.
//!
//! The host layer owns pointer events and hit-testing (widgets are plain
//! axis-aligned boxes on its surface); it feeds pointer-down/move/up into
//! [`EditorCore`] and processes the returned [`Action`]s, applying
//! persistence calls through the record store and re-rendering. All
//! geometry math happens here through [`crate::geometry`]; moves apply
//! optimistic in-memory patches only, and a single persistence action is
//! emitted on release.
//!
//! Each active gesture snapshots the view scale at pointer-down: viewport
//! auto-fit may rescale the canvas mid-gesture without corrupting the
//! delta math.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use uuid::Uuid;

use crate::consts::FIT_PADDING_PX;
use crate::geometry::{self, EdgeSet, Point, Size};
use crate::model::{Project, ProjectDoc, ScenePatch, Widget, WidgetPatch};
use crate::registry::WidgetKind;

/// What the host's hit-test found under a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas.
    Canvas,
    /// A widget's body.
    Body(Uuid),
    /// One of the selected widget's eight resize handles.
    Handle(Uuid, EdgeSet),
}

/// Actions returned from editor calls for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// Selection changed; the host shows/hides handles and the property
    /// panel.
    SelectionChanged(Option<Uuid>),
    /// A widget was created locally and must be persisted.
    WidgetCreated(Widget),
    /// A widget mutation must be persisted. Failure is non-fatal: local
    /// state keeps the optimistic value until the next successful poll.
    PersistWidget { id: Uuid, patch: WidgetPatch },
    /// A widget was deleted locally and must be deleted remotely.
    WidgetDeleted { id: Uuid },
    /// A scene mutation must be persisted.
    PersistScene { id: Uuid, patch: ScenePatch },
    /// The visual state changed; the host should redraw.
    RenderNeeded,
}

/// The active pointer gesture. Drag and resize are mutually exclusive per
/// pointer session; each variant carries the context captured at
/// pointer-down, including the view scale snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Idle,
    Dragging {
        widget_id: Uuid,
        /// Screen-space pointer position at pointer-down.
        start: Point,
        /// Widget position at pointer-down.
        origin: Point,
        /// View scale at pointer-down; fixed for the gesture.
        scale: f64,
    },
    Resizing {
        widget_id: Uuid,
        edges: EdgeSet,
        start: Point,
        origin: Point,
        origin_size: Size,
        scale: f64,
    },
}

impl Default for Gesture {
    fn default() -> Self {
        Self::Idle
    }
}

impl Gesture {
    /// The widget an active gesture is manipulating.
    #[must_use]
    pub fn widget_id(&self) -> Option<Uuid> {
        match self {
            Self::Idle => None,
            Self::Dragging { widget_id, .. } | Self::Resizing { widget_id, .. } => {
                Some(*widget_id)
            }
        }
    }
}

/// Persistent UI state visible to the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    pub selected_id: Option<Uuid>,
}

/// The editing engine: document, selection, gesture, and viewport fit.
pub struct EditorCore {
    pub doc: ProjectDoc,
    pub ui: UiState,
    pub gesture: Gesture,
    pub viewport_w: f64,
    pub viewport_h: f64,
    /// Current auto-fit scale of the editing canvas.
    pub scale: f64,
}

impl EditorCore {
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self {
            doc: ProjectDoc::new(project),
            ui: UiState::default(),
            gesture: Gesture::Idle,
            viewport_w: 0.0,
            viewport_h: 0.0,
            scale: 1.0,
        }
    }

    // --- Viewport ---

    /// Record the editing container's pixel size and refit the canvas.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_w = width;
        self.viewport_h = height;
        self.refit();
    }

    /// Recompute the auto-fit scale from the viewport and the active
    /// scene's declared dimensions. Called on viewport resize and after a
    /// scene dimension change. Never disturbs an in-flight gesture, which
    /// keeps its own scale snapshot.
    pub fn refit(&mut self) {
        let (w, h) = self
            .doc
            .active_scene()
            .map_or((0.0, 0.0), |s| (s.width, s.height));
        self.scale = geometry::fit_scale(self.viewport_w, self.viewport_h, w, h, FIT_PADDING_PX);
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<Uuid> {
        self.ui.selected_id
    }

    // --- Pointer events ---

    /// Pointer-down with the host's hit-test result.
    ///
    /// Empty canvas clears selection. A widget body selects and, when the
    /// widget is unlocked, starts a drag. A resize handle starts a resize.
    /// A locked widget updates selection only; it can never enter a
    /// gesture. None of these cancels a gesture already in flight.
    pub fn on_pointer_down(&mut self, screen: Point, target: HitTarget) -> Vec<Action> {
        let mut actions = Vec::new();
        match target {
            HitTarget::Canvas => {
                self.change_selection(None, &mut actions);
            }
            HitTarget::Body(id) => {
                self.change_selection(Some(id), &mut actions);
                if self.gesture == Gesture::Idle {
                    if let Some(widget) = self.doc.widget(id) {
                        if !widget.locked {
                            self.gesture = Gesture::Dragging {
                                widget_id: id,
                                start: screen,
                                origin: Point::new(widget.x, widget.y),
                                scale: self.scale,
                            };
                        }
                    }
                }
            }
            HitTarget::Handle(id, edges) => {
                self.change_selection(Some(id), &mut actions);
                if self.gesture == Gesture::Idle {
                    if let Some(widget) = self.doc.widget(id) {
                        if !widget.locked {
                            self.gesture = Gesture::Resizing {
                                widget_id: id,
                                edges,
                                start: screen,
                                origin: Point::new(widget.x, widget.y),
                                origin_size: Size::new(widget.width, widget.height),
                                scale: self.scale,
                            };
                        }
                    }
                }
            }
        }
        actions
    }

    /// Pointer-move: recompute geometry and apply it as an optimistic
    /// local patch. No persistence happens here.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        match self.optimistic_geometry(screen) {
            Some((id, patch)) => {
                if self.doc.patch_widget(id, &patch).is_err() {
                    // Target vanished mid-gesture; drop the gesture.
                    self.gesture = Gesture::Idle;
                    return Vec::new();
                }
                vec![Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    /// Pointer-up: apply the final geometry locally and emit exactly one
    /// persistence action for it.
    pub fn on_pointer_up(&mut self, screen: Point) -> Vec<Action> {
        let outcome = self.optimistic_geometry(screen);
        self.gesture = Gesture::Idle;
        let Some((id, patch)) = outcome else {
            return Vec::new();
        };
        if self.doc.patch_widget(id, &patch).is_err() {
            return Vec::new();
        }
        vec![Action::PersistWidget { id, patch }, Action::RenderNeeded]
    }

    /// The geometry patch the active gesture implies at this pointer
    /// position, or `None` when idle.
    fn optimistic_geometry(&self, screen: Point) -> Option<(Uuid, WidgetPatch)> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { widget_id, start, origin, scale } => {
                let delta = Point::new(screen.x - start.x, screen.y - start.y);
                let pos = geometry::translate(*origin, delta, *scale);
                Some((
                    *widget_id,
                    WidgetPatch { x: Some(pos.x), y: Some(pos.y), ..WidgetPatch::default() },
                ))
            }
            Gesture::Resizing { widget_id, edges, start, origin, origin_size, scale } => {
                let delta = Point::new(screen.x - start.x, screen.y - start.y);
                let out = geometry::resize(*edges, *origin, *origin_size, delta, *scale);
                Some((
                    *widget_id,
                    WidgetPatch::geometry(
                        out.position.x,
                        out.position.y,
                        out.size.width,
                        out.size.height,
                    ),
                ))
            }
        }
    }

    // --- Explicit edits ---

    /// Create a widget on the active scene from registry defaults and
    /// select it.
    pub fn add_widget(&mut self, kind: WidgetKind) -> Vec<Action> {
        let Some(scene_id) = self.doc.active_scene().map(|s| s.id) else {
            return Vec::new();
        };
        match self.doc.add_widget(scene_id, kind) {
            Ok(widget) => {
                let created = widget.clone();
                let mut actions = Vec::new();
                self.change_selection(Some(created.id), &mut actions);
                actions.push(Action::WidgetCreated(created));
                actions.push(Action::RenderNeeded);
                actions
            }
            Err(err) => {
                tracing::warn!(%err, "widget create rejected");
                Vec::new()
            }
        }
    }

    /// Apply an explicit property edit (panel input, visibility toggle).
    /// Unlike gestures this applies to locked widgets too, and emits a
    /// persistence action immediately.
    pub fn update_widget(&mut self, id: Uuid, patch: WidgetPatch) -> Vec<Action> {
        match self.doc.patch_widget(id, &patch) {
            Ok(()) => {
                vec![Action::PersistWidget { id, patch }, Action::RenderNeeded]
            }
            Err(err) => {
                tracing::warn!(%err, widget = %id, "widget patch rejected");
                Vec::new()
            }
        }
    }

    /// Apply an explicit scene edit. A dimension change refits the canvas
    /// so the new scene size is reflected immediately.
    pub fn update_scene(&mut self, id: Uuid, patch: ScenePatch) -> Vec<Action> {
        match self.doc.patch_scene(id, &patch) {
            Ok(()) => {
                if patch.width.is_some() || patch.height.is_some() {
                    self.refit();
                }
                vec![Action::PersistScene { id, patch }, Action::RenderNeeded]
            }
            Err(err) => {
                tracing::warn!(%err, scene = %id, "scene patch rejected");
                Vec::new()
            }
        }
    }

    /// Delete a widget. Cancels any gesture targeting it so no stale
    /// patch lands after the delete; a persistence result already in
    /// flight for it is discarded on arrival by the same rule.
    pub fn delete_widget(&mut self, id: Uuid) -> Vec<Action> {
        if self.doc.delete_widget(id).is_err() {
            return Vec::new();
        }
        if self.gesture.widget_id() == Some(id) {
            self.gesture = Gesture::Idle;
        }
        let mut actions = Vec::new();
        if self.ui.selected_id == Some(id) {
            self.change_selection(None, &mut actions);
        }
        actions.push(Action::WidgetDeleted { id });
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Persistence and polling ---

    /// Record a failed persistence write. The optimistic local value is
    /// kept; the next successful poll reconciles with the store.
    pub fn persist_failed(&self, widget_id: Uuid, err: &crate::error::Error) {
        tracing::warn!(widget = %widget_id, %err, "persist failed, keeping optimistic state");
    }

    /// Replace local state with a fresh server snapshot, then re-apply
    /// the live gesture's own optimistic geometry on top ("last poll
    /// wins", except for the gesture in progress). A snapshot that no
    /// longer contains the gestured widget cancels the gesture; a
    /// snapshot that dropped the selected widget clears selection.
    pub fn apply_poll(&mut self, project: Project) -> Vec<Action> {
        // Capture the gesture's current optimistic geometry before the
        // snapshot overwrites it.
        let pending = self
            .gesture
            .widget_id()
            .and_then(|id| self.doc.widget(id))
            .map(|w| (w.id, WidgetPatch::geometry(w.x, w.y, w.width, w.height)));

        self.doc.load_snapshot(project);

        if let Some((id, patch)) = pending {
            if self.doc.patch_widget(id, &patch).is_err() {
                self.gesture = Gesture::Idle;
            }
        } else if self.gesture.widget_id().is_some() {
            // Gestured widget was already gone locally.
            self.gesture = Gesture::Idle;
        }

        let mut actions = Vec::new();
        if let Some(sel) = self.ui.selected_id {
            if self.doc.widget(sel).is_none() {
                self.change_selection(None, &mut actions);
            }
        }
        self.refit();
        actions.push(Action::RenderNeeded);
        actions
    }

    fn change_selection(&mut self, next: Option<Uuid>, actions: &mut Vec<Action>) {
        if self.ui.selected_id != next {
            self.ui.selected_id = next;
            actions.push(Action::SelectionChanged(next));
        }
    }
}
