//! Overlay composition engine for live bonus-hunt broadcast overlays.
//!
//! This crate owns the full lifecycle of an overlay project: the scene and
//! widget document model, the direct-manipulation editing engine (drag,
//! eight-direction resize, viewport auto-fit), and the responsive renderer
//! that turns each widget's kind + configuration + allotted pixel box into
//! an abstract visual tree. Live session data arrives through a fixed
//! interval poll against the external record store; the same renderer feeds
//! both the editing preview and the read-only public display.
//!
//! The host layer is responsible only for wiring pointer events into
//! [`editor::EditorCore`], persisting the [`editor::Action`]s it emits, and
//! mapping [`render::Visual`] trees onto its draw target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Pure translate / resize / fit-to-viewport math |
//! | [`registry`] | Closed widget kind catalog with per-kind defaults |
//! | [`config`] | Typed per-kind widget configuration |
//! | [`model`] | Project/Scene/Widget document store and mutations |
//! | [`editor`] | Gesture state machine and action-emitting editor core |
//! | [`hunt`] | Live hunt session data and derived statistics |
//! | [`render`] | Responsive per-kind layout producing a visual tree |
//! | [`display`] | Read-only public display host over the same renderer |
//! | [`store`] | Record store client interface and HTTP implementation |
//! | [`sync`] | Fixed-interval polling loop feeding live snapshots |
//! | [`consts`] | Shared numeric constants (size floors, poll interval) |
//! | [`error`] | Crate error taxonomy |

pub mod config;
pub mod consts;
pub mod display;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod hunt;
pub mod model;
pub mod registry;
pub mod render;
pub mod store;
pub mod sync;

pub use error::Error;
