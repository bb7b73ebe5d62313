//! Interaction core
//!
//! Everything that maps pointer and slider input to a visible data window,
//! independent of the UI toolkit.
//!
//! ```text
//! InputEvent -> InputController -> ViewWindow -> Vec<RenderCommand> -> RenderSurface
//!                      |
//!                      +-> OverlayRenderer (selection rectangle, hover annotation)
//! ```
//!
//! # Main Types
//!
//! - [`ViewWindow`] - Current axis limits in index, coordinate or zoom form
//! - [`InputController`] - Per-variant event handling
//! - [`OverlayRenderer`] - Transient overlays and the hover query
//! - [`SurfaceState`] - Retained result of the emitted commands

pub mod command;
pub mod controller;
pub mod drag;
pub mod format;
pub mod overlay;
pub mod ticks;
pub mod window;

pub use command::{Axis, RenderCommand, RenderSurface, ShapeId, SliderState, SurfaceState, Tick};
pub use controller::{
    build_controller, BoxZoomController, InputController, InputEvent, MouseButton,
    ScrollController, SliderZoomController,
};
pub use drag::DragState;
pub use overlay::{hover_lookup, HitTolerance, HoverHit, OverlayRenderer};
pub use window::{ViewWindow, WindowForm};
