//! Snapping carousel controller.
//!
//! A [`ScrollSnap`] owns an ordered collection of [`Panel`]s laid out along one
//! axis inside a scrollable viewport. The host forwards gestures to it and calls
//! [`ScrollSnap::tick`] once per frame; every tick runs the same fixed phases:
//!
//! 1. selection and snapping (owns the scroll offset)
//! 2. infinite wraparound (patches panel positions)
//! 3. transition effects (writes panel visuals)
//! 4. swipe-gesture axis locks (owns the surface axis flags)
//!
//! The physical scroll surface is abstracted behind [`ScrollSurface`];
//! [`Surface`] is an in-memory implementation with inertia.

pub mod controller;
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod macros;
pub mod pagination;
pub mod panel;
pub mod select;
pub mod session;
pub mod settings;
pub mod snap;
pub mod surface;
pub mod transition;
pub mod wrap;

pub use controller::ScrollSnap;
pub use error::{CollectionOp, ConfigurationError, SnapError};
pub use events::SnapEvent;
pub use geometry::{Frame, Viewport};
pub use pagination::{Pagination, Toggle};
pub use panel::{Euler, Panel, PanelKey, PanelVisual};
pub use session::{Direction, Session};
pub use settings::{Margins, MovementAxis, MovementType, Settings, SizeControl, SnapTarget};
pub use surface::{ScrollSurface, Surface};
pub use transition::{Curve, Keyframe, KeyframeCurve, PanelProperty, TransitionEffect};
