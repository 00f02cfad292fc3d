//! # Coordinates - Lorenz attractor viewer
//!
//! Integrates the Lorenz system with explicit Euler steps and draws the
//! trajectory in an orthographic 3D view. The plotted coordinates, the
//! equation parameters and the view angle are all driven from the keyboard.
//!
//! ## Quick Start
//!
//! ```ignore
//! use coordinates::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     env_logger::init();
//!     Viewer::new().run()
//! }
//! ```
//!
//! ## Frames
//!
//! Every redraw starts again from `(1, 1, 1)` and takes
//! [`STEP_COUNT`] steps of [`TIME_STEP`]. Nothing is carried between frames
//! except the [`Scene`]: parameters, display mode and view.
//!
//! ```text
//! dx = σ(y - x)
//! dy = x(ρ - z) - y
//! dz = xy - βz
//! ```
//!
//! ## Display Modes
//!
//! | Key | Mode | Vertex |
//! |-----|------|--------|
//! | `1` | [`DisplayMode::TwoD`] | `(x, y, 0)`, z held at 0 |
//! | `2` | [`DisplayMode::FixedZ`] | `(x, y, z)`, z held at the adjustable value |
//! | `3` | [`DisplayMode::ThreeD`] | `(x, y, z)` |
//! | `4` | [`DisplayMode::FourD`] | `(x, y, z, w)`, homogeneous with adjustable w |
//!
//! ## Controls
//!
//! See [`scene`] for the full key table.

pub mod error;
mod gpu;
pub mod input;
pub mod integrator;
pub mod mode;
pub mod params;
pub mod scene;
mod shader;
pub mod view;
mod viewer;
pub mod visuals;

pub use error::{GpuError, ViewerError};
pub use glam::{DVec3, DVec4};
pub use input::Key;
pub use integrator::{Trajectory, TrajectoryPoint, STEP_COUNT, TIME_STEP};
pub use mode::DisplayMode;
pub use params::{FixedCoordinates, Param, SimulationParameters};
pub use scene::{Response, Scene};
pub use view::ViewState;
pub use viewer::{Viewer, ViewerConfig};
pub use visuals::{ColorMapping, Primitive};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use coordinates::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ViewerError;
    pub use crate::input::Key;
    pub use crate::integrator::{Trajectory, TrajectoryPoint};
    pub use crate::mode::DisplayMode;
    pub use crate::params::{FixedCoordinates, Param, SimulationParameters};
    pub use crate::scene::{Response, Scene};
    pub use crate::view::ViewState;
    pub use crate::viewer::{Viewer, ViewerConfig};
    pub use crate::visuals::{ColorMapping, Primitive};
}
