//! Explicit Euler integration of the Lorenz system.
//!
//! Every frame starts again from the same initial condition, so a
//! [`Trajectory`] is cheap to construct and is consumed exactly once.
//!
//! # Example
//!
//! ```
//! use coordinates::{DisplayMode, FixedCoordinates, SimulationParameters, Trajectory};
//!
//! let trajectory = Trajectory::new(
//!     SimulationParameters::default(),
//!     DisplayMode::ThreeD,
//!     FixedCoordinates::default(),
//! );
//! assert_eq!(trajectory.len(), coordinates::STEP_COUNT);
//! ```

use glam::{DVec3, DVec4};

use crate::mode::DisplayMode;
use crate::params::{FixedCoordinates, SimulationParameters};

/// Number of Euler steps taken per frame.
pub const STEP_COUNT: usize = 50_000;
/// Fixed time step.
pub const TIME_STEP: f64 = 0.001;

/// One integration step: where the system went and how fast it was moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Homogeneous position after the step.
    pub position: DVec4,
    /// Derivative evaluated before the step.
    pub derivative: DVec3,
}

/// Lazy sequence of [`STEP_COUNT`] Euler steps for one display mode.
#[derive(Debug, Clone)]
pub struct Trajectory {
    params: SimulationParameters,
    mode: DisplayMode,
    fixed: FixedCoordinates,
    state: DVec3,
    remaining: usize,
}

impl Trajectory {
    pub fn new(params: SimulationParameters, mode: DisplayMode, fixed: FixedCoordinates) -> Self {
        Self::with_steps(params, mode, fixed, STEP_COUNT)
    }

    pub(crate) fn with_steps(
        params: SimulationParameters,
        mode: DisplayMode,
        fixed: FixedCoordinates,
        steps: usize,
    ) -> Self {
        Self {
            params,
            mode,
            fixed,
            state: initial_state(mode, fixed),
            remaining: steps,
        }
    }
}

/// Starting point of every frame's integration.
pub fn initial_state(mode: DisplayMode, fixed: FixedCoordinates) -> DVec3 {
    match mode {
        DisplayMode::TwoD => DVec3::new(1.0, 1.0, 0.0),
        DisplayMode::FixedZ => DVec3::new(1.0, 1.0, fixed.z),
        DisplayMode::ThreeD | DisplayMode::FourD => DVec3::ONE,
    }
}

impl Iterator for Trajectory {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<TrajectoryPoint> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut derivative = self.params.derivative(self.state);
        if !self.mode.integrates_z() {
            derivative.z = 0.0;
        }
        self.state += TIME_STEP * derivative;

        let w = match self.mode {
            DisplayMode::FourD => self.fixed.w,
            _ => 1.0,
        };

        Some(TrajectoryPoint {
            position: self.state.extend(w),
            derivative,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Trajectory {}
