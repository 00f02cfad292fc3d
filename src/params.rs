//! Equation parameters and the keyboard-adjustable parameter selection.

use glam::DVec3;

/// Default Prandtl number σ.
pub const DEFAULT_SIGMA: f64 = 10.0;
/// Default geometric factor β.
pub const DEFAULT_BETA: f64 = 2.6666;
/// Default Rayleigh number ρ.
pub const DEFAULT_RHO: f64 = 28.0;

/// Coefficients of the Lorenz system.
///
/// ```text
/// dx/dt = σ(y - x)
/// dy/dt = x(ρ - z) - y
/// dz/dt = xy - βz
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub sigma: f64,
    pub beta: f64,
    pub rho: f64,
}

impl SimulationParameters {
    pub fn new(sigma: f64, beta: f64, rho: f64) -> Self {
        Self { sigma, beta, rho }
    }

    /// Time derivative of the system at `state`.
    pub fn derivative(&self, state: DVec3) -> DVec3 {
        DVec3::new(
            self.sigma * (state.y - state.x),
            state.x * (self.rho - state.z) - state.y,
            state.x * state.y - self.beta * state.z,
        )
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new(DEFAULT_SIGMA, DEFAULT_BETA, DEFAULT_RHO)
    }
}

/// Coordinates that are held constant in the modes that do not integrate them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCoordinates {
    /// z used by [`DisplayMode::FixedZ`](crate::DisplayMode::FixedZ).
    pub z: f64,
    /// Homogeneous w used by [`DisplayMode::FourD`](crate::DisplayMode::FourD).
    pub w: f64,
}

impl Default for FixedCoordinates {
    fn default() -> Self {
        Self { z: 0.0, w: 1.0 }
    }
}

/// The value `+` and `-` currently act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Param {
    #[default]
    Sigma,
    Beta,
    Rho,
    FixedW,
    FixedZ,
    Extent,
}

impl Param {
    pub const ALL: [Param; 6] = [
        Param::Sigma,
        Param::Beta,
        Param::Rho,
        Param::FixedW,
        Param::FixedZ,
        Param::Extent,
    ];

    /// Parameter selected by a letter key.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            's' => Some(Param::Sigma),
            'b' => Some(Param::Beta),
            'r' => Some(Param::Rho),
            'w' => Some(Param::FixedW),
            'z' => Some(Param::FixedZ),
            'd' => Some(Param::Extent),
            _ => None,
        }
    }

    /// Amount a single `+` or `-` press changes the parameter by.
    pub fn step(self) -> f64 {
        match self {
            Param::Sigma => 0.5,
            Param::Beta => 0.2,
            Param::Rho => 1.0,
            Param::FixedW | Param::FixedZ => 1.0,
            Param::Extent => 5.0,
        }
    }

    /// Short name, matching the selection key.
    pub fn label(self) -> &'static str {
        match self {
            Param::Sigma => "s",
            Param::Beta => "b",
            Param::Rho => "r",
            Param::FixedW => "w",
            Param::FixedZ => "z",
            Param::Extent => "d",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative_at_initial_condition() {
        let params = SimulationParameters::default();
        let d = params.derivative(DVec3::ONE);

        assert_eq!(d.x, 0.0);
        assert_eq!(d.y, 26.0);
        assert!((d.z - (1.0 - DEFAULT_BETA)).abs() < 1e-12);
    }

    #[test]
    fn test_origin_is_fixed_point() {
        let params = SimulationParameters::new(3.0, 1.5, 99.0);
        assert_eq!(params.derivative(DVec3::ZERO), DVec3::ZERO);
    }

    #[test]
    fn test_selection_keys_round_trip_through_label() {
        for param in Param::ALL {
            let key = param.label().chars().next().unwrap();
            assert_eq!(Param::from_char(key), Some(param));
        }
        assert_eq!(Param::from_char('x'), None);
    }

    #[test]
    fn test_fixed_coordinates_default() {
        let fixed = FixedCoordinates::default();
        assert_eq!(fixed.z, 0.0);
        assert_eq!(fixed.w, 1.0);
    }
}
