//! Scene state and keyboard controls.
//!
//! Everything a frame depends on lives in [`Scene`]. Key handlers mutate it
//! and the renderer reads it; nothing else is shared between frames.
//!
//! # Key bindings
//!
//! | Key | Action |
//! |-----|--------|
//! | `1`-`4` | 2D, 3D constant Z, 3D, 4D |
//! | `s` `b` `r` `w` `z` `d` | select σ, β, ρ, w, z or box size for `+`/`-` |
//! | `+` / `-` | adjust the selected value |
//! | arrows | change view angle by 5° |
//! | `0` | reset view, parameters and selection |
//! | Esc | exit |

use crate::input::Key;
use crate::integrator::Trajectory;
use crate::mode::DisplayMode;
use crate::params::{FixedCoordinates, Param, SimulationParameters};
use crate::view::{ViewState, ANGLE_STEP};
use crate::visuals::ColorMapping;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// State changed, draw again.
    Redraw,
    /// Leave the event loop.
    Quit,
    /// Key not bound to anything.
    Ignored,
}

/// Parameters, view and selection for the whole viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub params: SimulationParameters,
    pub fixed: FixedCoordinates,
    pub mode: DisplayMode,
    pub view: ViewState,
    /// Value `+` and `-` act on.
    pub active: Param,
    pub color_mapping: ColorMapping,
    home_params: SimulationParameters,
    home_extent: f64,
}

impl Scene {
    /// Create a scene; `params` and `extent` are also what the reset key restores.
    pub fn new(params: SimulationParameters, mode: DisplayMode, extent: f64) -> Self {
        Self {
            params,
            fixed: FixedCoordinates::default(),
            mode,
            view: ViewState::new(extent),
            active: Param::default(),
            color_mapping: ColorMapping::default(),
            home_params: params,
            home_extent: extent,
        }
    }

    pub fn with_color_mapping(mut self, mapping: ColorMapping) -> Self {
        self.color_mapping = mapping;
        self
    }

    /// Fresh integration for the current frame.
    pub fn trajectory(&self) -> Trajectory {
        Trajectory::new(self.params, self.mode, self.fixed)
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: Key) -> Response {
        match key {
            Key::Escape => return Response::Quit,
            Key::Right => self.view.rotate(ANGLE_STEP, 0),
            Key::Left => self.view.rotate(-ANGLE_STEP, 0),
            Key::Up => self.view.rotate(0, ANGLE_STEP),
            Key::Down => self.view.rotate(0, -ANGLE_STEP),
            Key::Char('0') => self.reset(),
            Key::Char('+') | Key::Char('=') => self.adjust(1.0),
            Key::Char('-') => self.adjust(-1.0),
            Key::Char(ch) => {
                if let Some(mode) = DisplayMode::from_digit(ch) {
                    self.mode = mode;
                } else if let Some(param) = Param::from_char(ch) {
                    self.active = param;
                } else {
                    return Response::Ignored;
                }
            }
            Key::Other => return Response::Ignored,
        }
        log::debug!("{:?} -> {}", key, self.status_line());
        Response::Redraw
    }

    /// Restore angles, equation parameters, fixed coordinates, box size and selection.
    pub fn reset(&mut self) {
        self.view.reset(self.home_extent);
        self.params = self.home_params;
        self.fixed = FixedCoordinates::default();
        self.active = Param::default();
    }

    /// Current value of a parameter.
    pub fn value(&self, param: Param) -> f64 {
        match param {
            Param::Sigma => self.params.sigma,
            Param::Beta => self.params.beta,
            Param::Rho => self.params.rho,
            Param::FixedW => self.fixed.w,
            Param::FixedZ => self.fixed.z,
            Param::Extent => self.view.extent,
        }
    }

    fn adjust(&mut self, sign: f64) {
        let delta = sign * self.active.step();
        let slot = match self.active {
            Param::Sigma => &mut self.params.sigma,
            Param::Beta => &mut self.params.beta,
            Param::Rho => &mut self.params.rho,
            Param::FixedW => &mut self.fixed.w,
            Param::FixedZ => &mut self.fixed.z,
            Param::Extent => &mut self.view.extent,
        };
        *slot += delta;
    }

    /// `View Angle=θ,φ  <mode>` with the held coordinate where one applies.
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "View Angle={},{}  {}",
            self.view.azimuth,
            self.view.elevation,
            self.mode.label()
        );
        match self.mode {
            DisplayMode::FixedZ => line.push_str(&format!("  z={:.1}", self.fixed.z)),
            DisplayMode::FourD => line.push_str(&format!("  w={:.1}", self.fixed.w)),
            _ => {}
        }
        line
    }

    /// Equation parameters and the current `+`/`-` target.
    pub fn parameter_line(&self) -> String {
        format!(
            "s={:.1} b={:.4} r={:.1} d={:.0}  [+/-: {}]",
            self.params.sigma,
            self.params.beta,
            self.params.rho,
            self.view.extent,
            self.active.label()
        )
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(
            SimulationParameters::default(),
            DisplayMode::default(),
            crate::view::DEFAULT_EXTENT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(scene: &mut Scene, keys: &str) {
        for ch in keys.chars() {
            scene.handle_key(Key::Char(ch));
        }
    }

    #[test]
    fn test_plus_adjusts_sigma_by_default() {
        let mut scene = Scene::default();
        press(&mut scene, "++");
        assert_eq!(scene.params.sigma, 11.0);
        assert_eq!(scene.params.rho, 28.0);
    }

    #[test]
    fn test_steps_per_parameter() {
        let mut scene = Scene::default();
        for param in Param::ALL {
            scene.active = param;
            let before = scene.value(param);
            scene.handle_key(Key::Char('+'));
            assert!((scene.value(param) - (before + param.step())).abs() < 1e-12);
            scene.handle_key(Key::Char('-'));
            scene.handle_key(Key::Char('-'));
            assert!((scene.value(param) - (before - param.step())).abs() < 1e-12);
        }
    }

    #[test]
    fn test_only_active_parameter_changes() {
        let mut scene = Scene::default();
        press(&mut scene, "r+");
        let mut expected = Scene::default();
        expected.active = Param::Rho;
        expected.params.rho = 29.0;
        assert_eq!(scene, expected);
    }

    #[test]
    fn test_equals_acts_as_plus() {
        let mut scene = Scene::default();
        press(&mut scene, "d=");
        assert_eq!(scene.view.extent, 60.0);
    }

    #[test]
    fn test_escape_quits() {
        let mut scene = Scene::default();
        assert_eq!(scene.handle_key(Key::Escape), Response::Quit);
        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut scene = Scene::default();
        assert_eq!(scene.handle_key(Key::Char('q')), Response::Ignored);
        assert_eq!(scene.handle_key(Key::Char('9')), Response::Ignored);
        assert_eq!(scene.handle_key(Key::Other), Response::Ignored);
        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn test_arrows_rotate() {
        let mut scene = Scene::default();
        assert_eq!(scene.handle_key(Key::Right), Response::Redraw);
        scene.handle_key(Key::Up);
        scene.handle_key(Key::Up);
        assert_eq!((scene.view.azimuth, scene.view.elevation), (5, 10));
        scene.handle_key(Key::Left);
        scene.handle_key(Key::Down);
        assert_eq!((scene.view.azimuth, scene.view.elevation), (0, 5));
    }

    #[test]
    fn test_status_line() {
        let mut scene = Scene::default();
        assert_eq!(scene.status_line(), "View Angle=0,0  3D");

        press(&mut scene, "2z+");
        scene.handle_key(Key::Left);
        assert_eq!(scene.status_line(), "View Angle=-5,0  3D constant Z  z=1.0");

        press(&mut scene, "4w-");
        assert_eq!(scene.status_line(), "View Angle=-5,0  4D  w=0.0");

        press(&mut scene, "1");
        assert_eq!(scene.status_line(), "View Angle=-5,0  2D");
    }

    #[test]
    fn test_parameter_line() {
        let mut scene = Scene::default();
        press(&mut scene, "b");
        assert_eq!(scene.parameter_line(), "s=10.0 b=2.6666 r=28.0 d=55  [+/-: b]");
    }

    #[test]
    fn test_reset_restores_configured_home() {
        let mut scene = Scene::new(SimulationParameters::new(5.0, 1.0, 14.0), DisplayMode::TwoD, 30.0);
        press(&mut scene, "s+++d+3");
        scene.handle_key(Key::Up);
        press(&mut scene, "0");

        assert_eq!(scene.params, SimulationParameters::new(5.0, 1.0, 14.0));
        assert_eq!(scene.view, ViewState::new(30.0));
        assert_eq!(scene.active, Param::Sigma);
        // Mode is not part of the reset
        assert_eq!(scene.mode, DisplayMode::ThreeD);
    }
}
