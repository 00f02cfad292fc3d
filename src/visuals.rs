//! Visual configuration: how trajectory points are colored and drawn.
//!
//! # Color Mapping
//!
//! Each point is colored from the derivative at that step, so the color
//! encodes how fast (and in which direction) the trajectory is moving.
//!
//! ```
//! use coordinates::{ColorMapping, DisplayMode};
//! use glam::DVec3;
//!
//! let color = ColorMapping::Speed.color(DVec3::new(-100.0, 50.0, 400.0), DisplayMode::ThreeD);
//! assert_eq!(color.to_array(), [0.5, 0.25, 1.0]);
//! ```

use glam::{DVec3, Vec3};

use crate::mode::DisplayMode;

/// Divisor applied to derivative magnitudes by [`ColorMapping::Speed`].
pub const SPEED_DIVISOR: f64 = 200.0;

/// Derivatives below this on every axis count as "slow" for [`ColorMapping::Raw`].
const RAW_SLOW_THRESHOLD: f64 = 0.1;

/// Derivative-to-color function.
///
/// The viewer has two historical colorings. `Speed` is the default; `Raw`
/// reproduces the earlier behavior for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMapping {
    /// `|d| / 200` per channel, clamped to `[0, 1]`.
    #[default]
    Speed,
    /// Derivatives used directly as RGB, clamped to `[0, 1]`.
    ///
    /// In [`DisplayMode::ThreeD`] a point whose three derivatives are all
    /// below 0.1 is drawn white.
    Raw,
}

impl ColorMapping {
    /// RGB color for a point with the given derivative.
    pub fn color(self, derivative: DVec3, mode: DisplayMode) -> Vec3 {
        let rgb = match self {
            ColorMapping::Speed => derivative.abs() / SPEED_DIVISOR,
            ColorMapping::Raw => {
                let slow = derivative.cmplt(DVec3::splat(RAW_SLOW_THRESHOLD)).all();
                if mode == DisplayMode::ThreeD && slow {
                    DVec3::ONE
                } else {
                    derivative
                }
            }
        };
        rgb.clamp(DVec3::ZERO, DVec3::ONE).as_vec3()
    }
}

/// Primitive the trajectory is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Primitive {
    /// One pixel per step.
    #[default]
    Points,
    /// Consecutive steps joined by line segments.
    LineStrip,
}

impl Primitive {
    pub(crate) fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            Primitive::Points => wgpu::PrimitiveTopology::PointList,
            Primitive::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_scales_absolute_values() {
        let color = ColorMapping::Speed.color(DVec3::new(-20.0, 40.0, -100.0), DisplayMode::ThreeD);
        assert!((color - Vec3::new(0.1, 0.2, 0.5)).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_speed_clamps_to_one() {
        let color = ColorMapping::Speed.color(DVec3::new(1000.0, -201.0, 200.0), DisplayMode::FourD);
        assert_eq!(color, Vec3::ONE);
    }

    #[test]
    fn test_speed_same_in_every_mode() {
        let d = DVec3::new(12.0, -34.0, 56.0);
        let expected = ColorMapping::Speed.color(d, DisplayMode::ThreeD);
        for mode in DisplayMode::ALL {
            assert_eq!(ColorMapping::Speed.color(d, mode), expected);
        }
    }

    #[test]
    fn test_raw_clamps() {
        let color = ColorMapping::Raw.color(DVec3::new(-5.0, 0.5, 30.0), DisplayMode::FourD);
        assert_eq!(color, Vec3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_raw_slow_points_white_in_three_d_only() {
        let slow = DVec3::new(-3.0, 0.05, 0.0);
        assert_eq!(ColorMapping::Raw.color(slow, DisplayMode::ThreeD), Vec3::ONE);
        assert_eq!(
            ColorMapping::Raw.color(slow, DisplayMode::FourD),
            Vec3::new(0.0, 0.05, 0.0)
        );
    }

    #[test]
    fn test_default_is_speed() {
        assert_eq!(ColorMapping::default(), ColorMapping::Speed);
        assert_eq!(Primitive::default(), Primitive::Points);
    }
}
