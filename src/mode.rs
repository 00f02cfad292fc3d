//! Display modes.
//!
//! A display mode decides how many coordinates of the trajectory are
//! integrated and which of them are held fixed when the vertex is emitted.

/// Which coordinates of the trajectory are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Planar system in x and y, with z held at 0.
    TwoD,
    /// Planar system in x and y, drawn at a fixed, adjustable z.
    FixedZ,
    /// Full Lorenz system.
    #[default]
    ThreeD,
    /// Full Lorenz system emitted as homogeneous vertices with a fixed w.
    FourD,
}

impl DisplayMode {
    /// All modes, in key order (`1` to `4`).
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::TwoD,
        DisplayMode::FixedZ,
        DisplayMode::ThreeD,
        DisplayMode::FourD,
    ];

    /// Mode bound to a digit key, if any.
    pub fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(DisplayMode::TwoD),
            '2' => Some(DisplayMode::FixedZ),
            '3' => Some(DisplayMode::ThreeD),
            '4' => Some(DisplayMode::FourD),
            _ => None,
        }
    }

    /// Text shown in the status line.
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::TwoD => "2D",
            DisplayMode::FixedZ => "3D constant Z",
            DisplayMode::ThreeD => "3D",
            DisplayMode::FourD => "4D",
        }
    }

    /// Whether z evolves with the system or is held constant.
    pub fn integrates_z(self) -> bool {
        matches!(self, DisplayMode::ThreeD | DisplayMode::FourD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_in_order() {
        for (i, mode) in DisplayMode::ALL.iter().enumerate() {
            let digit = char::from_digit(i as u32 + 1, 10).unwrap();
            assert_eq!(DisplayMode::from_digit(digit), Some(*mode));
        }
        assert_eq!(DisplayMode::from_digit('0'), None);
        assert_eq!(DisplayMode::from_digit('5'), None);
    }

    #[test]
    fn test_planar_modes_hold_z() {
        assert!(!DisplayMode::TwoD.integrates_z());
        assert!(!DisplayMode::FixedZ.integrates_z());
        assert!(DisplayMode::ThreeD.integrates_z());
        assert!(DisplayMode::FourD.integrates_z());
    }

    #[test]
    fn test_default_is_three_d() {
        assert_eq!(DisplayMode::default(), DisplayMode::ThreeD);
        assert_eq!(DisplayMode::default().label(), "3D");
    }
}
