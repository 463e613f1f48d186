use crate::errors::AirfoilError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A parsed NACA 4-digit designation of the form MPTT. For example "2412" describes a 2% max
/// camber located at 40% of the chord, with a max thickness of 12% of the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NacaDesignation {
    camber_digit: u8,
    position_digit: u8,
    thickness_digits: u8,
}

impl NacaDesignation {
    pub fn new(camber_digit: u8, position_digit: u8, thickness_digits: u8) -> NacaDesignation {
        NacaDesignation {
            camber_digit,
            position_digit,
            thickness_digits,
        }
    }

    /// Max camber as a fraction of the chord, 0.02 for a 2412
    pub fn max_camber(&self) -> f64 {
        self.camber_digit as f64 / 100.0
    }

    /// Location of the max camber as a fraction of the chord, 0.4 for a 2412
    pub fn camber_position(&self) -> f64 {
        self.position_digit as f64 / 10.0
    }

    /// Max thickness as a fraction of the chord, 0.12 for a 2412
    pub fn max_thickness(&self) -> f64 {
        self.thickness_digits as f64 / 100.0
    }
}

impl FromStr for NacaDesignation {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AirfoilError::InvalidDesignation {
            code: s.to_string(),
            reason: reason.to_string(),
        };

        if s.chars().count() != 4 {
            return Err(invalid("expected exactly 4 characters"));
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("contains non-digit characters"));
        }

        let d = s.as_bytes();
        Ok(NacaDesignation::new(
            d[0] - b'0',
            d[1] - b'0',
            (d[2] - b'0') * 10 + (d[3] - b'0'),
        ))
    }
}

impl Display for NacaDesignation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{:02}",
            self.camber_digit, self.position_digit, self.thickness_digits
        )
    }
}
