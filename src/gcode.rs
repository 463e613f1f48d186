//! G-code generation from airfoil outlines.

use crate::errors::{AirfoilError, Result};
use crate::geometry::distances2::closed_length;
use itertools::Itertools;
use ncollide2d::na::Point2;
use std::fmt::{Display, Formatter};
use tracing::debug;

pub const DEFAULT_FEED_RATE: f64 = 1000.0;

/// Number of header and footer lines wrapped around the moves of every program
pub const FRAME_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Non-cutting repositioning move (G0)
    Rapid,
    /// Cutting move at the programmed feed rate (G1)
    Linear,
}

impl MoveKind {
    fn code(&self) -> &'static str {
        match self {
            MoveKind::Rapid => "G0",
            MoveKind::Linear => "G1",
        }
    }
}

/// Renders a single absolute move to a point with 4 decimal places on each axis
pub fn move_line(kind: MoveKind, p: &Point2<f64>) -> String {
    format!("{} X{:.4} Y{:.4}", kind.code(), p.x, p.y)
}

/// A motion program as an ordered list of instruction lines
#[derive(Debug, Clone, PartialEq)]
pub struct GcodeProgram {
    pub lines: Vec<String>,
}

impl GcodeProgram {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Display for GcodeProgram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.iter().join("\n"))
    }
}

/// G-code generator which visits every point of an outline in order and closes the loop back to
/// the first point.
pub struct OutlineToGcode {
    feed_rate: f64,
}

impl Default for OutlineToGcode {
    fn default() -> Self {
        Self {
            feed_rate: DEFAULT_FEED_RATE,
        }
    }
}

impl OutlineToGcode {
    /// Creates a new G-code generator with the given feed rate, which must be positive and finite
    pub fn new(feed_rate: f64) -> Result<Self> {
        if !feed_rate.is_finite() || feed_rate <= 0.0 {
            return Err(AirfoilError::InvalidFeedRate(feed_rate));
        }
        Ok(Self { feed_rate })
    }

    /// Generates the full program for an outline
    pub fn generate(&self, outline: &[Point2<f64>]) -> Result<GcodeProgram> {
        let start = outline.first().ok_or(AirfoilError::EmptyOutline)?;

        let mut lines = self.generate_header();
        lines.push(move_line(MoveKind::Rapid, start));
        lines.extend(
            outline
                .iter()
                .skip(1)
                .map(|p| move_line(MoveKind::Linear, p)),
        );
        lines.push(move_line(MoveKind::Linear, start));
        lines.extend(self.generate_footer());

        debug!(
            lines = lines.len(),
            path_length = closed_length(outline),
            "generated motion program"
        );
        Ok(GcodeProgram { lines })
    }

    /// Units, positioning mode and the feed rate, which is set once for the whole program
    pub fn generate_header(&self) -> Vec<String> {
        vec![
            "G21 ; Set units to mm".to_string(),
            "G90 ; Absolute positioning".to_string(),
            format!("G1 F{} ; Feed rate", self.feed_rate),
        ]
    }

    pub fn generate_footer(&self) -> Vec<String> {
        vec!["M30 ; End program".to_string()]
    }
}
