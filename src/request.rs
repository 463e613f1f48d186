//! The request boundary: validates raw parameters, runs the profiler and the encoder, and builds
//! the response envelope. Nothing reaches the generators until every parameter has been checked.

use crate::airfoil::designation::NacaDesignation;
use crate::airfoil::generate::{AirfoilGenerator, Naca4Digit, Spacing, MAX_POINTS};
use crate::errors::{AirfoilError, Result};
use crate::gcode::{GcodeProgram, OutlineToGcode, DEFAULT_FEED_RATE};
use crate::serialize::GenerateResponse;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

pub const DEFAULT_DESIGNATION: &str = "0012";
pub const DEFAULT_CHORD: f64 = 100.0;
pub const DEFAULT_POINTS: usize = 100;

fn default_designation() -> String {
    DEFAULT_DESIGNATION.to_string()
}

fn default_chord() -> f64 {
    DEFAULT_CHORD
}

fn default_points() -> usize {
    DEFAULT_POINTS
}

fn default_feed_rate() -> f64 {
    DEFAULT_FEED_RATE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_designation")]
    pub naca: String,

    #[serde(default = "default_chord")]
    pub chord: f64,

    #[serde(default = "default_points")]
    pub points: usize,

    #[serde(default = "default_feed_rate")]
    pub feed_rate: f64,

    #[serde(default)]
    pub spacing: Spacing,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        GenerateRequest {
            naca: default_designation(),
            chord: DEFAULT_CHORD,
            points: DEFAULT_POINTS,
            feed_rate: DEFAULT_FEED_RATE,
            spacing: Spacing::default(),
        }
    }
}

/// A request whose parameters have all been checked
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub designation: NacaDesignation,
    pub generator: Naca4Digit,
    pub encoder_feed_rate: f64,
    pub points: usize,
    pub spacing: Spacing,
}

impl GenerateRequest {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<ValidatedRequest> {
        let designation: NacaDesignation = self.naca.parse()?;

        if !self.chord.is_finite() || self.chord <= 0.0 {
            return Err(AirfoilError::InvalidChord(self.chord));
        }
        if self.points < 2 {
            return Err(AirfoilError::NotEnoughPoints {
                requested: self.points,
            });
        }
        if self.points > MAX_POINTS {
            return Err(AirfoilError::TooManyPoints {
                requested: self.points,
                max: MAX_POINTS,
            });
        }
        if !self.feed_rate.is_finite() || self.feed_rate <= 0.0 {
            return Err(AirfoilError::InvalidFeedRate(self.feed_rate));
        }

        Ok(ValidatedRequest {
            designation,
            generator: Naca4Digit::from_designation(&designation, self.chord),
            encoder_feed_rate: self.feed_rate,
            points: self.points,
            spacing: self.spacing,
        })
    }
}

/// The outline and the motion program produced for one request
pub struct Generated {
    pub outline: Vec<Point2<f64>>,
    pub program: GcodeProgram,
}

impl From<Generated> for GenerateResponse {
    fn from(g: Generated) -> Self {
        GenerateResponse {
            gcode: g.program.to_string(),
            coords: g.outline,
        }
    }
}

impl ValidatedRequest {
    pub fn run(&self) -> Result<Generated> {
        let airfoil = self.generator.generate(self.points, self.spacing)?;
        let outline = airfoil.to_outline();
        let program = OutlineToGcode::new(self.encoder_feed_rate)?.generate(&outline)?;

        info!(
            naca = %self.designation,
            chord = self.generator.chord_len(),
            outline = outline.len(),
            max_thickness = airfoil.max_thickness(),
            "generated airfoil program"
        );
        Ok(Generated { outline, program })
    }
}

/// Validates the request, then generates the outline and its motion program
#[instrument(skip_all, fields(naca = %request.naca))]
pub fn generate(request: &GenerateRequest) -> Result<GenerateResponse> {
    let generated = request.validate()?.run()?;
    Ok(generated.into())
}
