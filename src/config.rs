use crate::airfoil::generate::Spacing;
use crate::errors::Result;
use crate::gcode::DEFAULT_FEED_RATE;
use crate::request::{GenerateRequest, DEFAULT_CHORD, DEFAULT_DESIGNATION, DEFAULT_POINTS};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum OutputFormat {
    /// The `{"coords": ..., "gcode": ...}` response envelope
    #[default]
    Json,
    /// Only the motion program text
    Gcode,
    /// An SVG preview of the outline
    Svg,
}

#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "naca-gcode")]
#[command(about = "Generate NACA 4-digit airfoil outlines and their G-code toolpaths")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_DESIGNATION, help = "NACA 4-digit code, e.g. 2412")]
    pub naca: String,

    #[arg(long, default_value_t = DEFAULT_CHORD, help = "Chord length in mm")]
    pub chord: f64,

    #[arg(long, default_value_t = DEFAULT_POINTS, help = "Number of stations along the chord")]
    pub points: usize,

    #[arg(long, default_value_t = DEFAULT_FEED_RATE)]
    pub feed_rate: f64,

    #[arg(long, value_enum, default_value_t = Spacing::Uniform)]
    pub spacing: Spacing,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[arg(
        long,
        help = "Full request as JSON, overrides the individual parameters"
    )]
    pub request: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the generate request, preferring a raw JSON request when one was supplied
    pub fn to_request(&self) -> Result<GenerateRequest> {
        match &self.request {
            Some(text) => GenerateRequest::from_json(text),
            None => Ok(GenerateRequest {
                naca: self.naca.clone(),
                chord: self.chord,
                points: self.points,
                feed_rate: self.feed_rate,
                spacing: self.spacing,
            }),
        }
    }
}
