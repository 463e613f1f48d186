use crate::errors::AirfoilError;
use ncollide2d::na::Point2;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Serializes points as a sequence of `[x, y]` pairs, the coordinate layout consumers of the
/// JSON response expect
pub fn points_as_pairs<S>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(points.len()))?;
    for p in points.iter() {
        seq.serialize_element(&[p.x, p.y])?;
    }
    seq.end()
}

/// The successful result of a generate request
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    #[serde(serialize_with = "points_as_pairs")]
    pub coords: Vec<Point2<f64>>,
    pub gcode: String,
}

/// The structured error returned when a request fails validation
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl From<&AirfoilError> for ErrorResponse {
    fn from(e: &AirfoilError) -> Self {
        ErrorResponse {
            error: e.to_string(),
            kind: e.kind().to_string(),
        }
    }
}
