pub mod airfoil;
pub mod config;
pub mod errors;
pub mod gcode;
pub mod geometry;
pub mod logging;
pub mod preview;
pub mod request;
pub mod serialize;

pub use errors::{AirfoilError, Result};
pub use request::{generate, GenerateRequest};
pub use serialize::{ErrorResponse, GenerateResponse};
