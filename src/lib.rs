pub mod curve;
pub mod error;
pub mod math;
pub mod params;
pub mod placement;
pub mod sampling;
pub mod template;

pub use error::{Result, TubraError};
