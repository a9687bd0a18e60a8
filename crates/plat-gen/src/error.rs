//! Error types for layout generation.

use plat_core::GeomError;
use std::error::Error;
use std::fmt;

/// Errors from the layout generators.
#[derive(Clone, Debug, PartialEq)]
pub enum GenError {
    /// Density must be finite and strictly positive; it divides the spread
    /// radius, so zero or negative values have no defined layout.
    InvalidDensity {
        /// The rejected density value.
        value: f64,
    },
    /// A rectangle failed geometric validation.
    Geometry(GeomError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity { value } => {
                write!(f, "density must be finite and > 0, got {value}")
            }
            Self::Geometry(err) => write!(f, "geometry error: {err}"),
        }
    }
}

impl Error for GenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::InvalidDensity { .. } => None,
        }
    }
}

impl From<GeomError> for GenError {
    fn from(err: GeomError) -> Self {
        Self::Geometry(err)
    }
}

/// Reject non-finite or non-positive densities before any arithmetic.
pub(crate) fn check_density(value: f64) -> Result<(), GenError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GenError::InvalidDensity { value });
    }
    Ok(())
}
