use std::fmt;

use crate::core::basis::OrthonormalBasisPair;
use crate::core::error::{CoreError, Result};
use crate::core::vector::{deg_to_rad, ColumnVector};

/// Basis whose `b0` points along `theta/2` below the x-axis.
/// Unit and orthogonal for every real `theta`.
pub fn basis_for_angle(theta: f64) -> OrthonormalBasisPair {
    let (s, c) = (theta / 2.0).sin_cos();
    OrthonormalBasisPair::unchecked(ColumnVector::new(c, -s), ColumnVector::new(s, c))
}

/// Immutable description of which basis a measurement uses.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    bases: OrthonormalBasisPair,
}

impl Measurement {
    /// Exactly one of `bases` or `theta` (radians) must be given.
    pub fn new(bases: Option<OrthonormalBasisPair>, theta: Option<f64>) -> Result<Self> {
        match (bases, theta) {
            (Some(bases), None) => Ok(Self::from_bases(bases)),
            (None, Some(theta)) => Self::try_from_angle(theta),
            (None, None) => Err(CoreError::invalid_argument("measurement needs a basis or an angle")),
            (Some(_), Some(_)) => {
                Err(CoreError::invalid_argument("measurement takes a basis or an angle, not both"))
            }
        }
    }

    pub fn from_bases(bases: OrthonormalBasisPair) -> Self {
        Self { bases }
    }

    /// Rejects NaN and infinite angles, which have no basis.
    pub fn try_from_angle(theta: f64) -> Result<Self> {
        if !theta.is_finite() {
            return Err(CoreError::invalid_argument(&format!("angle {theta} is not a finite number of radians")));
        }
        Ok(Self { bases: basis_for_angle(theta) })
    }

    /// # Panics
    /// If `theta` is NaN or infinite; use [`Measurement::try_from_angle`] for
    /// untrusted input.
    pub fn from_angle(theta: f64) -> Self {
        match Self::try_from_angle(theta) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// # Panics
    /// If `deg` is NaN or infinite.
    pub fn from_degrees(deg: f64) -> Self {
        Self::from_angle(deg_to_rad(deg))
    }

    pub fn bases(&self) -> &OrthonormalBasisPair {
        &self.bases
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msmt[{}]", self.bases)
    }
}
