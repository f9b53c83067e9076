//! Ordered orthonormal basis of R², used as a change-of-basis operator.
//!
//! Scaling a basis would break orthonormality, so there is no scalar
//! multiplication, and a vector cannot act on a basis:
//!
//! ```compile_fail
//! use qubit_sim::core::basis::OrthonormalBasisPair;
//! let _ = OrthonormalBasisPair::standard() * 2.0;
//! ```
//!
//! ```compile_fail
//! use qubit_sim::core::basis::OrthonormalBasisPair;
//! use qubit_sim::core::vector::ColumnVector;
//! let _ = ColumnVector::new(2.0, 3.0) * OrthonormalBasisPair::standard();
//! ```
use std::fmt;
use std::ops::Mul;

use crate::core::dual::DualVector;
use crate::core::error::{CoreError, Result};
use crate::core::qubit::Outcome;
use crate::core::vector::{is_close, ColumnVector, Vector2, DEFAULT_TOLERANCE};

#[derive(Clone, Debug, PartialEq)]
pub struct OrthonormalBasisPair {
    b0: ColumnVector,
    b1: ColumnVector,
    tolerance: f64,
}

impl OrthonormalBasisPair {
    pub fn new(b0: ColumnVector, b1: ColumnVector) -> Result<Self> {
        Self::with_tolerance(b0, b1, DEFAULT_TOLERANCE)
    }

    /// Validates unit length and mutual orthogonality within `tol`.
    ///
    /// Accepted vectors are stored re-orthonormalized (Gram-Schmidt, `b0`
    /// first), so projections through the basis conserve probability.
    pub fn with_tolerance(b0: ColumnVector, b1: ColumnVector, tol: f64) -> Result<Self> {
        if !b0.is_unit_within(tol) {
            return Err(CoreError::invalid_basis(&format!("b0 {b0} is not a unit vector")));
        }
        if !b1.is_unit_within(tol) {
            return Err(CoreError::invalid_basis(&format!("b1 {b1} is not a unit vector")));
        }
        if !is_close(b0.transpose() * b1, 0.0, tol) || !is_close(b1.transpose() * b0, 0.0, tol) {
            return Err(CoreError::invalid_basis(&format!("{b0} and {b1} are not orthogonal")));
        }
        let k0 = b0
            .normalize()
            .map_err(|_| CoreError::invalid_basis(&format!("b0 {b0} has no direction")))?;
        let k1 = (b1 + k0 * -(k0.transpose() * b1))
            .normalize()
            .map_err(|_| CoreError::invalid_basis(&format!("b1 {b1} is parallel to b0")))?;
        Ok(Self { b0: k0, b1: k1, tolerance: tol })
    }

    /// Builds from role-tagged vectors; a row vector is never a basis element.
    pub fn from_dual(b0: DualVector, b1: DualVector) -> Result<Self> {
        let k0 = ColumnVector::try_from(b0)
            .map_err(|_| CoreError::invalid_basis(&format!("b0 {b0} is not a column vector")))?;
        let k1 = ColumnVector::try_from(b1)
            .map_err(|_| CoreError::invalid_basis(&format!("b1 {b1} is not a column vector")))?;
        Self::new(k0, k1)
    }

    /// `|0>`, `|1>`
    pub fn standard() -> Self {
        Self::unchecked(ColumnVector::new(1.0, 0.0), ColumnVector::new(0.0, 1.0))
    }

    /// Caller guarantees orthonormality.
    pub(crate) fn unchecked(b0: ColumnVector, b1: ColumnVector) -> Self {
        Self { b0, b1, tolerance: DEFAULT_TOLERANCE }
    }

    pub fn b0(&self) -> ColumnVector { self.b0 }
    pub fn b1(&self) -> ColumnVector { self.b1 }
    pub fn tolerance(&self) -> f64 { self.tolerance }

    /// Basis vector that corresponds to a classical outcome.
    pub fn vector(&self, outcome: Outcome) -> ColumnVector {
        match outcome {
            Outcome::Zero => self.b0,
            Outcome::One => self.b1,
        }
    }

    /// Coordinates of `v` expressed in this basis.
    pub fn apply(&self, v: &ColumnVector) -> ColumnVector {
        ColumnVector::new(self.b0.transpose() * *v, self.b1.transpose() * *v)
    }
}

impl Mul<ColumnVector> for &OrthonormalBasisPair {
    type Output = ColumnVector;
    fn mul(self, v: ColumnVector) -> ColumnVector {
        self.apply(&v)
    }
}

impl Mul<ColumnVector> for OrthonormalBasisPair {
    type Output = ColumnVector;
    fn mul(self, v: ColumnVector) -> ColumnVector {
        self.apply(&v)
    }
}

impl fmt::Display for OrthonormalBasisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}; {}]", self.b0, self.b1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k0() -> ColumnVector { ColumnVector::new(1.0, 0.0) }
    fn k1() -> ColumnVector { ColumnVector::new(0.0, 1.0) }

    #[test]
    fn identity_basis_is_a_noop() {
        let m = OrthonormalBasisPair::new(k0(), k1()).expect("valid basis");
        assert_eq!(m.apply(&ColumnVector::new(2.0, 3.0)), ColumnVector::new(2.0, 3.0));
        assert_eq!(&m * ColumnVector::new(-1.5, 0.25), ColumnVector::new(-1.5, 0.25));
        assert_eq!(m, OrthonormalBasisPair::standard());
    }

    #[test]
    fn rejects_repeated_vector() {
        let err = OrthonormalBasisPair::new(k0(), k0()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidBasis(_)), "got: {err}");
    }

    #[test]
    fn rejects_non_unit() {
        assert!(OrthonormalBasisPair::new(ColumnVector::new(2.0, 0.0), k1()).is_err());
        assert!(OrthonormalBasisPair::new(k0(), ColumnVector::new(0.0, 0.5)).is_err());
    }

    #[test]
    fn rejects_non_orthogonal_units() {
        let s = 0.5_f64.sqrt();
        let err = OrthonormalBasisPair::new(k0(), ColumnVector::new(s, s)).unwrap_err();
        assert!(err.to_string().contains("not orthogonal"), "got: {err}");
    }

    #[test]
    fn rejects_row_vector() {
        let err = OrthonormalBasisPair::from_dual(DualVector::column(1.0, 0.0), DualVector::row(0.0, 1.0))
            .unwrap_err();
        assert!(err.to_string().contains("not a column vector"), "got: {err}");
        assert!(OrthonormalBasisPair::from_dual(DualVector::column(1.0, 0.0), DualVector::column(0.0, 1.0)).is_ok());
    }

    #[test]
    fn tolerance_is_configurable() {
        let near = ColumnVector::new(1.001, 0.0);
        assert!(OrthonormalBasisPair::new(near, k1()).is_err());
        let m = OrthonormalBasisPair::with_tolerance(near, k1(), 1e-2).expect("loose tolerance");
        assert_eq!(m.tolerance(), 1e-2);
    }

    #[test]
    fn near_unit_vectors_are_stored_orthonormal() {
        let m = OrthonormalBasisPair::new(ColumnVector::new(1.0 + 0.9e-5, 0.0), ColumnVector::new(0.0, 1.0 + 0.9e-5))
            .expect("within tolerance");
        assert!(is_close(m.b0().norm(), 1.0, 1e-12));
        assert!(is_close(m.b1().norm(), 1.0, 1e-12));
        assert!(is_close(m.b0().transpose() * m.b1(), 0.0, 1e-12));

        let v = ColumnVector::new(0.6, 0.8);
        let coords = m.apply(&v);
        assert!(is_close(coords.x() * coords.x() + coords.y() * coords.y(), 1.0, 1e-12));
    }

    #[test]
    fn slightly_skewed_pair_is_straightened() {
        let b1 = ColumnVector::new(0.008, 1.0);
        let m = OrthonormalBasisPair::with_tolerance(ColumnVector::new(1.0, 0.0), b1, 1e-2).expect("loose tolerance");
        assert!(is_close(m.b0().transpose() * m.b1(), 0.0, 1e-12));
        assert!(m.b1().approx_eq(&ColumnVector::new(0.0, 1.0), 1e-12));
    }

    #[test]
    fn outcome_selects_vector() {
        let m = OrthonormalBasisPair::standard();
        assert_eq!(m.vector(Outcome::Zero), k0());
        assert_eq!(m.vector(Outcome::One), k1());
    }

    #[test]
    fn display_lists_both_kets() {
        insta::assert_snapshot!(OrthonormalBasisPair::standard().to_string(), @"[ket[x:1.0, y:0.0]; ket[x:0.0, y:1.0]]");
    }
}
