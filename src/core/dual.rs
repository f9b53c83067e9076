//! Role-tagged vector for callers that only learn the role at runtime.
//! Misuse surfaces as [`CoreError::RoleMismatch`] instead of a type error.
use std::fmt;

use crate::core::error::{CoreError, Result};
use crate::core::vector::{is_close, ColumnVector, Role, RowVector, Vector2, DEFAULT_TOLERANCE};

#[derive(Clone, Copy, Debug)]
pub struct DualVector {
    x: f64,
    y: f64,
    role: Role,
}

impl DualVector {
    pub const fn new(x: f64, y: f64, role: Role) -> Self {
        Self { x, y, role }
    }

    pub const fn row(x: f64, y: f64) -> Self {
        Self::new(x, y, Role::Row)
    }

    pub const fn column(x: f64, y: f64) -> Self {
        Self::new(x, y, Role::Column)
    }

    pub fn x(&self) -> f64 { self.x }
    pub fn y(&self) -> f64 { self.y }
    pub fn role(&self) -> Role { self.role }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_unit(&self) -> bool {
        is_close(self.norm(), 1.0, DEFAULT_TOLERANCE)
    }

    pub fn normalize(&self) -> Result<Self> {
        let n = self.norm();
        if n == 0.0 {
            return Err(CoreError::DegenerateVector);
        }
        Ok(self.scale(1.0 / n))
    }

    pub fn transpose(&self) -> Self {
        Self::new(self.x, self.y, self.role.flip())
    }

    pub fn scale(&self, a: f64) -> Self {
        Self::new(a * self.x, a * self.y, self.role)
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.role != other.role {
            return Err(CoreError::role_mismatch("add", self.role, other.role));
        }
        Ok(Self::new(self.x + other.x, self.y + other.y, self.role))
    }

    /// Only a row may act on a column.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        if self.role != Role::Row || other.role != Role::Column {
            return Err(CoreError::role_mismatch("dot", self.role, other.role));
        }
        Ok(self.x * other.x + self.y * other.y)
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.approx_eq(other, DEFAULT_TOLERANCE)
    }

    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.role == other.role && is_close(self.x, other.x, tol) && is_close(self.y, other.y, tol)
    }
}

impl PartialEq for DualVector {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for DualVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[x:{:?}, y:{:?}]", self.role, self.x, self.y)
    }
}

impl From<RowVector> for DualVector {
    fn from(v: RowVector) -> Self {
        v.to_dual()
    }
}

impl From<ColumnVector> for DualVector {
    fn from(v: ColumnVector) -> Self {
        v.to_dual()
    }
}

impl TryFrom<DualVector> for RowVector {
    type Error = CoreError;
    fn try_from(v: DualVector) -> Result<Self> {
        match v.role {
            Role::Row => Ok(RowVector::new(v.x, v.y)),
            other => Err(CoreError::role_mismatch("convert", other, Role::Row)),
        }
    }
}

impl TryFrom<DualVector> for ColumnVector {
    type Error = CoreError;
    fn try_from(v: DualVector) -> Result<Self> {
        match v.role {
            Role::Column => Ok(ColumnVector::new(v.x, v.y)),
            other => Err(CoreError::role_mismatch("convert", other, Role::Column)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_keeps_components_and_role() {
        let v = DualVector::new(1.0, 2.0, Role::Row);
        assert_eq!((v.x(), v.y(), v.role()), (1.0, 2.0, Role::Row));
        assert_eq!(DualVector::column(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn add_requires_same_role() {
        let b = DualVector::row(1.0, 2.0);
        let k = DualVector::column(1.0, 2.0);
        assert_eq!(b.add(&b).unwrap(), DualVector::row(2.0, 4.0));
        assert!(matches!(b.add(&k), Err(CoreError::RoleMismatch { op: "add", .. })));
    }

    #[test]
    fn dot_only_row_on_column() {
        let b = DualVector::row(1.0, 2.0);
        let k = DualVector::column(3.0, 4.0);
        assert_eq!(b.dot(&k).unwrap(), 11.0);
        assert!(k.dot(&b).is_err());
        assert!(b.dot(&b).is_err());
        assert!(k.dot(&k).is_err());
    }

    #[test]
    fn transpose_flips_role_only() {
        let b = DualVector::row(1.0, 2.0);
        assert_eq!(b.transpose(), DualVector::column(1.0, 2.0));
        assert_eq!(b.transpose().transpose(), b);
        assert_ne!(b, b.transpose());
    }

    #[test]
    fn normalize_zero_fails() {
        assert_eq!(DualVector::column(0.0, 0.0).normalize(), Err(CoreError::DegenerateVector));
        let n = DualVector::row(1.0, 2.0).normalize().unwrap();
        assert!(n.is_unit());
        assert_eq!(n.role(), Role::Row);
    }

    #[test]
    fn typed_conversions_check_role() {
        let k: ColumnVector = DualVector::column(0.6, 0.8).try_into().unwrap();
        assert_eq!(k, ColumnVector::new(0.6, 0.8));
        assert!(RowVector::try_from(DualVector::column(0.6, 0.8)).is_err());
        assert_eq!(DualVector::from(RowVector::new(1.0, 0.0)), DualVector::row(1.0, 0.0));
    }
}
