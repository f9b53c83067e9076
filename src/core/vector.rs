//! Row (bra) and column (ket) vectors in R².
//!
//! The two roles are separate types so that only `row * column` produces an
//! inner product; every other pairing is rejected by the compiler.
//!
//! ```compile_fail
//! use qubit_sim::core::vector::RowVector;
//! let r = RowVector::new(1.0, 2.0);
//! let _ = r * r;
//! ```
//!
//! ```compile_fail
//! use qubit_sim::core::vector::{ColumnVector, RowVector};
//! let _ = ColumnVector::new(3.0, 4.0) * RowVector::new(1.0, 2.0);
//! ```
use std::fmt;
use std::ops::{Add, Mul};

use crate::core::error::{CoreError, Result};
use crate::core::dual::DualVector;

pub const DEFAULT_TOLERANCE: f64 = 1e-5;

#[inline]
pub fn is_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    std::f64::consts::PI * deg / 180.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Row,
    Column,
}

impl Role {
    pub fn flip(self) -> Self {
        match self {
            Role::Row => Role::Column,
            Role::Column => Role::Row,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Row => write!(f, "bra"),
            Role::Column => write!(f, "ket"),
        }
    }
}

/// Arithmetic shared by both vector roles.
pub trait Vector2: Copy + Sized {
    const ROLE: Role;

    fn from_components(x: f64, y: f64) -> Self;
    fn components(&self) -> (f64, f64);

    fn norm(&self) -> f64 {
        let (x, y) = self.components();
        (x * x + y * y).sqrt()
    }

    fn is_unit(&self) -> bool {
        self.is_unit_within(DEFAULT_TOLERANCE)
    }

    fn is_unit_within(&self, tol: f64) -> bool {
        is_close(self.norm(), 1.0, tol)
    }

    /// Same direction, unit length. A zero vector has no direction.
    fn normalize(&self) -> Result<Self> {
        let n = self.norm();
        if n == 0.0 {
            return Err(CoreError::DegenerateVector);
        }
        Ok(self.scale(1.0 / n))
    }

    fn scale(&self, a: f64) -> Self {
        let (x, y) = self.components();
        Self::from_components(a * x, a * y)
    }

    fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        let (x0, y0) = self.components();
        let (x1, y1) = other.components();
        is_close(x0, x1, tol) && is_close(y0, y1, tol)
    }

    fn to_dual(&self) -> DualVector {
        let (x, y) = self.components();
        DualVector::new(x, y, Self::ROLE)
    }
}

/// A bra: acts on a [`ColumnVector`] to produce a scalar.
#[derive(Clone, Copy, Debug)]
pub struct RowVector {
    x: f64,
    y: f64,
}

/// A ket: a state direction.
#[derive(Clone, Copy, Debug)]
pub struct ColumnVector {
    x: f64,
    y: f64,
}

macro_rules! impl_vector2 {
    ($ty:ident, $role:expr) => {
        impl $ty {
            pub const fn new(x: f64, y: f64) -> Self {
                Self { x, y }
            }
            pub fn x(&self) -> f64 {
                self.x
            }
            pub fn y(&self) -> f64 {
                self.y
            }
        }

        impl Vector2 for $ty {
            const ROLE: Role = $role;

            fn from_components(x: f64, y: f64) -> Self {
                Self { x, y }
            }
            fn components(&self) -> (f64, f64) {
                (self.x, self.y)
            }
        }

        impl Add for $ty {
            type Output = $ty;
            fn add(self, other: $ty) -> $ty {
                $ty::new(self.x + other.x, self.y + other.y)
            }
        }

        impl Mul<f64> for $ty {
            type Output = $ty;
            fn mul(self, a: f64) -> $ty {
                self.scale(a)
            }
        }

        impl Mul<$ty> for f64 {
            type Output = $ty;
            fn mul(self, v: $ty) -> $ty {
                v.scale(self)
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.approx_eq(other, DEFAULT_TOLERANCE)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}[x:{:?}, y:{:?}]", Self::ROLE, self.x, self.y)
            }
        }
    };
}

impl_vector2!(RowVector, Role::Row);
impl_vector2!(ColumnVector, Role::Column);

impl RowVector {
    pub fn transpose(&self) -> ColumnVector {
        ColumnVector::new(self.x, self.y)
    }

    pub fn dot(&self, k: &ColumnVector) -> f64 {
        self.x * k.x + self.y * k.y
    }
}

impl ColumnVector {
    pub fn transpose(&self) -> RowVector {
        RowVector::new(self.x, self.y)
    }
}

impl Mul<ColumnVector> for RowVector {
    type Output = f64;
    fn mul(self, k: ColumnVector) -> f64 {
        self.dot(&k)
    }
}

impl Mul<&ColumnVector> for &RowVector {
    type Output = f64;
    fn mul(self, k: &ColumnVector) -> f64 {
        self.dot(k)
    }
}
