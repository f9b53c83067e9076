//! Single real-valued qubit in R²: typed bra/ket vectors, orthonormal
//! change of basis, and measurement with collapse.
//!
//! ```
//! use qubit_sim::core::{Measurement, Qubit, RngSource};
//!
//! let mut src = RngSource::seeded(1);
//! let m = Measurement::from_degrees(90.0);
//! let mut q = Qubit::with_source(&mut src).unwrap();
//! let first = q.measure_with(&m, &mut src);
//! assert_eq!(q.measure_with(&m, &mut src), first);
//! ```
pub mod config;
pub mod core;

pub use crate::config::SimConfig;
pub use crate::core::{CoreError, Measurement, OrthonormalBasisPair, Outcome, Qubit};
