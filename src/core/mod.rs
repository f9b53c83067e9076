//! Core module tree: the R² vector substrate and the qubit built on it.

pub mod basis;
pub mod dual;
pub mod error;
pub mod measurement;
pub mod qubit;
pub mod random;
pub mod vector;

pub use basis::OrthonormalBasisPair;
pub use dual::DualVector;
pub use error::CoreError;
pub use measurement::{basis_for_angle, Measurement};
pub use qubit::{Outcome, Qubit};
pub use random::{thread_source, RandomSource, RngSource};
pub use vector::{deg_to_rad, is_close, ColumnVector, Role, RowVector, Vector2, DEFAULT_TOLERANCE};
