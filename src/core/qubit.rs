//! A single real-valued qubit whose state can only be observed by measuring it.
//!
//! A qubit cannot be duplicated:
//!
//! ```compile_fail
//! use qubit_sim::core::qubit::Qubit;
//! let q = Qubit::new().unwrap();
//! let _copy: Qubit = q.clone();
//! ```
use std::fmt;

use tracing::{debug, trace, warn};

use crate::core::error::Result;
use crate::core::measurement::Measurement;
use crate::core::random::{thread_source, RandomSource};
use crate::core::vector::{is_close, ColumnVector, Vector2};

/// Classical result of a measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Zero,
    One,
}

impl Outcome {
    pub fn bit(self) -> u8 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(o: Outcome) -> u8 {
        o.bit()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}

pub struct Qubit {
    state: ColumnVector,
}

impl Qubit {
    /// Random direction drawn from the calling thread's generator.
    pub fn new() -> Result<Self> {
        Self::with_source(&mut thread_source())
    }

    /// Random direction: both components uniform in `[-0.5, 0.5)`, then
    /// normalized. A zero draw is resampled once before giving up.
    pub fn with_source<S: RandomSource + ?Sized>(src: &mut S) -> Result<Self> {
        let state = match Self::sample(src).normalize() {
            Ok(state) => state,
            Err(_) => {
                warn!("degenerate qubit draw, resampling");
                Self::sample(src).normalize()?
            }
        };
        debug!("prepared qubit");
        Ok(Self { state })
    }

    fn sample<S: RandomSource + ?Sized>(src: &mut S) -> ColumnVector {
        let x = src.next_unit() - 0.5;
        let y = src.next_unit() - 0.5;
        ColumnVector::new(x, y)
    }

    /// Measures with the calling thread's generator.
    pub fn measure(&mut self, m: &Measurement) -> Outcome {
        self.measure_with(m, &mut thread_source())
    }

    /// Samples an outcome with probability equal to the squared coordinate
    /// along the matching basis vector, then collapses onto that vector.
    /// Ties (`p0 == r`) resolve to [`Outcome::Zero`].
    ///
    /// # Panics
    /// If the projected probabilities do not sum to one, which means the
    /// basis or the state is corrupt.
    pub fn measure_with<S: RandomSource + ?Sized>(&mut self, m: &Measurement, src: &mut S) -> Outcome {
        let bases = m.bases();
        let res = bases.apply(&self.state);
        let p0 = res.x() * res.x();
        let p1 = res.y() * res.y();
        assert!(
            is_close(p0 + p1, 1.0, bases.tolerance()),
            "probabilities do not sum to one: p0={p0}, p1={p1}"
        );

        let r = src.next_unit();
        let outcome = if p0 >= r { Outcome::Zero } else { Outcome::One };
        self.state = bases.vector(outcome);
        trace!(p0, p1, r, outcome = %outcome, "measured qubit");
        outcome
    }
}

impl fmt::Debug for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Qubit").finish_non_exhaustive()
    }
}
