//! Uniform randomness for qubit preparation and measurement.
//!
//! [`thread_source`] keeps one generator per thread, so qubits measured from
//! different threads never share generator state.
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Supplies uniform reals in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Reproducible stream for tests and repeatable trials.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

pub fn thread_source() -> RngSource<ThreadRng> {
    RngSource::new(rand::thread_rng())
}
