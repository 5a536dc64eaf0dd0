//! Injected random source
//!
//! Every draw in a render pass goes through [`RandomSource`], so callers pick
//! between a seeded generator (reproducible), an entropy-seeded generator
//! (production), or a scripted double (tests).

use crate::error::RandomSourceError;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Source of the two draws the projection needs
pub trait RandomSource {
    /// Draw from `Normal(mean, std_dev)`
    ///
    /// # Errors
    /// `InvalidNormal` if the parameters do not describe a distribution
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, RandomSourceError>;

    /// Draw uniformly from the closed interval `[low, high]`
    ///
    /// # Errors
    /// `InvalidInterval` if the interval is empty or not finite
    fn sample_uniform(&mut self, low: f64, high: f64) -> Result<f64, RandomSourceError>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, RandomSourceError> {
        (**self).sample_normal(mean, std_dev)
    }

    fn sample_uniform(&mut self, low: f64, high: f64) -> Result<f64, RandomSourceError> {
        (**self).sample_uniform(low, high)
    }
}

/// Validate normal distribution parameters
///
/// # Errors
/// `InvalidNormal` for a non-finite mean or a negative/non-finite std-dev
pub fn check_normal(mean: f64, std_dev: f64) -> Result<(), RandomSourceError> {
    if mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0 {
        Ok(())
    } else {
        Err(RandomSourceError::InvalidNormal { mean, std_dev })
    }
}

/// Validate a closed uniform interval
///
/// The width must stay finite once scaled the way `Uniform` scales it, so
/// bounds near `f64::MAX` on both sides are rejected.
///
/// # Errors
/// `InvalidInterval` for non-finite bounds, `low > high`, or an overflowing width
pub fn check_interval(low: f64, high: f64) -> Result<(), RandomSourceError> {
    let scale = (high - low) / (1.0 - f64::EPSILON);
    if low.is_finite() && high.is_finite() && low <= high && scale.is_finite() {
        Ok(())
    } else {
        Err(RandomSourceError::InvalidInterval { low, high })
    }
}

/// [`RandomSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator
    #[inline]
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for a given seed
    #[inline]
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    ///
    /// # Errors
    /// `Entropy` if the OS entropy source is unavailable
    pub fn from_entropy() -> Result<Self, RandomSourceError> {
        StdRng::from_rng(OsRng)
            .map(Self::new)
            .map_err(|e| RandomSourceError::Entropy(e.to_string()))
    }

    /// Seeded when `seed` is set, entropy-seeded otherwise
    ///
    /// # Errors
    /// `Entropy` if no seed is given and the OS entropy source is unavailable
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Result<Self, RandomSourceError> {
        match seed {
            Some(seed) => Ok(Self::seeded(seed)),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, RandomSourceError> {
        check_normal(mean, std_dev)?;
        let normal = Normal::new(mean, std_dev)
            .map_err(|_| RandomSourceError::InvalidNormal { mean, std_dev })?;
        Ok(normal.sample(&mut self.rng))
    }

    fn sample_uniform(&mut self, low: f64, high: f64) -> Result<f64, RandomSourceError> {
        check_interval(low, high)?;
        Ok(Uniform::new_inclusive(low, high).sample(&mut self.rng))
    }
}
