//! Seeded pseudo-random number generator handle.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seeded random number generator passed explicitly to every sampler.
///
/// Wraps [`StdRng`] and records the seed it was initialised with.
///
/// # Examples
///
/// ```rust
/// use sampler_distributions::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(42);
///
/// let u: f64 = rng.gen_uniform();
/// let n: f64 = rng.gen_normal();
///
/// let mut buffer = vec![0.0; 100];
/// rng.fill_uniform(&mut buffer);
/// rng.fill_normal(&mut buffer);
/// # assert!(u >= 0.0 && u < 1.0);
/// # assert!(n.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct SamplerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl SamplerRng {
    /// Creates a new generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_distributions::rng::SamplerRng;
    ///
    /// let mut rng1 = SamplerRng::from_seed(12345);
    /// let mut rng2 = SamplerRng::from_seed(12345);
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from operating-system entropy.
    ///
    /// The drawn seed is retained, so [`SamplerRng::seed`] can be logged to
    /// replay the run later.
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        tracing::debug!(seed, "seeded sampler rng from entropy");
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent child generator.
    ///
    /// The child seed is drawn from this generator, so a sequence of forks
    /// from a seeded parent is itself reproducible. Intended for giving each
    /// worker thread its own generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_distributions::rng::SamplerRng;
    ///
    /// let mut a = SamplerRng::from_seed(7);
    /// let mut b = SamplerRng::from_seed(7);
    /// assert_eq!(a.fork().seed(), b.fork().seed());
    /// ```
    pub fn fork(&mut self) -> Self {
        let child_seed = self.inner.next_u64();
        Self::from_seed(child_seed)
    }

    /// Generates a single uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean 0, std 1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform values in [0, 1).
    ///
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

impl RngCore for SamplerRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
