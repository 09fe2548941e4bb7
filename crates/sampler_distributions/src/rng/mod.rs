//! # Random Number Generation
//!
//! Every sampling operation in this crate takes an explicit `&mut` RNG
//! handle; there is no process-wide generator. Callers control seeding,
//! reproducibility and thread ownership.
//!
//! ## Design
//!
//! - **Reproducibility**: generators are seeded and remember their seed
//! - **Thread ownership**: a handle is `Send` but used through `&mut`, so the
//!   borrow checker serialises access; use [`SamplerRng::fork`] to hand
//!   independent generators to worker threads
//! - **Interoperability**: [`SamplerRng`] implements [`rand::RngCore`], so any
//!   `rand_distr` distribution can sample from it directly
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_distributions::rng::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(12345);
//!
//! let uniform_value = rng.gen_uniform();
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! # assert!((0.0..1.0).contains(&uniform_value));
//! # assert!(normal_value.is_finite());
//! ```

mod prng;

pub use prng::SamplerRng;

#[cfg(test)]
mod tests;
