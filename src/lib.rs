//! Posterior probability of a short sequence being a bound site (e.g. of a transcription
//! factor) rather than background sequence.
//!
//! The model consists of a site prior, a position specific base distribution for the motif
//! and a position independent base distribution for the background. Bases are encoded as
//! integers (A = 0, C = 1, G = 2, T = 3).
//!
//! ```
//! use siteposterior::{site_posterior, SequenceModel};
//!
//! let model = SequenceModel::new(
//!     1.0 / 3.0,
//!     vec![
//!         vec![0.1, 0.5, 0.3, 0.1],
//!         vec![0.1, 0.4, 0.4, 0.1],
//!         vec![0.8, 0.1, 0.1, 0.0],
//!     ],
//!     vec![0.25, 0.25, 0.25, 0.25],
//! )
//! .unwrap();
//! let p = site_posterior(&[1, 2, 0], &model).unwrap();
//! assert!((p - 0.84).abs() < 0.005);
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate derefable;
#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate getset;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod errors;
pub mod model;
pub mod sequence;
pub mod utils;

pub use crate::errors::{Error, Result};
pub use crate::model::{
    site_posterior, Hypothesis, ModelSpec, PosteriorCalculator, SequenceModel, SiteEvidence,
};
pub use crate::sequence::{Base, Sequence};
