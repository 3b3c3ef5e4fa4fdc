// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::convert::TryInto;

use itertools::Itertools;

use crate::errors::{self, Result};

/// Tolerance for a categorical distribution to be considered summing up to one.
pub const NUMERICAL_EPSILON: f64 = 1e-6;

/// Check that `probs` is a categorical distribution over the four bases, i.e. has exactly
/// four finite, non-negative entries that sum up to one (within `NUMERICAL_EPSILON`).
///
/// `what` names the checked distribution in the error message.
pub(crate) fn base_distribution(probs: &[f64], what: &str) -> Result<[f64; 4]> {
    let probs: [f64; 4] = probs.try_into().map_err(|_| {
        errors::invalid_parameter(format!(
            "{} must have exactly 4 entries (A, C, G, T), found {}",
            what,
            probs.len()
        ))
    })?;

    if let Some(p) = probs.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(errors::invalid_parameter(format!(
            "{} contains invalid probability {}",
            what, p
        )));
    }

    let total: f64 = probs.iter().sum();
    if (total - 1.0).abs() > NUMERICAL_EPSILON {
        return Err(errors::invalid_parameter(format!(
            "{} must sum up to 1, found {} ([{}])",
            what,
            total,
            probs.iter().join(", ")
        )));
    }

    Ok(probs)
}

/// Check that `prob` is a probability, i.e. lies within [0, 1].
pub(crate) fn probability(prob: f64, what: &str) -> Result<f64> {
    if (0.0..=1.0).contains(&prob) {
        Ok(prob)
    } else {
        Err(errors::invalid_parameter(format!(
            "{} must be within [0, 1], found {}",
            what, prob
        )))
    }
}
