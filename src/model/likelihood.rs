// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use bio::stats::{LogProb, Prob};

use crate::model::{Hypothesis, SequenceModel};
use crate::sequence::Base;

/// Likelihood of an observed sequence under either hypothesis.
///
/// Positions are assumed to be independent, hence the likelihood is the product of the
/// per position base probabilities (a sum in log space). A single base with probability zero
/// yields exactly `LogProb::ln_zero()`.
#[derive(new, Clone, Copy, Debug)]
pub struct SiteLikelihood<'a> {
    model: &'a SequenceModel,
}

impl<'a> SiteLikelihood<'a> {
    /// Bases have to be of motif length, which is ensured by the posterior calculator.
    pub fn compute(&self, hypothesis: Hypothesis, bases: &[Base]) -> LogProb {
        debug_assert_eq!(bases.len(), self.model.motif_length());
        match hypothesis {
            Hypothesis::Site => self.site(bases),
            Hypothesis::Background => self.background(bases),
        }
    }

    fn site(&self, bases: &[Base]) -> LogProb {
        bases
            .iter()
            .enumerate()
            .map(|(position, &base)| LogProb::from(Prob(self.model.site_base_prob(position, base))))
            .sum()
    }

    fn background(&self, bases: &[Base]) -> LogProb {
        bases
            .iter()
            .map(|&base| LogProb::from(Prob(self.model.background_base_prob(base))))
            .sum()
    }
}
