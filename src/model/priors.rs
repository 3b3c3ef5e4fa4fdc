use bio::stats::{LogProb, Prob};

use crate::model::{Hypothesis, SequenceModel};

/// Prior over site and background, given by the site prior of the model.
#[derive(new, Clone, Copy, Debug)]
pub struct SitePrior<'a> {
    model: &'a SequenceModel,
}

impl<'a> SitePrior<'a> {
    pub fn compute(&self, hypothesis: Hypothesis) -> LogProb {
        // The background prior is taken as complement in linear space, such that a site prior
        // of exactly one yields ln(0) instead of a rounding artifact.
        match hypothesis {
            Hypothesis::Site => LogProb::from(Prob(self.model.site_prior())),
            Hypothesis::Background => LogProb::from(Prob(self.model.background_prior())),
        }
    }
}
