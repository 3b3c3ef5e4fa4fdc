use bio::stats::bayesian::bayes_factors::{evidence::KassRaftery, BayesFactor};
use bio::stats::{LogProb, PHREDProb};

use crate::errors::{Error, Result};
use crate::model::{Hypothesis, SequenceModel, SiteLikelihood, SitePrior};
use crate::sequence;

/// Posterior probability that `sequence` is a bound site under the given model.
///
/// # Arguments
///
/// * `sequence` - observed bases, encoded as 0 = A, 1 = C, 2 = G, 3 = T
/// * `model` - the model that generated the sequence
///
/// # Errors
///
/// * `Error::LengthMismatch` if the sequence length differs from the motif length
/// * `Error::InvalidBase` if any element is not within [0, 3]
/// * `Error::DegenerateEvidence` if the sequence is impossible under both hypotheses
///
/// # Example
///
/// ```
/// use siteposterior::{site_posterior, SequenceModel};
///
/// let model = SequenceModel::new(0.01, vec![vec![0.25; 4]; 4], vec![0.25; 4]).unwrap();
/// let p = site_posterior(&[0, 1, 2, 3], &model).unwrap();
/// assert!((p - 0.01).abs() < 1e-10);
/// ```
pub fn site_posterior(sequence: &[u8], model: &SequenceModel) -> Result<f64> {
    PosteriorCalculator::new(model).site_posterior(sequence)
}

/// Bayes' rule over the site and background hypotheses of a `SequenceModel`.
#[derive(Clone, Copy, Debug)]
pub struct PosteriorCalculator<'a> {
    model: &'a SequenceModel,
    prior: SitePrior<'a>,
    likelihood: SiteLikelihood<'a>,
}

impl<'a> PosteriorCalculator<'a> {
    pub fn new(model: &'a SequenceModel) -> Self {
        PosteriorCalculator {
            model,
            prior: SitePrior::new(model),
            likelihood: SiteLikelihood::new(model),
        }
    }

    pub fn site_posterior(&self, sequence: &[u8]) -> Result<f64> {
        Ok(self.evidence(sequence)?.posterior())
    }

    /// Compute likelihoods and joint probabilities of both hypotheses for the given sequence.
    pub fn evidence(&self, sequence: &[u8]) -> Result<SiteEvidence> {
        if sequence.len() != self.model.motif_length() {
            return Err(Error::LengthMismatch {
                expected: self.model.motif_length(),
                found: sequence.len(),
            });
        }
        let bases = sequence::decode(sequence)?;

        let site_likelihood = self.likelihood.compute(Hypothesis::Site, &bases);
        let background_likelihood = self.likelihood.compute(Hypothesis::Background, &bases);
        let site_joint = self.prior.compute(Hypothesis::Site) + site_likelihood;
        let background_joint = self.prior.compute(Hypothesis::Background) + background_likelihood;

        debug!(
            "joint probabilities for sequence {:?}: site={}, background={}",
            sequence, *site_joint, *background_joint
        );

        // 0/0: the posterior is undefined, no tolerance here
        if site_joint == LogProb::ln_zero() && background_joint == LogProb::ln_zero() {
            warn!(
                "sequence {:?} is impossible under both site and background model",
                sequence
            );
            return Err(Error::DegenerateEvidence);
        }

        Ok(SiteEvidence {
            site_likelihood,
            background_likelihood,
            site_joint,
            background_joint,
        })
    }
}

/// Evidence of a single sequence for being a bound site.
///
/// Only obtainable for sequences that have non-zero probability under at least one hypothesis,
/// hence the posterior is always defined.
#[derive(Clone, Copy, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct SiteEvidence {
    /// Likelihood of the sequence under the site model.
    site_likelihood: LogProb,
    /// Likelihood of the sequence under the background model.
    background_likelihood: LogProb,
    /// Site prior times site likelihood.
    site_joint: LogProb,
    /// Background prior times background likelihood.
    background_joint: LogProb,
}

/// ln(1 + exp(x)), without overflow for large x. Exact for x = -inf and x = inf.
fn ln_1p_exp(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

impl SiteEvidence {
    /// Marginal probability of the sequence.
    pub fn marginal(&self) -> LogProb {
        let (max, min) = if self.site_joint >= self.background_joint {
            (*self.site_joint, *self.background_joint)
        } else {
            (*self.background_joint, *self.site_joint)
        };
        // max is finite, since at least one joint probability is non-zero
        LogProb(max + ln_1p_exp(min - max))
    }

    /// Log posterior of the site hypothesis: -ln(1 + background_joint / site_joint).
    pub fn posterior_log(&self) -> LogProb {
        LogProb(-ln_1p_exp(*self.background_joint - *self.site_joint))
    }

    /// Posterior probability of the site hypothesis, within [0, 1].
    pub fn posterior(&self) -> f64 {
        // exp(inf) = inf yields exactly 0, exp(-inf) = 0 exactly 1
        1.0 / (1.0 + (*self.background_joint - *self.site_joint).exp())
    }

    /// PHRED scaled probability that the sequence is not a bound site.
    pub fn posterior_phred(&self) -> PHREDProb {
        PHREDProb::from(LogProb(-ln_1p_exp(
            *self.site_joint - *self.background_joint,
        )))
    }

    /// Bayes factor of the site model against the background model.
    pub fn bayes_factor(&self) -> BayesFactor {
        BayesFactor::new(self.site_likelihood, self.background_likelihood)
    }

    pub fn evidence_kass_raftery(&self) -> KassRaftery {
        self.bayes_factor().evidence_kass_raftery()
    }
}
