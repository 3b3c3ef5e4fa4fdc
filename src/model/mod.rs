use std::convert::TryFrom;

use crate::errors::{Error, Result};
use crate::sequence::{Base, N_BASES};
use crate::utils;

pub mod likelihood;
pub mod posterior;
pub mod priors;

pub use crate::model::likelihood::SiteLikelihood;
pub use crate::model::posterior::{site_posterior, PosteriorCalculator, SiteEvidence};
pub use crate::model::priors::SitePrior;

/// Categorical distribution over the four bases.
pub type BaseProbs = [f64; N_BASES];

/// The two competing explanations of an observed sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hypothesis {
    /// The sequence is a bound site, generated by the position specific base distributions.
    Site,
    /// The sequence is background, generated by the position independent base distribution.
    Background,
}

/// Generative model of bound sites versus background sequence.
///
/// Immutable once constructed. All parameters are validated by `SequenceModel::new`.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct SequenceModel {
    /// Prior probability of a bound site.
    #[getset(get_copy = "pub")]
    site_prior: f64,
    /// Base distribution for each position of the motif.
    #[getset(get = "pub")]
    site_base_probs: Vec<BaseProbs>,
    /// Base distribution of the background, shared by all positions.
    #[getset(get = "pub")]
    background_base_probs: BaseProbs,
}

impl SequenceModel {
    /// Create a new model.
    ///
    /// # Arguments
    ///
    /// * `site_prior` - prior probability of a bound site, within [0, 1]
    /// * `site_base_probs` - one distribution over A, C, G, T per motif position
    /// * `background_base_probs` - distribution over A, C, G, T for background sequence
    ///
    /// Fails with `Error::InvalidParameter` if any of the above is not a valid probability
    /// (distribution).
    pub fn new(
        site_prior: f64,
        site_base_probs: Vec<Vec<f64>>,
        background_base_probs: Vec<f64>,
    ) -> Result<Self> {
        let site_prior = utils::probability(site_prior, "site prior")?;
        let site_base_probs = site_base_probs
            .iter()
            .enumerate()
            .map(|(i, row)| {
                utils::base_distribution(row, &format!("site base probabilities at position {}", i))
            })
            .collect::<Result<Vec<_>>>()?;
        let background_base_probs =
            utils::base_distribution(&background_base_probs, "background base probabilities")?;

        Ok(SequenceModel {
            site_prior,
            site_base_probs,
            background_base_probs,
        })
    }

    /// Number of positions in the motif.
    pub fn motif_length(&self) -> usize {
        self.site_base_probs.len()
    }

    /// Prior probability of background sequence.
    pub fn background_prior(&self) -> f64 {
        1.0 - self.site_prior
    }

    /// Probability of observing `base` at motif `position` under the site model.
    ///
    /// # Panics
    ///
    /// If `position` is not smaller than the motif length.
    pub fn site_base_prob(&self, position: usize, base: Base) -> f64 {
        self.site_base_probs[position][base.index()]
    }

    /// Probability of observing `base` under the background model.
    pub fn background_base_prob(&self, base: Base) -> f64 {
        self.background_base_probs[base.index()]
    }
}

/// Declarative description of a `SequenceModel`, e.g. given as YAML:
///
/// ```yaml
/// site-prior: 0.01
/// site-base-probs:
///   - [0.1, 0.5, 0.3, 0.1]
///   - [0.8, 0.1, 0.1, 0.0]
/// background-base-probs: [0.25, 0.25, 0.25, 0.25]
/// ```
#[derive(Deserialize, Getters, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[getset(get = "pub")]
pub struct ModelSpec {
    site_prior: f64,
    site_base_probs: Vec<Vec<f64>>,
    background_base_probs: Vec<f64>,
}

impl<'a> TryFrom<&'a str> for ModelSpec {
    type Error = Error;

    fn try_from(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::InvalidModelSpec { msg: e.to_string() })
    }
}

impl TryFrom<ModelSpec> for SequenceModel {
    type Error = Error;

    fn try_from(spec: ModelSpec) -> Result<Self> {
        SequenceModel::new(
            spec.site_prior,
            spec.site_base_probs,
            spec.background_base_probs,
        )
    }
}

impl<'a> TryFrom<&'a str> for SequenceModel {
    type Error = Error;

    fn try_from(yaml: &str) -> Result<Self> {
        SequenceModel::try_from(ModelSpec::try_from(yaml)?)
    }
}
