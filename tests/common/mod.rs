use std::convert::TryFrom;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_derive::Deserialize;

use siteposterior::{site_posterior, Error, ModelSpec, Sequence, SequenceModel};

pub(crate) fn load_testcase(path: impl AsRef<Path>) -> Result<Testcase> {
    let path = path.as_ref().join("testcase.yaml");
    let mut reader =
        File::open(&path).with_context(|| format!("unable to open {}", path.display()))?;
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let mut testcase: Testcase = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid testcase {}", path.display()))?;
    testcase.path = path;
    Ok(testcase)
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Expected {
    /// Posterior must equal `value` when rounded to `places` decimal places.
    Posterior { value: f64, places: i32 },
    /// Name of the expected error variant.
    Error(String),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct Testcase {
    description: String,
    model: ModelSpec,
    sequence: String,
    expected: Expected,
    #[serde(skip)]
    path: PathBuf,
}

impl Testcase {
    pub(crate) fn run(&self) -> std::result::Result<f64, Error> {
        let model = SequenceModel::try_from(self.model.clone())?;
        let sequence: Sequence = self.sequence.parse()?;
        site_posterior(&sequence, &model)
    }

    pub(crate) fn check(&self) {
        let result = self.run();
        match (&self.expected, result) {
            (Expected::Posterior { value, places }, Ok(posterior)) => {
                let tolerance = 0.5 * 10f64.powi(-places);
                assert!(
                    (posterior - value).abs() <= tolerance,
                    "{} ({}): expected posterior {} (to {} places), found {}",
                    self.path.display(),
                    self.description,
                    value,
                    places,
                    posterior
                );
                assert!((0.0..=1.0).contains(&posterior));
            }
            (Expected::Error(kind), Err(err)) => assert_eq!(
                error_kind(&err),
                kind.as_str(),
                "{} ({}): unexpected error: {}",
                self.path.display(),
                self.description,
                err
            ),
            (expected, result) => panic!(
                "{} ({}): expected {:?}, found {:?}",
                self.path.display(),
                self.description,
                expected,
                result
            ),
        }
    }
}

fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::InvalidParameter { .. } => "InvalidParameter",
        Error::LengthMismatch { .. } => "LengthMismatch",
        Error::InvalidBase { .. } => "InvalidBase",
        Error::DegenerateEvidence => "DegenerateEvidence",
        Error::InvalidModelSpec { .. } => "InvalidModelSpec",
    }
}
