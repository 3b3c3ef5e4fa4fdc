use std::convert::TryFrom;
use std::path::Path;
use std::thread;

use bio::stats::bayesian::bayes_factors::evidence::KassRaftery;

use siteposterior::{site_posterior, Error, PosteriorCalculator, Sequence, SequenceModel};

mod common;

use common::load_testcase;

macro_rules! testcase {
    ($name:ident) => {
        #[test]
        fn $name() {
            let _ = env_logger::builder().is_test(true).try_init();
            let name = stringify!($name);
            let testcase = load_testcase(
                &Path::new(file!())
                    .parent()
                    .unwrap()
                    .join("resources/testcases")
                    .join(name),
            )
            .unwrap();
            testcase.check();
        }
    };
}

testcase!(test01);
testcase!(test02);
testcase!(test03);
testcase!(test04);
testcase!(test05);
testcase!(test06);
testcase!(test07);
testcase!(test08);
testcase!(test09);
testcase!(test_nucleotide_letters);
testcase!(test_length_mismatch);
testcase!(test_base_out_of_range);
testcase!(test_base_not_integer);
testcase!(test_invalid_prior);
testcase!(test_invalid_row_length);
testcase!(test_background_not_normalized);

fn motif_model() -> SequenceModel {
    SequenceModel::try_from(
        "
site-prior: 0.01
site-base-probs:
  - [0.7, 0.1, 0.1, 0.1]
  - [0.1, 0.1, 0.7, 0.1]
  - [0.1, 0.1, 0.1, 0.7]
  - [0.7, 0.1, 0.1, 0.1]
background-base-probs: [0.3, 0.2, 0.2, 0.3]
",
    )
    .unwrap()
}

#[test]
fn test_consensus_beats_mismatch() {
    let model = motif_model();
    let consensus: Sequence = "AGTA".parse().unwrap();
    let mismatch: Sequence = "CCCC".parse().unwrap();
    let p_consensus = site_posterior(&consensus, &model).unwrap();
    let p_mismatch = site_posterior(&mismatch, &model).unwrap();
    assert!(p_consensus > model.site_prior());
    assert!(p_mismatch < model.site_prior());

    let evidence = PosteriorCalculator::new(&model)
        .evidence(&consensus)
        .unwrap();
    assert!(evidence.evidence_kass_raftery() >= KassRaftery::Positive);
}

#[test]
fn test_concurrent_calls() {
    let model = motif_model();
    let expected = site_posterior(&[0, 2, 3, 0], &model).unwrap();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| site_posterior(&[0, 2, 3, 0], &model).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
        }
    });
}

#[test]
fn test_validation_precedes_arithmetic() {
    // would be degenerate evidence, but the base is invalid
    let model = SequenceModel::new(1.0, vec![vec![0.0, 0.0, 0.0, 1.0]], vec![0.25; 4]).unwrap();
    assert!(matches!(
        site_posterior(&[7], &model),
        Err(Error::InvalidBase { position: 0, .. })
    ));
    assert_eq!(
        site_posterior(&[0], &model),
        Err(Error::DegenerateEvidence)
    );
}

#[test]
fn test_empty_motif() {
    let model = SequenceModel::new(0.2, vec![], vec![0.25; 4]).unwrap();
    assert_eq!(model.motif_length(), 0);
    approx::assert_abs_diff_eq!(site_posterior(&[], &model).unwrap(), 0.2, epsilon = 1e-12);
}
