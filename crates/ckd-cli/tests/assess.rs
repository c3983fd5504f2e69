//! End-to-end pipeline tests against the bundled reference data and model.

use std::io::Write;

use ckd_cli::cli::AssessArgs;
use ckd_cli::commands::{build_profile, run_assess};
use ckd_ingest::{default_model_path, default_reference_path, load_reference_stats};
use ckd_model::{CkdError, Feature, PatientProfile, Preset, RiskLabel};
use ckd_predict::GbtModel;
use ckd_transform::{FeatureRow, normalize};

/// The pinned regression scenario from the original system's test notes.
fn pinned_profile() -> PatientProfile {
    PatientProfile {
        bp: 80.0,
        sg: 1.020,
        al: 1.0,
        su: 0.0,
        rbc: 2.0,
        bu: 36.0,
        sc: 1.2,
        sod: 137.53,
        pot: 4.63,
        hemo: 15.4,
        wbcc: 7800.0,
        rbcc: 5.20,
        htn: 1.0,
    }
}

#[test]
fn regression_pin_bundled_artifacts_yield_negative_verdict() {
    let stats = load_reference_stats(&default_reference_path()).expect("load stats");
    let model = GbtModel::load(&default_model_path()).expect("load model");
    let row = FeatureRow::from_profile(&pinned_profile());
    let normalized = normalize(&row, &stats).expect("normalize");
    let label = model.predict(&normalized).expect("predict");
    assert_eq!(label, RiskLabel::Negative);
    let margin = model.decision_margin(&normalized).expect("margin");
    assert!((margin + 1.0).abs() < 1e-9, "margin drifted to {margin}");
}

#[test]
fn regression_pin_endpoint_normalization() {
    let stats = load_reference_stats(&default_reference_path()).expect("load stats");
    let row = FeatureRow::from_profile(&pinned_profile());
    let normalized = normalize(&row, &stats).expect("normalize");
    // Rbc 2.0 sits exactly on the reference minimum.
    assert_eq!(normalized.get("Rbc"), Some(0.0));
    // Htn 1 sits exactly on the reference maximum.
    assert_eq!(normalized.get("Htn"), Some(1.0));
}

#[test]
fn preset_verdicts_are_stable_across_runs() {
    let expected = [
        (1u8, RiskLabel::Negative),
        (2, RiskLabel::Positive),
        (3, RiskLabel::Positive),
        (4, RiskLabel::Negative),
    ];
    for (index, label) in expected {
        let mut args = AssessArgs::default();
        args.preset = Some(index);
        let first = run_assess(&args).expect("first run");
        let second = run_assess(&args).expect("second run");
        assert_eq!(first.label, label, "preset {index}");
        assert_eq!(second.label, label, "preset {index} re-run");
    }
}

#[test]
fn last_write_wins_across_preset_loads() {
    // Load preset 2, edit one field, load preset 3: the result is exactly
    // preset 3 with no stale field bleed.
    let mut state = ckd_model::ProfileState::new();
    state.load(Preset::Two.profile());
    state.set(Feature::Hemo, 9.9);
    state.load(Preset::Three.profile());
    assert_eq!(state.profile(), Preset::Three.profile());
}

#[test]
fn editing_one_field_keeps_the_column_set() {
    let baseline = FeatureRow::from_profile(&pinned_profile());
    let mut edited = pinned_profile();
    edited.sc = 9.0;
    let row = FeatureRow::from_profile(&edited);
    assert_eq!(row.columns(), baseline.columns());
}

#[test]
fn degenerate_reference_range_fails_the_run() {
    // A single-row reference collapses every feature range to a point.
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "Bp,Sg,Al,Su,Rbc,Bu,Sc,Sod,Pot,Hemo,Wbcc,Rbcc,Htn,Class").unwrap();
    writeln!(file, "80,1.020,1,0,4.7,36,1.2,141,4.4,15.0,6700,5.2,0,0").unwrap();
    file.flush().unwrap();

    let mut args = AssessArgs::default();
    args.reference = Some(file.path().to_path_buf());
    let error = run_assess(&args).unwrap_err();
    let root = error.downcast_ref::<CkdError>().expect("typed error");
    assert!(
        matches!(root, CkdError::DegenerateFeatureRange { .. }),
        "got {root}"
    );
}

#[test]
fn preset_then_explicit_edit_applies_in_order() {
    let mut args = AssessArgs::default();
    args.preset = Some(1);
    args.hemo = Some(7.0);
    args.sc = Some(9.0);
    let profile = build_profile(&args).expect("build profile");
    let mut expected = Preset::One.profile();
    expected.hemo = 7.0;
    expected.sc = 9.0;
    assert_eq!(profile, expected);

    // Anemia plus elevated creatinine flips the healthy preset's verdict.
    let result = run_assess(&args).expect("assess");
    assert_eq!(result.label, RiskLabel::Positive);
}
