//! Subcommand implementations.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use ckd_ingest::{default_model_path, default_reference_path, load_reference_stats};
use ckd_model::{Feature, FeatureSchema, PatientProfile, Preset, ProfileState, SCHEMA_VERSION};
use ckd_predict::GbtModel;
use ckd_transform::{FeatureRow, normalize};

use crate::cli::AssessArgs;
use crate::types::AssessResult;

/// Run the full assessment pipeline for one profile.
///
/// Reference statistics and the classifier are each loaded once and held as
/// values for the lifetime of the run.
pub fn run_assess(args: &AssessArgs) -> Result<AssessResult> {
    let span = info_span!("assess");
    let _guard = span.enter();

    let profile = build_profile(args)?;
    let reference_path = args
        .reference
        .clone()
        .unwrap_or_else(default_reference_path);
    let model_path = args.model.clone().unwrap_or_else(default_model_path);

    let stats = load_reference_stats(&reference_path).context("load reference statistics")?;
    let model = GbtModel::load(&model_path).context("load classifier")?;

    let row = FeatureRow::from_profile(&profile);
    row.validate_schema(&FeatureSchema::expected())
        .context("assemble feature row")?;
    let normalized = normalize(&row, &stats).context("normalize features")?;
    let label = model.predict(&normalized).context("run classifier")?;
    info!(verdict = label.verdict(), "assessment complete");

    Ok(AssessResult {
        profile,
        normalized,
        label,
        reference_path,
        model_path,
    })
}

/// Build the patient profile from CLI arguments.
///
/// Order matches the interactive surface: defaults, then an optional preset
/// load, then explicit per-field values. Last write wins.
pub fn build_profile(args: &AssessArgs) -> Result<PatientProfile> {
    let mut state = ProfileState::new();
    if let Some(index) = args.preset {
        let preset = Preset::from_index(index)
            .with_context(|| format!("unknown preset {index}, expected 1-4"))?;
        info!(preset = preset.index(), "loaded preset profile");
        state.load(preset.profile());
    }
    for feature in Feature::ALL {
        if let Some(value) = arg_value(args, feature) {
            check_bounds(feature, value)?;
            state.set(feature, value);
        }
    }
    Ok(state.profile())
}

fn arg_value(args: &AssessArgs, feature: Feature) -> Option<f64> {
    match feature {
        Feature::Bp => args.bp,
        Feature::Sg => args.sg,
        Feature::Al => args.al,
        Feature::Su => args.su,
        Feature::Rbc => args.rbc,
        Feature::Bu => args.bu,
        Feature::Sc => args.sc,
        Feature::Sod => args.sod,
        Feature::Pot => args.pot,
        Feature::Hemo => args.hemo,
        Feature::Wbcc => args.wbcc,
        Feature::Rbcc => args.rbcc,
        Feature::Htn => args.htn,
    }
}

/// Input bounds mirror the original form widgets; they gate user input only
/// and are never applied to preset or reference values.
fn check_bounds(feature: Feature, value: f64) -> Result<()> {
    if !value.is_finite() {
        bail!("{} must be a finite number", feature.label());
    }
    let (min, max) = feature.bounds();
    if value < min || value > max {
        bail!(
            "{} value {} outside plausible range [{}, {}]",
            feature.label(),
            value,
            min,
            max
        );
    }
    Ok(())
}

/// Schema row used by the `schema` command.
pub struct SchemaEntry {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

pub fn schema_entries() -> Vec<SchemaEntry> {
    Feature::ALL
        .iter()
        .map(|feature| {
            let (min, max) = feature.bounds();
            SchemaEntry {
                name: feature.name(),
                label: feature.label(),
                min,
                max,
                default: feature.default_value(),
            }
        })
        .collect()
}

pub fn schema_version() -> &'static str {
    SCHEMA_VERSION
}
