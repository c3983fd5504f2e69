//! CLI argument definitions for the CKD assessment tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ckd",
    version,
    about = "Chronic Kidney Disease (CKD) Detection System",
    long_about = "Assess CKD risk from thirteen bio-chemical patient measurements.\n\n\
                  Inputs are min-max normalized against a bundled reference dataset\n\
                  and scored by a pre-trained gradient-boosted-tree classifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a risk assessment for one patient profile.
    Assess(AssessArgs),

    /// List the four quick-test preset profiles.
    Presets,

    /// Print the feature schema contract (order, bounds, defaults).
    Schema,

    /// Research context and clinical significance.
    Overview,

    /// Model architecture and pipeline methodology.
    Methodology,

    /// Clinical reference guide: normal ranges and diagnostic criteria.
    ReferenceGuide,
}

#[derive(Parser, Debug, Default, Clone)]
pub struct AssessArgs {
    /// Load a quick-test preset profile before applying explicit values.
    #[arg(long = "preset", value_name = "1-4")]
    pub preset: Option<u8>,

    /// Blood Pressure (mmHg) [70-200, default 120]
    #[arg(long)]
    pub bp: Option<f64>,

    /// Specific Gravity [1.000-1.030, default 1.010]
    #[arg(long)]
    pub sg: Option<f64>,

    /// Albumin (0-5 scale) [default 0]
    #[arg(long)]
    pub al: Option<f64>,

    /// Sugar (0-5 scale) [default 0]
    #[arg(long)]
    pub su: Option<f64>,

    /// RBC Count (million cells/mcL) [2-6, default 4]
    #[arg(long)]
    pub rbc: Option<f64>,

    /// Blood Urea (mg/dL) [5-150, default 20]
    #[arg(long)]
    pub bu: Option<f64>,

    /// Serum Creatinine (mg/dL) [0.5-20, default 1]
    #[arg(long)]
    pub sc: Option<f64>,

    /// Sodium (mEq/L) [100-160, default 140]
    #[arg(long)]
    pub sod: Option<f64>,

    /// Potassium (mEq/L) [3-8, default 4.5]
    #[arg(long)]
    pub pot: Option<f64>,

    /// Hemoglobin (g/dL) [5-18, default 12]
    #[arg(long)]
    pub hemo: Option<f64>,

    /// WBC Count (cells/mm3) [2000-25000, default 8000]
    #[arg(long)]
    pub wbcc: Option<f64>,

    /// RBCC (million cells/mcL) [2-6.5, default 4]
    #[arg(long)]
    pub rbcc: Option<f64>,

    /// Hypertension (0/1) [default 0]
    #[arg(long)]
    pub htn: Option<f64>,

    /// Reference dataset path (default: bundled data/reference.csv).
    #[arg(long = "reference", value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Classifier artifact path (default: bundled data/model.json).
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
