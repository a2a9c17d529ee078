//! Shot Advisor CLI
//!
//! Evaluate a single shot, print the defender impact curve, or dump the JSON
//! schemas of the request/response types.

mod render;

use anyhow::{bail, Context, Result};
use render::FeedbackView;
use clap::{Parser, Subcommand, ValueEnum};
use sa_core::api::{request_schema, result_schema};
use sa_core::{
    AdvisoryConfig, AdvisoryRequest, FixedProbabilityModel, LogisticModel, Position, ShotAdvisor,
    ShotModel,
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shot_advisor")]
#[command(about = "Take-or-pass advice for a basketball shot", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one shot
    Advise {
        /// Request JSON file (replaces the shot flags)
        #[arg(long)]
        request: Option<PathBuf>,

        #[command(flatten)]
        shot: ShotArgs,

        /// Logistic model artifact (JSON)
        #[arg(long, conflicts_with = "baseline")]
        model: Option<PathBuf>,

        /// Fixed baseline make probability instead of a model
        #[arg(long)]
        baseline: Option<f64>,

        #[command(flatten)]
        tuning: TuningArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Text output detail
        #[arg(long, value_enum, default_value_t = FeedbackView::Coach)]
        view: FeedbackView,
    },

    /// Print defender impact over a range of distances
    PressureTable {
        #[command(flatten)]
        tuning: TuningArgs,

        /// Baseline probability used for the adjusted column
        #[arg(long, default_value_t = 0.45)]
        baseline: f64,

        #[arg(long)]
        json: bool,
    },

    /// Print a JSON Schema
    Schema {
        #[arg(value_enum, default_value_t = SchemaKind::Result)]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemaKind {
    Request,
    Result,
}

#[derive(clap::Args, Debug, Default)]
struct ShotArgs {
    /// Shot distance in feet
    #[arg(long)]
    distance: Option<f64>,

    /// Court x in feet (negative = left side)
    #[arg(long, allow_hyphen_values = true)]
    x: Option<f64>,

    /// Court y in feet
    #[arg(long, allow_hyphen_values = true)]
    y: Option<f64>,

    /// TWO_POINT / THREE_POINT (inferred from location if omitted)
    #[arg(long)]
    shot_type: Option<String>,

    /// RESTRICTED_AREA, PAINT_NON_RA, MID_RANGE, ABOVE_BREAK_THREE,
    /// CORNER_THREE_LEFT, CORNER_THREE_RIGHT (inferred if omitted)
    #[arg(long)]
    zone: Option<String>,

    #[arg(long)]
    quarter: Option<u8>,

    #[arg(long)]
    mins: Option<u8>,

    #[arg(long)]
    secs: Option<u8>,

    /// PG, SG, SF, PF or C
    #[arg(long)]
    position: Option<String>,

    /// Nearest defender distance in feet
    #[arg(long)]
    defender: Option<f64>,
}

#[derive(clap::Args, Debug, Default)]
struct TuningArgs {
    /// YAML config file (partial overrides of the defaults)
    #[arg(long, conflicts_with = "profile")]
    config: Option<PathBuf>,

    /// Preset: default, selective, green_light
    #[arg(long)]
    profile: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Advise { request, shot, model, baseline, tuning, json, view } => {
            let config = load_config(&tuning)?;
            let model = load_model(model.as_deref(), baseline)?;
            let advisor = ShotAdvisor::with_config(config, model)?;

            let request = match request {
                Some(path) => read_request(&path)?,
                None => shot.to_request()?,
            };
            let result = advisor.advise(&request.into_context())?;
            info!("{}", result.summary());

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::render_result(&result, view));
            }
        }

        Commands::PressureTable { tuning, baseline, json } => {
            let config = load_config(&tuning)?;
            let rows = render::pressure_rows(&config, baseline);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", render::render_pressure_table(&rows));
            }
        }

        Commands::Schema { kind } => {
            let schema = match kind {
                SchemaKind::Request => request_schema(),
                SchemaKind::Result => result_schema(),
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn,sa_core=info,sa_cli=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(tuning: &TuningArgs) -> Result<AdvisoryConfig> {
    if let Some(path) = &tuning.config {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = AdvisoryConfig::from_yaml_str(&yaml)?;
        debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    if let Some(name) = &tuning.profile {
        return match AdvisoryConfig::from_profile(name) {
            Some(config) => Ok(config),
            None => bail!("Unknown profile '{}' (expected default, selective or green_light)", name),
        };
    }
    Ok(AdvisoryConfig::from_env_or_default())
}

fn load_model(path: Option<&Path>, baseline: Option<f64>) -> Result<Arc<dyn ShotModel>> {
    match (path, baseline) {
        (Some(path), _) => Ok(Arc::new(LogisticModel::from_path(path)?)),
        (None, Some(p)) => Ok(Arc::new(FixedProbabilityModel::new(p))),
        (None, None) => bail!("Either --model or --baseline is required"),
    }
}

fn read_request(path: &Path) -> Result<AdvisoryRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid request JSON in {}", path.display()))
}

/// Parse a CLI string through the enum's serde names (and aliases).
fn parse_label<T: DeserializeOwned>(flag: &str, value: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .with_context(|| format!("Invalid --{} value '{}'", flag, value))
}

impl ShotArgs {
    fn to_request(&self) -> Result<AdvisoryRequest> {
        fn required<T: Copy>(flag: &str, value: Option<T>) -> Result<T> {
            value.with_context(|| format!("--{} is required without --request", flag))
        }

        Ok(AdvisoryRequest {
            shot_distance: required("distance", self.distance)?,
            loc_x: required("x", self.x)?,
            loc_y: required("y", self.y)?,
            shot_type: self.shot_type.as_deref().map(|s| parse_label("shot-type", s)).transpose()?,
            zone: self.zone.as_deref().map(|s| parse_label("zone", s)).transpose()?,
            quarter: required("quarter", self.quarter)?,
            mins_left: required("mins", self.mins)?,
            secs_left: required("secs", self.secs)?,
            position: match self.position.as_deref() {
                Some(s) => parse_label::<Position>("position", &s.to_uppercase())?,
                None => Position::default(),
            },
            defender_distance: self.defender,
        })
    }
}
