//! G-Layer Classifier CLI
//!
//! Marshals device hints in from a file or flags, classifies the device,
//! and prints its profile together with the ranked generations.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use glayer_classifier::{
    build_device_profile, load_hints, pick_best_g_layer, rank_g_layers, sample_profiles,
    suitability_weight, ContextHints, DeviceHints, DeviceProfile, Error, FormFactor, GLayerProfile,
    RankedGLayer, G_LAYER_TABLE,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Classify devices and pick their best wireless generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, env = "OUTPUT_FORMAT", value_enum, default_value = "json", global = true)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single device
    Classify(ClassifyArgs),

    /// Classify every built-in sample device
    Samples {
        #[command(flatten)]
        context: ContextArgs,
    },

    /// Print the static generation table
    Table,

    /// Print the JSON schema of the device hints input
    Schema,
}

#[derive(clap::Args, Debug)]
struct ClassifyArgs {
    /// Device identifier
    #[arg(long, env = "DEVICE_ID")]
    device_id: String,

    /// Hints file (.json, .yaml or .yml); flags override its values
    #[arg(long, env = "HINTS_FILE")]
    hints: Option<PathBuf>,

    /// Form factor (phone, laptop, desktop, tablet, iot)
    #[arg(long)]
    form_factor: Option<FormFactor>,

    /// Device has a cellular modem
    #[arg(long)]
    cellular: Option<bool>,

    /// Device has a touch screen
    #[arg(long)]
    touch: Option<bool>,

    /// Supported generation tag (repeatable)
    #[arg(long = "g-layer")]
    g_layers: Vec<String>,

    #[arg(long)]
    vendor: Option<String>,

    #[arg(long)]
    model: Option<String>,

    #[arg(long)]
    user_agent: Option<String>,

    /// Region code, e.g. BW
    #[arg(long)]
    region: Option<String>,

    #[command(flatten)]
    context: ContextArgs,
}

#[derive(clap::Args, Debug)]
struct ContextArgs {
    /// Target latency in milliseconds
    #[arg(long)]
    target_latency_ms: Option<f64>,

    /// Favor higher throughput
    #[arg(long)]
    prioritize_throughput: bool,

    /// Favor lower power draw
    #[arg(long)]
    prioritize_battery: bool,
}

impl ContextArgs {
    fn to_context(&self) -> ContextHints {
        ContextHints {
            target_latency_ms: self.target_latency_ms,
            prioritize_battery: self.prioritize_battery,
            prioritize_throughput: self.prioritize_throughput,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Json,
    Yaml,
}

// =============================================================================
// Output
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassificationReport {
    profile: DeviceProfile,
    ranking: Vec<RankedGLayer>,
    best: Option<GLayerProfile>,
}

impl ClassificationReport {
    fn build(device_id: &str, hints: &DeviceHints, context: &ContextHints) -> Self {
        let profile = build_device_profile(device_id, hints);
        let ranking = rank_g_layers(&profile, Some(context));
        let best = pick_best_g_layer(&profile, Some(context));

        Self {
            profile,
            ranking,
            best,
        }
    }
}

fn emit<T: Serialize>(format: OutputFormat, value: &T) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", rendered);
    Ok(())
}

// =============================================================================
// Main
// =============================================================================

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::from(exit_status(&e))
        }
    }
}

/// Exit status 2 for bad caller input, 1 for everything else
fn exit_status(err: &anyhow::Error) -> u8 {
    let input_error = err
        .downcast_ref::<Error>()
        .is_some_and(Error::is_input_error);

    if input_error {
        2
    } else {
        1
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    match &args.command {
        Command::Classify(classify) => {
            let hints = resolve_hints(classify)?;
            let context = classify.context.to_context();
            info!(device_id = %classify.device_id, "classifying device");

            let report = ClassificationReport::build(&classify.device_id, &hints, &context);
            emit(args.format, &report)
        }
        Command::Samples { context } => {
            let context = context.to_context();
            let reports: Vec<_> = sample_profiles()
                .iter()
                .map(|s| ClassificationReport::build(&s.device_id, &s.hints, &context))
                .collect();
            info!("classified {} sample devices", reports.len());

            emit(args.format, &reports)
        }
        Command::Table => {
            let table: Vec<GLayerProfile> = G_LAYER_TABLE
                .iter()
                .map(|p| p.with_suitability(suitability_weight(p.g_layer)))
                .collect();
            emit(args.format, &table)
        }
        Command::Schema => {
            let schema = schemars::schema_for!(DeviceHints);
            emit(args.format, &schema)
        }
    }
}

/// Hints from the optional file, with command-line flags layered on top
fn resolve_hints(args: &ClassifyArgs) -> anyhow::Result<DeviceHints> {
    let file_hints = match &args.hints {
        Some(path) => load_hints(path)
            .with_context(|| format!("failed to load hints from {}", path.display()))?,
        None => DeviceHints::default(),
    };

    let flag_hints = DeviceHints {
        user_agent: args.user_agent.clone(),
        has_cellular_modem: args.cellular,
        has_touch_screen: args.touch,
        form_factor: args.form_factor,
        vendor: args.vendor.clone(),
        model: args.model.clone(),
        region_code: args.region.clone(),
        supported_g_layers: Some(args.g_layers.clone()),
    };

    Ok(file_hints.overlay(flag_hints))
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout carries the report; logs go to stderr
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
