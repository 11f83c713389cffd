//! Predictor CLI - Command-line interface for Startup Predictor
//!
//! Commands:
//! - predict: Score a single startup profile
//! - batch: Score many profiles (NDJSON or JSON array)
//! - validate: Check profiles without scoring them
//! - schema: Describe the input and output contracts
//! - doctor: Diagnose configuration and environment

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info};

use startup_predictor::pipeline::{parse_array, parse_ndjson, Predictor};
use startup_predictor::types::PredictionEnvelope;
use startup_predictor::validation::{validate_profiles, RATING_MAX, RATING_MIN};
use startup_predictor::{Industry, PredictorConfig, StartupProfile, PREDICTOR_VERSION, PRODUCER_NAME};

/// Predictor - Heuristic startup success scoring
#[derive(Parser)]
#[command(name = "predictor")]
#[command(version = PREDICTOR_VERSION)]
#[command(about = "Score startup profiles and generate synthetic forecasts", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single startup profile
    Predict {
        /// Profile JSON file (use - for stdin); overrides the profile flags
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        options: PredictOptions,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,
    },

    /// Score many profiles (batch mode)
    Batch {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "ndjson")]
        output_format: OutputFormat,

        #[command(flatten)]
        options: PredictOptions,
    },

    /// Validate profiles without scoring them
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,

        /// Output as JSON schema
        #[arg(long)]
        json_schema: bool,
    },

    /// Diagnose configuration and environment
    Doctor {
        /// Check a configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct ProfileArgs {
    /// Industry (tech, healthcare, finance, ecommerce, education, other)
    #[arg(long, default_value = "other")]
    industry: String,

    /// Funding raised (currency units)
    #[arg(long, default_value = "0")]
    funding: u64,

    /// Founder experience (years)
    #[arg(long, default_value = "0")]
    experience: u32,

    /// Team headcount
    #[arg(long, default_value = "1")]
    team_size: u32,

    /// Market size rating (1-10)
    #[arg(long, default_value = "5")]
    market_size: u8,

    /// Competition rating (1-10)
    #[arg(long, default_value = "5")]
    competition: u8,
}

impl ProfileArgs {
    fn to_profile(&self) -> StartupProfile {
        StartupProfile {
            industry: Industry::from_name(&self.industry),
            funding: self.funding,
            experience: self.experience,
            team_size: self.team_size,
            market_size: self.market_size,
            competition: self.competition,
        }
    }
}

#[derive(clap::Args)]
struct PredictOptions {
    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the forecast for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Include the score breakdown in the output
    #[arg(long)]
    explain: bool,
}

impl PredictOptions {
    fn build_config(&self) -> Result<PredictorConfig, PredictorCliError> {
        let mut config = match &self.config {
            Some(path) => PredictorConfig::load(path)?,
            None => PredictorConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.explain {
            config = config.with_breakdown(true);
        }
        Ok(config)
    }
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one profile per line)
    Ndjson,
    /// JSON array of profiles
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Newline-delimited JSON (one envelope per line)
    Ndjson,
    /// JSON array of envelopes
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (startup profile)
    Input,
    /// Output schema (prediction envelope)
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "startup_predictor=debug,predictor=debug"
    } else {
        "startup_predictor=warn,predictor=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn run(cli: Cli) -> Result<(), PredictorCliError> {
    match cli.command {
        Commands::Predict {
            input,
            profile,
            options,
            output_format,
        } => cmd_predict(input.as_deref(), &profile, &options, &output_format),

        Commands::Batch {
            input,
            output,
            input_format,
            output_format,
            options,
        } => cmd_batch(&input, &output, input_format, &output_format, &options),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Schema {
            schema_type,
            json_schema,
        } => cmd_schema(schema_type, json_schema),

        Commands::Doctor { config, json } => cmd_doctor(config.as_deref(), json),
    }
}

fn cmd_predict(
    input: Option<&Path>,
    profile_args: &ProfileArgs,
    options: &PredictOptions,
    output_format: &OutputFormat,
) -> Result<(), PredictorCliError> {
    let profile = match input {
        Some(path) => {
            let data = read_input(path)?;
            serde_json::from_str::<StartupProfile>(&data)?
        }
        None => profile_args.to_profile(),
    };

    let mut predictor = Predictor::with_config(options.build_config()?);
    let envelope = predictor.predict_envelope(&profile)?;
    info!(
        probability = envelope.result.probability,
        risk = envelope.result.risk_level.as_str(),
        "prediction complete"
    );

    let output = match output_format {
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&envelope)?,
        OutputFormat::Json | OutputFormat::Ndjson => serde_json::to_string(&envelope)?,
    };
    println!("{}", output);

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    input_format: InputFormat,
    output_format: &OutputFormat,
    options: &PredictOptions,
) -> Result<(), PredictorCliError> {
    let input_data = read_input(input)?;
    let profiles = parse_profiles(&input_data, &input_format)?;

    if profiles.is_empty() {
        return Err(PredictorCliError::NoProfiles);
    }

    let mut predictor = Predictor::with_config(options.build_config()?);
    let envelopes = predictor.predict_batch(&profiles)?;
    info!(count = envelopes.len(), "batch complete");

    let output_data = format_output(&envelopes, output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
        debug!(path = %output.display(), "wrote batch output");
    }

    Ok(())
}

fn cmd_validate(
    input: &Path,
    input_format: InputFormat,
    json: bool,
) -> Result<(), PredictorCliError> {
    let input_data = read_input(input)?;
    let profiles = parse_profiles(&input_data, &input_format)?;

    let failures = validate_profiles(&profiles);

    let report = ValidationReport {
        total_profiles: profiles.len(),
        valid_profiles: profiles.len() - failures.len(),
        invalid_profiles: failures.len(),
        errors: failures
            .iter()
            .map(|f| ValidationErrorDetail {
                index: f.index,
                error: f.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total profiles:   {}", report.total_profiles);
        println!("Valid profiles:   {}", report.valid_profiles);
        println!("Invalid profiles: {}", report.invalid_profiles);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!("  - Profile {}: {}", err.index, err.error);
            }
        }
    }

    if report.invalid_profiles > 0 {
        Err(PredictorCliError::ValidationFailed(report.invalid_profiles))
    } else {
        Ok(())
    }
}

fn cmd_schema(schema_type: SchemaType, json_schema: bool) -> Result<(), PredictorCliError> {
    match schema_type {
        SchemaType::Input => {
            if json_schema {
                println!("{}", get_input_json_schema());
            } else {
                println!("Input Schema: startup profile");
                println!();
                println!("- industry: tech | healthcare | finance | ecommerce | education | other");
                println!("  (unrecognized names are treated as other)");
                println!("- funding: non-negative integer, currency units");
                println!("- experience: non-negative integer, founder years");
                println!("- teamSize: non-negative integer, headcount");
                println!("- marketSize: integer {}-{}", RATING_MIN, RATING_MAX);
                println!("- competition: integer {}-{}", RATING_MIN, RATING_MAX);
            }
        }
        SchemaType::Output => {
            if json_schema {
                println!("{}", get_output_json_schema());
            } else {
                println!("Output Schema: prediction envelope");
                println!();
                println!("- predictor_version: Library version");
                println!("- producer: {{ name, version, instance_id }}");
                println!("- computed_at_utc: RFC 3339 timestamp");
                println!("- profile: The scored input profile");
                println!("- result:");
                println!("  - probability: 0-100");
                println!("  - riskLevel: Low (>= 70) | Medium (40-69) | High (< 40)");
                println!("  - insights: 6 strings (5 factors + overall)");
                println!("  - forecast: {{ months, revenue, profit, loss }}, 12 entries each");
                println!("- breakdown: Contribution terms (only with --explain)");
            }
        }
    }

    Ok(())
}

fn cmd_doctor(config: Option<&Path>, json: bool) -> Result<(), PredictorCliError> {
    let mut checks: Vec<DoctorCheck> = vec![DoctorCheck {
        name: "predictor_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Predictor version {}", PREDICTOR_VERSION),
    }];

    if let Some(config_path) = config {
        let check = if !config_path.exists() {
            DoctorCheck {
                name: "config".to_string(),
                status: CheckStatus::Warning,
                message: "Configuration file does not exist".to_string(),
            }
        } else {
            match PredictorConfig::load(config_path) {
                Ok(cfg) => DoctorCheck {
                    name: "config".to_string(),
                    status: CheckStatus::Ok,
                    message: format!(
                        "Configuration valid (seed: {}, validate_input: {})",
                        cfg.seed
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "none".to_string()),
                        cfg.validate_input
                    ),
                },
                Err(e) => DoctorCheck {
                    name: "config".to_string(),
                    status: CheckStatus::Error,
                    message: e.to_string(),
                },
            }
        };
        checks.push(check);
    }

    let stdin_message = if atty::is(atty::Stream::Stdin) {
        "stdin is a TTY (interactive mode)"
    } else {
        "stdin is a pipe (batch input ready)"
    };
    checks.push(DoctorCheck {
        name: "stdin".to_string(),
        status: CheckStatus::Ok,
        message: stdin_message.to_string(),
    });

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: PREDICTOR_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Predictor Doctor Report");
        println!("=======================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(PredictorCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

// Helper functions

fn read_input(path: &Path) -> Result<String, PredictorCliError> {
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn parse_profiles(
    data: &str,
    format: &InputFormat,
) -> Result<Vec<StartupProfile>, PredictorCliError> {
    let profiles = match format {
        InputFormat::Ndjson => parse_ndjson(data)?,
        InputFormat::Json => parse_array(data)?,
    };
    Ok(profiles)
}

fn format_output(
    envelopes: &[PredictionEnvelope],
    format: &OutputFormat,
) -> Result<String, PredictorCliError> {
    match format {
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for envelope in envelopes {
                lines.push(serde_json::to_string(envelope)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string(envelopes)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(envelopes)?),
    }
}

fn get_input_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "startup.profile",
        "description": "Startup profile scored by the predictor",
        "type": "object",
        "required": ["industry", "funding", "experience", "teamSize", "marketSize", "competition"],
        "properties": {
            "industry": {
                "type": "string",
                "enum": ["tech", "healthcare", "finance", "ecommerce", "education", "other"]
            },
            "funding": { "type": "integer", "minimum": 0 },
            "experience": { "type": "integer", "minimum": 0 },
            "teamSize": { "type": "integer", "minimum": 0 },
            "marketSize": { "type": "integer", "minimum": RATING_MIN, "maximum": RATING_MAX },
            "competition": { "type": "integer", "minimum": RATING_MIN, "maximum": RATING_MAX }
        }
    })
    .to_string()
}

fn get_output_json_schema() -> String {
    let series = serde_json::json!({
        "type": "array",
        "items": { "type": "integer", "minimum": 0 },
        "minItems": 12,
        "maxItems": 12
    });

    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "startup.prediction",
        "description": "Prediction envelope produced by the predictor",
        "type": "object",
        "required": ["predictor_version", "producer", "computed_at_utc", "profile", "result"],
        "properties": {
            "predictor_version": { "type": "string" },
            "producer": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "version": { "type": "string" },
                    "instance_id": { "type": "string" }
                }
            },
            "computed_at_utc": { "type": "string", "format": "date-time" },
            "profile": { "type": "object" },
            "result": {
                "type": "object",
                "required": ["probability", "riskLevel", "insights", "forecast"],
                "properties": {
                    "probability": { "type": "integer", "minimum": 0, "maximum": 100 },
                    "riskLevel": { "type": "string", "enum": ["Low", "Medium", "High"] },
                    "insights": {
                        "type": "array",
                        "items": { "type": "string" },
                        "minItems": 6,
                        "maxItems": 6
                    },
                    "forecast": {
                        "type": "object",
                        "properties": {
                            "months": { "type": "array", "items": { "type": "string" } },
                            "revenue": series.clone(),
                            "profit": series.clone(),
                            "loss": series
                        }
                    }
                }
            },
            "breakdown": { "type": "object" }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum PredictorCliError {
    Io(io::Error),
    Predict(startup_predictor::PredictError),
    Json(serde_json::Error),
    NoProfiles,
    ValidationFailed(usize),
    DoctorFailed,
}

impl From<io::Error> for PredictorCliError {
    fn from(e: io::Error) -> Self {
        PredictorCliError::Io(e)
    }
}

impl From<startup_predictor::PredictError> for PredictorCliError {
    fn from(e: startup_predictor::PredictError) -> Self {
        PredictorCliError::Predict(e)
    }
}

impl From<serde_json::Error> for PredictorCliError {
    fn from(e: serde_json::Error) -> Self {
        PredictorCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<PredictorCliError> for CliError {
    fn from(e: PredictorCliError) -> Self {
        use startup_predictor::PredictError;

        match e {
            PredictorCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            PredictorCliError::Predict(PredictError::InvalidInput(msg)) => CliError {
                code: "INVALID_INPUT".to_string(),
                message: msg,
                hint: Some("Run 'predictor validate' for details".to_string()),
            },
            PredictorCliError::Predict(PredictError::ConfigError(msg)) => CliError {
                code: "CONFIG_ERROR".to_string(),
                message: msg,
                hint: Some("Run 'predictor doctor --config <file>'".to_string()),
            },
            PredictorCliError::Predict(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'predictor schema input' to see the expected format".to_string()),
            },
            PredictorCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            PredictorCliError::NoProfiles => CliError {
                code: "NO_PROFILES".to_string(),
                message: "No profiles found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            PredictorCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} profiles failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
            PredictorCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_profiles: usize,
    valid_profiles: usize,
    invalid_profiles: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    error: String,
}

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}
