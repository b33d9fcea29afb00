use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use love_score::config::{Config, OutputFormat};
use love_score::input::{self, ProfileInputSource};
use love_score::output::{self, Report};
use love_score::{lat, profile, quick, ScoringError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_ANSWERS: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Quiz {
    Profile,
    Lat,
    Quick,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the five-section profile quiz (36 answers, 1-5)
    Profile {
        /// JSON/YAML file: a map of question id to answer, or a list of 36 answers
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,

        /// Comma separated list of 36 answers in question order
        #[arg(long)]
        values: Option<String>,

        /// Reject missing or out-of-range answers instead of skipping and clamping
        #[arg(long)]
        strict: bool,
    },
    /// Classify the 16-question trait quiz into a type code
    Lat {
        /// JSON/YAML file with a list of 16 answers or `{ answers: [...] }`
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,

        /// Comma separated list of 16 answers in question order
        #[arg(long)]
        values: Option<String>,
    },
    /// Score the five-item quick check (0-10 each)
    Quick {
        /// Comma separated list of 5 ratings
        #[arg(long)]
        values: String,
    },
    /// Print a quiz's questions
    Questions {
        #[arg(value_enum)]
        quiz: Quiz,
    },
}

#[derive(Parser, Debug)]
#[command(name = "love-score")]
#[command(about = "Relationship self-assessment scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/love-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print results as JSON regardless of the configured format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("love_score=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Failure classes mapped to process exit codes
enum Failure {
    Answers(ScoringError),
    Io(anyhow::Error),
}

impl From<ScoringError> for Failure {
    fn from(e: ScoringError) -> Self {
        Failure::Answers(e)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(e: anyhow::Error) -> Self {
        // Answer problems surfaced through input helpers still count as bad answers
        match e.downcast_ref::<ScoringError>() {
            Some(scoring) => Failure::Answers(scoring.clone()),
            None => Failure::Io(e),
        }
    }
}

struct Settings {
    config: Config,
    json: bool,
    use_colors: bool,
    bar_width: usize,
}

fn read_vector(file: Option<&Path>, values: Option<&str>) -> Result<Vec<f64>> {
    match (file, values) {
        (Some(path), _) => input::load_answer_list(path),
        (None, Some(csv)) => input::parse_values(csv),
        (None, None) => anyhow::bail!("Provide answers with --file or --values"),
    }
}

fn run_profile(
    settings: &Settings,
    file: Option<&Path>,
    values: Option<&str>,
    strict: bool,
) -> Result<String, Failure> {
    let source = match (file, values) {
        (Some(path), _) => ProfileInputSource::File(path),
        (None, Some(csv)) => ProfileInputSource::Values(csv),
        (None, None) => {
            return Err(Failure::Io(anyhow::anyhow!(
                "Provide answers with --file or --values"
            )))
        }
    };
    let answers = input::profile_from_input(source)?;
    debug!(answers = answers.len(), "loaded profile answers");

    if strict || settings.config.strict {
        profile::validate_profile_answers(&answers)?;
    }

    let result = profile::score_sections(&answers);
    let locale = settings.config.locale;

    if settings.json {
        let comment = profile::provisional_comment(result.overall, locale);
        Ok(Report::new("profile", &result).with_comment(comment).to_json()?)
    } else {
        Ok(output::format_profile_result(
            &result,
            locale,
            settings.use_colors,
            settings.bar_width,
        ))
    }
}

fn run_lat(settings: &Settings, file: Option<&Path>, values: Option<&str>) -> Result<String, Failure> {
    let answers = read_vector(file, values)?;
    // The boundary check requires whole numbers; the engine itself only checks the range
    love_score::likert::validate_answers(&answers, lat::LAT_QUESTION_COUNT)?;
    let result = lat::compute_lat_result(&answers)?;

    if settings.json {
        Ok(Report::new("lat", &result).to_json()?)
    } else {
        Ok(output::format_lat_result(
            &result,
            settings.config.locale,
            settings.use_colors,
            settings.bar_width,
        ))
    }
}

fn run_quick(settings: &Settings, values: &str) -> Result<String, Failure> {
    let ratings = input::parse_values(values)?;
    let result = quick::quick_score(&ratings)?;

    if settings.json {
        Ok(Report::new("quick", &result).to_json()?)
    } else {
        Ok(output::format_quick_result(
            &result,
            settings.use_colors,
            settings.bar_width,
        ))
    }
}

fn run_questions(settings: &Settings, quiz: Quiz) -> String {
    match quiz {
        Quiz::Profile => output::format_profile_questions(settings.config.locale),
        Quiz::Lat => output::format_lat_questions(settings.config.locale),
        Quiz::Quick => output::format_quick_questions(settings.config.locale),
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = love_score::config::load_config(config_path).context("Config error")?;

    let json = cli.json || config.output.format == OutputFormat::Json;
    let use_colors = !json && output::should_use_colors(config.output.color);
    let bar_width = output::bar_width(config.output.bar_width);

    Ok(Settings {
        config,
        json,
        use_colors,
        bar_width,
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();

    let settings = match load_settings(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = love_score::config::validate_config(&settings.config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    info!(locale = ?settings.config.locale, json = settings.json, "settings loaded");

    let outcome = match &cli.command {
        Commands::Profile {
            file,
            values,
            strict,
        } => run_profile(&settings, file.as_deref(), values.as_deref(), *strict),
        Commands::Lat { file, values } => run_lat(&settings, file.as_deref(), values.as_deref()),
        Commands::Quick { values } => run_quick(&settings, values),
        Commands::Questions { quiz } => Ok(run_questions(&settings, *quiz)),
    };

    match outcome {
        Ok(text) => println!("{}", text),
        Err(Failure::Answers(e)) => {
            eprintln!("Invalid answers: {}", e);
            std::process::exit(EXIT_INVALID_ANSWERS);
        }
        Err(Failure::Io(e)) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_IO);
        }
    }

    debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
