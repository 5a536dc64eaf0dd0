//! QFarm Sim - command-line host for render passes
//!
//! Subcommands:
//! - `render`: one full pass, printed as text or JSON
//! - `sentiment`: summarize ad-hoc survey statements
//! - `config`: print the effective configuration as TOML

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use qfarm_core::{Dashboard, DashboardConfig, RngSource, SentimentSummarizer, SurveyCollection};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("TOML configuration file")
}

fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_parser(value_parser!(u64))
        .help("Random seed for reproducibility (entropy when omitted)")
}

/// Build the command-line interface
#[must_use]
pub fn build_cli() -> Command {
    Command::new("qfarm-sim")
        .version(qfarm_core::VERSION)
        .about("Quantum Farming and Bio-Economy projection simulator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Run one render pass and print the projection report")
                .arg(config_arg())
                .arg(seed_arg())
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_parser(value_parser!(i32))
                        .help("First projected year"),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .value_parser(value_parser!(i32))
                        .help("Last projected year"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("sentiment")
                .about("Summarize survey statements into a sentiment index")
                .arg(config_arg())
                .arg(seed_arg())
                .arg(
                    Arg::new("surveys")
                        .num_args(0..)
                        .value_name("SURVEY")
                        .help("Survey statements (configured samples when omitted)"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration as TOML")
                .arg(config_arg()),
        )
}

/// Resolve configuration: file (or defaults), then command-line overrides
///
/// # Errors
/// Fails if the file cannot be loaded or the overridden range is invalid
pub fn load_config(args: &ArgMatches) -> anyhow::Result<DashboardConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    if let Some(seed) = arg_value::<u64>(args, "seed") {
        config = config.with_seed(seed);
    }

    let range = config.trend.range;
    let start = arg_value::<i32>(args, "start").unwrap_or(range.start());
    let end = arg_value::<i32>(args, "end").unwrap_or(range.end());
    if (start, end) != (range.start(), range.end()) {
        config = config.with_range(start, end)?;
    }

    Ok(config)
}

// Subcommands without an argument report it as undefined rather than absent
fn arg_value<T: Clone + Send + Sync + 'static>(args: &ArgMatches, id: &str) -> Option<T> {
    args.try_get_one::<T>(id).ok().flatten().cloned()
}

/// Run the subcommand in `matches`, writing its output to `out`
///
/// # Errors
/// Any configuration, render or output error
pub fn run(matches: &ArgMatches, out: &mut impl Write) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("render", args)) => {
            let config = load_config(args)?;
            let dashboard = Dashboard::new(config);
            let report = dashboard.render_fresh().context("render pass failed")?;

            if args.get_flag("json") {
                writeln!(out, "{}", report.to_json()?)?;
            } else {
                write!(out, "{}", report.to_text())?;
            }
        }
        Some(("sentiment", args)) => {
            let config = load_config(args)?;
            let surveys: SurveyCollection = match args.get_many::<String>("surveys") {
                Some(items) => items.cloned().collect(),
                None => config.surveys.clone(),
            };
            let index = summarize(&config, &surveys)?;
            writeln!(
                out,
                "Farmer Sentiment Index: {} ({} statements)",
                index, index.sample_size
            )?;
        }
        Some(("config", args)) => {
            let config = load_config(args)?;
            write!(out, "{}", config.to_toml_string()?)?;
        }
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
        None => anyhow::bail!("no subcommand given"),
    }
    Ok(())
}

fn summarize(
    config: &DashboardConfig,
    surveys: &SurveyCollection,
) -> anyhow::Result<qfarm_core::SentimentIndex> {
    let mut source = RngSource::from_seed_or_entropy(config.seed)?;
    let index = SentimentSummarizer::new(config.sentiment).summarize(surveys, &mut source)?;
    tracing::info!("Summarized {} statements: {}", surveys.len(), index);
    Ok(index)
}
