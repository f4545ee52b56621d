use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use common_core::config::{Config, DEFAULT_LOG_FILTER, LOG_ENV, config_path};
use common_core::language::{MatchMode, best_matching_language_for_any};
use common_core::localization::Localizer;
use common_core::util::text::substitute_variables;
use common_core::version::SemVer;

#[derive(Parser)]
#[command(name = "common-core")]
#[command(version, about = "Version, language and string helpers")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/common-core/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse and compare versions
    Version {
        #[command(subcommand)]
        action: VersionAction,
    },
    /// Pick the best available language
    Language {
        /// Available language identifiers, e.g. `de-AT,de,fr_FR`
        #[arg(long, value_delimiter = ',', required = true)]
        available: Vec<String>,
        /// Preferred identifiers, highest priority first (defaults to the config)
        #[arg(long, value_delimiter = ',')]
        preferred: Vec<String>,
        /// `exact` or `allowPartiallyMatching` (defaults to the config)
        #[arg(long)]
        mode: Option<MatchMode>,
    },
    /// Replace `${NAME}` references in a template
    Substitute {
        template: String,
        /// Variable as NAME=VALUE, repeatable
        #[arg(long = "var", value_parser = parse_variable)]
        vars: Vec<(String, String)>,
    },
    /// Look up a localized string
    Localize {
        key: String,
        /// Directory with `<identifier>.json` string tables (defaults to the config)
        #[arg(long)]
        dir: Option<PathBuf>,
        #[arg(long, value_delimiter = ',')]
        preferred: Vec<String>,
        #[arg(long)]
        mode: Option<MatchMode>,
        #[arg(long = "var", value_parser = parse_variable)]
        vars: Vec<(String, String)>,
    },
}

#[derive(Subcommand)]
enum VersionAction {
    /// Print the canonical form of a version
    Parse { version: String },
    /// Print `<`, `=` or `>`
    Compare { lhs: String, rhs: String },
}

fn parse_variable(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config_file = cli.config.unwrap_or_else(config_path);
    let config = Config::load(&config_file)
        .with_context(|| format!("loading config from {}", config_file.display()))?;
    debug!("Using config {:?}", config);

    let preferred_or_config = |preferred: Vec<String>| {
        if preferred.is_empty() {
            config.localization.preferred_languages.clone()
        } else {
            preferred
        }
    };

    match cli.command {
        Command::Version { action } => match action {
            VersionAction::Parse { version } => {
                println!("{}", SemVer::parse(&version));
            }
            VersionAction::Compare { lhs, rhs } => {
                let symbol = match SemVer::parse(&lhs).cmp(&SemVer::parse(&rhs)) {
                    std::cmp::Ordering::Less => "<",
                    std::cmp::Ordering::Equal => "=",
                    std::cmp::Ordering::Greater => ">",
                };
                println!("{symbol}");
            }
        },
        Command::Language {
            available,
            preferred,
            mode,
        } => {
            let preferred = preferred_or_config(preferred);
            let mode = mode.unwrap_or(config.localization.match_mode);
            match best_matching_language_for_any(&available, &preferred, mode) {
                Some(language) => println!("{language}"),
                None => return Ok(ExitCode::FAILURE),
            }
        }
        Command::Substitute { template, vars } => {
            let vars: HashMap<String, String> = vars.into_iter().collect();
            println!("{}", substitute_variables(&template, &vars));
        }
        Command::Localize {
            key,
            dir,
            preferred,
            mode,
            vars,
        } => {
            let Some(dir) = dir.or_else(|| config.localization.strings_dir.clone()) else {
                bail!("no strings directory given and none configured");
            };
            let mut localizer = Localizer::load_dir(&dir)?;
            localizer.select(
                preferred_or_config(preferred),
                mode.unwrap_or(config.localization.match_mode),
            );
            let vars: HashMap<String, String> = vars.into_iter().collect();
            println!("{}", localizer.localized(&key, &vars));
        }
    }

    Ok(ExitCode::SUCCESS)
}
