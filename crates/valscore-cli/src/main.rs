use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use valscore_harness::{score_fixtures, Config, ScoreOptions};

#[derive(Parser)]
#[command(name = "valscore", version, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score every validation result under a fixtures directory and print the report
    Score {
        /// Directory searched recursively for result files
        #[arg(long)]
        fixtures: PathBuf,

        /// Fraction of total weight trimmed from each tail (clamped to [0,1]; default 0.1)
        #[arg(long, allow_negative_numbers = true)]
        trim: Option<f64>,

        /// JSON object mapping validatorId -> weight
        #[arg(long)]
        weights: Option<PathBuf>,

        /// Config file (default: ./valscore.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Write a default valscore.toml
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => Config::load_from(&path).with_context(|| format!("load config {}", path.display())),
        None => {
            let path = Config::config_path(&std::env::current_dir()?);
            Ok(Config::load_optional(&path)?.unwrap_or_default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Score { fixtures, trim, weights, config, compact } => {
            let cfg = load_config(config)?;
            let opts = ScoreOptions::resolve(fixtures, trim, weights, &cfg);
            let report = score_fixtures(&opts)
                .with_context(|| format!("score fixtures in {}", opts.fixtures_dir.display()))?;
            let out = if compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{out}");
        }
        Command::Init { path } => {
            let path = match path {
                Some(p) => p,
                None => Config::config_path(&std::env::current_dir()?),
            };
            if path.exists() {
                anyhow::bail!("{} already exists", path.display());
            }
            Config::default().save_to(&path)?;
            tracing::info!(path = %path.display(), "wrote default config");
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_score_flags() {
        let cli = Cli::try_parse_from([
            "valscore",
            "score",
            "--fixtures",
            "./fixtures/simulations/adversarial",
            "--trim",
            "0.1",
            "--weights",
            "./fixtures/weights.json",
        ])
        .unwrap();
        match cli.cmd {
            Command::Score { fixtures, trim, weights, config, compact } => {
                assert_eq!(fixtures, PathBuf::from("./fixtures/simulations/adversarial"));
                assert_eq!(trim, Some(0.1));
                assert_eq!(weights, Some(PathBuf::from("./fixtures/weights.json")));
                assert_eq!(config, None);
                assert!(!compact);
            }
            Command::Init { .. } => panic!("expected score"),
        }
    }

    #[test]
    fn trim_is_optional_and_may_be_negative() {
        let cli = Cli::try_parse_from(["valscore", "score", "--fixtures", "d"]).unwrap();
        assert!(matches!(cli.cmd, Command::Score { trim: None, .. }));

        let cli = Cli::try_parse_from(["valscore", "score", "--fixtures", "d", "--trim", "-0.5"]).unwrap();
        assert!(matches!(cli.cmd, Command::Score { trim: Some(t), .. } if t == -0.5));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Cli::try_parse_from(["valscore", "score"]).is_err());
        assert!(Cli::try_parse_from(["valscore", "score", "--fixtures", "d", "--trim", "lots"]).is_err());
        assert!(Cli::try_parse_from(["valscore", "rank"]).is_err());
        assert!(Cli::try_parse_from(["valscore"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
