use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cv_rank::error::Result;
use cv_rank::protocol::{self, ErrorResponse};
use cv_rank::MatcherConfig;

/// Rank CVs against a job description by lexical similarity.
///
/// Reads one JSON request from stdin and writes one JSON response to stdout.
/// Diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(name = "cv-rank", version, about)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true, env = "CV_RANK_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Pretty-print the JSON response
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Rank CVs: {"job_description", "cv_texts", "top_k"} -> matches
    Rank {
        /// Number of matches to return when the request has no top_k
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// TF-IDF weights: {"documents"} -> one term weight map per document
    Weigh,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cv_rank={level}")));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn write_stdout(json: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading configuration");
            MatcherConfig::from_file(path)?
        }
        None => MatcherConfig::default(),
    };

    let input = read_stdin()?;
    match cli.command.clone().unwrap_or(Command::Rank { top_k: None }) {
        Command::Rank { top_k } => {
            let ranker = config.build_ranker();
            let response = protocol::rank_json(&ranker, &input, top_k)?;
            tracing::info!(matches = response.matches.len(), "Response ready");
            protocol::encode(&response, cli.pretty)
        }
        Command::Weigh => {
            let vectorizer = config.build_vectorizer();
            let response = protocol::weigh_json(&vectorizer, &input)?;
            tracing::info!(documents = response.weights.len(), "Response ready");
            protocol::encode(&response, cli.pretty)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(json) => match write_stdout(&json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Failed to write response: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!("{e}");
            let body = protocol::encode(&ErrorResponse::from(&e), cli.pretty)
                .unwrap_or_else(|_| r#"{"success":false,"error":"internal error"}"#.to_string());
            if let Err(write_err) = write_stdout(&body) {
                tracing::error!("Failed to write error response: {write_err}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rank_is_default_command() {
        let cli = Cli::try_parse_from(["cv-rank", "--pretty"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.pretty);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_parse_rank_with_top_k() {
        let cli = Cli::try_parse_from(["cv-rank", "rank", "-k", "3", "-vv"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Rank { top_k: Some(3) })));
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let cli = Cli::try_parse_from(["cv-rank", "weigh", "-v", "-q"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Weigh)));
        assert_eq!(cli.log_level(), "error");
    }
}
