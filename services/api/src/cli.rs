use crate::batch::{run_rank, run_score, RankArgs, ScoreArgs};
use crate::server;
use candidate_scoring::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "candidate-scoring",
    about = "Score and rank job applicants against an opening rubric",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single applicant record and print the result as JSON
    Score(ScoreArgs),
    /// Score and rank a pool of applicants
    Rank(RankArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Rank(args) => run_rank(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["candidate-scoring"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_rank_filters() {
        let cli = Cli::try_parse_from([
            "candidate-scoring",
            "rank",
            "--applicants",
            "pool.json",
            "--min-score",
            "65",
            "--today",
            "2025-06-15",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Rank(args)) => {
                assert_eq!(args.min_score, Some(65));
                assert_eq!(args.max_score, None);
                assert_eq!(args.today.map(|date| date.to_string()).as_deref(), Some("2025-06-15"));
            }
            other => panic!("expected rank command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_today() {
        let result = Cli::try_parse_from([
            "candidate-scoring",
            "score",
            "--applicant",
            "one.json",
            "--today",
            "15.06.2025",
        ]);
        assert!(result.is_err());
    }
}
