//! CLI command definitions

use clap::{Parser, ValueEnum};
use interview_domain::Difficulty;
use std::path::PathBuf;

/// Output format for the interview report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored report in the terminal
    Text,
    /// JSON document with parameters, results and warning
    Json,
}

impl From<OutputFormat> for interview_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => interview_domain::OutputFormat::Text,
            OutputFormat::Json => interview_domain::OutputFormat::Json,
        }
    }
}

/// Difficulty as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Low,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Low => Difficulty::Low,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// CLI arguments for interview-practice
#[derive(Parser, Debug)]
#[command(name = "interview-practice")]
#[command(author, version, about = "Practice job interviews with AI-generated questions and feedback")]
#[command(long_about = r#"
Interview Practice generates interview questions for a role, collects your
answers one by one, then reviews every answer with feedback and a model answer.

The session has four phases:
1. Loading: questions are generated for the role, difficulty and count
2. Interview: answer each question in turn
3. Feedback: every answer is reviewed in order
4. Report: questions, your answers, feedback and suggested answers

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./interview.toml    Project-level config
3. ~/.config/interview-practice/config.toml   Global config

Example:
  interview-practice
  interview-practice --role "Data Analyst" --difficulty hard --questions 5
  interview-practice --route "/interview/Data%20Analyst?difficulty=Hard&questions=5"
"#)]
pub struct Cli {
    /// Role to interview for; skips the setup menu
    #[arg(short, long, value_name = "ROLE", conflicts_with = "route")]
    pub role: Option<String>,

    /// Question difficulty (used with --role)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Number of questions, 1 to 50 (used with --role)
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(i64).range(1..=50))]
    pub questions: Option<i64>,

    /// Start from an encoded session address such as /interview/QA%20Engineer?difficulty=Low
    #[arg(long, value_name = "ADDRESS")]
    pub route: Option<String>,

    /// Interface language code (en, mr, hi)
    #[arg(short, long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Model to request completions from
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write a JSONL transcript of the session to this file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_arguments() {
        let cli = Cli::try_parse_from([
            "interview-practice",
            "--role",
            "Data Analyst",
            "--difficulty",
            "hard",
            "-n",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.role.as_deref(), Some("Data Analyst"));
        assert_eq!(cli.difficulty.map(Difficulty::from), Some(Difficulty::Hard));
        assert_eq!(cli.questions, Some(5));
    }

    #[test]
    fn test_question_count_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["interview-practice", "-n", "51"]).is_err());
        assert!(Cli::try_parse_from(["interview-practice", "-n", "0"]).is_err());
    }

    #[test]
    fn test_role_conflicts_with_route() {
        let result = Cli::try_parse_from([
            "interview-practice",
            "--role",
            "QA",
            "--route",
            "/interview/QA",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["interview-practice", "-vv", "-o", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
