//! CLI entrypoint for Interview Practice
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use interview_application::{
    BehaviorConfig, ConversationLogger, LanguageService, LlmCompletionGateway,
    MemoryPreferenceStore, NoConversationLogger, PreferenceStore,
};
use interview_domain::{
    Model, OutputFormat, QuestionCount, SessionParameters, SetupSelection, Severity, decode_route,
};
use interview_infrastructure::{
    ConfigLoader, FileConfig, FilePreferenceStore, JsonlConversationLogger, OpenAiConfig,
    OpenAiLlmGateway, bundled_translations,
};
use interview_presentation::{Cli, InterviewRepl, OutputConfig, ReedlineReader, ReplConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_LOG_FILE: &str = "interview-practice.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref());

    info!("Starting Interview Practice");

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => warn!("Configuration error: {}", issue),
            Severity::Warning => warn!("Configuration warning: {}", issue),
        }
    }
    config.validate_strict()?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // Language: bundled catalogs plus the persisted preference
    let translations = Arc::new(bundled_translations()?);
    let store: Arc<dyn PreferenceStore> = match config
        .i18n
        .preference_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(FilePreferenceStore::default_path)
    {
        Some(path) => Arc::new(FilePreferenceStore::new(path)),
        None => Arc::new(MemoryPreferenceStore::new()),
    };
    let language = Arc::new(LanguageService::init(translations, store));
    if let Some(code) = &cli.lang
        && !language.set_language(code)
    {
        warn!("Unknown language '{}', keeping '{}'", code, language.current());
    }

    // Completion gateway over the configured endpoint
    let completion = Arc::new(build_completion(&config, cli.model.as_deref())?);

    // Conversation transcript
    let log_path = cli
        .log_conversation
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from));
    let conversation_logger: Arc<dyn ConversationLogger> =
        match log_path.and_then(JsonlConversationLogger::new) {
            Some(logger) => {
                info!("Logging conversation to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        };

    let (defaults, _) = config.interview.to_session_defaults();

    // One-shot mode skips the setup form
    let initial = initial_parameters(&cli, &defaults)?;

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let history_file = config
        .repl
        .history_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|p| p.join("interview-practice").join("history.txt")));

    let repl = InterviewRepl::new(completion, language)
        .with_defaults(defaults)
        .with_conversation_logger(conversation_logger)
        .with_repl_config(ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: history_file.clone(),
        })
        .with_output_config(OutputConfig {
            format,
            color: config.output.color && !cli.no_color,
        })
        .with_single_session(initial.is_some() && format == OutputFormat::Json);

    let mut reader = ReedlineReader::new(history_file.as_deref());
    repl.run(&mut reader, initial).await?;

    Ok(())
}

/// Install the stderr subscriber, plus a daily-rolling file when configured
fn init_logging(verbose: u8, file: Option<&str>) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(file) = file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return None;
    };

    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Some(guard)
}

fn build_completion(
    config: &FileConfig,
    model_override: Option<&str>,
) -> Result<LlmCompletionGateway<OpenAiLlmGateway>> {
    let provider = &config.provider;
    let model = match model_override.map(str::trim).filter(|m| !m.is_empty()) {
        Some(name) => Model::new(name),
        None => provider.parse_model().0,
    };
    let (timeout_seconds, _) = provider.parse_timeout();

    let gateway = OpenAiLlmGateway::new(OpenAiConfig {
        base_url: provider.base_url.trim().to_string(),
        api_key: provider.resolve_api_key(),
        max_tokens: provider.max_tokens,
        temperature: provider.temperature,
        timeout: timeout_seconds.map(Duration::from_secs),
    })
    .context("Failed to create completion gateway")?;

    info!("Using model {}", model);
    Ok(LlmCompletionGateway::new(Arc::new(gateway), model)
        .with_behavior(BehaviorConfig::from_timeout_seconds(timeout_seconds)))
}

/// Parameters for `--route` or `--role`, if either was given
fn initial_parameters(
    cli: &Cli,
    defaults: &interview_application::SessionDefaults,
) -> Result<Option<SessionParameters>> {
    if let Some(route) = &cli.route {
        return Ok(Some(decode_route(route)?));
    }

    let Some(role) = &cli.role else {
        return Ok(None);
    };

    let mut selection = SetupSelection::new().with_difficulty(
        cli.difficulty
            .map(Into::into)
            .unwrap_or(defaults.difficulty),
    );
    selection = match cli.questions {
        Some(n) => selection.with_count(QuestionCount::new(n)?),
        None => selection.with_count(defaults.question_count),
    };

    // Same path as the setup form: encode, then decode on the receiving side
    let Some(route) = selection.submit_route(role) else {
        bail!("Role must not be empty");
    };
    Ok(Some(decode_route(&route)?))
}
