//! REPL (Read-Eval-Print Loop) for interview sessions

use crate::config::{OutputConfig, ReplConfig};
use crate::interview::command::{AnswerBuffer, ReplCommand};
use crate::interview::reader::{Input, LineReader};
use crate::output::console::{ConsoleFormatter, InterviewFailure, InterviewReport};
use crate::output::notifier::ConsoleNotifier;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use crate::render::ViewRenderer;
use crate::setup::{SetupForm, SetupOutcome};
use colored::Colorize;
use interview_application::{
    CompletionGateway, ConversationLogger, InterviewController, InterviewProgressNotifier,
    LanguageService, NoConversationLogger, NoProgress, NotificationSink, SessionDefaults,
    Translate,
};
use interview_domain::{
    AnswerOutcome, DomainError, InterviewPhase, Notification, OutputFormat, SessionParameters,
    decode_route,
};
use std::io::{self, IsTerminal};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that end the REPL
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Interview failed: {0}")]
    SessionFailed(String),
}

/// What to do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandFlow {
    Continue,
    Restart,
    Quit,
}

/// How a session ended
enum SessionEnd {
    Restart,
    Quit,
}

/// Interactive interview REPL
pub struct InterviewRepl<C: CompletionGateway + ?Sized + 'static> {
    completion: Arc<C>,
    language: Arc<LanguageService>,
    defaults: SessionDefaults,
    notifications: Arc<dyn NotificationSink>,
    conversation_logger: Arc<dyn ConversationLogger>,
    repl_config: ReplConfig,
    output_config: OutputConfig,
    single_session: bool,
}

impl<C: CompletionGateway + ?Sized + 'static> InterviewRepl<C> {
    pub fn new(completion: Arc<C>, language: Arc<LanguageService>) -> Self {
        let translator: Arc<dyn Translate> = language.clone();
        Self {
            completion,
            language,
            defaults: SessionDefaults::default(),
            notifications: Arc::new(ConsoleNotifier::new(translator)),
            conversation_logger: Arc::new(NoConversationLogger),
            repl_config: ReplConfig::default(),
            output_config: OutputConfig::default(),
            single_session: false,
        }
    }

    pub fn with_defaults(mut self, defaults: SessionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_notifications(mut self, notifications: Arc<dyn NotificationSink>) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn with_repl_config(mut self, config: ReplConfig) -> Self {
        self.repl_config = config;
        self
    }

    pub fn with_output_config(mut self, config: OutputConfig) -> Self {
        self.output_config = config;
        self
    }

    /// Exit once the first session reaches its report or error
    pub fn with_single_session(mut self, single: bool) -> Self {
        self.single_session = single;
        self
    }

    fn t(&self, key: &str) -> String {
        self.language.t(key)
    }

    fn progress(&self) -> Box<dyn InterviewProgressNotifier> {
        if !self.repl_config.show_progress {
            return Box::new(NoProgress);
        }
        let translator: Arc<dyn Translate> = self.language.clone();
        if io::stderr().is_terminal() {
            Box::new(ProgressReporter::new(translator))
        } else {
            Box::new(SimpleProgress::new(translator))
        }
    }

    /// Run the REPL. With `initial` parameters the first session skips the
    /// setup form.
    pub async fn run(
        &self,
        reader: &mut dyn LineReader,
        initial: Option<SessionParameters>,
    ) -> Result<(), ReplError> {
        if !self.single_session {
            self.print_help();
        }
        let mut next = initial;

        loop {
            let parameters = match next.take() {
                Some(parameters) => parameters,
                None => match SetupForm::new(&self.defaults)
                    .run(reader, self.language.as_ref())?
                {
                    SetupOutcome::Start(route) => {
                        debug!("Navigating to {}", route);
                        decode_route(&route)?
                    }
                    SetupOutcome::Command(command) => {
                        if self.handle_command(&command) == CommandFlow::Quit {
                            break;
                        }
                        continue;
                    }
                    SetupOutcome::Quit => break,
                },
            };

            match self.run_session(reader, parameters).await? {
                SessionEnd::Restart => continue,
                SessionEnd::Quit => break,
            }
        }

        if !self.single_session {
            println!("{}", self.t("goodbye"));
        }
        Ok(())
    }

    /// Drive one session until it is restarted or the user quits
    async fn run_session(
        &self,
        reader: &mut dyn LineReader,
        parameters: SessionParameters,
    ) -> Result<SessionEnd, ReplError> {
        info!("Starting session for role {}", parameters.role());
        let progress = self.progress();
        let mut controller = InterviewController::new(self.completion.clone(), parameters)
            .with_notifications(self.notifications.clone())
            .with_conversation_logger(self.conversation_logger.clone());
        let mut buffer = AnswerBuffer::new();
        let mut language_changes = self.language.subscribe();
        let mut dirty = true;

        loop {
            if language_changes.has_changed().unwrap_or(false) {
                let language = *language_changes.borrow_and_update();
                debug!("Re-rendering in {}", language);
                dirty = true;
            }
            if dirty {
                self.render(&controller);
                dirty = false;
            }

            match controller.phase() {
                InterviewPhase::LoadingQuestions => {
                    controller.start(progress.as_ref()).await?;
                    dirty = true;
                }
                InterviewPhase::GeneratingFeedback => {
                    // Text output redraws the partial report after each item
                    if self.output_config.format == OutputFormat::Json {
                        controller.generate_feedback(progress.as_ref()).await?;
                    } else {
                        controller.next_feedback(progress.as_ref()).await?;
                    }
                    dirty = true;
                }
                InterviewPhase::InProgress => {
                    let prompt = if buffer.is_empty() {
                        format!(
                            "{}{}/{}",
                            self.t("q"),
                            controller.session().current_question_index() + 1,
                            controller.session().total_questions()
                        )
                    } else {
                        "...".to_string()
                    };

                    let line = match reader.read_line(&prompt)? {
                        Input::Line(line) => line,
                        Input::Interrupted => {
                            println!("^C");
                            buffer.clear();
                            controller.set_input("");
                            continue;
                        }
                        Input::Eof => return Ok(SessionEnd::Quit),
                    };

                    // Unknown slash words are answer text here, e.g. a path
                    if buffer.is_empty()
                        && let Some(command) = ReplCommand::parse(&line)
                        && !matches!(command, ReplCommand::Unknown(_))
                    {
                        match self.handle_command(&command) {
                            CommandFlow::Continue => {}
                            CommandFlow::Restart => {
                                controller.abandon();
                                return Ok(SessionEnd::Restart);
                            }
                            CommandFlow::Quit => return Ok(SessionEnd::Quit),
                        }
                        continue;
                    }

                    if buffer.push(&line) {
                        controller.set_input(buffer.text());
                        continue;
                    }
                    controller.set_input(buffer.take());

                    match controller.submit_input(progress.as_ref()).await? {
                        AnswerOutcome::Rejected => {}
                        AnswerOutcome::Advanced { .. } | AnswerOutcome::Completed => dirty = true,
                    }
                }
                InterviewPhase::Results if self.single_session => {
                    return Ok(SessionEnd::Quit);
                }
                InterviewPhase::Error if self.single_session => {
                    let failure =
                        InterviewFailure::from_session(controller.session(), self.language.as_ref());
                    return Err(ReplError::SessionFailed(failure.error));
                }
                InterviewPhase::Results | InterviewPhase::Error => {
                    let line = match reader.read_line("")? {
                        Input::Line(line) => line,
                        Input::Interrupted => {
                            println!("^C");
                            continue;
                        }
                        Input::Eof => return Ok(SessionEnd::Quit),
                    };

                    match ReplCommand::parse(&line) {
                        Some(command) => match self.handle_command(&command) {
                            CommandFlow::Continue => {}
                            CommandFlow::Restart => {
                                controller.restart()?;
                                return Ok(SessionEnd::Restart);
                            }
                            CommandFlow::Quit => return Ok(SessionEnd::Quit),
                        },
                        None if !line.trim().is_empty() => {
                            let hint = if controller.phase() == InterviewPhase::Error {
                                self.t("tryAgain")
                            } else {
                                self.t("startNewInterview")
                            };
                            println!("{}", hint.dimmed());
                        }
                        None => {}
                    }
                }
            }
        }
    }

    fn render(&self, controller: &InterviewController<C>) {
        if self.output_config.format == OutputFormat::Json {
            let session = controller.session();
            match controller.phase() {
                InterviewPhase::Results => {
                    let report = InterviewReport::from_session(session, self.language.as_ref());
                    println!("{}", ConsoleFormatter::format_json(&report));
                    return;
                }
                InterviewPhase::Error => {
                    let failure = InterviewFailure::from_session(session, self.language.as_ref());
                    println!("{}", ConsoleFormatter::format_json(&failure));
                    return;
                }
                _ => {}
            }
        }
        let renderer = ViewRenderer::new(self.language.as_ref());
        println!("{}", renderer.render(&controller.view()));
    }

    /// Handle a slash command
    fn handle_command(&self, command: &ReplCommand) -> CommandFlow {
        match command {
            ReplCommand::Lang(Some(code)) => {
                if self.language.set_language(code) {
                    let language = self.language.current();
                    self.notifications.notify(&Notification::info(
                        "languageChanged",
                        language.native_name(),
                    ));
                } else {
                    println!("{} {}", self.t("unknownLanguage").yellow(), self.language_list());
                }
                CommandFlow::Continue
            }
            ReplCommand::Lang(None) => {
                println!("{}", self.language_list());
                CommandFlow::Continue
            }
            ReplCommand::Restart => CommandFlow::Restart,
            ReplCommand::Quit => CommandFlow::Quit,
            ReplCommand::Help => {
                self.print_help();
                CommandFlow::Continue
            }
            ReplCommand::Unknown(name) => {
                println!("{} {}", name, self.t("unknownCommand"));
                CommandFlow::Continue
            }
        }
    }

    /// "en (English)*, mr (मराठी), hi (हिन्दी)"
    fn language_list(&self) -> String {
        let current = self.language.current();
        self.language
            .available()
            .into_iter()
            .map(|language| {
                let marker = if language == current { "*" } else { "" };
                format!("{} ({}){}", language.code(), language.native_name(), marker)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn print_help(&self) {
        println!();
        println!("{}", self.t("help.title").cyan().bold());
        println!("  /lang <code>  - {}", self.t("help.lang"));
        println!("  /restart      - {}", self.t("help.restart"));
        println!("  /quit         - {}", self.t("help.quit"));
        println!("  /help         - {}", self.t("help.help"));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::reader::ScriptedReader;
    use async_trait::async_trait;
    use interview_application::{
        CompletionError, FeedbackRequest, GatewayError, MemoryPreferenceStore, PreferenceStore,
        QuestionRequest,
    };
    use interview_domain::{
        AnswerFeedback, Difficulty, Language, MessageCatalog, QuestionCount, Role, Translations,
    };
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct ScriptedCompletion {
        questions: Mutex<VecDeque<Result<Vec<String>, CompletionError>>>,
        feedback: Mutex<VecDeque<Result<AnswerFeedback, CompletionError>>>,
        question_requests: Mutex<Vec<QuestionRequest>>,
        feedback_requests: Mutex<Vec<FeedbackRequest>>,
    }

    impl ScriptedCompletion {
        fn with_questions(self, questions: &[&str]) -> Self {
            self.questions
                .lock()
                .unwrap()
                .push_back(Ok(questions.iter().map(|q| q.to_string()).collect()));
            self
        }

        fn with_failed_questions(self) -> Self {
            self.questions
                .lock()
                .unwrap()
                .push_back(Err(CompletionError::Gateway(GatewayError::ConnectionError(
                    "refused".to_string(),
                ))));
            self
        }
    }

    #[async_trait]
    impl CompletionGateway for ScriptedCompletion {
        async fn generate_questions(
            &self,
            request: &QuestionRequest,
        ) -> Result<Vec<String>, CompletionError> {
            self.question_requests.lock().unwrap().push(request.clone());
            self.questions
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(vec!["Fallback question?".to_string()]))
        }

        async fn provide_feedback(
            &self,
            request: &FeedbackRequest,
        ) -> Result<AnswerFeedback, CompletionError> {
            self.feedback_requests.lock().unwrap().push(request.clone());
            self.feedback
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(AnswerFeedback::new("Good.", "Better.")))
        }
    }

    #[derive(Default)]
    struct RecordingNotifications {
        titles: Mutex<Vec<String>>,
    }

    impl NotificationSink for RecordingNotifications {
        fn notify(&self, notification: &Notification) {
            self.titles.lock().unwrap().push(notification.title.clone());
        }
    }

    // ==================== Helpers ====================

    fn catalog(json: &str) -> MessageCatalog {
        serde_json::from_str(json).unwrap()
    }

    fn language_service(store: Arc<dyn PreferenceStore>) -> Arc<LanguageService> {
        let translations = Translations::new()
            .with_catalog(Language::En, catalog(r#"{"goodbye": "Goodbye!"}"#))
            .with_catalog(Language::Mr, catalog(r#"{"goodbye": "निरोप!"}"#));
        Arc::new(LanguageService::init(Arc::new(translations), store))
    }

    struct Fixture {
        completion: Arc<ScriptedCompletion>,
        notifications: Arc<RecordingNotifications>,
        language: Arc<LanguageService>,
        store: Arc<MemoryPreferenceStore>,
    }

    impl Fixture {
        fn new(completion: ScriptedCompletion) -> Self {
            let store = Arc::new(MemoryPreferenceStore::new());
            Self {
                completion: Arc::new(completion),
                notifications: Arc::new(RecordingNotifications::default()),
                language: language_service(store.clone()),
                store,
            }
        }

        fn repl(&self) -> InterviewRepl<ScriptedCompletion> {
            InterviewRepl::new(self.completion.clone(), self.language.clone())
                .with_notifications(self.notifications.clone())
                .with_repl_config(ReplConfig {
                    show_progress: false,
                    history_file: None,
                })
        }

        fn answers(&self) -> Vec<String> {
            self.completion
                .feedback_requests
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.answer.clone())
                .collect()
        }

        fn titles(&self) -> Vec<String> {
            self.notifications.titles.lock().unwrap().clone()
        }
    }

    fn params(role: &str, count: i64) -> SessionParameters {
        SessionParameters::new(
            Role::try_new(role).unwrap(),
            Difficulty::Hard,
            QuestionCount::new(count).unwrap(),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_one_shot_session_collects_answers_in_order() {
        let fixture =
            Fixture::new(ScriptedCompletion::default().with_questions(&["First?", "Second?"]));
        let mut reader =
            ScriptedReader::new(["Answer one", "Answer \\", "two", "/quit"]);

        fixture
            .repl()
            .run(&mut reader, Some(params("Data Analyst", 2)))
            .await
            .unwrap();

        assert_eq!(fixture.answers(), vec!["Answer one", "Answer \ntwo"]);
        let requests = fixture.completion.feedback_requests.lock().unwrap();
        assert_eq!(requests[0].question, "First?");
        assert_eq!(requests[1].question, "Second?");
        assert_eq!(requests[1].role.as_str(), "Data Analyst");
    }

    #[tokio::test]
    async fn test_blank_answer_is_rejected_once() {
        let fixture = Fixture::new(ScriptedCompletion::default().with_questions(&["Only?"]));
        let mut reader = ScriptedReader::new(["   ", "Real answer", "/quit"]);

        fixture
            .repl()
            .run(&mut reader, Some(params("QA", 1)))
            .await
            .unwrap();

        assert_eq!(fixture.titles(), vec!["emptyAnswer"]);
        assert_eq!(fixture.answers(), vec!["Real answer"]);
    }

    #[tokio::test]
    async fn test_setup_then_restart_from_results() {
        let fixture = Fixture::new(
            ScriptedCompletion::default()
                .with_questions(&["Q1?"])
                .with_questions(&["Q2?"]),
        );
        let mut reader = ScriptedReader::new([
            // first setup: hard, 5 questions, typed role
            "3", "5", "Data Analyst", "a1", "/restart",
            // second setup: defaults, preset role
            "", "", "Civil Engineer", "a2", "/quit",
        ]);

        fixture.repl().run(&mut reader, None).await.unwrap();

        let requests = fixture.completion.question_requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].role.as_str(), "Data Analyst");
        assert_eq!(requests[0].difficulty, Difficulty::Hard);
        assert_eq!(requests[0].question_count.get(), 5);
        assert_eq!(requests[1].role.as_str(), "Civil Engineer");
        assert_eq!(requests[1].difficulty, Difficulty::Medium);
        assert_eq!(requests[1].question_count.get(), 8);
        assert_eq!(fixture.answers(), vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn test_generation_failure_then_try_again() {
        let fixture = Fixture::new(
            ScriptedCompletion::default()
                .with_failed_questions()
                .with_questions(&["Retry?"]),
        );
        let mut reader = ScriptedReader::new([
            "anything", "/restart", "", "", "QA", "done", "/quit",
        ]);

        fixture
            .repl()
            .run(&mut reader, Some(params("QA", 1)))
            .await
            .unwrap();

        assert_eq!(fixture.titles(), vec!["error"]);
        assert_eq!(fixture.answers(), vec!["done"]);
    }

    #[tokio::test]
    async fn test_restart_mid_session_discards_answers() {
        let fixture = Fixture::new(
            ScriptedCompletion::default()
                .with_questions(&["One?", "Two?"])
                .with_questions(&["Fresh?"]),
        );
        let mut reader = ScriptedReader::new([
            "partial", "/restart", "", "", "QA", "fresh answer", "/quit",
        ]);

        fixture
            .repl()
            .run(&mut reader, Some(params("QA", 2)))
            .await
            .unwrap();

        assert_eq!(fixture.answers(), vec!["fresh answer"]);
    }

    #[tokio::test]
    async fn test_lang_command_switches_and_persists() {
        let fixture = Fixture::new(ScriptedCompletion::default().with_questions(&["Q?"]));
        let mut reader = ScriptedReader::new(["/lang mr", "/lang xx", "/quit"]);

        fixture
            .repl()
            .run(&mut reader, Some(params("QA", 1)))
            .await
            .unwrap();

        assert_eq!(fixture.language.current(), Language::Mr);
        assert_eq!(fixture.store.load_language().unwrap().as_deref(), Some("mr"));
        assert_eq!(fixture.titles(), vec!["languageChanged"]);
        assert_eq!(fixture.language.t("goodbye"), "निरोप!");
    }

    #[tokio::test]
    async fn test_single_session_exits_after_report() {
        let fixture = Fixture::new(ScriptedCompletion::default().with_questions(&["Q?"]));
        let mut reader = ScriptedReader::new(["only answer", "never read"]);

        fixture
            .repl()
            .with_single_session(true)
            .with_output_config(OutputConfig {
                format: OutputFormat::Json,
                color: false,
            })
            .run(&mut reader, Some(params("QA", 1)))
            .await
            .unwrap();

        assert_eq!(fixture.answers(), vec!["only answer"]);
        assert_eq!(reader.read_line("").unwrap(), Input::Line("never read".to_string()));
    }

    #[tokio::test]
    async fn test_end_of_input_quits() {
        let fixture = Fixture::new(ScriptedCompletion::default().with_questions(&["Q?"]));
        let mut reader = ScriptedReader::default();
        reader.push(Input::Interrupted);

        fixture
            .repl()
            .run(&mut reader, Some(params("QA", 1)))
            .await
            .unwrap();

        assert!(fixture.answers().is_empty());
    }

    #[tokio::test]
    async fn test_answer_starting_with_slash_is_kept() {
        let fixture = Fixture::new(ScriptedCompletion::default().with_questions(&["Where?"]));
        let mut reader = ScriptedReader::new(["/etc/hosts on Linux", "/quit"]);

        fixture
            .repl()
            .run(&mut reader, Some(params("Sysadmin", 1)))
            .await
            .unwrap();

        assert_eq!(fixture.answers(), vec!["/etc/hosts on Linux"]);
        assert!(fixture.titles().is_empty());
    }

    #[tokio::test]
    async fn test_single_session_failure_is_an_error() {
        let fixture = Fixture::new(ScriptedCompletion::default().with_failed_questions());
        let mut reader = ScriptedReader::new(["never read"]);

        let result = fixture
            .repl()
            .with_single_session(true)
            .with_output_config(OutputConfig {
                format: OutputFormat::Json,
                color: false,
            })
            .run(&mut reader, Some(params("QA", 1)))
            .await;

        assert!(matches!(result, Err(ReplError::SessionFailed(_))));
        assert_eq!(fixture.titles(), vec!["error"]);
        assert_eq!(reader.read_line("").unwrap(), Input::Line("never read".to_string()));
    }
}
