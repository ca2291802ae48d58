//! Per-phase terminal views

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use interview_application::Translate;
use interview_domain::{Difficulty, InterviewView, Role};

const BAR_WIDTH: usize = 30;

/// Renders an [`InterviewView`] as terminal text in the active language
pub struct ViewRenderer<'a> {
    t: &'a dyn Translate,
}

impl<'a> ViewRenderer<'a> {
    pub fn new(t: &'a dyn Translate) -> Self {
        Self { t }
    }

    pub fn render(&self, view: &InterviewView<'_>) -> String {
        match view {
            InterviewView::Loading { role, difficulty } => self.loading(role, *difficulty),
            InterviewView::InProgress {
                role,
                difficulty,
                question,
                number,
                total,
                progress,
                is_last,
                ..
            } => self.in_progress(role, *difficulty, question, *number, *total, *progress, *is_last),
            InterviewView::GeneratingFeedback {
                role,
                difficulty,
                results,
                generating_index,
                total,
                progress,
            } => {
                let mut output = self.title(role, *difficulty);
                output.push_str(&format!("{}\n", self.t.t("analyzingAnswers").bold()));
                output.push_str(&format!(
                    "{} {} / {}\n{}\n",
                    self.t.t("generatingFeedbackFor"),
                    generating_index + 1,
                    total,
                    ConsoleFormatter::progress_bar(*progress, BAR_WIDTH)
                ));
                output.push_str(&ConsoleFormatter::format_results(results, self.t));
                output
            }
            InterviewView::Results {
                role,
                difficulty,
                results,
                warning,
            } => ConsoleFormatter::format_report(role, *difficulty, results, *warning, self.t),
            InterviewView::Error { message } => format!(
                "\n{}\n{}\n\n{}\n",
                self.t.t("errorOccurred").red().bold(),
                self.t.t(message),
                self.t.t("tryAgain").dimmed()
            ),
        }
    }

    fn title(&self, role: &Role, difficulty: Difficulty) -> String {
        format!(
            "\n{} {}  {}\n",
            format!("{}:", self.t.t("interview")).cyan().bold(),
            role,
            ConsoleFormatter::difficulty_badge(difficulty, self.t)
        )
    }

    fn loading(&self, role: &Role, difficulty: Difficulty) -> String {
        let mut output = self.title(role, difficulty);
        output.push_str(&format!("{}\n", self.t.t("preparingInterview").bold()));
        output.push_str(&format!("{}\n", self.t.t("craftingQuestions").dimmed()));
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn in_progress(
        &self,
        role: &Role,
        difficulty: Difficulty,
        question: &str,
        number: usize,
        total: usize,
        progress: f64,
        is_last: bool,
    ) -> String {
        let mut output = self.title(role, difficulty);
        output.push_str(&format!(
            "{} {} {} {}  {}\n\n",
            self.t.t("question").bold(),
            number,
            self.t.t("of"),
            total,
            ConsoleFormatter::progress_bar(progress, BAR_WIDTH)
        ));
        output.push_str(&format!("{}\n\n", question));

        let action = if is_last {
            self.t.t("finishAndGetFeedback")
        } else {
            self.t.t("nextQuestion")
        };
        output.push_str(&format!(
            "{}\n{} {}\n",
            self.t.t("multilineHint").dimmed(),
            self.t.t("pressEnter").dimmed(),
            action.green()
        ));
        output
    }
}
