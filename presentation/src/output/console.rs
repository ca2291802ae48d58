//! Console output formatter for interview reports

use colored::{ColoredString, Colorize};
use interview_application::Translate;
use interview_domain::interview::session::GENERATION_FAILED_MESSAGE;
use interview_domain::{Difficulty, FeedbackResult, InterviewSession, Role};
use serde::Serialize;

/// Serializable interview report, used for `--output json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewReport<'a> {
    pub role: &'a str,
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub results: &'a [FeedbackResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<'a> InterviewReport<'a> {
    /// Report for a session; the warning is translated with `t`
    pub fn from_session(session: &'a InterviewSession, t: &dyn Translate) -> Self {
        let parameters = session.parameters();
        Self {
            role: parameters.role().as_str(),
            difficulty: parameters.difficulty(),
            question_count: parameters.question_count().get(),
            results: session.feedback_results(),
            warning: session.message().map(|key| t.t(key)),
        }
    }
}

/// Serializable failure, used for `--output json` when the session ends in
/// the error phase
#[derive(Debug, Clone, Serialize)]
pub struct InterviewFailure {
    pub phase: &'static str,
    pub error: String,
}

impl InterviewFailure {
    pub fn from_session(session: &InterviewSession, t: &dyn Translate) -> Self {
        Self {
            phase: session.phase().as_str(),
            error: t.t(session.message().unwrap_or(GENERATION_FAILED_MESSAGE)),
        }
    }
}

/// Formats interview output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the interview report
    pub fn format_report(
        role: &Role,
        difficulty: Difficulty,
        results: &[FeedbackResult],
        warning: Option<&str>,
        t: &dyn Translate,
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&t.t("interviewReport")));
        output.push('\n');
        output.push_str(&format!(
            "{} {}  {}\n",
            format!("{}:", t.t("role")).cyan().bold(),
            role,
            Self::difficulty_badge(difficulty, t)
        ));

        if let Some(warning) = warning {
            output.push_str(&format!("\n{} {}\n", "!".yellow().bold(), t.t(warning).yellow()));
        }

        output.push_str(&Self::format_results(results, t));
        output.push_str(&Self::footer());
        output.push_str(&format!("{}\n", t.t("startNewInterview").dimmed()));

        output
    }

    /// Format the per-question results block
    pub fn format_results(results: &[FeedbackResult], t: &dyn Translate) -> String {
        let mut output = String::new();

        for (i, result) in results.iter().enumerate() {
            output.push_str(&Self::section_header(&format!(
                "{}{}: {}",
                t.t("q"),
                i + 1,
                result.question
            )));
            output.push_str(&format!(
                "{}\n{}\n\n",
                format!("{}:", t.t("yourAnswer")).yellow().bold(),
                Self::indent(&result.answer, "  ")
            ));
            output.push_str(&format!(
                "{}\n{}\n\n",
                format!("{}:", t.t("aiFeedback")).green().bold(),
                Self::indent(&result.feedback, "  ")
            ));

            let suggested = if result.suggested_answer.trim().is_empty() {
                t.t("noSuggestedAnswer")
            } else {
                result.suggested_answer.clone()
            };
            output.push_str(&format!(
                "{}\n{}\n",
                format!("{}:", t.t("suggestedAnswer")).blue().bold(),
                Self::indent(&suggested, "  ")
            ));
        }

        output
    }

    /// Format a report or failure as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Localized difficulty label, colored by level
    pub fn difficulty_badge(difficulty: Difficulty, t: &dyn Translate) -> ColoredString {
        let label = format!("[{}]", t.t(difficulty.translation_key()));
        match difficulty {
            Difficulty::Low => label.green(),
            Difficulty::Medium => label.yellow(),
            Difficulty::Hard => label.red(),
        }
    }

    /// Text progress bar for a fraction in `[0, 1]`
    pub fn progress_bar(fraction: f64, width: usize) -> String {
        let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
        format!(
            "[{}{}] {:>3}%",
            "=".repeat(filled),
            "-".repeat(width - filled),
            (fraction.clamp(0.0, 1.0) * 100.0).round() as u32
        )
    }

    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    pub fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
