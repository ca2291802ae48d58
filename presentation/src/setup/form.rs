//! Interactive setup prompts

use crate::interview::command::ReplCommand;
use crate::interview::reader::{Input, LineReader};
use colored::Colorize;
use interview_application::{SessionDefaults, Translate};
use interview_domain::{CountChoice, Difficulty, QuestionCount, SetupSelection};
use std::io;
use tracing::debug;

/// How the setup form ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Encoded session address for the chosen parameters
    Start(String),
    /// A slash command was entered instead of a choice
    Command(ReplCommand),
    /// Input ended or was interrupted
    Quit,
}

enum Step<T> {
    Value(T),
    Exit(SetupOutcome),
}

/// Prompts for difficulty, question count and role
pub struct SetupForm {
    selection: SetupSelection,
    presets: Vec<String>,
}

impl SetupForm {
    pub fn new(defaults: &SessionDefaults) -> Self {
        Self {
            selection: SetupSelection::new()
                .with_difficulty(defaults.difficulty)
                .with_count(defaults.question_count),
            presets: defaults.role_presets.clone(),
        }
    }

    /// Run the form. A role that trims to empty is ignored and asked again.
    pub fn run(
        &mut self,
        reader: &mut dyn LineReader,
        t: &dyn Translate,
    ) -> io::Result<SetupOutcome> {
        println!();
        println!("{}", t.t("welcome").cyan().bold());
        println!("{}", t.t("appDescription").dimmed());

        if let Step::Exit(outcome) = self.ask_difficulty(reader, t)? {
            return Ok(outcome);
        }
        if let Step::Exit(outcome) = self.ask_count(reader, t)? {
            return Ok(outcome);
        }

        println!();
        println!("{}", format!("{}:", t.t("role")).bold());
        println!("  {}", t.t("orChoosePreset").dimmed());
        for (i, preset) in self.presets.iter().enumerate() {
            println!("  {}) {}", i + 1, t.t(preset));
        }
        println!("  {}", t.t("rolePlaceholder").dimmed());

        loop {
            let line = match read(reader, &t.t("setup.chooseRole"))? {
                Step::Value(line) => line,
                Step::Exit(outcome) => return Ok(outcome),
            };
            let role = self.resolve_role(&line, t);
            if let Some(route) = self.selection.submit_route(&role) {
                debug!("Setup complete: {}", route);
                return Ok(SetupOutcome::Start(route));
            }
        }
    }

    /// Preset number to its translated name, anything else as typed
    fn resolve_role(&self, line: &str, t: &dyn Translate) -> String {
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=self.presets.len()).contains(&n) => t.t(&self.presets[n - 1]),
            _ => line.to_string(),
        }
    }

    fn ask_difficulty(
        &mut self,
        reader: &mut dyn LineReader,
        t: &dyn Translate,
    ) -> io::Result<Step<()>> {
        println!();
        println!("{}", format!("{}:", t.t("difficulty")).bold());
        let options: Vec<String> = Difficulty::ALL
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let label = format!("{}) {}", i + 1, t.t(d.translation_key()));
                if *d == self.selection.difficulty() {
                    format!("{}*", label)
                } else {
                    label
                }
            })
            .collect();
        println!("  {}", options.join("  "));

        let line = match read(reader, &t.t("setup.chooseDifficulty"))? {
            Step::Value(line) => line,
            Step::Exit(outcome) => return Ok(Step::Exit(outcome)),
        };
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(Step::Value(()));
        }

        let difficulty = match choice.parse::<usize>() {
            Ok(n) => Difficulty::ALL.get(n.wrapping_sub(1)).copied(),
            Err(_) => choice.parse::<Difficulty>().ok(),
        };
        match difficulty {
            Some(difficulty) => self.selection.select_difficulty(difficulty),
            None => println!("{}", t.t("setup.invalidChoice").yellow()),
        }
        Ok(Step::Value(()))
    }

    /// A number is the count itself; presets are starred suggestions
    fn ask_count(
        &mut self,
        reader: &mut dyn LineReader,
        t: &dyn Translate,
    ) -> io::Result<Step<()>> {
        println!();
        println!("{}", format!("{}:", t.t("numberOfQuestions")).bold());
        let current = self.selection.count();
        let mut options: Vec<String> = QuestionCount::PRESETS
            .iter()
            .map(|preset| {
                if current == CountChoice::Preset(QuestionCount::clamped(*preset as i64)) {
                    format!("{}*", preset)
                } else {
                    preset.to_string()
                }
            })
            .collect();
        options.push(match current {
            CountChoice::Custom(count) => format!("c) {} ({})*", t.t("custom"), count),
            CountChoice::Preset(_) => format!("c) {}", t.t("custom")),
        });
        println!("  {}", options.join("  "));

        let line = match read(reader, &t.t("setup.chooseCount"))? {
            Step::Value(line) => line,
            Step::Exit(outcome) => return Ok(Step::Exit(outcome)),
        };
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(Step::Value(()));
        }

        let accepted = if choice.eq_ignore_ascii_case("c") || choice.eq_ignore_ascii_case("custom")
        {
            let line = match read(reader, &t.t("setup.customCount"))? {
                Step::Value(line) => line,
                Step::Exit(outcome) => return Ok(Step::Exit(outcome)),
            };
            self.set_custom(&line)
        } else {
            match choice.parse::<u8>() {
                Ok(n) if QuestionCount::PRESETS.contains(&n) => {
                    self.selection.select_preset_count(n).is_ok()
                }
                _ => self.set_custom(choice),
            }
        };
        if !accepted {
            println!("{}", t.t("setup.invalidChoice").yellow());
        }
        Ok(Step::Value(()))
    }

    /// Out-of-range or non-numeric values keep the previous count
    fn set_custom(&mut self, value: &str) -> bool {
        value
            .trim()
            .parse::<i64>()
            .ok()
            .is_some_and(|n| self.selection.set_custom_count(n).is_ok())
    }
}

/// Read one line, turning slash commands and end of input into an exit
fn read(reader: &mut dyn LineReader, prompt: &str) -> io::Result<Step<String>> {
    match reader.read_line(prompt)? {
        Input::Line(line) => match ReplCommand::parse(&line) {
            Some(command) => Ok(Step::Exit(SetupOutcome::Command(command))),
            None => Ok(Step::Value(line)),
        },
        Input::Interrupted | Input::Eof => Ok(Step::Exit(SetupOutcome::Quit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::reader::ScriptedReader;
    use interview_domain::decode_route;

    struct KeyEcho;

    impl Translate for KeyEcho {
        fn t(&self, key: &str) -> String {
            match key {
                "softwareEngineer" => "Software Engineer".to_string(),
                _ => key.to_string(),
            }
        }
    }

    fn run(lines: &[&str]) -> SetupOutcome {
        let mut form = SetupForm::new(&SessionDefaults::default());
        let mut reader = ScriptedReader::new(lines.iter().copied());
        form.run(&mut reader, &KeyEcho).unwrap()
    }

    fn started(outcome: SetupOutcome) -> interview_domain::SessionParameters {
        match outcome {
            SetupOutcome::Start(route) => decode_route(&route).unwrap(),
            other => panic!("expected start, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_with_free_text_role() {
        let params = started(run(&["", "", "Data Analyst"]));
        assert_eq!(params.role().as_str(), "Data Analyst");
        assert_eq!(params.difficulty(), Difficulty::Medium);
        assert_eq!(params.question_count().get(), 8);
    }

    #[test]
    fn test_menu_choices() {
        let params = started(run(&["3", "5", "1"]));
        assert_eq!(params.role().as_str(), "Software Engineer");
        assert_eq!(params.difficulty(), Difficulty::Hard);
        assert_eq!(params.question_count().get(), 5);
    }

    #[test]
    fn test_typed_count_is_taken_literally() {
        let mut form = SetupForm::new(&SessionDefaults::default());
        let mut reader = ScriptedReader::new(["", "3", "QA"]);
        form.run(&mut reader, &KeyEcho).unwrap();
        assert_eq!(form.selection.count(), CountChoice::Custom(QuestionCount::clamped(3)));

        let mut form = SetupForm::new(&SessionDefaults::default());
        let mut reader = ScriptedReader::new(["", "15", "QA"]);
        form.run(&mut reader, &KeyEcho).unwrap();
        assert_eq!(form.selection.count(), CountChoice::Preset(QuestionCount::clamped(15)));
    }

    #[test]
    fn test_custom_count_option() {
        let params = started(run(&["low", "c", "12", "QA Engineer"]));
        assert_eq!(params.difficulty(), Difficulty::Low);
        assert_eq!(params.question_count().get(), 12);
    }

    #[test]
    fn test_direct_custom_count() {
        let params = started(run(&["", "30", "QA"]));
        assert_eq!(params.question_count().get(), 30);
    }

    #[test]
    fn test_invalid_choices_keep_defaults() {
        let params = started(run(&["extreme", "99", "QA"]));
        assert_eq!(params.difficulty(), Difficulty::Medium);
        assert_eq!(params.question_count().get(), 8);
    }

    #[test]
    fn test_blank_role_is_asked_again() {
        let params = started(run(&["", "", "   ", "", "Civil Engineer"]));
        assert_eq!(params.role().as_str(), "Civil Engineer");
    }

    #[test]
    fn test_role_with_reserved_characters_survives_route() {
        let params = started(run(&["", "", "C++ / Rust dev? 100%"]));
        assert_eq!(params.role().as_str(), "C++ / Rust dev? 100%");
    }

    #[test]
    fn test_slash_command_exits_form() {
        assert_eq!(
            run(&["/lang hi"]),
            SetupOutcome::Command(ReplCommand::Lang(Some("hi".to_string())))
        );
    }

    #[test]
    fn test_end_of_input_quits() {
        assert_eq!(run(&["", ""]), SetupOutcome::Quit);
        let mut reader = ScriptedReader::default();
        reader.push(Input::Interrupted);
        let mut form = SetupForm::new(&SessionDefaults::default());
        assert_eq!(form.run(&mut reader, &KeyEcho).unwrap(), SetupOutcome::Quit);
    }
}
