//! Prompt templates for question generation and answer feedback

use crate::core::role::Role;
use crate::interview::parameters::SessionParameters;

/// Templates for generating prompts at each stage of an interview
pub struct InterviewPromptTemplate;

impl InterviewPromptTemplate {
    /// System prompt for question generation
    pub fn questions_system() -> &'static str {
        r#"You are an AI Interviewer. Your task is to generate a realistic interview for the user based on the chosen interview type and difficulty.
Always answer with a single JSON object and nothing else."#
    }

    /// User prompt for question generation
    pub fn questions_prompt(parameters: &SessionParameters) -> String {
        let difficulty = parameters.difficulty();
        format!(
            r#"Interview Type: {role}
Difficulty: {difficulty}

Generate a list of {count} interview questions relevant to the specified interview type and difficulty.
For "{difficulty}" difficulty, {guidance}.

Include a mix of technical, behavioral, and situational questions, if applicable.
The questions should be appropriate for the interview type and difficulty specified.
The questions must be different and must not be repeated. They should also be interesting to answer.

Respond with JSON in exactly this shape:
```json
{{"questions": ["first question", "second question"]}}
```"#,
            role = parameters.role(),
            difficulty = difficulty,
            count = parameters.question_count(),
            guidance = difficulty.guidance(),
        )
    }

    /// System prompt for answer feedback
    pub fn feedback_system() -> &'static str {
        r#"You are an AI Interviewer providing feedback on interview answers.
Be clear, constructive, and professional.
Always answer with a single JSON object and nothing else."#
    }

    /// User prompt for feedback on one answer
    pub fn feedback_prompt(role: &Role, question: &str, answer: &str) -> String {
        format!(
            r#"Interview Type: {role}

Question: {question}
Answer: {answer}

Provide constructive feedback, highlighting strengths, weaknesses, and suggestions for improvement.
Highlight what was good in the answer. Suggest how to improve it for real interviews.
Then write a model answer to the same question that would impress an interviewer.

Respond with JSON in exactly this shape:
```json
{{"feedback": "your feedback", "suggestedAnswer": "your model answer"}}
```"#
        )
    }
}
