//! Daily check-in form.
//!
//! A fixed ordered set of free-text questions, answered in one submission.
//! This module validates submissions and composes the single message that
//! gets reposted to the check-in channel; rendering the actual modal is
//! the gateway adapter's job ([`FormRequest`] is what it renders from).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Stable identifier the adapter echoes back on submission.
pub const FORM_ID: &str = "daily_checkin";

/// The configured check-in form.
#[derive(Debug, Clone)]
pub struct CheckinForm {
    questions: Vec<String>,
}

/// Everything the gateway needs to render the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRequest {
    pub id: String,
    pub title: String,
    pub inputs: Vec<FormInput>,
}

/// One free-text input in the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInput {
    /// Answer key, `answer{index}`.
    pub key: String,
    pub label: String,
    pub required: bool,
    /// Multi-line paragraph style rather than a single line.
    pub paragraph: bool,
}

impl CheckinForm {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Check a submission: one non-blank answer per question, in order.
    pub fn validate(&self, answers: &[String]) -> Result<(), ValidationError> {
        if answers.len() != self.questions.len() {
            return Err(ValidationError::AnswerCount {
                expected: self.questions.len(),
                got: answers.len(),
            });
        }
        for (question, answer) in self.questions.iter().zip(answers) {
            if answer.trim().is_empty() {
                return Err(ValidationError::EmptyAnswer {
                    question: question.clone(),
                });
            }
        }
        Ok(())
    }

    /// Compose the message posted to the check-in channel.
    ///
    /// `streak` is the submitter's current streak *before* any mutation
    /// from today's activity (0 if they have no record yet); the form
    /// itself never advances the streak -- only their own channel message
    /// does.
    pub fn compose(
        &self,
        user_id: &str,
        streak: u32,
        date: NaiveDate,
        answers: &[String],
    ) -> String {
        let mut lines = Vec::with_capacity(self.questions.len() + 2);
        lines.push(format!("**{date}**"));
        lines.push(format!("Daily check-in from <@{user_id}> ({streak}):"));
        for (question, answer) in self.questions.iter().zip(answers) {
            lines.push(format!("**{question}:** {answer}"));
        }
        lines.join("\n")
    }

    /// Build the render request for the gateway.
    pub fn request(&self) -> FormRequest {
        FormRequest {
            id: FORM_ID.to_string(),
            title: "Daily Check-in".to_string(),
            inputs: self
                .questions
                .iter()
                .enumerate()
                .map(|(index, label)| FormInput {
                    key: format!("answer{index}"),
                    label: label.clone(),
                    required: true,
                    paragraph: true,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CheckinForm {
        CheckinForm::new(vec![
            "Did you work out?".to_string(),
            "Did you read?".to_string(),
        ])
    }

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn validate_accepts_complete_submission() {
        assert!(form().validate(&answers(&["yes", "20 pages"])).is_ok());
    }

    #[test]
    fn validate_rejects_wrong_answer_count() {
        assert_eq!(
            form().validate(&answers(&["yes"])),
            Err(ValidationError::AnswerCount {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn validate_rejects_blank_answer() {
        assert_eq!(
            form().validate(&answers(&["yes", "   "])),
            Err(ValidationError::EmptyAnswer {
                question: "Did you read?".to_string()
            })
        );
    }

    #[test]
    fn compose_carries_date_mention_and_streak() {
        let date = "2024-06-02".parse().unwrap();
        let message = form().compose("u1", 4, date, &answers(&["yes", "20 pages"]));

        assert!(message.starts_with("**2024-06-02**\n"));
        assert!(message.contains("Daily check-in from <@u1> (4):"));
        assert!(message.contains("**Did you work out?:** yes"));
        assert!(message.contains("**Did you read?:** 20 pages"));
    }

    #[test]
    fn request_keys_inputs_by_question_index() {
        let request = form().request();
        assert_eq!(request.id, FORM_ID);
        assert_eq!(request.inputs.len(), 2);
        assert_eq!(request.inputs[0].key, "answer0");
        assert_eq!(request.inputs[1].key, "answer1");
        assert!(request.inputs.iter().all(|i| i.required && i.paragraph));
    }
}
