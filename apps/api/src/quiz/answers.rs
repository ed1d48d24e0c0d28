use crate::errors::FieldError;
use crate::models::quiz::{Answer, Question, QuestionKind};

/// Answers collected during one quiz run. Holds at most one answer per
/// question; answering again replaces the earlier answer.
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records answers in submission order, so a later answer to the same
    /// question wins.
    pub fn from_answers(answers: impl IntoIterator<Item = Answer>) -> Self {
        let mut sheet = Self::new();
        for answer in answers {
            sheet.record(answer);
        }
        sheet
    }

    pub fn record(&mut self, answer: Answer) {
        let question_id = answer.question_id();
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id() == question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }

    pub fn get(&self, question_id: u32) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id() == question_id)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Discards every answer (quiz restart).
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Returns the answers in question-bank order, one per question, ready for
    /// positional pairing by a matching strategy. Choice answers carry the
    /// chosen option's weight.
    pub fn align(&self, questions: &[Question]) -> Result<Vec<Answer>, Vec<FieldError>> {
        let mut errors = Vec::new();

        for answer in &self.answers {
            let question_id = answer.question_id();
            if !questions.iter().any(|q| q.id == question_id) {
                errors.push(FieldError::new(
                    field_name(question_id),
                    format!("Unknown question {question_id}"),
                ));
            }
        }

        let mut aligned = Vec::with_capacity(questions.len());
        for question in questions {
            let field = field_name(question.id);
            let Some(answer) = self.get(question.id) else {
                errors.push(FieldError::new(
                    field,
                    format!("Question {} has not been answered", question.id),
                ));
                continue;
            };

            match (answer, &question.kind) {
                (Answer::MultipleChoice { value, .. }, QuestionKind::MultipleChoice { .. }) => {
                    match question.option(value) {
                        Some(option) => aligned.push(Answer::MultipleChoice {
                            question_id: question.id,
                            value: value.clone(),
                            weight: Some(option.weight),
                        }),
                        None => errors.push(FieldError::new(
                            field,
                            format!("'{value}' is not an option of question {}", question.id),
                        )),
                    }
                }
                (Answer::Slider { value, .. }, QuestionKind::Slider { min, max, .. }) => {
                    // Buckets only cover whole slider positions
                    let whole = value.is_finite() && value.fract() == 0.0;
                    if whole && *value >= *min && *value <= *max {
                        aligned.push(answer.clone());
                    } else {
                        errors.push(FieldError::new(
                            field,
                            format!(
                                "Slider value {value} must be a whole number between {min} and {max}"
                            ),
                        ));
                    }
                }
                (answer, kind) => {
                    let expected = match kind {
                        QuestionKind::MultipleChoice { .. } => "multiple-choice",
                        QuestionKind::Slider { .. } => "slider",
                    };
                    errors.push(FieldError::new(
                        field,
                        format!(
                            "Expected a {expected} answer, got {}",
                            answer.kind_str()
                        ),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(aligned)
        } else {
            Err(errors)
        }
    }
}

fn field_name(question_id: u32) -> String {
    format!("answers[question_id={question_id}]")
}
