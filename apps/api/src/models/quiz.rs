use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub text: String,
    /// Keyword tag (keyword bank) or category letter (letter bank).
    pub value: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub weight: f64,
}

/// A slider sub-range. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBucket {
    pub min: f64,
    pub max: f64,
    pub weights: Vec<KeywordWeight>,
}

impl RangeBucket {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<ChoiceOption>,
    },
    Slider {
        min: f64,
        max: f64,
        min_label: String,
        max_label: String,
        weight_map: Vec<RangeBucket>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => options.iter().find(|o| o.value == value),
            QuestionKind::Slider { .. } => None,
        }
    }
}

/// The user's response to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Answer {
    MultipleChoice {
        question_id: u32,
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
    },
    Slider {
        question_id: u32,
        value: f64,
    },
}

impl Answer {
    pub fn question_id(&self) -> u32 {
        match self {
            Answer::MultipleChoice { question_id, .. } | Answer::Slider { question_id, .. } => {
                *question_id
            }
        }
    }

    pub fn kind_str(&self) -> &'static str {
        match self {
            Answer::MultipleChoice { .. } => "multiple-choice",
            Answer::Slider { .. } => "slider",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_wire_shape() {
        let answer: Answer = serde_json::from_value(json!({
            "type": "multiple-choice",
            "question_id": 2,
            "value": "technology"
        }))
        .unwrap();
        assert_eq!(
            answer,
            Answer::MultipleChoice {
                question_id: 2,
                value: "technology".to_string(),
                weight: None,
            }
        );

        let slider: Answer =
            serde_json::from_value(json!({"type": "slider", "question_id": 5, "value": 7}))
                .unwrap();
        assert_eq!(slider.question_id(), 5);
        assert_eq!(slider.kind_str(), "slider");
    }

    #[test]
    fn test_question_flattens_kind() {
        let q = Question {
            id: 1,
            prompt: "Pick one".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: vec![ChoiceOption {
                    text: "Code".to_string(),
                    value: "programming".to_string(),
                    weight: 3.0,
                }],
            },
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["type"], "multiple-choice");
        assert_eq!(v["options"][0]["value"], "programming");
        assert_eq!(q.option("programming").map(|o| o.weight), Some(3.0));
        assert!(q.option("design").is_none());
    }

    #[test]
    fn test_bucket_bounds_are_inclusive() {
        let bucket = RangeBucket {
            min: 4.0,
            max: 6.0,
            weights: vec![],
        };
        assert!(bucket.contains(4.0));
        assert!(bucket.contains(6.0));
        assert!(!bucket.contains(6.5));
    }
}
