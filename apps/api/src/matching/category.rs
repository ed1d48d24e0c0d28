use crate::catalog::CategoryCatalog;
use crate::matching::{MatchResult, MatchStrategy, MatchTarget};
use crate::models::quiz::{Answer, Question};
use crate::quiz::questions::category_questions;

const STRONG_THRESHOLD: u32 = 40;
const MODERATE_THRESHOLD: u32 = 25;

const GENERIC_REASON: &str = "Exploring this field could reveal interests you haven't discovered yet";

/// Sentence banks per letter: (strong, moderate, light).
const LETTER_REASONS: &[(char, [&str; 2], [&str; 2], &str)] = &[
    (
        'A',
        [
            "You naturally take charge of people, plans, and projects",
            "Your leadership and decision-making point straight to business",
        ],
        [
            "You enjoy organizing work and setting goals",
            "Business studies would put your planning skills to use",
        ],
        "You show some interest in management and organization",
    ),
    (
        'B',
        [
            "You express ideas clearly and love reaching an audience",
            "Your creativity with words and media stands out",
        ],
        [
            "You enjoy presenting and persuading others",
            "Media work would make use of your communication skills",
        ],
        "You show some interest in communication and media",
    ),
    (
        'C',
        [
            "You thrive on solving technical and logical problems",
            "Your analytical mind is built for technology and engineering",
        ],
        [
            "You like understanding how systems work",
            "Technical problem-solving is one of your strengths",
        ],
        "You show some interest in technology and engineering",
    ),
    (
        'D',
        [
            "You think visually and love designing spaces",
            "Your imagination fits the craft of architecture",
        ],
        [
            "You enjoy sketching and visualizing ideas",
            "Design work would reward your creative eye",
        ],
        "You show some interest in design and architecture",
    ),
    (
        'E',
        [
            "Caring for people's health is clearly what drives you",
            "Your empathy and patience suit the health professions",
        ],
        [
            "You enjoy supporting people's wellbeing",
            "Health care would make use of your compassion",
        ],
        "You show some interest in health and care",
    ),
    (
        'F',
        [
            "You love analyzing arguments and defending a position",
            "Your sense of justice and critical judgment suit the law",
        ],
        [
            "You enjoy debating issues and weighing evidence",
            "Legal studies would sharpen your critical thinking",
        ],
        "You show some interest in law and legal reasoning",
    ),
];

/// Sentences for a category at the given percentage.
pub fn category_reasons(letter: char, percentage: u32) -> Vec<String> {
    let Some((_, strong, moderate, light)) = LETTER_REASONS.iter().find(|(l, ..)| *l == letter)
    else {
        return vec![GENERIC_REASON.to_string()];
    };

    let sentences: Vec<&str> = if percentage >= STRONG_THRESHOLD {
        strong.to_vec()
    } else if percentage >= MODERATE_THRESHOLD {
        moderate.to_vec()
    } else if percentage > 0 {
        vec![*light]
    } else {
        vec![GENERIC_REASON]
    };
    sentences.into_iter().map(str::to_string).collect()
}

/// Counts how often each category letter was chosen.
pub struct CategoryStrategy {
    categories: CategoryCatalog,
    questions: Vec<Question>,
}

impl CategoryStrategy {
    pub fn new(categories: CategoryCatalog) -> Self {
        Self {
            categories,
            questions: category_questions(),
        }
    }
}

impl MatchStrategy for CategoryStrategy {
    fn name(&self) -> &'static str {
        "category"
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn rank(&self, answers: &[Answer]) -> Vec<MatchResult> {
        let total_questions = self.questions.len() as f64;

        let mut matches: Vec<MatchResult> = self
            .categories
            .all()
            .iter()
            .map(|category| {
                let letter = category.letter.to_string();
                let count = answers
                    .iter()
                    .filter(|a| matches!(a, Answer::MultipleChoice { value, .. } if *value == letter))
                    .count() as u32;
                let match_percentage = if total_questions > 0.0 {
                    (count as f64 / total_questions * 100.0).round() as u32
                } else {
                    0
                };

                MatchResult {
                    reasons: category_reasons(category.letter, match_percentage),
                    target: MatchTarget::Category {
                        category: category.clone(),
                        count,
                    },
                    score: count as f64,
                    match_percentage,
                }
            })
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches
    }
}
