use crate::catalog::ProgramCatalog;
use crate::matching::reasons::program_reasons;
use crate::matching::{MatchResult, MatchStrategy, MatchTarget};
use crate::models::program::Program;
use crate::models::quiz::{Answer, Question, QuestionKind};
use crate::quiz::questions::keyword_questions;

/// Lowest percentage ever displayed, so no program reads as a 0% match.
pub const MIN_MATCH_PERCENTAGE: u32 = 10;

/// Weighted keyword matching against the program catalog.
pub struct KeywordStrategy {
    catalog: ProgramCatalog,
    questions: Vec<Question>,
}

impl KeywordStrategy {
    pub fn new(catalog: ProgramCatalog) -> Self {
        Self {
            catalog,
            questions: keyword_questions(),
        }
    }
}

impl MatchStrategy for KeywordStrategy {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn rank(&self, answers: &[Answer]) -> Vec<MatchResult> {
        compute_matches(answers, &self.questions, self.catalog.all())
    }
}

/// Per-program running tally.
struct Tally<'a> {
    program: &'a Program,
    score: f64,
    /// Insertion-ordered, no duplicates.
    matched: Vec<String>,
}

impl Tally<'_> {
    fn credit(&mut self, keyword: &str, weight: f64) {
        if !self.program.has_keyword(keyword) {
            return;
        }
        self.score += weight;
        if !self.matched.iter().any(|k| k == keyword) {
            self.matched.push(keyword.to_string());
        }
    }
}

/// Ranks every program in `catalog` against `answers`.
///
/// Algorithm:
/// 1. Answer *i* is paired with question *i*.
///    - choice: every program carrying the option's tag gains the answer's weight
///    - slider: every bucket containing the value (inclusive) credits each of
///      its keywords to every program carrying it
/// 2. percentage = round((score - min) / max(max - min, 1) × 100), floored at 10
/// 3. Up to 3 reasons from the matched keywords
/// 4. Stable sort by raw score, descending
pub fn compute_matches(
    answers: &[Answer],
    questions: &[Question],
    catalog: &[Program],
) -> Vec<MatchResult> {
    let mut tallies: Vec<Tally> = catalog
        .iter()
        .map(|program| Tally {
            program,
            score: 0.0,
            matched: Vec::new(),
        })
        .collect();

    for (answer, question) in answers.iter().zip(questions) {
        match (answer, &question.kind) {
            (
                Answer::MultipleChoice {
                    value,
                    weight: Some(weight),
                    ..
                },
                QuestionKind::MultipleChoice { .. },
            ) if *weight != 0.0 => {
                for tally in &mut tallies {
                    tally.credit(value, *weight);
                }
            }
            (Answer::Slider { value, .. }, QuestionKind::Slider { weight_map, .. }) => {
                for bucket in weight_map.iter().filter(|b| b.contains(*value)) {
                    for item in &bucket.weights {
                        for tally in &mut tallies {
                            tally.credit(&item.keyword, item.weight);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    let (min_score, max_score) = tallies
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t.score), hi.max(t.score))
        });
    let range = (max_score - min_score).max(1.0);

    let mut matches: Vec<MatchResult> = tallies
        .into_iter()
        .map(|tally| {
            let raw = ((tally.score - min_score) / range * 100.0).round() as u32;
            MatchResult {
                reasons: program_reasons(&tally.program.key, &tally.matched),
                target: MatchTarget::Program(tally.program.clone()),
                score: tally.score,
                match_percentage: raw.clamp(MIN_MATCH_PERCENTAGE, 100),
            }
        })
        .collect();

    // sort_by is stable: ties keep catalog order
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::{ChoiceOption, KeywordWeight, RangeBucket};

    fn program(key: &str, keywords: &[&str]) -> Program {
        Program {
            key: key.to_string(),
            name: key.to_string(),
            college: "College".to_string(),
            description: String::new(),
            careers: vec![],
            icon: String::new(),
            url: String::new(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            degree_type: "Bachelor".to_string(),
        }
    }

    fn choice_question(id: u32, tags: &[&str]) -> Question {
        Question {
            id,
            prompt: format!("Q{id}"),
            kind: QuestionKind::MultipleChoice {
                options: tags
                    .iter()
                    .map(|t| ChoiceOption {
                        text: t.to_string(),
                        value: t.to_string(),
                        weight: 3.0,
                    })
                    .collect(),
            },
        }
    }

    fn pick(question_id: u32, value: &str, weight: f64) -> Answer {
        Answer::MultipleChoice {
            question_id,
            value: value.to_string(),
            weight: Some(weight),
        }
    }

    fn percentages(matches: &[MatchResult]) -> Vec<(String, u32)> {
        matches
            .iter()
            .map(|m| (m.key(), m.match_percentage))
            .collect()
    }

    #[test]
    fn test_single_match_stretches_to_full_range() {
        let catalog = vec![program("p", &["art"]), program("q", &["law"])];
        let questions = vec![
            choice_question(1, &["art", "x"]),
            choice_question(2, &["y"]),
            choice_question(3, &["z"]),
        ];
        let answers = vec![pick(1, "art", 3.0), pick(2, "y", 3.0), pick(3, "z", 3.0)];

        let matches = compute_matches(&answers, &questions, &catalog);
        assert_eq!(matches[0].score, 3.0);
        assert_eq!(matches[1].score, 0.0);
        assert_eq!(
            percentages(&matches),
            vec![("p".to_string(), 100), ("q".to_string(), 10)]
        );
    }

    #[test]
    fn test_empty_answers_floor_everyone() {
        let catalog = ProgramCatalog::seeded();
        let matches = compute_matches(&[], &keyword_questions(), catalog.all());

        assert_eq!(matches.len(), catalog.all().len());
        assert!(matches.iter().all(|m| m.match_percentage == 10));
        let keys: Vec<String> = matches.iter().map(MatchResult::key).collect();
        let catalog_keys: Vec<String> = catalog.all().iter().map(|p| p.key.clone()).collect();
        assert_eq!(keys, catalog_keys, "ties keep catalog order");
    }

    #[test]
    fn test_equal_nonzero_scores_floor_everyone() {
        let catalog = vec![program("a", &["shared"]), program("b", &["shared"])];
        let questions = vec![choice_question(1, &["shared"])];
        let matches = compute_matches(&[pick(1, "shared", 3.0)], &questions, &catalog);

        assert!(matches.iter().all(|m| m.score == 3.0));
        assert!(matches.iter().all(|m| m.match_percentage == 10));
    }

    #[test]
    fn test_ranks_by_raw_score_not_percentage() {
        let catalog = vec![
            program("low", &["a"]),
            program("high", &["a", "b"]),
            program("mid", &["b"]),
        ];
        let questions = vec![choice_question(1, &["a"]), choice_question(2, &["b"])];
        let answers = vec![pick(1, "a", 1.0), pick(2, "b", 2.0)];

        let matches = compute_matches(&answers, &questions, &catalog);
        let keys: Vec<String> = matches.iter().map(MatchResult::key).collect();
        assert_eq!(keys, vec!["high", "mid", "low"]);
        // min 1, max 3, range 2
        assert_eq!(
            percentages(&matches),
            vec![
                ("high".to_string(), 100),
                ("mid".to_string(), 50),
                ("low".to_string(), 10)
            ]
        );
    }

    #[test]
    fn test_slider_uses_inclusive_bucket() {
        let catalog = vec![program("people", &["social"]), program("loner", &["solo"])];
        let questions = vec![Question {
            id: 1,
            prompt: "How social?".to_string(),
            kind: QuestionKind::Slider {
                min: 1.0,
                max: 10.0,
                min_label: "low".to_string(),
                max_label: "high".to_string(),
                weight_map: vec![
                    RangeBucket {
                        min: 1.0,
                        max: 3.0,
                        weights: vec![KeywordWeight {
                            keyword: "solo".to_string(),
                            weight: 2.0,
                        }],
                    },
                    RangeBucket {
                        min: 4.0,
                        max: 10.0,
                        weights: vec![KeywordWeight {
                            keyword: "social".to_string(),
                            weight: 3.0,
                        }],
                    },
                ],
            },
        }];

        let at_edge = compute_matches(
            &[Answer::Slider {
                question_id: 1,
                value: 3.0,
            }],
            &questions,
            &catalog,
        );
        assert_eq!(at_edge[0].key(), "loner");
        assert_eq!(at_edge[0].score, 2.0);

        let high = compute_matches(
            &[Answer::Slider {
                question_id: 1,
                value: 4.0,
            }],
            &questions,
            &catalog,
        );
        assert_eq!(high[0].key(), "people");
        assert_eq!(high[0].score, 3.0);
    }

    #[test]
    fn test_unweighted_choice_contributes_nothing() {
        let catalog = vec![program("p", &["art"])];
        let questions = vec![choice_question(1, &["art"])];
        let answers = vec![Answer::MultipleChoice {
            question_id: 1,
            value: "art".to_string(),
            weight: None,
        }];

        let matches = compute_matches(&answers, &questions, &catalog);
        assert_eq!(matches[0].score, 0.0);
        assert_eq!(
            matches[0].reasons,
            vec!["This program offers diverse career opportunities that may interest you"]
        );
    }

    #[test]
    fn test_answers_beyond_questions_are_ignored() {
        let catalog = vec![program("p", &["art"])];
        let questions = vec![choice_question(1, &["art"])];
        let answers = vec![pick(1, "art", 3.0), pick(2, "art", 3.0)];

        assert_eq!(compute_matches(&answers, &questions, &catalog)[0].score, 3.0);
    }

    #[test]
    fn test_score_grows_with_more_matching_keywords() {
        let catalog = vec![program("p", &["a", "b", "c"]), program("q", &["z"])];
        let questions = vec![
            choice_question(1, &["a", "z"]),
            choice_question(2, &["b", "z"]),
            choice_question(3, &["c", "z"]),
        ];
        let mut previous = -1.0;
        for hits in 0..=3 {
            let answers: Vec<Answer> = ["a", "b", "c"]
                .iter()
                .zip(1u32..)
                .map(|(tag, id)| {
                    let tag = if id as usize <= hits { tag } else { &"z" };
                    pick(id, tag, 3.0)
                })
                .collect();
            let matches = compute_matches(&answers, &questions, &catalog);
            let p = matches.iter().find(|m| m.key() == "p").unwrap();
            assert!(p.score > previous);
            previous = p.score;
        }
    }

    #[test]
    fn test_percentages_bounded_for_seeded_catalog() {
        let strategy = KeywordStrategy::new(ProgramCatalog::seeded());
        let answers = vec![
            pick(1, "programming", 3.0),
            pick(2, "analytical", 3.0),
            Answer::Slider {
                question_id: 3,
                value: 2.0,
            },
            pick(4, "technical", 3.0),
            Answer::Slider {
                question_id: 5,
                value: 9.0,
            },
            pick(6, "technology", 3.0),
            pick(7, "logical", 2.0),
            Answer::Slider {
                question_id: 8,
                value: 5.0,
            },
            pick(9, "digital", 3.0),
            pick(10, "programming", 2.0),
        ];

        let matches = strategy.rank(&answers);
        assert_eq!(matches[0].key(), "computer-science");
        assert_eq!(matches[0].match_percentage, 100);
        assert!(matches
            .iter()
            .all(|m| (10..=100).contains(&m.match_percentage)));
        assert!(matches.iter().all(|m| !m.reasons.is_empty() && m.reasons.len() <= 3));
        assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    }

    /// Every single-answer variation of a baseline keyword run, with option
    /// weights echoed from the bank the way `AnswerSheet::align` fills them.
    fn keyword_bank_variations() -> Vec<Vec<Answer>> {
        let questions = keyword_questions();
        let baseline: Vec<Answer> = questions
            .iter()
            .map(|q| match &q.kind {
                QuestionKind::MultipleChoice { options } => {
                    pick(q.id, &options[0].value, options[0].weight)
                }
                QuestionKind::Slider { min, .. } => Answer::Slider {
                    question_id: q.id,
                    value: *min,
                },
            })
            .collect();

        let mut runs = Vec::new();
        for (idx, q) in questions.iter().enumerate() {
            let replacements: Vec<Answer> = match &q.kind {
                QuestionKind::MultipleChoice { options } => options
                    .iter()
                    .map(|o| pick(q.id, &o.value, o.weight))
                    .collect(),
                QuestionKind::Slider { min, max, .. } => (*min as i64..=*max as i64)
                    .map(|v| Answer::Slider {
                        question_id: q.id,
                        value: v as f64,
                    })
                    .collect(),
            };
            for replacement in replacements {
                let mut run = baseline.clone();
                run[idx] = replacement;
                runs.push(run);
            }
        }
        runs
    }

    #[test]
    fn test_every_keyword_option_keeps_percentages_and_ranking_sound() {
        let strategy = KeywordStrategy::new(ProgramCatalog::seeded());
        let runs = keyword_bank_variations();
        assert!(runs.len() > keyword_questions().len());

        for answers in runs {
            let matches = strategy.rank(&answers);
            assert_eq!(matches.len(), ProgramCatalog::seeded().all().len());
            assert!(
                matches
                    .iter()
                    .all(|m| (MIN_MATCH_PERCENTAGE..=100).contains(&m.match_percentage)),
                "percentage out of range for {answers:?}"
            );
            assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));

            let top = matches[0].score;
            let bottom = matches.iter().map(|m| m.score).fold(f64::INFINITY, f64::min);
            assert!(matches.iter().all(|m| m.score <= top));
            if top - bottom >= 1.0 {
                assert_eq!(
                    matches[0].match_percentage, 100,
                    "top match below 100 for {answers:?}"
                );
            }
        }
    }
}
