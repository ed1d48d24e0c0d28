use crate::models::quiz::{ChoiceOption, KeywordWeight, Question, QuestionKind, RangeBucket};

fn choice(id: u32, prompt: &str, options: &[(&str, &str, f64)]) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::MultipleChoice {
            options: options
                .iter()
                .map(|(text, value, weight)| ChoiceOption {
                    text: text.to_string(),
                    value: value.to_string(),
                    weight: *weight,
                })
                .collect(),
        },
    }
}

fn slider(
    id: u32,
    prompt: &str,
    (min, max): (f64, f64),
    (min_label, max_label): (&str, &str),
    buckets: &[((f64, f64), &[(&str, f64)])],
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        kind: QuestionKind::Slider {
            min,
            max,
            min_label: min_label.to_string(),
            max_label: max_label.to_string(),
            weight_map: buckets
                .iter()
                .map(|((lo, hi), weights)| RangeBucket {
                    min: *lo,
                    max: *hi,
                    weights: weights
                        .iter()
                        .map(|(keyword, weight)| KeywordWeight {
                            keyword: keyword.to_string(),
                            weight: *weight,
                        })
                        .collect(),
                })
                .collect(),
        },
    }
}

/// Question bank for the keyword strategy. Option values are catalog keywords.
pub fn keyword_questions() -> Vec<Question> {
    vec![
        choice(
            1,
            "Which activity sounds most exciting to you?",
            &[
                ("Building an app or a piece of software", "programming", 3.0),
                ("Sketching a building or an interior space", "design", 3.0),
                ("Looking after someone who is unwell", "healthcare", 3.0),
                ("Leading a team towards a goal", "leadership", 3.0),
                ("Debating a current issue", "debate", 3.0),
                ("Producing content for social media", "media", 3.0),
            ],
        ),
        choice(
            2,
            "Which school subject do you enjoy most?",
            &[
                ("Mathematics", "analytical", 3.0),
                ("Physics", "engineering", 3.0),
                ("Biology", "science", 3.0),
                ("Art and drawing", "artistic", 3.0),
                ("Economics", "business", 3.0),
                ("Languages and literature", "communication", 3.0),
            ],
        ),
        slider(
            3,
            "How much do you enjoy working directly with people?",
            (1.0, 10.0),
            ("I prefer working alone", "I love being around people"),
            &[
                ((1.0, 3.0), &[("technical", 2.0), ("analytical", 1.0)]),
                ((4.0, 6.0), &[("communication", 2.0), ("business", 1.0)]),
                (
                    (7.0, 10.0),
                    &[("people-oriented", 3.0), ("helping", 2.0), ("social", 1.0)],
                ),
            ],
        ),
        choice(
            4,
            "What kind of problem do you most like to solve?",
            &[
                ("Figuring out how a machine or system works", "technical", 3.0),
                ("Working out how a business can grow", "strategic", 3.0),
                ("Making a community healthier", "community", 3.0),
                ("Making something look and feel better", "creative", 3.0),
                ("Deciding whether something is fair", "justice", 3.0),
                ("Getting a message across to an audience", "communication", 2.0),
            ],
        ),
        slider(
            5,
            "How comfortable are you with numbers and calculations?",
            (1.0, 10.0),
            ("Not at all", "Completely at home"),
            &[
                ((1.0, 3.0), &[("creative", 2.0), ("social", 1.0)]),
                ((4.0, 6.0), &[("business", 1.0), ("communication", 1.0)]),
                (
                    (7.0, 10.0),
                    &[("analytical", 3.0), ("engineering", 2.0), ("problem-solving", 1.0)],
                ),
            ],
        ),
        choice(
            6,
            "Where would you most like to work?",
            &[
                ("A technology company", "technology", 3.0),
                ("A hospital or clinic", "medical", 3.0),
                ("A construction site", "construction", 3.0),
                ("A corporate office", "management", 3.0),
                ("A law firm or courtroom", "advocacy", 3.0),
                ("A media agency", "content", 3.0),
                ("An energy plant or oil field", "energy", 3.0),
            ],
        ),
        choice(
            7,
            "Which word describes you best?",
            &[
                ("Innovative", "innovation", 2.0),
                ("Compassionate", "compassionate", 2.0),
                ("Practical", "hands-on", 2.0),
                ("Logical", "logical", 2.0),
                ("Visual", "visual", 2.0),
                ("Decisive", "leadership", 2.0),
            ],
        ),
        slider(
            8,
            "Do you prefer theory or hands-on practice?",
            (1.0, 10.0),
            ("Theory and reading", "Hands-on practice"),
            &[
                ((1.0, 3.0), &[("research", 3.0), ("analytical", 1.0)]),
                ((4.0, 6.0), &[("design", 2.0), ("problem-solving", 1.0)]),
                (
                    (7.0, 10.0),
                    &[("hands-on", 3.0), ("building", 2.0), ("mechanical", 1.0)],
                ),
            ],
        ),
        choice(
            9,
            "Which goal matters most to you?",
            &[
                ("Helping people feel better", "helping", 3.0),
                ("Building roads, bridges and cities", "infrastructure", 3.0),
                ("Running my own business", "entrepreneurship", 3.0),
                ("Advancing knowledge", "research", 3.0),
                ("Protecting the environment", "environmental", 3.0),
                ("Creating digital products", "digital", 3.0),
            ],
        ),
        choice(
            10,
            "Which career appeals to you most?",
            &[
                ("Software developer", "programming", 2.0),
                ("Architect", "spatial", 2.0),
                ("Nurse", "caring", 2.0),
                ("Lawyer", "justice", 2.0),
                ("Executive", "executive", 2.0),
                ("Electrical engineer", "electrical", 2.0),
                ("Speech therapist", "therapy", 2.0),
            ],
        ),
    ]
}

const CATEGORY_QUESTIONS: &[(&str, [&str; 6])] = &[
    (
        "Which activity do you enjoy the most?",
        [
            "Organizing people, plans, or projects",
            "Writing, speaking, or creating media content",
            "Solving technical or logical problems",
            "Designing or visualizing ideas",
            "Caring for or supporting people's health",
            "Debating issues or defending opinions",
        ],
    ),
    (
        "Which school subject do you enjoy most?",
        [
            "Business studies or economics",
            "English, media, or languages",
            "Mathematics, physics, or computer science",
            "Art, design, or technical drawing",
            "Biology or health sciences",
            "Civics, history, or social studies",
        ],
    ),
    (
        "In a group project, you usually:",
        [
            "Lead and organize tasks",
            "Present ideas and communicate",
            "Handle technical or analytical work",
            "Create visuals or designs",
            "Support team members' wellbeing",
            "Analyze rules, instructions, or arguments",
        ],
    ),
    (
        "What kind of problems interest you the most?",
        [
            "How to improve a business or organization",
            "How to communicate ideas effectively",
            "How systems or technology work",
            "How spaces or designs can be improved",
            "How health and care can be improved",
            "How laws, rights, or rules apply",
        ],
    ),
    (
        "Which work environment appeals to you most?",
        [
            "Corporate office or startup",
            "Media or communication agency",
            "Technology or engineering firm",
            "Architecture or design studio",
            "Hospital, clinic, or health organization",
            "Court, legal office, or public institution",
        ],
    ),
    (
        "What personal skill describes you best?",
        [
            "Leadership and decision-making",
            "Communication and creativity",
            "Analytical and logical thinking",
            "Visual imagination",
            "Empathy and patience",
            "Critical thinking and judgment",
        ],
    ),
    (
        "Which statement best describes you?",
        [
            "I enjoy managing people and responsibilities",
            "I enjoy influencing opinions and audiences",
            "I enjoy understanding systems and technology",
            "I enjoy creating visual concepts",
            "I enjoy helping people feel better",
            "I enjoy analyzing issues and arguments",
        ],
    ),
    (
        "Which task would you enjoy the most?",
        [
            "Managing a project or business plan",
            "Creating a presentation or media campaign",
            "Building or programming something",
            "Designing a structure or space",
            "Assisting patients or communities",
            "Studying a case or legal situation",
        ],
    ),
    (
        "You feel most confident when you are:",
        [
            "Making decisions",
            "Speaking or writing clearly",
            "Working with numbers or systems",
            "Sketching or visualizing ideas",
            "Caring for others",
            "Defending your point of view",
        ],
    ),
    (
        "Which career field sounds most interesting to you?",
        [
            "Business and management",
            "Communication and media",
            "Technology or engineering",
            "Architecture and design",
            "Healthcare",
            "Law and legal studies",
        ],
    ),
    (
        "When facing a challenge, you prefer to:",
        [
            "Plan and organize solutions",
            "Communicate and persuade",
            "Analyze and test solutions",
            "Redesign and improve visually",
            "Care and support people",
            "Apply rules and reasoning",
        ],
    ),
    (
        "Which environment do you prefer studying in?",
        [
            "Structured and goal-oriented",
            "Interactive and expressive",
            "Technical and problem-focused",
            "Creative and design-oriented",
            "Caring and people-focused",
            "Formal and rule-based",
        ],
    ),
    (
        "What motivates you the most?",
        [
            "Achievement and leadership",
            "Expression and influence",
            "Innovation and problem-solving",
            "Creativity and design",
            "Helping others",
            "Justice and fairness",
        ],
    ),
    (
        "Your future work should mainly involve:",
        [
            "Managing and organizing",
            "Communicating ideas",
            "Solving technical problems",
            "Designing and planning",
            "Caring for people",
            "Applying laws and regulations",
        ],
    ),
    (
        "Which statement fits you best?",
        [
            "I want to lead or manage organizations",
            "I want to influence people through communication",
            "I want to work with technology or engineering",
            "I want to design buildings or spaces",
            "I want to work in health or care services",
            "I want to work in law or legal institutions",
        ],
    ),
];

pub const CATEGORY_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Question bank for the category strategy: every option is one of the letters A–F.
pub fn category_questions() -> Vec<Question> {
    CATEGORY_QUESTIONS
        .iter()
        .zip(1u32..)
        .map(|((prompt, texts), id)| Question {
            id,
            prompt: prompt.to_string(),
            kind: QuestionKind::MultipleChoice {
                options: texts
                    .iter()
                    .zip(CATEGORY_LETTERS)
                    .map(|(text, letter)| ChoiceOption {
                        text: text.to_string(),
                        value: letter.to_string(),
                        weight: 1.0,
                    })
                    .collect(),
            },
        })
        .collect()
}

/// Reports slider buckets that do not partition `[min, max]` over integer
/// positions: uncovered positions, overlapping positions, and buckets that
/// reach outside the slider bounds.
pub fn range_warnings(questions: &[Question]) -> Vec<String> {
    let mut warnings = Vec::new();

    for question in questions {
        let QuestionKind::Slider {
            min, max, weight_map, ..
        } = &question.kind
        else {
            continue;
        };

        for bucket in weight_map {
            if bucket.min < *min || bucket.max > *max || bucket.min > bucket.max {
                warnings.push(format!(
                    "question {}: bucket {}-{} lies outside slider bounds {}-{}",
                    question.id, bucket.min, bucket.max, min, max
                ));
            }
        }

        let mut position = min.ceil();
        while position <= *max {
            let covering = weight_map.iter().filter(|b| b.contains(position)).count();
            match covering {
                0 => warnings.push(format!(
                    "question {}: slider value {position} is not covered by any bucket",
                    question.id
                )),
                1 => {}
                n => warnings.push(format!(
                    "question {}: slider value {position} falls in {n} buckets",
                    question.id
                )),
            }
            position += 1.0;
        }
    }

    warnings
}
