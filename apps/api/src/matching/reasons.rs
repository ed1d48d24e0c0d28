const MAX_REASONS: usize = 3;

const KEYWORD_REASONS: &[(&str, &str)] = &[
    ("technology", "You show strong interest in technology and digital solutions"),
    ("creative", "Your creative nature aligns well with this field"),
    ("helping", "Your desire to help others matches this career path"),
    ("business", "Your business mindset fits well with this program"),
    ("analytical", "Your analytical thinking skills are perfect for this field"),
    ("design", "Your design interests align with this program"),
    ("healthcare", "Your interest in healthcare makes this a great fit"),
    ("research", "Your research interests match this academic path"),
    ("communication", "Your communication skills are valuable in this field"),
    ("leadership", "Your leadership qualities suit this career path"),
    ("engineering", "Your technical and problem-solving skills fit engineering"),
    ("science", "Your scientific interests align with this program"),
    ("innovation", "Your innovative mindset matches this field"),
    ("people-oriented", "Your people skills are essential for this career"),
    ("hands-on", "Your practical approach suits this hands-on field"),
];

/// (program key, keyword) pairs that earn an extra program-specific sentence.
const PROGRAM_BONUSES: &[(&str, &str, &str)] = &[
    (
        "computer-science",
        "technology",
        "The program's focus on AI and software development matches your interests",
    ),
    (
        "architecture",
        "creative",
        "The creative design aspects appeal to your artistic nature",
    ),
    (
        "nursing",
        "helping",
        "Your compassionate nature is perfect for healthcare",
    ),
    (
        "business-administration",
        "leadership",
        "Your leadership skills align with business management roles",
    ),
];

pub const FALLBACK_REASON: &str =
    "This program offers diverse career opportunities that may interest you";

/// Up to three sentences explaining a program match: one per matched keyword
/// (in match order), then program-specific bonuses.
pub fn program_reasons(program_key: &str, matched: &[String]) -> Vec<String> {
    let mut reasons: Vec<String> = matched
        .iter()
        .filter_map(|keyword| {
            KEYWORD_REASONS
                .iter()
                .find(|(k, _)| k == keyword)
                .map(|(_, sentence)| sentence.to_string())
        })
        .collect();

    reasons.extend(
        PROGRAM_BONUSES
            .iter()
            .filter(|(key, keyword, _)| *key == program_key && matched.iter().any(|m| m == keyword))
            .map(|(_, _, sentence)| sentence.to_string()),
    );

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_no_matches_falls_back() {
        assert_eq!(program_reasons("law", &[]), vec![FALLBACK_REASON]);
    }

    #[test]
    fn test_keywords_without_sentences_fall_back() {
        assert_eq!(
            program_reasons("law", &kw(&["debate", "justice"])),
            vec![FALLBACK_REASON]
        );
    }

    #[test]
    fn test_bonus_follows_keyword_sentences() {
        let reasons = program_reasons("nursing", &kw(&["helping"]));
        assert_eq!(
            reasons,
            vec![
                "Your desire to help others matches this career path",
                "Your compassionate nature is perfect for healthcare",
            ]
        );
    }

    #[test]
    fn test_bonus_only_for_its_program() {
        let reasons = program_reasons("public-health", &kw(&["helping"]));
        assert_eq!(reasons.len(), 1);
    }

    #[test]
    fn test_truncated_to_three_in_match_order() {
        let reasons = program_reasons(
            "computer-science",
            &kw(&["analytical", "technology", "innovation", "programming"]),
        );
        assert_eq!(reasons.len(), 3);
        assert!(reasons[0].contains("analytical"));
        assert!(reasons[1].contains("technology"));
        assert!(reasons[2].contains("innovative"));
    }
}
