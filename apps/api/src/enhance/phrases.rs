//! Prefix phrase tables for field enhancement. Pure data.

pub const NAME: &[&str] = &["Mr. ", "Ms. ", "Dr. "];

pub const SUMMARY: &[&str] = &[
    "Results-driven professional with proven expertise in ",
    "Dynamic leader with demonstrated success in ",
    "Innovative professional showcasing extensive experience in ",
    "Accomplished specialist with deep knowledge in ",
    "Strategic thinker with comprehensive background in ",
];

pub const SKILLS: &[&str] = &[
    "Advanced proficiency in ",
    "Expert-level knowledge of ",
    "Professional mastery of ",
    "Specialized expertise in ",
    "Deep understanding of ",
];

/// Per-key tables for experience items. `duration` has no entry: dates pass through verbatim.
pub const EXPERIENCE: &[(&str, &[&str])] = &[
    (
        "company",
        &[
            "Leading technology firm ",
            "Industry pioneer ",
            "Global organization ",
            "Renowned company ",
            "Innovative enterprise ",
        ],
    ),
    (
        "role",
        &["Senior ", "Lead ", "Principal ", "Chief ", "Executive "],
    ),
    (
        "description",
        &[
            "Successfully spearheaded initiatives in ",
            "Led cross-functional teams to deliver ",
            "Drove significant improvements in ",
            "Architected and implemented solutions for ",
            "Collaborated effectively to achieve ",
        ],
    ),
];

pub const EDUCATION: &[(&str, &[&str])] = &[
    (
        "institution",
        &[
            "Prestigious ",
            "Renowned ",
            "Leading ",
            "Distinguished ",
            "Top-tier ",
        ],
    ),
    (
        "degree",
        &[
            "Advanced degree in ",
            "Specialized qualification in ",
            "Professional certification in ",
            "Expert-level education in ",
            "Comprehensive studies in ",
        ],
    ),
    (
        "year",
        &["Graduated ", "Completed ", "Class of ", "Finished ", "Earned "],
    ),
    (
        "gpa",
        &[
            "Academic excellence: ",
            "Outstanding performance: ",
            "Superior achievement: ",
            "High academic standing: ",
            "Excellent grades: ",
        ],
    ),
];

/// Looks up the table for `key` in a per-key table set.
pub fn for_key(table: &[(&str, &'static [&'static str])], key: &str) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, phrases)| *phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_is_non_empty() {
        for table in [NAME, SUMMARY, SKILLS] {
            assert!(!table.is_empty());
        }
        for (key, phrases) in EXPERIENCE.iter().chain(EDUCATION) {
            assert!(!phrases.is_empty(), "{key} has no phrases");
        }
    }

    #[test]
    fn test_duration_has_no_table() {
        assert!(for_key(EXPERIENCE, "duration").is_none());
    }

    #[test]
    fn test_for_key_finds_role() {
        let role = for_key(EXPERIENCE, "role").unwrap();
        assert!(role.contains(&"Senior "));
    }
}
