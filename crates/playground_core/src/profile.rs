//! Static student profile shown on the profile screen.
//!
//! Nothing here is computed; the values are fixed mock data.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub index: u32,
    pub subject: &'static str,
    pub assessment: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub name: &'static str,
    pub student_no: &'static str,
    pub course: &'static str,
    pub year_level: &'static str,
    pub section: &'static str,
    pub strengths: &'static str,
    pub weaknesses: &'static str,
    /// Weekly average scores plotted in the performance graph.
    pub weekly_scores: Vec<(&'static str, u64)>,
    pub history: Vec<HistoryRow>,
}

const PLACEHOLDER_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

pub fn student_profile() -> StudentProfile {
    StudentProfile {
        name: "Angelica Mae Manliguez",
        student_no: "21-14329-587",
        course: "BS Computer Science",
        year_level: "4th Year",
        section: "4-BSCS-1",
        strengths: PLACEHOLDER_TEXT,
        weaknesses: PLACEHOLDER_TEXT,
        weekly_scores: vec![
            ("W1", 78),
            ("W2", 84),
            ("W3", 81),
            ("W4", 90),
            ("W5", 95),
            ("W6", 97),
        ],
        history: vec![
            HistoryRow {
                index: 1,
                subject: "Java Prog",
                assessment: "If-Else",
                score: 95,
            },
            HistoryRow {
                index: 2,
                subject: "Python",
                assessment: "Basic Python",
                score: 97,
            },
        ],
    }
}
