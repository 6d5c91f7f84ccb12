use super::domain::ApplicantRecord;

const REQUIRED_POINTS: usize = 4;
const REQUIRED_CAP: usize = 15;
const BONUS_POINTS: usize = 3;
const BONUS_CAP: usize = 10;
const SKILLS_CAP: usize = 25;

/// Keyword coverage across skills, job titles, employers, descriptions, and the summary.
pub(crate) fn score_skills(record: &ApplicantRecord, required: &[String], bonus: &[String]) -> u8 {
    let haystack = skills_haystack(record);

    let required_points = (count_hits(&haystack, required) * REQUIRED_POINTS).min(REQUIRED_CAP);
    let bonus_points = (count_hits(&haystack, bonus) * BONUS_POINTS).min(BONUS_CAP);

    (required_points + bonus_points).min(SKILLS_CAP) as u8
}

pub(crate) fn skills_haystack(record: &ApplicantRecord) -> String {
    let mut parts: Vec<&str> = record.skills.iter().map(String::as_str).collect();
    for period in &record.employment_history {
        parts.push(&period.position);
        parts.push(&period.employer);
        parts.push(period.description.as_deref().unwrap_or_default());
    }
    parts.push(record.summary.as_deref().unwrap_or_default());

    parts.join(" ").to_lowercase()
}

/// Each listed keyword counts once per occurrence in the list, so duplicates add up.
fn count_hits(haystack: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.to_lowercase().as_str()))
        .count()
}
