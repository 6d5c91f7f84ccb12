use super::domain::EducationRecord;
use super::heuristics::TextCriterion;

pub(crate) const NO_EDUCATION_SCORE: u8 = 5;
const RELEVANT_SCORE: u8 = 10;
const OTHER_SCORE: u8 = 7;

pub(crate) fn score_education(records: &[EducationRecord], relevant: &dyn TextCriterion) -> u8 {
    if records.is_empty() {
        return NO_EDUCATION_SCORE;
    }

    let text = records
        .iter()
        .map(|record| {
            format!(
                "{} {}",
                record.program,
                record.institution.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if relevant.is_satisfied_by(&text) {
        RELEVANT_SCORE
    } else {
        OTHER_SCORE
    }
}
