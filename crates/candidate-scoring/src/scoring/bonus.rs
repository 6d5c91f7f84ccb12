use super::domain::ApplicantRecord;
use super::heuristics::Heuristics;

const CHECK_POINTS: u8 = 5;

/// Flat credit for a notable employer and for quantified achievements; `0`, `5`, or `10`.
pub(crate) fn score_bonus(record: &ApplicantRecord, heuristics: &Heuristics) -> u8 {
    let employers = record
        .employment_history
        .iter()
        .map(|period| period.employer.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut narrative = vec![record.summary.as_deref().unwrap_or_default()];
    narrative.extend(
        record
            .employment_history
            .iter()
            .map(|period| period.description.as_deref().unwrap_or_default()),
    );
    let narrative = narrative.join(" ").to_lowercase();

    let mut bonus = 0;
    if heuristics.notable_employer.is_satisfied_by(&employers) {
        bonus += CHECK_POINTS;
    }
    if heuristics.quantified_achievement.is_satisfied_by(&narrative) {
        bonus += CHECK_POINTS;
    }
    bonus
}
