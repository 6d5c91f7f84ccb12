//! Applicant scoring engine.
//!
//! Six independent evaluators produce capped sub-scores that the aggregator sums into a
//! 0-100 total, a [`Rating`], and a star count. Evaluation never fails: missing or
//! malformed input resolves to a neutral sub-score.

mod availability;
mod bonus;
mod compensation;
mod config;
mod domain;
mod education;
mod experience;
pub mod export;
mod heuristics;
pub mod ranking;
mod rating;
mod skills;

pub use availability::{ActivelySearchingPool, AvailabilitySignal, ACTIVE_SEARCH_SCORE};
pub use config::{
    CompensationCriterion, ExperienceCriterion, OptimalRange, RubricError, ScoringConfiguration,
    SkillsCriterion, TenureBand, WeightOnly,
};
pub use domain::{ApplicantRecord, CompensationExpectation, EducationRecord, EmploymentPeriod};
pub use export::{ExportError, ExportRow};
pub use heuristics::{Heuristics, KeywordCriterion, PatternCriterion, TextCriterion};
pub use ranking::{ApplicantSubmission, RankedApplicant, RankingSummary, ScoreRange};
pub use rating::{Rating, UnknownRating};

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound of each criterion. The caps sum to 100.
pub mod caps {
    pub const EXPERIENCE: u8 = 30;
    pub const SKILLS: u8 = 25;
    pub const COMPENSATION: u8 = 15;
    pub const EDUCATION: u8 = 10;
    pub const AVAILABILITY: u8 = super::ACTIVE_SEARCH_SCORE;
    pub const BONUS: u8 = 10;
    pub const TOTAL: u8 = 100;
}

/// Per-criterion contributions behind a total score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub experience: u8,
    pub skills: u8,
    pub compensation: u8,
    pub education: u8,
    pub availability: u8,
    pub bonus: u8,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> u16 {
        [
            self.experience,
            self.skills,
            self.compensation,
            self.education,
            self.availability,
            self.bonus,
        ]
        .into_iter()
        .map(u16::from)
        .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total: u8,
    pub breakdown: ScoreBreakdown,
    pub rating: Rating,
    pub stars: u8,
}

impl ScoreResult {
    pub fn from_breakdown(breakdown: ScoreBreakdown) -> Self {
        let total = aggregate_total(f64::from(breakdown.sum()));
        let rating = Rating::from_total(total);

        Self {
            total,
            breakdown,
            rating,
            stars: rating.stars(),
        }
    }
}

/// Clamps to `[0, 100]` and rounds half away from zero, which is half-up for the
/// non-negative sums produced here.
pub fn aggregate_total(sum: f64) -> u8 {
    if sum.is_nan() {
        return 0;
    }
    sum.clamp(0.0, f64::from(caps::TOTAL)).round() as u8
}

/// Stateless evaluator binding a rubric to the free-text heuristics and availability signal.
#[derive(Clone)]
pub struct ScoringEngine {
    config: ScoringConfiguration,
    heuristics: Heuristics,
    availability: Arc<dyn AvailabilitySignal>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfiguration) -> Self {
        Self {
            config,
            heuristics: Heuristics::default(),
            availability: Arc::new(ActivelySearchingPool),
        }
    }

    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    pub fn with_availability(mut self, availability: Arc<dyn AvailabilitySignal>) -> Self {
        self.availability = availability;
        self
    }

    pub fn config(&self) -> &ScoringConfiguration {
        &self.config
    }

    /// Scores `record` as of `today`, which stands in for the end of ongoing jobs.
    pub fn score(&self, record: &ApplicantRecord, today: NaiveDate) -> ScoreResult {
        let breakdown = ScoreBreakdown {
            experience: experience::score_experience(
                &record.employment_history,
                self.config.experience.required_band,
                today,
            ),
            skills: skills::score_skills(
                record,
                &self.config.skills.required,
                &self.config.skills.bonus,
            ),
            compensation: compensation::score_compensation(
                record.compensation.as_ref(),
                &self.config.compensation.optimal,
            ),
            education: education::score_education(
                &record.education,
                self.heuristics.relevant_education.as_ref(),
            ),
            availability: self.availability.score(record).min(caps::AVAILABILITY),
            bonus: bonus::score_bonus(record, &self.heuristics),
        };

        let result = ScoreResult::from_breakdown(breakdown);
        debug!(
            total = result.total,
            rating = result.rating.label(),
            ?breakdown,
            "applicant scored"
        );
        result
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfiguration::default())
    }
}

/// One-shot scoring with the default heuristics and availability signal.
pub fn score(
    record: &ApplicantRecord,
    config: &ScoringConfiguration,
    today: NaiveDate,
) -> ScoreResult {
    ScoringEngine::new(config.clone()).score(record, today)
}
