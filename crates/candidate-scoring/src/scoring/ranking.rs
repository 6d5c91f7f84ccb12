//! Batch scoring of an applicant pool into an ordered shortlist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::ApplicantRecord;
use super::rating::Rating;
use super::{ScoreResult, ScoringEngine};

/// An applicant record tagged with the caller's identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantSubmission {
    pub id: String,
    #[serde(alias = "record")]
    pub applicant: ApplicantRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedApplicant {
    /// 1-based position in the full ranking, before any score filter.
    pub position: usize,
    pub id: String,
    pub result: ScoreResult,
}

/// Scores every submission and orders them by total, best first. Equal totals keep their
/// submission order.
pub fn rank(
    engine: &ScoringEngine,
    submissions: &[ApplicantSubmission],
    today: NaiveDate,
) -> Vec<RankedApplicant> {
    let mut scored: Vec<(String, ScoreResult)> = submissions
        .iter()
        .map(|submission| {
            (
                submission.id.clone(),
                engine.score(&submission.applicant, today),
            )
        })
        .collect();

    scored.sort_by(|left, right| right.1.total.cmp(&left.1.total));

    let ranking: Vec<RankedApplicant> = scored
        .into_iter()
        .enumerate()
        .map(|(index, (id, result))| RankedApplicant {
            position: index + 1,
            id,
            result,
        })
        .collect();

    info!(
        applicants = ranking.len(),
        top_total = ranking.first().map(|entry| entry.result.total),
        "applicant pool ranked"
    );
    ranking
}

/// Inclusive bounds on the total score; an absent bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    #[serde(default)]
    pub min: Option<u8>,
    #[serde(default)]
    pub max: Option<u8>,
}

impl ScoreRange {
    pub fn contains(&self, total: u8) -> bool {
        self.min.map_or(true, |min| total >= min) && self.max.map_or(true, |max| total <= max)
    }

    pub fn apply(&self, ranking: Vec<RankedApplicant>) -> Vec<RankedApplicant> {
        ranking
            .into_iter()
            .filter(|entry| self.contains(entry.result.total))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCount {
    pub rating: Rating,
    pub count: usize,
}

/// Aggregate view of a ranking for dashboards and export metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub applicants: usize,
    /// Mean total rounded to one decimal; `0.0` for an empty ranking.
    pub average_total: f64,
    pub min_total: Option<u8>,
    pub max_total: Option<u8>,
    pub by_rating: Vec<RatingCount>,
}

impl RankingSummary {
    pub fn from_ranking(ranking: &[RankedApplicant]) -> Self {
        let totals: Vec<u8> = ranking.iter().map(|entry| entry.result.total).collect();

        let average_total = if totals.is_empty() {
            0.0
        } else {
            let sum: u32 = totals.iter().map(|total| u32::from(*total)).sum();
            (f64::from(sum) / totals.len() as f64 * 10.0).round() / 10.0
        };

        let by_rating = Rating::ALL
            .into_iter()
            .map(|rating| RatingCount {
                rating,
                count: ranking
                    .iter()
                    .filter(|entry| entry.result.rating == rating)
                    .count(),
            })
            .collect();

        Self {
            applicants: totals.len(),
            average_total,
            min_total: totals.iter().copied().min(),
            max_total: totals.iter().copied().max(),
            by_rating,
        }
    }
}
