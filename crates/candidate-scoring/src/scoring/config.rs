use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Rubric describing what the opening expects from applicants.
///
/// The per-criterion `weight` values are carried for auditing only; each evaluator applies
/// its own fixed cap (see [`super::caps`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfiguration {
    pub experience: ExperienceCriterion,
    pub skills: SkillsCriterion,
    #[serde(alias = "salary")]
    pub compensation: CompensationCriterion,
    #[serde(default = "WeightOnly::education")]
    pub education: WeightOnly,
    #[serde(default = "WeightOnly::availability", alias = "jobSearchStatus")]
    pub availability: WeightOnly,
    #[serde(default = "WeightOnly::bonus")]
    pub bonus: WeightOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceCriterion {
    #[serde(default)]
    pub weight: u32,
    #[serde(default, alias = "requiredLevel")]
    pub required_band: TenureBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsCriterion {
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub bonus: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationCriterion {
    #[serde(default)]
    pub weight: u32,
    pub optimal: OptimalRange,
}

/// Inclusive salary band the opening budgets for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightOnly {
    pub weight: u32,
}

impl WeightOnly {
    fn education() -> Self {
        Self { weight: 10 }
    }

    fn availability() -> Self {
        Self { weight: 10 }
    }

    fn bonus() -> Self {
        Self { weight: 10 }
    }
}

/// Target range of total work experience for the opening.
///
/// Unrecognised identifiers deserialize to [`TenureBand::Unspecified`], which applies the
/// general-purpose ladder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TenureBand {
    #[serde(alias = "noExperience")]
    LessThanOneYear,
    #[serde(alias = "between1And3")]
    OneToThree,
    #[serde(alias = "between3And6")]
    ThreeToSix,
    #[serde(alias = "moreThan6")]
    MoreThanSix,
    #[default]
    #[serde(rename = "default", other)]
    Unspecified,
}

#[derive(Debug, thiserror::Error)]
pub enum RubricError {
    #[error("unable to read rubric at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("rubric is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("optimal compensation range is invalid (min {min}, max {max})")]
    InvalidOptimalRange { min: f64, max: f64 },
}

impl ScoringConfiguration {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RubricError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RubricError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RubricError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Rejects rubrics the engine cannot interpret. Weight totals other than 100 are
    /// tolerated since the caps are fixed, but they usually signal a copy-paste mistake.
    pub fn validate(&self) -> Result<(), RubricError> {
        let OptimalRange { min, max } = self.compensation.optimal;
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(RubricError::InvalidOptimalRange { min, max });
        }

        let declared = self.declared_weight_total();
        if declared != 100 {
            warn!(
                declared,
                "rubric weights do not sum to 100; fixed criterion caps still apply"
            );
        }

        Ok(())
    }

    /// Sum of the declared weights, widened so arbitrary `u32` inputs cannot overflow.
    pub fn declared_weight_total(&self) -> u64 {
        [
            self.experience.weight,
            self.skills.weight,
            self.compensation.weight,
            self.education.weight,
            self.availability.weight,
            self.bonus.weight,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }
}

impl Default for ScoringConfiguration {
    /// Rubric for a B2B sales manager opening.
    fn default() -> Self {
        Self {
            experience: ExperienceCriterion {
                weight: 30,
                required_band: TenureBand::OneToThree,
            },
            skills: SkillsCriterion {
                weight: 25,
                required: ["CRM", "B2B", "продажи", "переговоры"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                bonus: ["партнерство", "реферральные", "активные продажи"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            },
            compensation: CompensationCriterion {
                weight: 15,
                optimal: OptimalRange {
                    min: 90_000.0,
                    max: 150_000.0,
                },
            },
            education: WeightOnly::education(),
            availability: WeightOnly::availability(),
            bonus: WeightOnly::bonus(),
        }
    }
}
