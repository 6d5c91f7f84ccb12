use serde::{Deserialize, Deserializer, Serialize};

/// Applicant snapshot handed to the engine by whatever boundary collected it.
///
/// Every field is optional on the wire, and an explicit `null` counts as absent; missing
/// data resolves to neutral sub-scores rather than rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(default, alias = "experience", deserialize_with = "null_as_default")]
    pub employment_history: Vec<EmploymentPeriod>,
    #[serde(default, alias = "skill_set", deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, alias = "salary")]
    pub compensation: Option<CompensationExpectation>,
    /// Either a flat list or the job-board shape `{ "primary": [...] }`.
    #[serde(default, deserialize_with = "education_records")]
    pub education: Vec<EducationRecord>,
    #[serde(default, alias = "about")]
    pub summary: Option<String>,
}

/// A single job held by the applicant. Dates stay as submitted text so that
/// malformed values degrade to zero tenure instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentPeriod {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
    /// `None` or blank means the position is still held.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default, alias = "company", deserialize_with = "null_as_default")]
    pub employer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl EmploymentPeriod {
    pub fn new(
        start: impl Into<String>,
        end: Option<&str>,
        employer: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.map(str::to_string),
            employer: employer.into(),
            position: position.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Declared salary expectation: either an exact figure or a range with optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompensationExpectation {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
}

impl CompensationExpectation {
    pub fn exact(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn range(from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            amount: None,
            from,
            to,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(default, alias = "name", deserialize_with = "null_as_default")]
    pub program: String,
    #[serde(default, alias = "organization")]
    pub institution: Option<String>,
}

impl EducationRecord {
    pub fn new(program: impl Into<String>, institution: Option<&str>) -> Self {
        Self {
            program: program.into(),
            institution: institution.map(str::to_string),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EducationField {
    Flat(Vec<EducationRecord>),
    Nested {
        #[serde(default)]
        primary: Option<Vec<EducationRecord>>,
    },
}

fn education_records<'de, D>(deserializer: D) -> Result<Vec<EducationRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<EducationField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(EducationField::Flat(records)) => records,
        Some(EducationField::Nested { primary }) => primary.unwrap_or_default(),
    })
}
