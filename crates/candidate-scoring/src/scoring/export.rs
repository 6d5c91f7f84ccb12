//! CSV export of a ranking: identifier, total, rating, stars, and the six breakdown columns.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::ranking::RankedApplicant;
use super::rating::Rating;
use super::{ScoreBreakdown, ScoreResult};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("unable to flush export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("row '{id}' is inconsistent: {reason}")]
    Inconsistent { id: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub id: String,
    pub total: u8,
    pub rating: Rating,
    pub stars: u8,
    pub experience: u8,
    pub skills: u8,
    pub compensation: u8,
    pub education: u8,
    pub availability: u8,
    pub bonus: u8,
}

impl ExportRow {
    pub fn new(id: impl Into<String>, result: &ScoreResult) -> Self {
        let ScoreBreakdown {
            experience,
            skills,
            compensation,
            education,
            availability,
            bonus,
        } = result.breakdown;

        Self {
            id: id.into(),
            total: result.total,
            rating: result.rating,
            stars: result.stars,
            experience,
            skills,
            compensation,
            education,
            availability,
            bonus,
        }
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            experience: self.experience,
            skills: self.skills,
            compensation: self.compensation,
            education: self.education,
            availability: self.availability,
            bonus: self.bonus,
        }
    }

    /// Rebuilds the score, rejecting rows whose recorded total, rating, or stars disagree
    /// with their breakdown.
    pub fn score_result(&self) -> Result<ScoreResult, ExportError> {
        let result = ScoreResult::from_breakdown(self.breakdown());
        let recorded = (self.total, self.rating, self.stars);
        let derived = (result.total, result.rating, result.stars);

        if recorded != derived {
            return Err(ExportError::Inconsistent {
                id: self.id.clone(),
                reason: format!(
                    "recorded {}/{}/{} but breakdown gives {}/{}/{}",
                    recorded.0, recorded.1, recorded.2, derived.0, derived.1, derived.2
                ),
            });
        }

        Ok(result)
    }
}

/// Column order of every export, written even when the ranking is empty.
pub const EXPORT_HEADER: [&str; 10] = [
    "id",
    "total",
    "rating",
    "stars",
    "experience",
    "skills",
    "compensation",
    "education",
    "availability",
    "bonus",
];

impl From<&RankedApplicant> for ExportRow {
    fn from(entry: &RankedApplicant) -> Self {
        ExportRow::new(entry.id.clone(), &entry.result)
    }
}

pub fn write_export<W: Write>(writer: W, ranking: &[RankedApplicant]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(EXPORT_HEADER)?;
    for entry in ranking {
        csv_writer.serialize(ExportRow::from(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_to_string(ranking: &[RankedApplicant]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_export(&mut buffer, ranking)?;
    Ok(String::from_utf8(buffer)?)
}

/// Parses an export back into rows, validating each row against its own breakdown.
/// Fields are read verbatim so identifiers keep any surrounding whitespace.
pub fn read_export<R: Read>(reader: R) -> Result<Vec<ExportRow>, ExportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<ExportRow>() {
        let row = record?;
        row.score_result()?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, breakdown: ScoreBreakdown, position: usize) -> RankedApplicant {
        RankedApplicant {
            position,
            id: id.to_string(),
            result: ScoreResult::from_breakdown(breakdown),
        }
    }

    fn ranking() -> Vec<RankedApplicant> {
        vec![
            entry(
                "hh-1001",
                ScoreBreakdown {
                    experience: 30,
                    skills: 8,
                    compensation: 15,
                    education: 10,
                    availability: 10,
                    bonus: 10,
                },
                1,
            ),
            entry(
                "hh-1002, \"junior\"",
                ScoreBreakdown {
                    experience: 5,
                    skills: 0,
                    compensation: 8,
                    education: 5,
                    availability: 10,
                    bonus: 0,
                },
                2,
            ),
        ]
    }

    #[test]
    fn writes_header_and_rows() {
        let csv = export_to_string(&ranking()).expect("export renders");
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("id,total,rating,stars,experience,skills,compensation,education,availability,bonus")
        );
        assert_eq!(lines.next(), Some("hh-1001,83,good,4,30,8,15,10,10,10"));
        assert_eq!(
            lines.next(),
            Some("\"hh-1002, \"\"junior\"\"\",28,very low match,1,5,0,8,5,10,0")
        );
    }

    #[test]
    fn read_back_preserves_every_field() {
        let source = ranking();
        let csv = export_to_string(&source).expect("export renders");

        let rows = read_export(csv.as_bytes()).expect("export parses");

        assert_eq!(rows.len(), source.len());
        for (row, entry) in rows.iter().zip(&source) {
            assert_eq!(row.id, entry.id);
            assert_eq!(row.score_result().expect("consistent"), entry.result);
        }
    }

    #[test]
    fn empty_ranking_still_writes_the_header() {
        let csv = export_to_string(&[]).expect("export renders");

        assert_eq!(csv, format!("{}\n", EXPORT_HEADER.join(",")));
        assert!(read_export(csv.as_bytes()).expect("export parses").is_empty());
    }

    #[test]
    fn padded_identifiers_survive_the_round_trip() {
        let mut source = ranking();
        source[0].id = "  hh-7 ".to_string();
        let csv = export_to_string(&source).expect("export renders");

        let rows = read_export(csv.as_bytes()).expect("export parses");

        assert_eq!(rows[0].id, "  hh-7 ");
    }

    #[test]
    fn tampered_total_is_rejected() {
        let csv = "id,total,rating,stars,experience,skills,compensation,education,availability,bonus\n\
                   hh-1,90,excellent,5,5,0,8,5,10,0\n";

        match read_export(csv.as_bytes()) {
            Err(ExportError::Inconsistent { id, .. }) => assert_eq!(id, "hh-1"),
            other => panic!("expected inconsistency, got {other:?}"),
        }
    }

    #[test]
    fn unknown_rating_label_is_a_csv_error() {
        let csv = "id,total,rating,stars,experience,skills,compensation,education,availability,bonus\n\
                   hh-1,28,stellar,1,5,0,8,5,10,0\n";

        assert!(matches!(read_export(csv.as_bytes()), Err(ExportError::Csv(_))));
    }
}
