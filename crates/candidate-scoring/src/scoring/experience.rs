use chrono::{DateTime, Datelike, NaiveDate};

use super::config::TenureBand;
use super::domain::EmploymentPeriod;

pub(crate) const NO_HISTORY_SCORE: u8 = 5;

/// Grades total tenure against the opening's band. Always within `[5, 30]`.
pub(crate) fn score_experience(
    history: &[EmploymentPeriod],
    band: TenureBand,
    today: NaiveDate,
) -> u8 {
    if history.is_empty() {
        return NO_HISTORY_SCORE;
    }

    let years = total_months(history, today) / 12;
    band_score(band, years)
}

pub(crate) fn total_months(history: &[EmploymentPeriod], today: NaiveDate) -> u32 {
    history
        .iter()
        .map(|period| period_months(period, today))
        .sum()
}

/// Calendar-month distance between start and end; the day of month is ignored.
fn period_months(period: &EmploymentPeriod, today: NaiveDate) -> u32 {
    let Some(start) = parse_period_date(&period.start) else {
        return 0;
    };

    let end = match period.end.as_deref().map(str::trim) {
        None | Some("") => today,
        Some(raw) => match parse_period_date(raw) {
            Some(end) => end,
            None => return 0,
        },
    };

    let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    months.max(0) as u32
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM`, and RFC 3339 timestamps.
pub(crate) fn parse_period_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
}

fn band_score(band: TenureBand, years: u32) -> u8 {
    match band {
        TenureBand::OneToThree => match years {
            0 => 15,
            1..=3 => 30,
            4..=6 => 25,
            _ => 20,
        },
        TenureBand::ThreeToSix => match years {
            3..=6 => 30,
            1..=2 => 20,
            7.. => 25,
            _ => 10,
        },
        TenureBand::MoreThanSix => match years {
            6.. => 30,
            3.. => 25,
            1.. => 15,
            _ => 5,
        },
        TenureBand::LessThanOneYear => match years {
            0 => 30,
            1 => 25,
            _ => 15,
        },
        TenureBand::Unspecified => match years {
            5.. => 30,
            3.. => 25,
            1.. => 20,
            _ => 10,
        },
    }
}
