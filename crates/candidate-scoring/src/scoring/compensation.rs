use super::config::OptimalRange;
use super::domain::CompensationExpectation;

pub(crate) const UNKNOWN_COMPENSATION_SCORE: u8 = 8;
const OVER_BUDGET_TOLERANCE: f64 = 1.5;

pub(crate) fn score_compensation(
    expectation: Option<&CompensationExpectation>,
    optimal: &OptimalRange,
) -> u8 {
    let Some(expected) = expectation.and_then(resolve_expectation) else {
        return UNKNOWN_COMPENSATION_SCORE;
    };

    if expected >= optimal.min && expected <= optimal.max {
        15
    } else if expected < optimal.min {
        12
    } else if expected <= optimal.max * OVER_BUDGET_TOLERANCE {
        10
    } else {
        8
    }
}

/// Exact amount first, then the midpoint of a full range, then whichever bound exists.
/// Zero and non-finite figures are treated as not declared.
pub(crate) fn resolve_expectation(expectation: &CompensationExpectation) -> Option<f64> {
    let declared = |value: Option<f64>| value.filter(|figure| figure.is_finite() && *figure != 0.0);

    match (
        declared(expectation.amount),
        declared(expectation.from),
        declared(expectation.to),
    ) {
        (Some(amount), _, _) => Some(amount),
        (None, Some(from), Some(to)) => Some((from + to) / 2.0),
        (None, Some(bound), None) | (None, None, Some(bound)) => Some(bound),
        (None, None, None) => None,
    }
}
