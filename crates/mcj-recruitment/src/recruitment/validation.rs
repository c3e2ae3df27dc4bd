//! Pure checks run on raw form input before any repository mutation.
//!
//! Each validator returns the parsed values on success so callers never parse the same text
//! twice. The `Display` text of [`ValidationError`] is the message shown to the person filling
//! in the form.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use super::domain::{Contractor, ContractorId, Job, NewContractor, NewJob};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Rejected form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingContractorFields,
    #[error("First and Last Name must contain only letters.")]
    NameNotAlphabetic,
    #[error("Please enter a valid date.")]
    InvalidStartDate,
    #[error("Please enter a valid hourly wage.")]
    InvalidHourlyWage,
    #[error("Hourly wage cannot be negative.")]
    NegativeHourlyWage,
    #[error("Please fill in all job fields.")]
    MissingJobFields,
    #[error("Please enter a valid cost.")]
    InvalidCost,
    #[error("Cost cannot be negative.")]
    NegativeCost,
    #[error("Please select a job and a contractor to assign.")]
    AssignmentSelectionMissing,
    #[error("This job is already assigned.")]
    JobAlreadyAssigned,
    #[error("Please select a job to complete.")]
    CompletionSelectionMissing,
    #[error("This job is already completed.")]
    JobAlreadyCompleted,
    #[error("Please enter at least one valid cost.")]
    NoValidCostBound,
    #[error("Please select a contractor to remove.")]
    RemovalSelectionMissing,
}

/// Optional, inclusive cost bounds accepted by the job filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CostRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

pub fn validate_new_contractor(
    first_name: &str,
    last_name: &str,
    start_date: &str,
    hourly_wage: &str,
) -> Result<NewContractor, ValidationError> {
    if first_name.is_empty()
        || last_name.is_empty()
        || start_date.is_empty()
        || hourly_wage.is_empty()
    {
        return Err(ValidationError::MissingContractorFields);
    }

    if !is_alphabetic(first_name) || !is_alphabetic(last_name) {
        return Err(ValidationError::NameNotAlphabetic);
    }

    let start_date = parse_calendar_date(start_date).ok_or(ValidationError::InvalidStartDate)?;
    let hourly_wage = parse_amount(hourly_wage).ok_or(ValidationError::InvalidHourlyWage)?;

    if hourly_wage < Decimal::ZERO {
        return Err(ValidationError::NegativeHourlyWage);
    }

    Ok(NewContractor {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        start_date,
        hourly_wage,
    })
}

pub fn validate_new_job(
    title: &str,
    date: Option<NaiveDate>,
    cost: &str,
) -> Result<NewJob, ValidationError> {
    let date = match date {
        Some(date) if !title.is_empty() && !cost.is_empty() => date,
        _ => return Err(ValidationError::MissingJobFields),
    };

    let cost = parse_amount(cost).ok_or(ValidationError::InvalidCost)?;
    if cost < Decimal::ZERO {
        return Err(ValidationError::NegativeCost);
    }

    Ok(NewJob {
        title: title.to_string(),
        date,
        cost,
    })
}

/// Checks the selected job and contractor. The job's state is judged before the contractor
/// is looked at, so only the job needs to be resolved.
pub fn validate_assignment(
    job: Option<&Job>,
    contractor: Option<ContractorId>,
) -> Result<(&Job, ContractorId), ValidationError> {
    let (Some(job), Some(contractor)) = (job, contractor) else {
        return Err(ValidationError::AssignmentSelectionMissing);
    };

    if job.is_assigned() {
        return Err(ValidationError::JobAlreadyAssigned);
    }

    Ok((job, contractor))
}

pub fn validate_completion(job: Option<&Job>) -> Result<&Job, ValidationError> {
    let job = job.ok_or(ValidationError::CompletionSelectionMissing)?;

    if job.completed {
        return Err(ValidationError::JobAlreadyCompleted);
    }

    Ok(job)
}

pub fn validate_removal(contractor: Option<&Contractor>) -> Result<&Contractor, ValidationError> {
    contractor.ok_or(ValidationError::RemovalSelectionMissing)
}

/// Parses each bound independently; an unreadable bound means "no bound".
pub fn validate_cost_filter(min: &str, max: &str) -> Result<CostRange, ValidationError> {
    let range = CostRange {
        min: parse_amount(min),
        max: parse_amount(max),
    };

    if range.min.is_none() && range.max.is_none() {
        return Err(ValidationError::NoValidCostBound);
    }

    Ok(range)
}

/// Reads a calendar date written in any of the accepted layouts (day before month when
/// slashes are used).
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|stamp| stamp.date())
        })
}

/// Reads a plain decimal amount. `,` group separators are allowed between digits; currency
/// symbols, `_` separators and exponents are not.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains(['e', 'E', '_']) || !groups_are_well_placed(raw) {
        return None;
    }

    let digits: String = raw.chars().filter(|ch| *ch != ',').collect();
    Decimal::from_str(&digits).ok()
}

/// Every `,` must sit between two ASCII digits.
fn groups_are_well_placed(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().all(|(index, byte)| {
        *byte != b','
            || (index > 0
                && bytes[index - 1].is_ascii_digit()
                && bytes.get(index + 1).is_some_and(u8::is_ascii_digit))
    })
}

fn is_alphabetic(value: &str) -> bool {
    value.chars().all(char::is_alphabetic)
}
