use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display format for calendar dates shown next to records.
pub const SHORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Repository-assigned handle for a contractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractorId(pub u64);

impl fmt::Display for ContractorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contractor-{:04}", self.0)
    }
}

/// Repository-assigned handle for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{:04}", self.0)
    }
}

/// Validated contractor details waiting for an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContractor {
    pub first_name: String,
    pub last_name: String,
    pub start_date: NaiveDate,
    pub hourly_wage: Decimal,
}

/// Validated job details waiting for an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub date: NaiveDate,
    pub cost: Decimal,
}

/// A worker tracked by the recruitment system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: ContractorId,
    pub first_name: String,
    pub last_name: String,
    pub start_date: NaiveDate,
    pub hourly_wage: Decimal,
}

impl Contractor {
    pub(crate) fn from_draft(id: ContractorId, draft: NewContractor) -> Self {
        let NewContractor {
            first_name,
            last_name,
            start_date,
            hourly_wage,
        } = draft;

        Self {
            id,
            first_name,
            last_name,
            start_date,
            hourly_wage,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Contractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, Start Date: {}, Hourly Wage: ${:.2}",
            self.first_name,
            self.last_name,
            self.start_date.format(SHORT_DATE_FORMAT),
            self.hourly_wage
        )
    }
}

/// A unit of work that may hold a non-owning handle to one contractor.
///
/// A completed job never carries an assignee; `complete` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub completed: bool,
    pub assignee: Option<ContractorId>,
}

impl Job {
    pub(crate) fn from_draft(id: JobId, draft: NewJob) -> Self {
        let NewJob { title, date, cost } = draft;

        Self {
            id,
            title,
            date,
            cost,
            completed: false,
            assignee: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }

    pub fn is_assigned_to(&self, contractor: ContractorId) -> bool {
        self.assignee == Some(contractor)
    }

    pub fn status(&self) -> JobStatus {
        if self.completed {
            JobStatus::Completed
        } else {
            JobStatus::Pending
        }
    }

    pub(crate) fn assign(&mut self, contractor: ContractorId) {
        self.assignee = Some(contractor);
        self.completed = false;
    }

    pub(crate) fn complete(&mut self) -> Option<ContractorId> {
        self.completed = true;
        self.assignee.take()
    }

    pub(crate) fn release(&mut self) {
        self.assignee = None;
        self.completed = false;
    }

    pub fn cost_within(&self, min: Option<Decimal>, max: Option<Decimal>) -> bool {
        let above_min = min.map_or(true, |min| self.cost >= min);
        let below_max = max.map_or(true, |max| self.cost <= max);
        above_min && below_max
    }
}

/// Completion state shown next to a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Completed,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::Completed => "Completed",
        }
    }
}
