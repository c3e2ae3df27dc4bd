use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::domain::{Contractor, ContractorId, Job, JobId, JobStatus, SHORT_DATE_FORMAT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractorView {
    pub id: ContractorId,
    pub first_name: String,
    pub last_name: String,
    pub start_date: NaiveDate,
    pub hourly_wage: Decimal,
    pub summary: String,
}

impl From<&Contractor> for ContractorView {
    fn from(contractor: &Contractor) -> Self {
        Self {
            id: contractor.id,
            first_name: contractor.first_name.clone(),
            last_name: contractor.last_name.clone(),
            start_date: contractor.start_date,
            hourly_wage: contractor.hourly_wage,
            summary: contractor.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssigneeView {
    pub id: ContractorId,
    pub name: String,
}

/// Job row with its assignee resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobView {
    pub id: JobId,
    pub title: String,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub completed: bool,
    pub status: JobStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<AssigneeView>,
}

impl JobView {
    pub(crate) fn new(job: &Job, assignee: Option<&Contractor>) -> Self {
        let status = job.status();
        Self {
            id: job.id,
            title: job.title.clone(),
            date: job.date,
            cost: job.cost,
            completed: job.completed,
            status,
            status_label: status.label(),
            assignee: assignee.map(|contractor| AssigneeView {
                id: contractor.id,
                name: contractor.full_name(),
            }),
        }
    }

    pub fn assignee_label(&self) -> &str {
        self.assignee
            .as_ref()
            .map_or("Unassigned", |assignee| assignee.name.as_str())
    }
}

impl fmt::Display for JobView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - ${:.2} - {} - {}",
            self.title,
            self.date.format(SHORT_DATE_FORMAT),
            self.cost,
            self.status_label,
            self.assignee_label()
        )
    }
}

/// Rows for a list widget plus the notice to show when there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

impl<T> Listing<T> {
    pub(crate) fn new(items: Vec<T>, empty_notice: &'static str) -> Self {
        let notice = items.is_empty().then_some(empty_notice);
        Self { items, notice }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
