use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{ContractorId, JobId};
use super::repository::{RecruitmentError, RecruitmentSystem};
use super::validation::{
    validate_assignment, validate_completion, validate_cost_filter, validate_new_contractor,
    validate_new_job, validate_removal, ValidationError,
};
use super::views::{ContractorView, JobView, Listing};

/// Raw contractor form fields as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub hourly_wage: String,
}

/// Raw job form fields; the date comes from a date picker and may be unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub cost: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContractorFilter {
    #[default]
    All,
    Available,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobFilter {
    #[default]
    All,
    Unassigned,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContractorAdded {
    pub notice: &'static str,
    pub contractor: ContractorView,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobAdded {
    pub notice: &'static str,
    pub job: JobView,
}

#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub notice: String,
    pub job: JobView,
    pub contractor: ContractorView,
}

#[derive(Debug, Clone, Serialize)]
pub struct Completion {
    pub notice: String,
    pub job: JobView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<ContractorView>,
}

/// Shared, form-driven front door to a [`RecruitmentSystem`].
///
/// Every operation holds the lock across validation and mutation, so a removal can never slip
/// between the checks and the change they guard.
#[derive(Debug, Clone, Default)]
pub struct RecruitmentDesk {
    system: Arc<Mutex<RecruitmentSystem>>,
}

impl RecruitmentDesk {
    pub fn new(system: RecruitmentSystem) -> Self {
        Self {
            system: Arc::new(Mutex::new(system)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RecruitmentSystem> {
        self.system.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a read-only closure against the current repository state.
    pub fn inspect<T>(&self, read: impl FnOnce(&RecruitmentSystem) -> T) -> T {
        read(&self.lock())
    }

    pub fn add_contractor(&self, form: ContractorForm) -> Result<ContractorAdded, DeskError> {
        let first_name = form.first_name.trim().to_uppercase();
        let last_name = form.last_name.trim().to_uppercase();

        let draft = validate_new_contractor(
            &first_name,
            &last_name,
            form.start_date.trim(),
            form.hourly_wage.trim(),
        )
        .inspect_err(|err| warn!(reason = %err, "contractor rejected"))?;

        let mut system = self.lock();
        let id = system.add_contractor(draft);
        let contractor = system
            .contractor(id)
            .map(ContractorView::from)
            .ok_or(RecruitmentError::UnknownContractor(id))?;

        Ok(ContractorAdded {
            notice: "Contractor added!",
            contractor,
        })
    }

    pub fn remove_contractor(&self, id: Option<ContractorId>) -> Result<ContractorView, DeskError> {
        let mut system = self.lock();
        let selected = id
            .map(|id| {
                system
                    .contractor(id)
                    .ok_or(RecruitmentError::UnknownContractor(id))
            })
            .transpose()?;
        let id = validate_removal(selected)
            .inspect_err(|err| warn!(reason = %err, "removal rejected"))?
            .id;

        let removed = system.remove_contractor(id)?;
        Ok(ContractorView::from(&removed))
    }

    pub fn contractors(&self, filter: ContractorFilter) -> Listing<ContractorView> {
        let system = self.lock();
        let (contractors, empty_notice) = match filter {
            ContractorFilter::All => (system.all_contractors(), "No contractors found."),
            ContractorFilter::Available => (
                system.available_contractors(),
                "No available contractors found.",
            ),
        };

        Listing::new(
            contractors.iter().map(ContractorView::from).collect(),
            empty_notice,
        )
    }

    pub fn add_job(&self, form: JobForm) -> Result<JobAdded, DeskError> {
        let title = form.title.trim().to_uppercase();

        let draft = validate_new_job(&title, form.date, form.cost.trim())
            .inspect_err(|err| warn!(reason = %err, "job rejected"))?;

        let mut system = self.lock();
        let id = system.add_job(draft);
        let job = system
            .job(id)
            .map(|job| system.job_view(job))
            .ok_or(RecruitmentError::UnknownJob(id))?;

        Ok(JobAdded {
            notice: "Job added!",
            job,
        })
    }

    /// Assign the selected contractor to the selected job.
    ///
    /// A missing selection or a job that already has an assignee is a [`ValidationError`].
    /// Identifiers that do not resolve are reported as [`RecruitmentError`], the contractor
    /// only once the job is known to be free.
    pub fn assign_job(
        &self,
        job: Option<JobId>,
        contractor: Option<ContractorId>,
    ) -> Result<Assignment, DeskError> {
        let mut system = self.lock();

        let selected = job
            .map(|id| system.job(id).ok_or(RecruitmentError::UnknownJob(id)))
            .transpose()?;
        let (job, contractor) = validate_assignment(selected, contractor)
            .map(|(record, contractor)| (record.id, contractor))
            .inspect_err(|err| warn!(reason = %err, "assignment rejected"))?;

        system.assign_job(job, contractor)?;

        let contractor = system
            .contractor(contractor)
            .map(ContractorView::from)
            .ok_or(RecruitmentError::UnknownContractor(contractor))?;
        let job = system
            .job(job)
            .map(|record| system.job_view(record))
            .ok_or(RecruitmentError::UnknownJob(job))?;

        Ok(Assignment {
            notice: format!(
                "Contractor {} {} assigned to job {}.",
                contractor.first_name, contractor.last_name, job.title
            ),
            job,
            contractor,
        })
    }

    pub fn complete_job(&self, job: Option<JobId>) -> Result<Completion, DeskError> {
        let mut system = self.lock();

        let selected = job
            .map(|id| system.job(id).ok_or(RecruitmentError::UnknownJob(id)))
            .transpose()?;
        let job = validate_completion(selected)
            .inspect_err(|err| warn!(reason = %err, "completion rejected"))?
            .id;

        let released = system
            .complete_job(job)?
            .and_then(|id| system.contractor(id))
            .map(ContractorView::from);
        let job = system
            .job(job)
            .map(|record| system.job_view(record))
            .ok_or(RecruitmentError::UnknownJob(job))?;

        Ok(Completion {
            notice: format!("Job '{}' completed!", job.title),
            job,
            released,
        })
    }

    pub fn jobs(&self, filter: JobFilter) -> Listing<JobView> {
        let system = self.lock();
        let (jobs, empty_notice) = match filter {
            JobFilter::All => (system.all_jobs(), "No jobs found."),
            JobFilter::Unassigned => (system.unassigned_jobs(), "No unassigned jobs found."),
        };

        Listing::new(system.job_views(&jobs), empty_notice)
    }

    pub fn jobs_by_cost(&self, min: &str, max: &str) -> Result<Listing<JobView>, DeskError> {
        let range = validate_cost_filter(min.trim(), max.trim())?;

        let system = self.lock();
        let jobs = system.jobs_by_cost(range.min, range.max);
        Ok(Listing::new(
            system.job_views(&jobs),
            "No jobs found in the selected cost range.",
        ))
    }
}

/// Error raised by the recruitment desk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Recruitment(#[from] RecruitmentError),
}
