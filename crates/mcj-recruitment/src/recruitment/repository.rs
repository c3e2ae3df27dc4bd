use rust_decimal::Decimal;
use tracing::{debug, info};

use super::domain::{Contractor, ContractorId, Job, JobId, NewContractor, NewJob};
use super::views::JobView;

/// In-memory store of every contractor and job, kept in insertion order.
///
/// Jobs refer to contractors through [`ContractorId`] handles; removing a contractor clears
/// the handle from every job that held it.
#[derive(Debug, Clone)]
pub struct RecruitmentSystem {
    contractors: Vec<Contractor>,
    jobs: Vec<Job>,
    next_contractor: u64,
    next_job: u64,
}

impl Default for RecruitmentSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RecruitmentSystem {
    pub fn new() -> Self {
        Self {
            contractors: Vec::new(),
            jobs: Vec::new(),
            next_contractor: 1,
            next_job: 1,
        }
    }

    pub fn add_contractor(&mut self, draft: NewContractor) -> ContractorId {
        let id = ContractorId(self.next_contractor);
        self.next_contractor += 1;

        self.contractors.push(Contractor::from_draft(id, draft));
        info!(contractor_id = %id, "contractor added");
        id
    }

    /// Remove a contractor, releasing every job it was assigned to.
    pub fn remove_contractor(&mut self, id: ContractorId) -> Result<Contractor, RecruitmentError> {
        let position = self
            .contractors
            .iter()
            .position(|contractor| contractor.id == id)
            .ok_or(RecruitmentError::UnknownContractor(id))?;
        let removed = self.contractors.remove(position);

        let mut released = 0usize;
        for job in self.jobs.iter_mut().filter(|job| job.is_assigned_to(id)) {
            job.release();
            released += 1;
        }

        info!(contractor_id = %id, released_jobs = released, "contractor removed");
        Ok(removed)
    }

    pub fn contractor(&self, id: ContractorId) -> Option<&Contractor> {
        self.contractors
            .iter()
            .find(|contractor| contractor.id == id)
    }

    pub fn all_contractors(&self) -> Vec<Contractor> {
        self.contractors.clone()
    }

    /// Contractors that are not the assignee of any job.
    pub fn available_contractors(&self) -> Vec<Contractor> {
        let available: Vec<Contractor> = self
            .contractors
            .iter()
            .filter(|contractor| !self.jobs.iter().any(|job| job.is_assigned_to(contractor.id)))
            .cloned()
            .collect();

        debug!(
            available = available.len(),
            total = self.contractors.len(),
            "listed available contractors"
        );
        available
    }

    pub fn contractor_count(&self) -> usize {
        self.contractors.len()
    }

    pub fn add_job(&mut self, draft: NewJob) -> JobId {
        let id = JobId(self.next_job);
        self.next_job += 1;

        self.jobs.push(Job::from_draft(id, draft));
        info!(job_id = %id, "job added");
        id
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Assign a contractor to a job that has no assignee yet.
    ///
    /// Leaves the job untouched when it is already assigned. A completed job has no assignee,
    /// so it can be assigned again; doing so marks it pending.
    pub fn assign_job(
        &mut self,
        job: JobId,
        contractor: ContractorId,
    ) -> Result<(), RecruitmentError> {
        let contractor_known = self.contractor(contractor).is_some();
        let record = self
            .jobs
            .iter_mut()
            .find(|candidate| candidate.id == job)
            .ok_or(RecruitmentError::UnknownJob(job))?;

        if let Some(assignee) = record.assignee {
            return Err(RecruitmentError::JobAlreadyAssigned { job, assignee });
        }
        if !contractor_known {
            return Err(RecruitmentError::UnknownContractor(contractor));
        }

        record.assign(contractor);
        info!(job_id = %job, contractor_id = %contractor, "job assigned");
        Ok(())
    }

    /// Mark a job completed and clear its assignee, returning the contractor released back to
    /// the pool. Completing an already completed job is not rejected here.
    pub fn complete_job(&mut self, job: JobId) -> Result<Option<ContractorId>, RecruitmentError> {
        let record = self
            .jobs
            .iter_mut()
            .find(|candidate| candidate.id == job)
            .ok_or(RecruitmentError::UnknownJob(job))?;

        let released = record.complete();
        info!(job_id = %job, released = ?released, "job completed");
        Ok(released)
    }

    pub fn all_jobs(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    pub fn unassigned_jobs(&self) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|job| !job.is_assigned())
            .cloned()
            .collect()
    }

    /// Jobs whose cost lies within the inclusive bounds; a missing bound is not applied.
    pub fn jobs_by_cost(&self, min: Option<Decimal>, max: Option<Decimal>) -> Vec<Job> {
        let jobs: Vec<Job> = self
            .jobs
            .iter()
            .filter(|job| job.cost_within(min, max))
            .cloned()
            .collect();

        debug!(?min, ?max, matched = jobs.len(), "filtered jobs by cost");
        jobs
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Resolve the assignee handle so the job can be rendered with a contractor name.
    pub fn job_view(&self, job: &Job) -> JobView {
        let assignee = job.assignee.and_then(|id| self.contractor(id));
        JobView::new(job, assignee)
    }

    pub fn job_views(&self, jobs: &[Job]) -> Vec<JobView> {
        jobs.iter().map(|job| self.job_view(job)).collect()
    }
}

/// Repository precondition failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecruitmentError {
    #[error("contractor {0} not found")]
    UnknownContractor(ContractorId),
    #[error("job {0} not found")]
    UnknownJob(JobId),
    #[error("job {job} is already assigned to {assignee}")]
    JobAlreadyAssigned { job: JobId, assignee: ContractorId },
}
