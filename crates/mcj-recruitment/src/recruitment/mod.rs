//! Contractor and job tracking for the recruitment desk.
//!
//! [`RecruitmentSystem`] owns the records, the validators in [`validation`] check raw form
//! input, and [`RecruitmentDesk`] ties the two together behind a lock for presentation layers
//! such as the HTTP router.

pub mod desk;
pub mod domain;
pub mod repository;
pub mod router;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use desk::{
    Assignment, Completion, ContractorAdded, ContractorFilter, ContractorForm, DeskError,
    JobAdded, JobFilter, JobForm, RecruitmentDesk,
};
pub use domain::{
    Contractor, ContractorId, Job, JobId, JobStatus, NewContractor, NewJob, SHORT_DATE_FORMAT,
};
pub use repository::{RecruitmentError, RecruitmentSystem};
pub use router::recruitment_router;
pub use validation::{
    parse_amount, parse_calendar_date, validate_assignment, validate_completion,
    validate_cost_filter, validate_new_contractor, validate_new_job, validate_removal, CostRange,
    ValidationError,
};
pub use views::{AssigneeView, ContractorView, JobView, Listing};
