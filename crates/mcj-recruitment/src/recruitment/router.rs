use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::desk::{
    ContractorFilter, ContractorForm, DeskError, JobFilter, JobForm, RecruitmentDesk,
};
use super::domain::{ContractorId, JobId};
use super::repository::RecruitmentError;
use super::validation::ValidationError;

/// Router builder exposing the desk operations as JSON endpoints.
pub fn recruitment_router(desk: RecruitmentDesk) -> Router {
    Router::new()
        .route(
            "/api/v1/contractors",
            post(add_contractor_handler).get(list_contractors_handler),
        )
        .route(
            "/api/v1/contractors/:contractor_id",
            delete(remove_contractor_handler),
        )
        .route(
            "/api/v1/jobs",
            post(add_job_handler).get(list_jobs_handler),
        )
        .route("/api/v1/jobs/by-cost", get(jobs_by_cost_handler))
        .route("/api/v1/jobs/:job_id/assign", post(assign_job_handler))
        .route("/api/v1/jobs/:job_id/complete", post(complete_job_handler))
        .with_state(desk)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContractorListQuery {
    #[serde(default)]
    available: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JobListQuery {
    #[serde(default)]
    unassigned: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CostFilterQuery {
    #[serde(default)]
    min: String,
    #[serde(default)]
    max: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssignRequest {
    #[serde(default)]
    contractor_id: Option<ContractorId>,
}

pub(crate) async fn add_contractor_handler(
    State(desk): State<RecruitmentDesk>,
    Json(form): Json<ContractorForm>,
) -> Result<Response, DeskError> {
    let added = desk.add_contractor(form)?;
    Ok((StatusCode::CREATED, Json(added)).into_response())
}

pub(crate) async fn list_contractors_handler(
    State(desk): State<RecruitmentDesk>,
    Query(query): Query<ContractorListQuery>,
) -> Response {
    let filter = if query.available {
        ContractorFilter::Available
    } else {
        ContractorFilter::All
    };
    Json(desk.contractors(filter)).into_response()
}

pub(crate) async fn remove_contractor_handler(
    State(desk): State<RecruitmentDesk>,
    Path(contractor_id): Path<u64>,
) -> Result<Response, DeskError> {
    let removed = desk.remove_contractor(Some(ContractorId(contractor_id)))?;
    Ok(Json(removed).into_response())
}

pub(crate) async fn add_job_handler(
    State(desk): State<RecruitmentDesk>,
    Json(form): Json<JobForm>,
) -> Result<Response, DeskError> {
    let added = desk.add_job(form)?;
    Ok((StatusCode::CREATED, Json(added)).into_response())
}

pub(crate) async fn list_jobs_handler(
    State(desk): State<RecruitmentDesk>,
    Query(query): Query<JobListQuery>,
) -> Response {
    let filter = if query.unassigned {
        JobFilter::Unassigned
    } else {
        JobFilter::All
    };
    Json(desk.jobs(filter)).into_response()
}

pub(crate) async fn jobs_by_cost_handler(
    State(desk): State<RecruitmentDesk>,
    Query(query): Query<CostFilterQuery>,
) -> Result<Response, DeskError> {
    let listing = desk.jobs_by_cost(&query.min, &query.max)?;
    Ok(Json(listing).into_response())
}

pub(crate) async fn assign_job_handler(
    State(desk): State<RecruitmentDesk>,
    Path(job_id): Path<u64>,
    Json(request): Json<AssignRequest>,
) -> Result<Response, DeskError> {
    let assignment = desk.assign_job(Some(JobId(job_id)), request.contractor_id)?;
    Ok(Json(assignment).into_response())
}

pub(crate) async fn complete_job_handler(
    State(desk): State<RecruitmentDesk>,
    Path(job_id): Path<u64>,
) -> Result<Response, DeskError> {
    let completion = desk.complete_job(Some(JobId(job_id)))?;
    Ok(Json(completion).into_response())
}

impl DeskError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeskError::Validation(
                ValidationError::JobAlreadyAssigned | ValidationError::JobAlreadyCompleted,
            )
            | DeskError::Recruitment(RecruitmentError::JobAlreadyAssigned { .. }) => {
                StatusCode::CONFLICT
            }
            DeskError::Validation(_) => StatusCode::BAD_REQUEST,
            DeskError::Recruitment(
                RecruitmentError::UnknownContractor(_) | RecruitmentError::UnknownJob(_),
            ) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for DeskError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.to_string() });
        (self.status_code(), Json(payload)).into_response()
    }
}
