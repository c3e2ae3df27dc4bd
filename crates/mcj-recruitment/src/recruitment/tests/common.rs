use axum::response::Response;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::recruitment::desk::{ContractorForm, JobForm, RecruitmentDesk};
use crate::recruitment::domain::{ContractorId, JobId, NewContractor, NewJob};
use crate::recruitment::repository::RecruitmentSystem;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn amount(value: i64, scale: u32) -> Decimal {
    Decimal::new(value, scale)
}

pub(super) fn contractor(first: &str, last: &str) -> NewContractor {
    NewContractor {
        first_name: first.to_string(),
        last_name: last.to_string(),
        start_date: date(2024, 1, 1),
        hourly_wage: amount(2550, 2),
    }
}

pub(super) fn job(title: &str, cost: i64) -> NewJob {
    NewJob {
        title: title.to_string(),
        date: date(2024, 1, 2),
        cost: amount(cost, 0),
    }
}

/// Three contractors and four jobs; the second job is assigned to the first contractor.
pub(super) struct Seeded {
    pub(super) system: RecruitmentSystem,
    pub(super) john: ContractorId,
    pub(super) maria: ContractorId,
    pub(super) ana: ContractorId,
    pub(super) paint: JobId,
    pub(super) roof: JobId,
    pub(super) fence: JobId,
    pub(super) deck: JobId,
}

pub(super) fn seeded() -> Seeded {
    let mut system = RecruitmentSystem::new();
    let john = system.add_contractor(contractor("JOHN", "DOE"));
    let maria = system.add_contractor(contractor("MARIA", "SILVA"));
    let ana = system.add_contractor(contractor("ANA", "LIMA"));

    let paint = system.add_job(job("PAINT", 120));
    let roof = system.add_job(job("ROOF", 900));
    let fence = system.add_job(job("FENCE", 300));
    let deck = system.add_job(job("DECK", 450));

    system.assign_job(roof, john).expect("roof assignable");

    Seeded {
        system,
        john,
        maria,
        ana,
        paint,
        roof,
        fence,
        deck,
    }
}

pub(super) fn contractor_form(first: &str, last: &str, start: &str, wage: &str) -> ContractorForm {
    ContractorForm {
        first_name: first.to_string(),
        last_name: last.to_string(),
        start_date: start.to_string(),
        hourly_wage: wage.to_string(),
    }
}

pub(super) fn job_form(title: &str, date: Option<NaiveDate>, cost: &str) -> JobForm {
    JobForm {
        title: title.to_string(),
        date,
        cost: cost.to_string(),
    }
}

/// A desk holding one contractor and one job, neither assigned.
pub(super) fn desk_with_records() -> (RecruitmentDesk, ContractorId, JobId) {
    let desk = RecruitmentDesk::default();
    let contractor = desk
        .add_contractor(contractor_form("john", "doe", "2024-01-01", "25.50"))
        .expect("contractor accepted")
        .contractor
        .id;
    let job = desk
        .add_job(job_form("paint", Some(date(2024, 1, 2)), "120"))
        .expect("job accepted")
        .job
        .id;
    (desk, contractor, job)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
