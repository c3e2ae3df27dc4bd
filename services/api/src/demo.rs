use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use mcj_recruitment::error::AppError;
use mcj_recruitment::recruitment::{
    ContractorFilter, ContractorForm, ContractorView, DeskError, JobFilter, JobForm, JobView,
    Listing, RecruitmentDesk,
};
use std::fmt::Display;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date the demo contractors start (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Leave the assigned job open instead of completing it.
    #[arg(long)]
    pub(crate) skip_completion: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        skip_completion,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let desk = RecruitmentDesk::default();

    println!("Recruitment desk demo ({today})");

    println!("\nAdding contractors");
    let john = desk.add_contractor(contractor_form("John", "Doe", today, "25.50"))?;
    println!("- {}: {}", john.notice, john.contractor.summary);
    let maria = desk.add_contractor(contractor_form("Maria", "Silva", today, "35.50"))?;
    println!("- {}: {}", maria.notice, maria.contractor.summary);
    report_rejection(desk.add_contractor(contractor_form("Ana", "Lima", today, "-10")));

    println!("\nAdding jobs");
    let paint = desk.add_job(job_form("Paint", today + Duration::days(1), "120"))?;
    println!("- {}: {}", paint.notice, paint.job);
    let roof = desk.add_job(job_form("Roof", today + Duration::days(7), "900"))?;
    println!("- {}: {}", roof.notice, roof.job);
    report_rejection(desk.add_job(JobForm {
        title: "Fence".to_string(),
        date: None,
        cost: "300".to_string(),
    }));

    println!("\nAssigning work");
    let assignment = desk.assign_job(Some(paint.job.id), Some(john.contractor.id))?;
    println!("- {}", assignment.notice);
    report_rejection(desk.assign_job(Some(paint.job.id), Some(maria.contractor.id)));

    render_contractors("Available contractors", &desk.contractors(ContractorFilter::Available));
    render_jobs("Unassigned jobs", &desk.jobs(JobFilter::Unassigned));

    if !skip_completion {
        println!("\nCompleting work");
        let completion = desk.complete_job(Some(paint.job.id))?;
        println!("- {}", completion.notice);
        if let Some(released) = &completion.released {
            println!(
                "  {} {} is available again",
                released.first_name, released.last_name
            );
        }
        report_rejection(desk.complete_job(Some(paint.job.id)));
    }

    render_jobs("Jobs costing 100 to 500", &desk.jobs_by_cost("100", "500")?);
    report_rejection(desk.jobs_by_cost("", "cheap"));

    println!("\nRemoving {}", maria.contractor.summary);
    desk.remove_contractor(Some(maria.contractor.id))?;
    render_contractors("All contractors", &desk.contractors(ContractorFilter::All));
    render_jobs("All jobs", &desk.jobs(JobFilter::All));

    Ok(())
}

fn contractor_form(first: &str, last: &str, start: NaiveDate, wage: &str) -> ContractorForm {
    ContractorForm {
        first_name: first.to_string(),
        last_name: last.to_string(),
        start_date: start.format("%Y-%m-%d").to_string(),
        hourly_wage: wage.to_string(),
    }
}

fn job_form(title: &str, date: NaiveDate, cost: &str) -> JobForm {
    JobForm {
        title: title.to_string(),
        date: Some(date),
        cost: cost.to_string(),
    }
}

fn report_rejection<T>(result: Result<T, DeskError>) {
    if let Err(err) = result {
        println!("  Rejected: {err}");
    }
}

fn render_contractors(heading: &str, listing: &Listing<ContractorView>) {
    println!("\n{heading}");
    render_rows(listing, |contractor| &contractor.summary);
}

fn render_jobs(heading: &str, listing: &Listing<JobView>) {
    println!("\n{heading}");
    render_rows(listing, |job| job);
}

fn render_rows<T, D: Display + ?Sized>(listing: &Listing<T>, row: impl Fn(&T) -> &D) {
    if let Some(notice) = listing.notice {
        println!("- {notice}");
        return;
    }
    for item in &listing.items {
        println!("- {}", row(item));
    }
}
