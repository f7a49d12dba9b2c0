use crate::infra::tool_service;
use chrono::{Duration, NaiveDate, Utc};
use clap::Args;
use std::path::PathBuf;
use vistoflow::error::AppError;
use vistoflow::tools::checklist::{ApplicationKind, PermitCategory};
use vistoflow::tools::clickday::{ClickDayForm, ClickDayOutcome, ClickDaySession};
use vistoflow::tools::eligibility::{EligibilityForm, EligibilityResult};
use vistoflow::tools::residency::{ResidencyResult, TaxResidencyForm};
use vistoflow::tools::IntakeError;

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Path to a JSON file with the raw eligibility form fields
    #[arg(long)]
    pub(crate) form: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ResidencyArgs {
    /// Arrival date in Italy (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) arrival_date: NaiveDate,
    /// Calendar year the assessment targets
    #[arg(long)]
    pub(crate) target_year: i32,
    /// Home country code: US, UK, CA, or OTHER
    #[arg(long)]
    pub(crate) home_country: String,
    /// Days per year the home country tolerates before reclaiming residency
    #[arg(long)]
    pub(crate) max_days_home: u32,
    /// Primary relocation goal: TAX_SAVINGS, LIFESTYLE, FAMILY, or OTHER
    #[arg(long, default_value = "LIFESTYLE")]
    pub(crate) primary_goal: String,
}

#[derive(Args, Debug)]
pub(crate) struct ChecklistArgs {
    /// Permit category: STUDY or NOMAD
    #[arg(long)]
    pub(crate) category: String,
    /// Application kind: FIRST_ISSUE or RENEWAL
    #[arg(long)]
    pub(crate) kind: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full nomad checklist in the demo output
    #[arg(long)]
    pub(crate) include_checklist: bool,
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.form)?;
    let form: EligibilityForm = serde_json::from_str(&raw).map_err(AppError::FormDecode)?;

    let service = tool_service();
    let result = service.score_eligibility(form)?;
    render_eligibility(&result);
    Ok(())
}

pub(crate) fn run_residency(args: ResidencyArgs) -> Result<(), AppError> {
    let ResidencyArgs {
        arrival_date,
        target_year,
        home_country,
        max_days_home,
        primary_goal,
    } = args;

    let form = TaxResidencyForm {
        primary_goal,
        target_year: target_year.to_string(),
        arrival_date: arrival_date.format("%Y-%m-%d").to_string(),
        home_country,
        max_days_home: max_days_home.to_string(),
    };

    let service = tool_service();
    let result = service.score_residency(form)?;
    render_residency(&result);
    Ok(())
}

pub(crate) fn run_checklist(args: ChecklistArgs) -> Result<(), AppError> {
    let Some(category) = PermitCategory::from_slug(&args.category) else {
        return Err(AppError::Intake(IntakeError::UnknownOption {
            field: "category",
            value: args.category,
        }));
    };
    let Some(kind) = ApplicationKind::from_slug(&args.kind) else {
        return Err(AppError::Intake(IntakeError::UnknownOption {
            field: "kind",
            value: args.kind,
        }));
    };

    let service = tool_service();
    match service.checklist(category, kind) {
        Some(document) => {
            print!("{}", document.render_text());
            println!("\nSuggested file name: {}", document.file_name());
        }
        None => println!(
            "No checklist is published yet for {} {}",
            category.label(),
            kind.label()
        ),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = tool_service();

    println!("VistoFlow tools demo");

    println!("\nEligibility: strong applicant");
    let strong = service.score_eligibility(sample_eligibility_form(true))?;
    render_eligibility(&strong);

    println!("\nEligibility: applicant with gaps");
    let weak = service.score_eligibility(sample_eligibility_form(false))?;
    render_eligibility(&weak);

    println!("\nTax residency: mid-July arrival from the US");
    let residency = service.score_residency(TaxResidencyForm {
        primary_goal: "TAX_SAVINGS".to_string(),
        target_year: "2025".to_string(),
        arrival_date: "2025-07-15".to_string(),
        home_country: "US".to_string(),
        max_days_home: "10".to_string(),
    })?;
    render_residency(&residency);

    if args.include_checklist {
        println!("\nNomad first-issue checklist");
        if let Some(document) =
            service.checklist(PermitCategory::Nomad, ApplicationKind::FirstIssue)
        {
            print!("{}", document.render_text());
        }
    }

    println!("\nClick-day simulation (18 seconds to fill the form)");
    let opened = Utc::now();
    let session = ClickDaySession::start(opened);
    let form = ClickDayForm {
        full_name: "Ada Lovelace".to_string(),
        passport: "X1234567".to_string(),
        email: "ada@example.com".to_string(),
        country: "UK".to_string(),
    };
    match session.submit(opened + Duration::seconds(18), &form) {
        Ok(ClickDayOutcome::Won { seconds_left }) => {
            println!("- Submitted with {seconds_left}s to spare");
        }
        Ok(ClickDayOutcome::Lost) => println!("- Quota exceeded, too slow"),
        Err(error) => println!("- Form rejected: {error}"),
    }

    Ok(())
}

fn sample_eligibility_form(strong: bool) -> EligibilityForm {
    EligibilityForm {
        citizenship_non_eu: "true".to_string(),
        work_status: "REMOTE_EMPLOYEE".to_string(),
        work_proof_available: "true".to_string(),
        employer_location_outside_italy: "true".to_string(),
        criminal_record_clean: "true".to_string(),
        highest_qualification: if strong { "BACHELOR" } else { "NONE" }.to_string(),
        remote_exp_months: if strong { "36" } else { "3" }.to_string(),
        contract_duration_12m: "true".to_string(),
        annual_gross_income_eur: if strong { "52000" } else { "26000" }.to_string(),
        dependants_joining: "0".to_string(),
        income_documentation_12m: if strong { "12M" } else { "LESS" }.to_string(),
        accommodation_proof: if strong { "LEASE_12M" } else { "AIRBNB" }.to_string(),
        health_insurance_min_30k: "true".to_string(),
        passport_validity_months: "24".to_string(),
    }
}

fn render_eligibility(result: &EligibilityResult) {
    println!("- Score {} ({})", result.score, result.status.label());
    for line in &result.feedback {
        println!("  - {line}");
    }
    if let Some(action) = &result.affiliate_action {
        println!("  Next step: {} -> {}", action.title, action.link);
    }
}

fn render_residency(result: &ResidencyResult) {
    println!(
        "- Risk {} ({}), {} days in Italy",
        result.risk_score,
        result.status.label(),
        result.days_in_italy
    );
    for line in &result.feedback {
        println!("  - {line}");
    }
    println!(
        "  Next step: {} -> {}",
        result.affiliate_action.title, result.affiliate_action.link
    );
}
