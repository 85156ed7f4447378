use crate::infra::{load_snapshot, parse_date, ModeArg};
use chrono::{Local, NaiveDate};
use clap::Args;
use qualitrack::config::AppConfig;
use qualitrack::error::AppError;
use qualitrack::workflows::qualifications::{
    resolve_views, EmployeeId, EmployeeQualificationOverview, EvaluationContext, LifecyclePolicy,
    QualificationReport, QualificationReportSummary, ResolvedQualificationView, Roster,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON snapshot with definitions, records and employees
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Additional qualification record CSV export
    #[arg(long)]
    pub(crate) records_csv: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// How the grace period is reported
    #[arg(long, value_enum, default_value_t = ModeArg::Detailed)]
    pub(crate) mode: ModeArg,
    /// Restrict the report to the direct reports of this supervisor
    #[arg(long)]
    pub(crate) supervisor: Option<String>,
    /// Keep employees flagged as inactive
    #[arg(long)]
    pub(crate) include_inactive: bool,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EmployeeArgs {
    /// JSON snapshot with definitions, records and employees
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Employee id to show
    #[arg(long)]
    pub(crate) employee: String,
    /// Additional qualification record CSV export
    #[arg(long)]
    pub(crate) records_csv: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// How the grace period is reported
    #[arg(long, value_enum, default_value_t = ModeArg::Detailed)]
    pub(crate) mode: ModeArg,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

fn evaluation_context(today: Option<NaiveDate>, mode: ModeArg, config: &AppConfig) -> EvaluationContext {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    EvaluationContext::new(today)
        .with_mode(mode.into())
        .with_policy(LifecyclePolicy::from(&config.lifecycle))
}

/// Keeps views of the selected employees. Views of people missing from the
/// snapshot roster only survive when no supervisor filter narrows the scope.
fn select_views(
    views: Vec<ResolvedQualificationView>,
    full: &Roster,
    selected: &Roster,
    narrowed_to_team: bool,
) -> Vec<ResolvedQualificationView> {
    views
        .into_iter()
        .filter(|view| {
            selected.contains(&view.employee_id)
                || (!narrowed_to_team && !full.contains(&view.employee_id))
        })
        .collect()
}

pub(crate) fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let ReportArgs {
        snapshot,
        records_csv,
        today,
        mode,
        supervisor,
        include_inactive,
        json,
    } = args;

    let context = evaluation_context(today, mode, config);
    let snapshot = load_snapshot(&snapshot, records_csv.as_deref())?;
    let catalog = snapshot.catalog();
    let full_roster = snapshot.roster();

    let mut roster = if include_inactive {
        full_roster.clone()
    } else {
        full_roster.active()
    };
    if let Some(supervisor) = &supervisor {
        roster = roster.team(&EmployeeId(supervisor.clone()));
    }

    let views = select_views(
        resolve_views(&catalog, &snapshot.records, &context),
        &full_roster,
        &roster,
        supervisor.is_some(),
    );
    let summary = QualificationReport::aggregate(&roster, &views).summary();

    info!(
        ?config.environment,
        today = %context.now,
        employees = roster.len(),
        qualifications = views.len(),
        completion_rate = summary.totals.completion_rate,
        "qualification report generated"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_report(&summary, context.now);
    }

    Ok(())
}

pub(crate) fn run_employee_overview(args: EmployeeArgs, config: &AppConfig) -> Result<(), AppError> {
    let context = evaluation_context(args.today, args.mode, config);
    let snapshot = load_snapshot(&args.snapshot, args.records_csv.as_deref())?;
    let catalog = snapshot.catalog();
    let roster = snapshot.roster();

    let employee = roster
        .get(&EmployeeId(args.employee.clone()))
        .ok_or_else(|| AppError::UnknownEmployee(args.employee.clone()))?;
    let overview =
        EmployeeQualificationOverview::build(employee, &catalog, &snapshot.records, &context);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        render_overview(&overview, context.now);
    }

    Ok(())
}

fn render_report(summary: &QualificationReportSummary, today: NaiveDate) {
    let totals = &summary.totals;
    println!("Qualification report (evaluated {})", today);
    println!(
        "- {} active | {} expiring soon | {} expired | {} not yet completed",
        totals.active, totals.expiring_soon, totals.expired, totals.not_yet_completed
    );
    println!(
        "- {}% complete | {} employees with expiring, {} with expired qualifications",
        totals.completion_rate, totals.employees_expiring, totals.employees_expired
    );

    if summary.departments.is_empty() {
        println!("\nDepartments: none");
    } else {
        println!("\nDepartments");
        for department in &summary.departments {
            println!(
                "- {} ({} employees): {}% complete, {} active, {} expiring, {} expired",
                department.department_id,
                department.employee_count,
                department.completion_rate,
                department.active,
                department.expiring_soon,
                department.expired
            );
        }
    }

    if !summary.origin_breakdown.is_empty() {
        println!("\nBy origin");
        for origin in &summary.origin_breakdown {
            println!(
                "- {}: {} active, {} expiring, {} expired, {} not yet completed",
                origin.origin_label,
                origin.active,
                origin.expiring_soon,
                origin.expired,
                origin.not_yet_completed
            );
        }
    }

    if summary.renewal_queue.is_empty() {
        println!("\nRenewals due: none");
    } else {
        println!("\nRenewals due");
        for entry in &summary.renewal_queue {
            let who = entry
                .employee_name
                .clone()
                .unwrap_or_else(|| entry.employee_id.to_string());
            let due = entry
                .effective_expiry_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "- {}: {} due {} [{}]",
                who, entry.name, due, entry.status_label
            );
        }
    }
}

fn render_overview(overview: &EmployeeQualificationOverview, today: NaiveDate) {
    println!(
        "{} ({}, department {}) evaluated {}",
        overview.employee_name, overview.employee_id, overview.department_id, today
    );

    if overview.qualifications.is_empty() {
        println!("\nQualifications: none");
    } else {
        println!("\nQualifications");
        for view in &overview.qualifications {
            let expiry = view
                .effective_expiry_date
                .map(|date| format!(", until {date}"))
                .unwrap_or_default();
            println!(
                "- {} [{}] {}{}",
                view.name, view.origin_label, view.status_label, expiry
            );
        }
    }

    if !overview.missing_required.is_empty() {
        println!("\nMissing required qualifications");
        for missing in &overview.missing_required {
            println!("- {} [{}]", missing.name, missing.origin_class.label());
        }
    }
}
