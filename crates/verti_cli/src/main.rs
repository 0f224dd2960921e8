//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `verti_core` linkage without any UI host.
//! - `features` lists the menu; `demo` runs one offline session against a
//!   stub completion and prints its dashboard.

mod config;

use chrono::{NaiveDate, NaiveTime};
use log::error;
use std::process::ExitCode;
use verti_core::{
    core_version, init_logging, AssistantService, ExpenseCategory, ExpenseForm, Feature,
    FeatureError, MeetingRequest, SessionState, StubCompletion, TripRequest,
};

use crate::config::CliConfig;

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("verti_core version={}", core_version());
    match std::env::args().nth(1).as_deref() {
        None => ExitCode::SUCCESS,
        Some("features") => {
            for (i, feature) in Feature::ALL.iter().enumerate() {
                println!("{:>2}. {}", i + 1, feature.label());
            }
            ExitCode::SUCCESS
        }
        Some("demo") => match run_demo() {
            Ok(dashboard) => {
                println!("{dashboard}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("event=demo module=cli status=error");
                eprintln!("demo failed: {err}");
                ExitCode::FAILURE
            }
        },
        Some(other) => {
            eprintln!("unknown command `{other}`; expected `features` or `demo`");
            ExitCode::from(2)
        }
    }
}

fn run_demo() -> Result<String, FeatureError> {
    let service = AssistantService::new(StubCompletion::replying("(offline stub response)"));
    let mut state = SessionState::new();
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();
    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();

    service.plan_trip(
        &mut state,
        &TripRequest {
            destination: "Lisbon".to_string(),
            start_date: day,
            end_date: day.succ_opt().unwrap_or(day),
            preferences: "aisle seat".to_string(),
        },
    )?;
    service.coordinate_meeting(
        &mut state,
        &MeetingRequest {
            date: day,
            time: nine,
            participants: "Ana, Bo".to_string(),
            agenda: "Review Q1 budget and plan Q2 roadmap items".to_string(),
        },
    )?;
    service.add_expense(
        &mut state,
        &ExpenseForm {
            date: day,
            item: "Taxi".to_string(),
            amount: "12.50".to_string(),
            category: ExpenseCategory::Transport,
        },
    )?;
    service.add_reminder(&mut state, "Submit report", day, nine);
    service.prioritize_tasks(&mut state, "Slides\nInvoices")?;

    service.dashboard(&state)
}
