//! Data dashboard rendering.
//!
//! # Responsibility
//! - Assemble every derived view of a session into titled text sections.
//! - Keep numbering 1-based and section order fixed.
//!
//! # Invariants
//! - Every section renders, with an explicit empty-state line when needed.
//! - Reminders render in sorted order; all other sections in append order.

use crate::model::record::MalformedRecordError;
use crate::model::task::TaskRecord;
use crate::store::SessionState;
use crate::view::expenses::{checked_expenses, expense_total};
use crate::view::reminders::{reminder_line, sorted_reminders};
use crate::view::tasks::checked_tasks;

const DASHBOARD_TITLE: &str = "Verti Data Dashboard";

/// One titled block of dashboard lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl DashboardSection {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// Builds the dashboard sections: trips, meetings, expenses, tasks & projects,
/// reminders.
pub fn build_dashboard(state: &SessionState) -> Result<Vec<DashboardSection>, MalformedRecordError> {
    Ok(vec![
        trips_section(state),
        meetings_section(state),
        expenses_section(state)?,
        tasks_section(state)?,
        reminders_section(state),
    ])
}

/// Renders the dashboard as markdown-flavoured text.
pub fn render_dashboard(state: &SessionState) -> Result<String, MalformedRecordError> {
    let sections = build_dashboard(state)?;
    let mut out = format!("## {DASHBOARD_TITLE}\n");
    for section in sections {
        out.push('\n');
        out.push_str("### ");
        out.push_str(section.title);
        out.push('\n');
        for line in section.lines {
            out.push_str(&line);
            out.push('\n');
        }
    }
    Ok(out)
}

fn trips_section(state: &SessionState) -> DashboardSection {
    let mut section = DashboardSection::new("Trips");
    if state.trips().is_empty() {
        section.push("No trips logged yet.");
    }
    for (i, trip) in state.trips().iter().enumerate() {
        section.push(format!(
            "**Trip {}:** {} ({} to {})",
            i + 1,
            trip.destination,
            trip.start_date,
            trip.end_date
        ));
        section.push(format!("Summary: {}", trip.summary));
    }
    section
}

fn meetings_section(state: &SessionState) -> DashboardSection {
    let mut section = DashboardSection::new("Meetings");
    if state.meetings().is_empty() {
        section.push("No meetings logged yet.");
    }
    for (i, meeting) in state.meetings().iter().enumerate() {
        section.push(format!(
            "**Meeting {}:** {} at {}",
            i + 1,
            meeting.date,
            meeting.time
        ));
        section.push(format!("Participants: {}", meeting.participants));
        section.push(format!("Agenda: {}", meeting.agenda));
        section.push(format!("Plan: {}", meeting.plan));
    }
    section
}

fn expenses_section(state: &SessionState) -> Result<DashboardSection, MalformedRecordError> {
    let mut section = DashboardSection::new("Expenses");
    if state.expenses().is_empty() {
        section.push("No expenses logged yet.");
        return Ok(section);
    }
    section.push(format!("Total expenses logged: ${}", expense_total(state)?));
    for expense in checked_expenses(state)? {
        section.push(format!(
            "{}: {} - ${} ({})",
            expense.date, expense.item, expense.amount, expense.category
        ));
    }
    Ok(section)
}

fn tasks_section(state: &SessionState) -> Result<DashboardSection, MalformedRecordError> {
    let mut section = DashboardSection::new("Tasks & Projects");
    if state.tasks().is_empty() {
        section.push("No tasks or projects logged yet.");
    }
    for (i, record) in checked_tasks(state)?.enumerate() {
        match record {
            TaskRecord::Project(project) => {
                section.push(format!("**Project {}:** {}", i + 1, project.project));
                section.push(format!("Goals: {}", project.goals));
                section.push(format!("Status: {}", project.status));
                section.push(format!("Advice: {}", project.advice));
            }
            TaskRecord::Batch(batch) => {
                section.push(format!("**Task Batch {}:**", i + 1));
                section.push(format!("Tasks: {}", batch.tasks));
                section.push(format!("Prioritization: {}", batch.prioritization));
            }
        }
    }
    Ok(section)
}

fn reminders_section(state: &SessionState) -> DashboardSection {
    let mut section = DashboardSection::new("Reminders");
    let reminders = sorted_reminders(state);
    if reminders.is_empty() {
        section.push("No reminders set.");
    }
    for reminder in reminders {
        section.push(reminder_line(reminder));
    }
    section
}
