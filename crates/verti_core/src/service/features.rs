//! Assistant menu features.
//!
//! # Responsibility
//! - Run one menu feature end to end: typed input, prompt, completion,
//!   optional append to the session.
//! - Map every failure to `FeatureError` for the presentation layer.
//!
//! # Invariants
//! - Completion text is trimmed; blank text counts as a failed completion.
//! - A feature appends only after its completion succeeded.
//! - Logs carry metadata only, never user text or completion bodies.

use chrono::{NaiveDate, NaiveTime};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::completion::{Completion, CompletionError};
use crate::model::expense::{Expense, ExpenseCategory};
use crate::model::input::{parse_amount, ValidationError};
use crate::model::record::MalformedRecordError;
use crate::model::reminder::Reminder;
use crate::model::task::{ProjectRecord, TaskBatch};
use crate::service::mutators::{
    record_expense, record_meeting, record_reminder, record_task, record_trip,
};
use crate::service::prompts;
use crate::store::SessionState;
use crate::view::dashboard::render_dashboard;
use crate::view::expenses::expense_report_lines;
use crate::view::meetings::{find_meeting_by_label, LookupError};

pub type FeatureResult<T> = Result<T, FeatureError>;

/// Error returned by feature handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    Validation(ValidationError),
    Completion(CompletionError),
    Lookup(LookupError),
    Malformed(MalformedRecordError),
}

impl Display for FeatureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Completion(err) => write!(f, "{err}"),
            Self::Lookup(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FeatureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Completion(err) => Some(err),
            Self::Lookup(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<ValidationError> for FeatureError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CompletionError> for FeatureError {
    fn from(value: CompletionError) -> Self {
        Self::Completion(value)
    }
}

impl From<LookupError> for FeatureError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

impl From<MalformedRecordError> for FeatureError {
    fn from(value: MalformedRecordError) -> Self {
        Self::Malformed(value)
    }
}

/// Assistant menu entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    PlanBusinessTrip,
    DraftCorrespondence,
    CoordinateMeetings,
    MeetingFollowUps,
    ProjectManagement,
    OffloadRoutineTasks,
    ExpenseTracking,
    Reminders,
    DocumentSummarization,
    TaskPrioritization,
    DataDashboard,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::PlanBusinessTrip,
        Feature::DraftCorrespondence,
        Feature::CoordinateMeetings,
        Feature::MeetingFollowUps,
        Feature::ProjectManagement,
        Feature::OffloadRoutineTasks,
        Feature::ExpenseTracking,
        Feature::Reminders,
        Feature::DocumentSummarization,
        Feature::TaskPrioritization,
        Feature::DataDashboard,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlanBusinessTrip => "Plan Business Trip",
            Self::DraftCorrespondence => "Draft Correspondence",
            Self::CoordinateMeetings => "Coordinate Meetings",
            Self::MeetingFollowUps => "Meeting Follow-ups",
            Self::ProjectManagement => "Project Management",
            Self::OffloadRoutineTasks => "Offload Routine Tasks",
            Self::ExpenseTracking => "Expense Tracking & Reporting",
            Self::Reminders => "Reminders & Alerts",
            Self::DocumentSummarization => "Document Summarization",
            Self::TaskPrioritization => "Task Prioritization Assistant",
            Self::DataDashboard => "Data Dashboard",
        }
    }

    /// Stable snake_case id used in log lines.
    pub fn id(self) -> &'static str {
        match self {
            Self::PlanBusinessTrip => "plan_trip",
            Self::DraftCorrespondence => "draft_correspondence",
            Self::CoordinateMeetings => "coordinate_meeting",
            Self::MeetingFollowUps => "meeting_follow_up",
            Self::ProjectManagement => "project_management",
            Self::OffloadRoutineTasks => "offload_routine_task",
            Self::ExpenseTracking => "expense_tracking",
            Self::Reminders => "reminders",
            Self::DocumentSummarization => "document_summary",
            Self::TaskPrioritization => "task_prioritization",
            Self::DataDashboard => "data_dashboard",
        }
    }

    /// Resolves a menu label back to its feature.
    pub fn from_label(label: &str) -> Option<Feature> {
        let normalized = label.trim();
        Self::ALL
            .into_iter()
            .find(|feature| feature.label() == normalized)
    }
}

/// Correspondence template offered by the drafting feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrespondenceKind {
    BusinessEmail,
    ThankYouNote,
    FollowUpEmail,
    MeetingRequest,
}

impl CorrespondenceKind {
    pub const ALL: [CorrespondenceKind; 4] = [
        CorrespondenceKind::BusinessEmail,
        CorrespondenceKind::ThankYouNote,
        CorrespondenceKind::FollowUpEmail,
        CorrespondenceKind::MeetingRequest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BusinessEmail => "Business Email",
            Self::ThankYouNote => "Thank You Note",
            Self::FollowUpEmail => "Follow-up Email",
            Self::MeetingRequest => "Meeting Request",
        }
    }

    /// Parses a correspondence label (case-insensitive).
    pub fn parse(value: &str) -> Result<CorrespondenceKind, ValidationError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ValidationError::UnknownCorrespondenceKind(normalized.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Airlines, hotel types, budget.
    pub preferences: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub participants: String,
    pub agenda: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub project: String,
    pub goals: String,
    pub status: String,
    /// Used for the prompt only; not stored on the project record.
    pub challenges: String,
}

/// Expense form input; `amount` is raw text and is coerced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub date: NaiveDate,
    pub item: String,
    pub amount: String,
    pub category: ExpenseCategory,
}

/// Runs assistant features against a caller-owned session.
pub struct AssistantService<C: Completion> {
    completion: C,
}

impl<C: Completion> AssistantService<C> {
    /// Creates a service using the provided completion adapter.
    pub fn new(completion: C) -> Self {
        Self { completion }
    }

    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// Plans a trip and records it with the plan as summary.
    pub fn plan_trip(
        &self,
        state: &mut SessionState,
        request: &TripRequest,
    ) -> FeatureResult<String> {
        let prompt = prompts::trip_plan(
            &request.destination,
            request.start_date,
            request.end_date,
            &request.preferences,
        );
        let plan = self.request(Feature::PlanBusinessTrip, &prompt)?;
        record_trip(
            state,
            request.destination.clone(),
            request.start_date,
            request.end_date,
            plan.clone(),
        );
        Ok(plan)
    }

    /// Drafts a piece of correspondence. Nothing is recorded.
    pub fn draft_correspondence(
        &self,
        kind: CorrespondenceKind,
        context: &str,
    ) -> FeatureResult<String> {
        let prompt = prompts::correspondence(kind.label(), context);
        self.request(Feature::DraftCorrespondence, &prompt)
    }

    /// Generates a meeting plan and records the meeting.
    pub fn coordinate_meeting(
        &self,
        state: &mut SessionState,
        request: &MeetingRequest,
    ) -> FeatureResult<String> {
        let prompt = prompts::meeting_plan(
            request.date,
            request.time,
            &request.participants,
            &request.agenda,
        );
        let plan = self.request(Feature::CoordinateMeetings, &prompt)?;
        record_meeting(
            state,
            request.date,
            request.time,
            request.participants.clone(),
            request.agenda.clone(),
            plan.clone(),
        );
        Ok(plan)
    }

    /// Drafts a follow-up email for the meeting selected by label.
    ///
    /// # Errors
    /// - `FeatureError::Lookup` when no recorded meeting carries `label`;
    ///   the completion port is not called in that case.
    pub fn draft_follow_up(
        &self,
        state: &SessionState,
        label: &str,
        notes: &str,
    ) -> FeatureResult<String> {
        let (_, meeting) = find_meeting_by_label(state, label)?;
        let prompt = prompts::follow_up(meeting, notes);
        self.request(Feature::MeetingFollowUps, &prompt)
    }

    /// Gets project advice and records the project snapshot.
    ///
    /// # Errors
    /// - `FeatureError::Validation` for a blank project name; the completion
    ///   port is not called then.
    pub fn manage_project(
        &self,
        state: &mut SessionState,
        request: &ProjectRequest,
    ) -> FeatureResult<String> {
        if request.project.trim().is_empty() {
            return Err(ValidationError::EmptyProjectName.into());
        }
        let prompt = prompts::project_advice(
            &request.project,
            &request.goals,
            &request.status,
            &request.challenges,
        );
        let advice = self.request(Feature::ProjectManagement, &prompt)?;
        record_task(
            state,
            ProjectRecord {
                project: request.project.clone(),
                goals: request.goals.clone(),
                status: request.status.clone(),
                advice: advice.clone(),
            },
        );
        Ok(advice)
    }

    /// Suggests automation for a routine task. Nothing is recorded.
    pub fn offload_routine_task(&self, description: &str) -> FeatureResult<String> {
        let prompt = prompts::routine_automation(description);
        self.request(Feature::OffloadRoutineTasks, &prompt)
    }

    /// Coerces and records one expense. No completion is involved.
    ///
    /// # Errors
    /// - `FeatureError::Validation` when the amount is malformed or negative;
    ///   nothing is recorded then.
    pub fn add_expense(
        &self,
        state: &mut SessionState,
        form: &ExpenseForm,
    ) -> FeatureResult<Expense> {
        let amount = parse_amount(&form.amount).inspect_err(|_| {
            warn!(
                "event=input_rejected module=features feature={} status=error field=amount",
                Feature::ExpenseTracking.id()
            );
        })?;
        record_expense(state, form.date, form.item.clone(), amount, form.category);
        Ok(Expense::new(form.date, form.item.clone(), amount, form.category))
    }

    /// Summarizes all logged expenses.
    ///
    /// Returns `Ok(None)` without calling the completion port when no
    /// expense has been logged yet.
    pub fn summarize_expenses(&self, state: &SessionState) -> FeatureResult<Option<String>> {
        if state.expenses().is_empty() {
            return Ok(None);
        }
        let lines = expense_report_lines(state)?;
        let prompt = prompts::expense_summary(&lines);
        self.request(Feature::ExpenseTracking, &prompt).map(Some)
    }

    /// Records a reminder due at `date` + `time`.
    pub fn add_reminder(
        &self,
        state: &mut SessionState,
        text: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Reminder {
        let reminder = Reminder::at(text, date, time);
        record_reminder(state, reminder.text.clone(), reminder.datetime);
        reminder
    }

    /// Summarizes a pasted document. Nothing is recorded.
    pub fn summarize_document(&self, text: &str) -> FeatureResult<String> {
        let prompt = prompts::document_summary(text);
        self.request(Feature::DocumentSummarization, &prompt)
    }

    /// Ranks a task list and records it as a task batch.
    pub fn prioritize_tasks(&self, state: &mut SessionState, tasks: &str) -> FeatureResult<String> {
        let prompt = prompts::task_prioritization(tasks);
        let prioritization = self.request(Feature::TaskPrioritization, &prompt)?;
        record_task(
            state,
            TaskBatch {
                tasks: tasks.to_string(),
                prioritization: prioritization.clone(),
            },
        );
        Ok(prioritization)
    }

    /// Renders the session dashboard.
    pub fn dashboard(&self, state: &SessionState) -> FeatureResult<String> {
        Ok(render_dashboard(state)?)
    }

    fn request(&self, feature: Feature, prompt: &str) -> FeatureResult<String> {
        let outcome = self
            .completion
            .complete(prompt)
            .and_then(|text| match text.trim() {
                "" => Err(CompletionError::EmptyResponse),
                trimmed => Ok(trimmed.to_string()),
            });

        match &outcome {
            Ok(text) => info!(
                "event=completion module=features feature={} status=ok prompt_chars={} response_chars={}",
                feature.id(),
                prompt.chars().count(),
                text.chars().count()
            ),
            Err(err) => warn!(
                "event=completion module=features feature={} status=error prompt_chars={} error_kind={}",
                feature.id(),
                prompt.chars().count(),
                completion_error_kind(err)
            ),
        }

        Ok(outcome?)
    }
}

fn completion_error_kind(err: &CompletionError) -> &'static str {
    match err {
        CompletionError::Unavailable(_) => "unavailable",
        CompletionError::Rejected(_) => "rejected",
        CompletionError::EmptyResponse => "empty_response",
    }
}
