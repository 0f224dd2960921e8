//! Prompt text builders.
//!
//! Pure string construction; nothing here touches session state.

use chrono::{NaiveDate, NaiveTime};

use crate::model::meeting::Meeting;

const ASSISTANT_NAME: &str = "Verti";

pub fn trip_plan(
    destination: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    preferences: &str,
) -> String {
    format!(
        "You are {ASSISTANT_NAME}, a personal business assistant. \
         Plan a detailed business trip to {destination} from {start_date} to {end_date}.\n\
         Cover flights, accommodation, local transport and a day-by-day itinerary.\n\
         Traveller preferences: {preferences}"
    )
}

pub fn correspondence(kind_label: &str, context: &str) -> String {
    format!(
        "{ASSISTANT_NAME}, write a professional {} using these details:\n{context}",
        kind_label.to_lowercase()
    )
}

pub fn meeting_plan(
    date: NaiveDate,
    time: NaiveTime,
    participants: &str,
    agenda: &str,
) -> String {
    format!(
        "{ASSISTANT_NAME}, prepare a meeting plan for {date} at {time}.\n\
         Participants: {participants}\n\
         Agenda: {agenda}\n\
         Include the agenda, participant roles and a minutes template."
    )
}

pub fn follow_up(meeting: &Meeting, notes: &str) -> String {
    format!(
        "{ASSISTANT_NAME}, write a professional follow-up email for the meeting held on {} at {}.\n\
         Participants: {}\n\
         Agenda: {}\n\
         Meeting plan: {}\n\
         Additional notes: {notes}",
        meeting.date, meeting.time, meeting.participants, meeting.agenda, meeting.plan
    )
}

pub fn project_advice(project: &str, goals: &str, status: &str, challenges: &str) -> String {
    format!(
        "{ASSISTANT_NAME}, advise on the project \"{project}\".\n\
         Goals: {goals}\n\
         Current status: {status}\n\
         Challenges or blockers: {challenges}\n\
         Suggest next steps, risks to watch and how to keep the team on schedule."
    )
}

pub fn routine_automation(description: &str) -> String {
    format!(
        "{ASSISTANT_NAME}, suggest how to automate this recurring administrative task:\n\
         {description}\n\
         Give step-by-step guidance and name suitable tools."
    )
}

pub fn expense_summary(report_lines: &[String]) -> String {
    format!(
        "{ASSISTANT_NAME}, summarize these business trip expenses and total them per category \
         (date, item, amount, category):\n{}",
        report_lines.join("\n")
    )
}

pub fn document_summary(text: &str) -> String {
    format!("{ASSISTANT_NAME}, summarize the following text concisely and professionally:\n{text}")
}

pub fn task_prioritization(tasks: &str) -> String {
    format!(
        "{ASSISTANT_NAME}, here are my tasks, one per line:\n{tasks}\n\
         Rank them by urgency and impact and give a short reason for each position."
    )
}
