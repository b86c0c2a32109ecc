//! Broadcast schedule use cases

use crate::domain::{format_timestamp, parse_timestamp, Editor, Schedule, ScheduleManager};
use crate::error::{NewsroomError, Result};

/// Requested changes to a schedule entry. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRevision {
    pub time: Option<String>,
    pub content: Option<String>,
}

impl ScheduleRevision {
    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.content.is_none()
    }
}

/// Book a slot for `editor`
pub fn book(
    schedules: &mut ScheduleManager,
    editor: &Editor,
    time: &str,
    content: &str,
) -> Result<Schedule> {
    let time = parse_timestamp(time)?;
    let entry = Schedule::new(time, content, editor);

    log::info!("{} booked {}", editor.email, format_timestamp(&entry.time));
    schedules.add_schedule(entry.clone());
    Ok(entry)
}

/// Change the entry `editor` booked at exactly `time`
pub fn reschedule(
    schedules: &mut ScheduleManager,
    editor: &Editor,
    time: &str,
    revision: ScheduleRevision,
) -> Result<Schedule> {
    let time = parse_timestamp(time)?;
    let new_time = revision.time.as_deref().map(parse_timestamp).transpose()?;

    let entry = schedules
        .find_owned_mut(time, editor)
        .ok_or_else(|| NewsroomError::ScheduleNotFound(format_timestamp(&time)))?;

    if let Some(new_time) = new_time {
        entry.time = new_time;
    }
    if let Some(content) = revision.content {
        entry.content = content;
    }

    log::info!("{} rescheduled {}", editor.email, format_timestamp(&time));
    Ok(entry.clone())
}

/// Remove the entry `editor` booked at exactly `time`
pub fn cancel(schedules: &mut ScheduleManager, editor: &Editor, time: &str) -> Result<Schedule> {
    let time = parse_timestamp(time)?;

    let removed = schedules
        .delete_owned(time, editor)
        .ok_or_else(|| NewsroomError::ScheduleNotFound(format_timestamp(&time)))?;

    log::info!("{} cancelled {}", editor.email, format_timestamp(&time));
    Ok(removed)
}
