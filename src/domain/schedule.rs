//! Broadcast schedule

use crate::domain::editor::{Editor, EditorRef};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A broadcast calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schedule {
    pub time: NaiveDateTime,
    pub content: String,
    pub editor: EditorRef,
}

impl Schedule {
    pub fn new(time: NaiveDateTime, content: impl Into<String>, editor: &Editor) -> Self {
        Schedule {
            time,
            content: content.into(),
            editor: editor.to_ref(),
        }
    }
}

/// Insertion-ordered schedule entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleManager {
    #[serde(default)]
    schedules: Vec<Schedule>,
}

impl ScheduleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_schedule(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    pub fn list(&self) -> &[Schedule] {
        &self.schedules
    }

    /// First entry at exactly `time` booked by `editor`
    pub fn find_owned_mut(
        &mut self,
        time: NaiveDateTime,
        editor: &Editor,
    ) -> Option<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|schedule| schedule.time == time && schedule.editor.is(editor))
    }

    /// Remove the first entry at exactly `time` booked by `editor`
    pub fn delete_owned(&mut self, time: NaiveDateTime, editor: &Editor) -> Option<Schedule> {
        let index = self
            .schedules
            .iter()
            .position(|schedule| schedule.time == time && schedule.editor.is(editor))?;
        Some(self.schedules.remove(index))
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}
