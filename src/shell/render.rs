// Plain text rendering of events for the terminal.

use crate::modules::user_events::core::day_groups::DayGroup;
use crate::modules::user_events::core::event::UserEvent;
use crate::modules::user_events::core::recorder::RecorderState;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// "1h 05m", or "12m" under an hour.
pub fn format_duration(event: &UserEvent) -> String {
    let minutes = event.duration().num_minutes().max(0);
    match minutes / 60 {
        0 => format!("{minutes}m"),
        hours => format!("{hours}h {:02}m", minutes % 60),
    }
}

/// `#id  HH:MM - HH:MM  (duration)  title`, times in UTC.
pub fn render_event(event: &UserEvent) -> String {
    format!(
        "#{}  {} - {}  ({})  {}",
        event.id,
        event.date_start.format("%H:%M"),
        event.date_end.format("%H:%M"),
        format_duration(event),
        event.title
    )
}

pub fn render_day_groups(groups: &[DayGroup]) -> String {
    if groups.is_empty() {
        return "No events yet.\n".to_string();
    }

    let mut out = String::new();
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", group.label());
        for event in &group.events {
            let _ = writeln!(out, "  {}", render_event(event));
        }
    }
    out
}

pub fn render_recorder(recorder: &RecorderState, now: DateTime<Utc>) -> String {
    match recorder.date_start {
        Some(start) => format!(
            "Recording since {} UTC  {}",
            start.format("%H:%M:%S"),
            recorder.elapsed(now)
        ),
        None => "Idle".to_string(),
    }
}
