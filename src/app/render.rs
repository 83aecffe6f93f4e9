//! Terminal rendering of lanes and alerts
//!
//! Full tables are drawn for renders that change what a lane shows (a new
//! entry, a removal, the first refresh after a mode switch). Periodic ticks
//! only print the lane's summary line, and only when it changed.

use crate::core::styles::StyleRole;
use crate::notifications::api::{Alert, LaneEvent, Presentation, RenderEvent};
use crate::queue::api::{LaneId, LaneSnapshot, RenderCause};
use prettytable::{format, Cell, Row, Table};
use std::collections::HashMap;
use std::io::Write;

/// Lane heading, table and summary sentence
pub fn format_lane(snapshot: &LaneSnapshot, color: bool) -> String {
    let lane = snapshot.lane;
    let mut text = format!(
        "{} {}  [{}]\n",
        StyleRole::Title.paint(lane.title(), color),
        StyleRole::Subtitle.paint(&format!("({})", lane.subtitle()), color),
        StyleRole::Mode.paint(snapshot.mode.switch_label(), color),
    );
    text.push_str(&StyleRole::Subtitle.paint(
        &format!("  e.g. {}", lane.examples().join(", ")),
        color,
    ));
    text.push('\n');

    if !snapshot.rows.is_empty() {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            ["#", "Name", "Prior", "Waiting"]
                .iter()
                .map(|title| Cell::new(&StyleRole::Header.paint(title, color)))
                .collect(),
        ));
        for row in &snapshot.rows {
            table.add_row(Row::new(vec![
                Cell::new(&StyleRole::Rank.paint(&row.display_index.to_string(), color)),
                Cell::new(&StyleRole::Name.paint(&row.name, color)),
                Cell::new(&row.prior_count.to_string()),
                Cell::new(&StyleRole::Wait.paint(&row.formatted_wait_time, color)),
            ]));
        }
        text.push_str(&table.to_string());
    }

    text.push_str(&StyleRole::Summary.paint(&snapshot.average_text, color));
    text
}

/// One-line lane status used for periodic refreshes
pub fn format_summary(snapshot: &LaneSnapshot, color: bool) -> String {
    format!(
        "{}: {}",
        StyleRole::Title.paint(snapshot.lane.title(), color),
        StyleRole::Summary.paint(&snapshot.average_text, color)
    )
}

pub fn format_alert(alert: &Alert, color: bool) -> String {
    format!(
        "{} {}",
        StyleRole::Alert.paint(&format!("[{}]", alert.title), color),
        alert.message
    )
}

pub fn format_announcement(text: &str, color: bool) -> String {
    format!(
        "{} {}",
        StyleRole::Announcement.paint("Announcements:", color),
        text
    )
}

/// Presentation collaborator that writes to a terminal stream
pub struct TerminalView<W: Write> {
    out: W,
    color: bool,
    last_summary: HashMap<LaneId, String>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            last_summary: HashMap::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            log::debug!("terminal write failed: {}", e);
        }
    }

    /// Write a prompt without a trailing newline
    pub fn print_prompt(&mut self, prompt: &str) {
        let painted = StyleRole::Prompt.paint(prompt, self.color);
        if let Err(e) = write!(self.out, "{}", painted).and_then(|_| self.out.flush()) {
            log::debug!("terminal write failed: {}", e);
        }
    }
}

impl<W: Write> Presentation for TerminalView<W> {
    fn render(&mut self, event: &RenderEvent) {
        let snapshot = &event.snapshot;
        let summary = format_summary(snapshot, self.color);

        match event.cause {
            RenderCause::Tick | RenderCause::StaleTick => {
                if self.last_summary.get(&snapshot.lane) != Some(&summary) {
                    self.print_line(&summary);
                }
            }
            RenderCause::Settle | RenderCause::NewEntry | RenderCause::Removal => {
                let text = format_lane(snapshot, self.color);
                self.print_line(&text);
            }
        }
        self.last_summary.insert(snapshot.lane, summary);
    }

    fn alert(&mut self, alert: &Alert) {
        let text = format_alert(alert, self.color);
        self.print_line(&text);
    }

    fn lane_changed(&mut self, event: &LaneEvent) {
        log::trace!("{:?} in the {} lane", event.event_type, event.lane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::api::{DisplayMode, EntryId, RankedRow};

    fn snapshot(rows: Vec<RankedRow>, average_text: &str) -> LaneSnapshot {
        LaneSnapshot {
            lane: LaneId::Quick,
            mode: DisplayMode::Approximate,
            rows,
            average_text: average_text.to_string(),
            taken_at: 0,
        }
    }

    fn row(index: usize, name: &str, wait: &str) -> RankedRow {
        RankedRow {
            display_index: index,
            entry_id: EntryId(index as u64),
            name: name.to_string(),
            prior_count: 0,
            formatted_wait_time: wait.to_string(),
        }
    }

    fn render(view: &mut TerminalView<Vec<u8>>, cause: RenderCause, snapshot: LaneSnapshot) {
        view.render(&RenderEvent { cause, snapshot });
    }

    #[test]
    fn test_format_lane_plain() {
        let text = format_lane(
            &snapshot(
                vec![row(1, "Alice", "a minute ago"), row(2, "Bob", "a few seconds ago")],
                "An average wait time of about a few seconds for 2 students",
            ),
            false,
        );

        assert!(text.starts_with("Quick Questions (< 2 mins with a tutor)  [Precise Timing Off]"));
        assert!(text.contains("Syntax errors"));
        assert!(text.contains("Alice"));
        assert!(text.contains("a minute ago"));
        assert!(text.find("Alice") < text.find("Bob"));
        assert!(text.ends_with("for 2 students"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_format_empty_lane_has_no_table() {
        let text = format_lane(&snapshot(Vec::new(), "No students in queue."), false);
        assert!(!text.contains("Name"));
        assert!(text.ends_with("No students in queue."));
    }

    #[test]
    fn test_ticks_print_only_changed_summaries() {
        let mut view = TerminalView::new(Vec::new(), false);

        render(&mut view, RenderCause::Tick, snapshot(Vec::new(), "No students in queue."));
        render(&mut view, RenderCause::Tick, snapshot(Vec::new(), "No students in queue."));
        render(
            &mut view,
            RenderCause::StaleTick,
            snapshot(vec![row(1, "Ann", "0 second ago")], "changed"),
        );

        let output = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(
            output,
            "Quick Questions: No students in queue.\nQuick Questions: changed\n"
        );
    }

    #[test]
    fn test_new_entry_draws_table() {
        let mut view = TerminalView::new(Vec::new(), false);
        render(
            &mut view,
            RenderCause::NewEntry,
            snapshot(vec![row(1, "Ann", "a few seconds ago")], "one"),
        );
        let output = String::from_utf8(view.into_inner()).unwrap();
        assert!(output.contains("Ann"));
        assert!(output.contains("Waiting"));
    }

    #[test]
    fn test_alert_text() {
        let alert = Alert {
            lane: LaneId::Long,
            kind: "Empty",
            title: "Not a Valid Name",
            message: "Please enter a valid name in the given field.".to_string(),
            reprompt: true,
        };
        assert_eq!(
            format_alert(&alert, false),
            "[Not a Valid Name] Please enter a valid name in the given field."
        );
        assert!(format_alert(&alert, true).contains("\x1b[91m"));
    }
}
