//! One interactive desk session
//!
//! Turns input lines into engine calls. Rendering and alerts arrive through
//! the engine's event channel; the session only produces direct replies and
//! tracks whether the next line is an answer to a name prompt.

use crate::app::commands::{parse_command, Command, Target, HELP_TEXT};
use crate::app::render::{format_announcement, format_lane};
use crate::core::styles::StyleRole;
use crate::queue::api::{EntryId, HelpDesk, LaneId, LaneSnapshot};
use strum::IntoEnumIterator;

/// What the front end should print after a line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    /// Prompt to show when the next line is expected to be a name
    pub prompt: Option<String>,
    pub quit: bool,
}

impl Response {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            ..Self::default()
        }
    }
}

pub fn name_prompt(lane: LaneId) -> String {
    format!("Name for {} (blank to cancel, 'quit' to exit): ", lane.title())
}

/// Words that leave the session even while a name prompt is open
const PROMPT_EXITS: &[&str] = &["quit", "exit"];

pub struct Session {
    desk: HelpDesk,
    awaiting_name: Option<LaneId>,
    announcement: Option<String>,
    color: bool,
}

impl Session {
    pub fn new(desk: HelpDesk, announcement: Option<String>, color: bool) -> Self {
        Self {
            desk,
            awaiting_name: None,
            announcement,
            color,
        }
    }

    pub fn desk(&self) -> &HelpDesk {
        &self.desk
    }

    pub fn desk_mut(&mut self) -> &mut HelpDesk {
        &mut self.desk
    }

    /// Lane whose name prompt is open, if any
    pub fn awaiting_name(&self) -> Option<LaneId> {
        self.awaiting_name
    }

    /// Opening screen: announcement board, both lanes and a hint
    pub fn welcome(&self) -> Response {
        let mut response = self.show(None);
        response.lines.push("Type 'help' for commands.".to_string());
        response
    }

    pub fn handle_line(&mut self, line: &str) -> Response {
        if let Some(lane) = self.awaiting_name.take() {
            let answer = line.trim();
            if answer.is_empty() {
                return Response::line("Request cancelled.");
            }
            if PROMPT_EXITS.contains(&answer.to_ascii_lowercase().as_str()) {
                return self.execute(Command::Quit);
            }
            return self.ask(lane, line);
        }

        match parse_command(line) {
            Ok(None) => Response::default(),
            Ok(Some(command)) => self.execute(command),
            Err(e) => Response::line(StyleRole::Alert.paint(&e.to_string(), self.color)),
        }
    }

    fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Ask { lane, name: None } => {
                self.awaiting_name = Some(lane);
                Response {
                    prompt: Some(name_prompt(lane)),
                    ..Response::default()
                }
            }
            Command::Ask {
                lane,
                name: Some(name),
            } => self.ask(lane, &name),
            Command::Cancel { lane, target } => self.remove(lane, target, false),
            Command::Confirm { lane, target } => self.remove(lane, target, true),
            Command::Toggle { lane } => {
                self.desk.toggle_display_mode(lane);
                Response::line(format!(
                    "{}: {} from the next refresh",
                    lane.title(),
                    self.desk.current_mode(lane).switch_label()
                ))
            }
            Command::Show { lane } => self.show(lane),
            Command::Dump { lane } => self.dump(lane),
            Command::Help => Response::line(HELP_TEXT),
            Command::Quit => Response {
                quit: true,
                ..Response::default()
            },
        }
    }

    /// Validation failures reopen the prompt; membership failures end the request.
    /// The alert itself is shown by the presentation subscriber.
    fn ask(&mut self, lane: LaneId, name: &str) -> Response {
        match self.desk.enqueue(lane, name) {
            Ok(entry_id) => Response::line(format!(
                "{} joined the {} as {}",
                name,
                lane.queue_label(),
                entry_id
            )),
            Err(e) if e.should_reprompt() => {
                self.awaiting_name = Some(lane);
                Response {
                    prompt: Some(name_prompt(lane)),
                    ..Response::default()
                }
            }
            Err(_) => Response::default(),
        }
    }

    fn resolve(&self, lane: LaneId, target: &Target) -> Option<EntryId> {
        match target {
            Target::Rank(rank) => self.desk.entry_at(lane, *rank),
            Target::Name(name) => self.desk.entry_id_for(lane, name),
        }
    }

    fn remove(&mut self, lane: LaneId, target: Target, confirm: bool) -> Response {
        let Some(entry_id) = self.resolve(lane, &target) else {
            return Response::line(StyleRole::Alert.paint(
                &format!("No one {} in the {}", target, lane.queue_label()),
                self.color,
            ));
        };
        let name = self
            .desk
            .entry(lane, entry_id)
            .map(|entry| entry.name.clone())
            .unwrap_or_default();

        if confirm {
            self.desk.confirm(lane, entry_id);
            Response::line(format!("{} was helped in the {}", name, lane.queue_label()))
        } else {
            self.desk.cancel(lane, entry_id);
            Response::line(format!("{} left the {}", name, lane.queue_label()))
        }
    }

    fn lanes(lane: Option<LaneId>) -> Vec<LaneId> {
        match lane {
            Some(lane) => vec![lane],
            None => LaneId::iter().collect(),
        }
    }

    fn show(&self, lane: Option<LaneId>) -> Response {
        let mut lines = Vec::new();
        if let Some(text) = self.announcement.as_deref() {
            lines.push(format_announcement(text, self.color));
        }
        for lane in Self::lanes(lane) {
            lines.push(format_lane(&self.desk.snapshot(lane), self.color));
        }
        Response {
            lines,
            ..Response::default()
        }
    }

    fn dump(&self, lane: Option<LaneId>) -> Response {
        let snapshots: Vec<LaneSnapshot> = Self::lanes(lane)
            .into_iter()
            .map(|lane| self.desk.snapshot(lane))
            .collect();
        match serde_json::to_string_pretty(&snapshots) {
            Ok(json) => Response::line(json),
            Err(e) => {
                log::error!("snapshot serialisation failed: {}", e);
                Response::line(
                    StyleRole::Alert.paint("Could not serialise the lanes", self.color),
                )
            }
        }
    }
}
