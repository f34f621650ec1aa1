use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::command::{Command, Target};
use crate::config::AppConfig;
use crate::history::History;
use crate::operation::action::{Action, ActionOp};
use crate::operation::snapshot::SnapshotOp;
use crate::operation::{Operation, Receiver};
use crate::receiver::{Character, EditorSnapshot, Stance, TextEditor};

/// Receivers plus one history per receiver.
/// The session owns the receivers; every operation only holds a weak handle.
pub struct Session {
    character: Rc<RefCell<Character>>,
    editor: Rc<RefCell<TextEditor>>,
    actions: History<ActionOp>,
    edits: History<SnapshotOp<TextEditor>>,
    active: Target,
    pub should_quit: bool,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        let (actions, edits) = match config.history_limit() {
            Some(limit) => (History::with_limit(limit), History::with_limit(limit)),
            None => (History::new(), History::new()),
        };

        Self {
            character: Rc::new(RefCell::new(Character::new())),
            editor: Rc::new(RefCell::new(TextEditor::new())),
            actions,
            edits,
            active: Target::default(),
            should_quit: false,
        }
    }

    pub fn stance(&self) -> Stance {
        self.character.borrow().stance()
    }

    pub fn memo(&self) -> String {
        self.editor.borrow().read().to_string()
    }

    /// Parse and run one input line; returns the lines to display
    pub fn run_line(&mut self, line: &str) -> Vec<String> {
        match Command::parse(line) {
            Some(cmd) => self.execute(cmd),
            None => Vec::new(),
        }
    }

    pub fn execute(&mut self, cmd: Command) -> Vec<String> {
        debug!(command = ?cmd, "execute");
        let mut messages = Vec::new();

        match cmd {
            Command::Act(action) => self.act(action),
            Command::Write(text) => {
                if let Some(message) = self.write(&text) {
                    messages.push(message);
                }
            }
            Command::Undo(target) => {
                let target = target.unwrap_or(self.active);
                let undone = match target {
                    Target::Character => step(&mut self.actions, Step::Undo),
                    Target::Editor => step(&mut self.edits, Step::Undo),
                };
                messages.push(match undone {
                    Some(op) => format!("Undid {} ({})", op, target.display_name()),
                    None => "Nothing to undo".to_string(),
                });
            }
            Command::Redo(target) => {
                let target = target.unwrap_or(self.active);
                let redone = match target {
                    Target::Character => step(&mut self.actions, Step::Redo),
                    Target::Editor => step(&mut self.edits, Step::Redo),
                };
                messages.push(match redone {
                    Some(op) => format!("Redid {} ({})", op, target.display_name()),
                    None => "Nothing to redo".to_string(),
                });
            }
            Command::Use(target) => {
                self.active = target;
                messages.push(format!("Active target: {}", target.display_name()));
            }
            Command::Status => messages.push(self.status_line()),
            Command::History => messages.extend(self.history_lines()),
            Command::Clear => {
                match self.active {
                    Target::Character => self.actions.clear(),
                    Target::Editor => self.edits.clear(),
                }
                messages.push(format!("Cleared {} history", self.active.display_name()));
            }
            Command::Help => {
                messages.extend(Command::help_lines().iter().map(|s| s.to_string()));
            }
            Command::Quit => self.should_quit = true,
            Command::Unknown(input) => messages.push(format!("Unknown command: {}", input)),
        }

        let mut lines = self.character.borrow_mut().take_events();
        lines.extend(self.editor.borrow_mut().take_events());
        lines.extend(messages);
        lines
    }

    fn act(&mut self, action: Action) {
        self.active = Target::Character;
        let op = ActionOp::new(action, Receiver::new(&self.character));
        self.actions.record(op);
    }

    fn write(&mut self, text: &str) -> Option<String> {
        self.active = Target::Editor;
        match SnapshotOp::capture(Receiver::new(&self.editor), EditorSnapshot::new(text)) {
            Some(op) => {
                self.edits.record(op);
                None
            }
            None => {
                warn!("editor unavailable, write skipped");
                Some("Editor unavailable".to_string())
            }
        }
    }

    pub fn status_line(&self) -> String {
        let (can_undo, can_redo, has_history) = match self.active {
            Target::Character => (self.actions.can_undo(), self.actions.can_redo(), self.actions.has_history()),
            Target::Editor => (self.edits.can_undo(), self.edits.can_redo(), self.edits.has_history()),
        };
        format!(
            "character: {} | memo: {:?} | active: {} | can undo: {} | can redo: {} | has history: {}",
            self.stance().display_name(),
            self.memo(),
            self.active.display_name(),
            can_undo,
            can_redo,
            has_history,
        )
    }

    fn history_lines(&self) -> Vec<String> {
        match self.active {
            Target::Character => listing(&self.actions),
            Target::Editor => listing(&self.edits),
        }
    }
}

/// Both stacks of a history, plus what undo/redo would touch next
fn listing<O: Operation>(history: &History<O>) -> Vec<String> {
    let done: Vec<String> = history.iter_done().map(|op| op.describe()).collect();
    let undone: Vec<String> = history.iter_undone().map(|op| op.describe()).collect();
    let next = |op: Option<&O>| op.map(|op| op.describe()).unwrap_or_else(|| "none".to_string());
    let limit = history.limit()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "unbounded".to_string());

    vec![
        format!("done ({}): [{}]", history.undo_len(), done.join(", ")),
        format!("undone ({}): [{}]", history.redo_len(), undone.join(", ")),
        format!("next undo: {} | next redo: {}", next(history.peek_undo()), next(history.peek_redo())),
        format!("limit: {}", limit),
    ]
}

#[derive(Clone, Copy)]
enum Step {
    Undo,
    Redo,
}

fn step<O: Operation>(history: &mut History<O>, dir: Step) -> Option<String> {
    let op = match dir {
        Step::Undo => history.undo(),
        Step::Redo => history.redo(),
    };
    op.map(|op| op.describe())
}

#[cfg(test)]
mod test;
