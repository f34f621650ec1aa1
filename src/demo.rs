use crate::session::Session;

/// Scripted walkthroughs replayed through the command surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Character commands with authored inverses
    Command,
    /// Memo editor with full snapshots
    Memento,
}

const COMMAND_SCRIPT: &[&str] = &[
    "move",
    "attack",
    "undo",
    "move",
    "redo", // branch was discarded by the move above
    "defend",
    "undo",
    "redo",
    "redo",
];

const MEMENTO_SCRIPT: &[&str] = &[
    "write First",
    "write Second",
    "write \"Other Data\"",
    "status",
    "redo",
    "undo",
    "undo",
    "redo",
    "redo",
    "undo",
    "undo",
    "status",
];

impl Demo {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "command" | "cmd" => Some(Demo::Command),
            "memento" | "snapshot" => Some(Demo::Memento),
            _ => None,
        }
    }

    pub fn script(&self) -> &'static [&'static str] {
        match self {
            Demo::Command => COMMAND_SCRIPT,
            Demo::Memento => MEMENTO_SCRIPT,
        }
    }

    /// Run every scripted line, returning (input, output lines) pairs
    pub fn run(&self, session: &mut Session) -> Vec<(&'static str, Vec<String>)> {
        self.script()
            .iter()
            .map(|line| (*line, session.run_line(line)))
            .collect()
    }
}
