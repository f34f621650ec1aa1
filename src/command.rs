use regex::Regex;

use crate::operation::action::Action;

/// Which receiver (and history) a command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Character,
    Editor,
}

impl Target {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "character" | "char" | "c" => Some(Target::Character),
            "editor" | "memo" | "e" => Some(Target::Editor),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Target::Character => "character",
            Target::Editor => "editor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Write(String),
    Undo(Option<Target>),   // None = active target
    Redo(Option<Target>),
    Use(Target),
    Status,
    History,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(text) = Self::parse_write(trimmed) {
            return Some(Command::Write(text));
        }

        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((h, r)) => (h, r.trim()),
            None => (trimmed, ""),
        };

        let cmd = match (head, rest) {
            ("move", "") => Command::Act(Action::Move),
            ("attack", "") => Command::Act(Action::Attack),
            ("defend", "") => Command::Act(Action::Defend),
            ("undo" | "u", "") => Command::Undo(None),
            ("redo" | "r", "") => Command::Redo(None),
            ("undo" | "u", t) => match Target::parse(t) {
                Some(target) => Command::Undo(Some(target)),
                None => Command::Unknown(trimmed.to_string()),
            },
            ("redo" | "r", t) => match Target::parse(t) {
                Some(target) => Command::Redo(Some(target)),
                None => Command::Unknown(trimmed.to_string()),
            },
            ("use", t) => match Target::parse(t) {
                Some(target) => Command::Use(target),
                None => Command::Unknown(trimmed.to_string()),
            },
            ("status", "") => Command::Status,
            ("history", "") => Command::History,
            ("clear", "") => Command::Clear,
            ("help" | "?", "") => Command::Help,
            ("quit" | "q" | "exit", "") => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        };

        Some(cmd)
    }

    /// `write text`, `write "text"` or `write 'text'`
    fn parse_write(input: &str) -> Option<String> {
        let re = Regex::new(r#"^write\s+(?:"([^"]*)"|'([^']*)'|(.+))$"#).ok()?;
        let caps = re.captures(input)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
    }

    /// Commands listed by `help`
    pub fn help_lines() -> &'static [&'static str] {
        &[
            "move | attack | defend     command the character",
            "write <text>               replace the editor memo",
            "undo [character|editor]    undo on the active or named target",
            "redo [character|editor]    redo on the active or named target",
            "use <character|editor>     switch the active target",
            "status                     show receiver state",
            "history                    list both stacks of the active target",
            "clear                      forget the active target's history",
            "quit                       leave",
        ]
    }
}
