use crate::operation::snapshot::Originator;

/// Frozen copy of the editor contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorSnapshot {
    content: String,
}

impl EditorSnapshot {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Single-buffer memo editor. `write` replaces the whole buffer.
#[derive(Debug, Default)]
pub struct TextEditor {
    content: String,
    events: Vec<String>,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.content = text.to_string();
        self.events.push(format!("[written] {}", self.content));
    }

    pub fn read(&self) -> &str {
        &self.content
    }

    pub fn take_events(&mut self) -> Vec<String> {
        std::mem::take(&mut self.events)
    }
}

impl Originator for TextEditor {
    type Snapshot = EditorSnapshot;

    fn save(&self) -> EditorSnapshot {
        EditorSnapshot::new(self.content.clone())
    }

    fn restore(&mut self, snapshot: &EditorSnapshot) {
        self.content = snapshot.content().to_string();
        self.events.push(format!("[restored] {}", self.content));
    }

    fn install(&mut self, snapshot: &EditorSnapshot) {
        self.write(snapshot.content());
    }

    fn label(snapshot: &EditorSnapshot) -> String {
        format!("{:?}", snapshot.content())
    }
}
