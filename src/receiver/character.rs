use crate::operation::action::Action;

/// What the character is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Idle,
    Moving,
    Attacking,
    Defending,
}

impl Stance {
    pub fn display_name(&self) -> &'static str {
        match self {
            Stance::Idle => "idle",
            Stance::Moving => "moving",
            Stance::Attacking => "attacking",
            Stance::Defending => "defending",
        }
    }
}

/// Game character driven by action commands.
/// Every call leaves a line in `events` for the caller to display.
#[derive(Debug, Default)]
pub struct Character {
    stance: Stance,
    events: Vec<String>,
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn move_forward(&mut self) {
        self.stance = Stance::Moving;
        self.events.push("The character moves.".to_string());
    }

    pub fn attack(&mut self) {
        self.stance = Stance::Attacking;
        self.events.push("The character attacks.".to_string());
    }

    pub fn defend(&mut self) {
        self.stance = Stance::Defending;
        self.events.push("The character defends.".to_string());
    }

    /// Cancel whatever the character is doing.
    /// This is the only inverse a character has, so it does not know
    /// which action it is cancelling.
    pub fn stop(&mut self) {
        self.stance = Stance::Idle;
        self.events.push("The character stops its action.".to_string());
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Move => self.move_forward(),
            Action::Attack => self.attack(),
            Action::Defend => self.defend(),
        }
    }

    /// Same stance change as `perform`, logged as a replay
    pub fn replay(&mut self, action: Action) {
        self.perform(action);
        if let Some(last) = self.events.last_mut() {
            last.push_str(" (replayed)");
        }
    }

    /// Drain pending event lines
    pub fn take_events(&mut self) -> Vec<String> {
        std::mem::take(&mut self.events)
    }
}
