use super::{Operation, Receiver};
use crate::receiver::Character;

/// Actions a character can be commanded to take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move,
    Attack,
    Defend,
}

impl Action {
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Attack => "attack",
            Action::Defend => "defend",
        }
    }
}

/// Action-replay operation: the inverse is an authored action, not stored state.
///
/// `revert` always calls `Character::stop`, whatever the action was, so an
/// undo does not bring back the stance that preceded `apply`. An undo/redo
/// round trip lands on the state `reapply` produces from idle.
#[derive(Debug, Clone)]
pub struct ActionOp {
    action: Action,
    receiver: Receiver<Character>,
}

impl ActionOp {
    pub fn new(action: Action, receiver: Receiver<Character>) -> Self {
        Self { action, receiver }
    }
}

impl Operation for ActionOp {
    fn apply(&self) {
        self.receiver.with(|mut c| c.perform(self.action));
    }

    fn revert(&self) {
        self.receiver.with(|mut c| c.stop());
    }

    fn reapply(&self) {
        self.receiver.with(|mut c| c.replay(self.action));
    }

    fn describe(&self) -> String {
        self.action.display_name().to_string()
    }
}
