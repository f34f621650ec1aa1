use std::fmt;

use super::{Operation, Receiver};

/// An object whose full state can be captured and put back
pub trait Originator {
    type Snapshot: Clone + fmt::Debug;

    fn save(&self) -> Self::Snapshot;
    fn restore(&mut self, snapshot: &Self::Snapshot);

    /// First-time installation of a new state. Same effect as `restore`;
    /// originators override it when a fresh edit should look different.
    fn install(&mut self, snapshot: &Self::Snapshot) {
        self.restore(snapshot)
    }

    /// Label used in history listings
    fn label(snapshot: &Self::Snapshot) -> String {
        format!("{:?}", snapshot)
    }
}

/// Snapshot operation: holds the state before and after, so revert is exact
pub struct SnapshotOp<T: Originator> {
    receiver: Receiver<T>,
    previous: T::Snapshot,
    captured: T::Snapshot,
}

impl<T: Originator> SnapshotOp<T> {
    /// Capture the receiver's current state as `previous`; `next` becomes
    /// the state this operation installs.
    /// Returns `None` if the receiver is already gone.
    pub fn capture(receiver: Receiver<T>, next: T::Snapshot) -> Option<Self> {
        let previous = receiver.with(|target| target.save())?;
        Some(Self { receiver, previous, captured: next })
    }
}

impl<T: Originator> fmt::Debug for SnapshotOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotOp")
            .field("receiver", &self.receiver)
            .field("previous", &self.previous)
            .field("captured", &self.captured)
            .finish()
    }
}

impl<T: Originator> Operation for SnapshotOp<T> {
    fn apply(&self) {
        self.receiver.with(|mut target| target.install(&self.captured));
    }

    fn revert(&self) {
        self.receiver.with(|mut target| target.restore(&self.previous));
    }

    fn reapply(&self) {
        self.receiver.with(|mut target| target.restore(&self.captured));
    }

    fn describe(&self) -> String {
        format!("snapshot {}", T::label(&self.captured))
    }
}
