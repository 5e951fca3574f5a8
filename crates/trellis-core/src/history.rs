//! Undo/redo sequencing over [`Command`]s.
//!
//! [`History`] owns the current document together with an undo and a redo
//! stack. Every transition records the way back: the command's precise
//! inverse when it has one, otherwise a [`Restore`] snapshot of the state it
//! replaced. Snapshots are owned copies, never shared with the live document.

use std::sync::{Mutex, PoisonError};

use log::{debug, trace};

use crate::{
    command::{Command, Restore},
    model::DiagramState,
};

/// Current document plus undo/redo stacks, most recent entry last.
#[derive(Debug, Clone)]
pub struct History {
    state: DiagramState,
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl History {
    pub fn new(state: DiagramState) -> Self {
        Self {
            state,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// The current document.
    pub fn state(&self) -> &DiagramState {
        &self.state
    }

    /// Executes `cmd`, adopts the result and records how to undo it.
    ///
    /// Any pending redo entries are discarded. Always returns `true`: a
    /// dispatch is recorded even when the command turned out to be a no-op.
    pub fn dispatch(&mut self, cmd: Command) -> bool {
        debug!(command = cmd.name(); "Dispatching command");
        let undo = self.apply(&cmd);
        self.undo_stack.push(undo);

        if !self.redo_stack.is_empty() {
            trace!(discarded = self.redo_stack.len(); "Redo history invalidated");
            self.redo_stack.clear();
        }
        true
    }

    /// Reverts the most recent transition. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(cmd) = self.undo_stack.pop() else {
            trace!("Nothing to undo");
            return false;
        };

        debug!(command = cmd.name(), remaining = self.undo_stack.len(); "Undoing");
        let redo = self.apply(&cmd);
        self.redo_stack.push(redo);
        true
    }

    /// Re-applies the most recently undone transition. Returns `false` if
    /// there was none.
    pub fn redo(&mut self) -> bool {
        let Some(cmd) = self.redo_stack.pop() else {
            trace!("Nothing to redo");
            return false;
        };

        debug!(command = cmd.name(), remaining = self.redo_stack.len(); "Redoing");
        let undo = self.apply(&cmd);
        self.undo_stack.push(undo);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Executes `cmd` against the current state, adopts the result and
    /// returns the command that leads back.
    fn apply(&mut self, cmd: &Command) -> Command {
        let next = cmd.execute(&self.state);
        let prev = std::mem::replace(&mut self.state, next);

        match cmd.invert(&prev, &self.state) {
            Some(inverse) => inverse,
            None => {
                trace!(command = cmd.name(); "No precise inverse, recording snapshot");
                Restore::new(prev).into()
            }
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DiagramState::default())
    }
}

/// A [`History`] behind a single lock, for hosts that drive the editor from
/// more than one thread.
///
/// Each of `dispatch`, `undo` and `redo` holds the lock for its whole
/// duration, so no caller observes a half-applied transition.
#[derive(Debug, Default)]
pub struct SharedHistory {
    inner: Mutex<History>,
}

impl SharedHistory {
    pub fn new(history: History) -> Self {
        Self {
            inner: Mutex::new(history),
        }
    }

    pub fn dispatch(&self, cmd: Command) -> bool {
        self.with(|history| history.dispatch(cmd))
    }

    pub fn undo(&self) -> bool {
        self.with(History::undo)
    }

    pub fn redo(&self) -> bool {
        self.with(History::redo)
    }

    /// An owned copy of the current document.
    pub fn snapshot(&self) -> DiagramState {
        self.with(|history| history.state().clone())
    }

    /// Consumes the wrapper and returns the history.
    pub fn into_inner(self) -> History {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn with<R>(&self, f: impl FnOnce(&mut History) -> R) -> R {
        // A poisoned lock still guards a consistent history.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
