//! The single process-wide state container.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::action::Action;
use crate::state::{self, AppState};

/// State container; every update flows through [`Store::dispatch`].
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Current state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Fold one action into every slice reducer.
    pub fn dispatch(&mut self, action: &Action) {
        state::reduce(&mut self.state, action);
    }
}
