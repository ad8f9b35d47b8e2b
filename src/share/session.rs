//! Open/closed state of the share menu.

use crate::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareSessionState {
    #[default]
    Closed,
    Open,
}

impl UiState for ShareSessionState {}

impl ShareSessionState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareSessionIntent {
    /// User opened the menu.
    Open,
    /// An action finished successfully.
    ActionSucceeded,
    /// An action failed; the menu stays as it was.
    ActionFailed,
    /// User dismissed the menu.
    Dismiss,
}

impl Intent for ShareSessionIntent {}

pub struct ShareSessionReducer;

impl Reducer for ShareSessionReducer {
    type State = ShareSessionState;
    type Intent = ShareSessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShareSessionIntent::Open => ShareSessionState::Open,
            ShareSessionIntent::ActionSucceeded | ShareSessionIntent::Dismiss => {
                ShareSessionState::Closed
            }
            ShareSessionIntent::ActionFailed => state,
        }
    }
}
