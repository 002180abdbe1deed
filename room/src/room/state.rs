use protocol::{Role, Scores, Stage};

/// Lives as long as the process. Only a timeout clears the role; scores are never cleared.
#[derive(Debug, Default)]
pub struct Session {
    pub role: Option<Role>,
    pub scores: Scores,
}

/// Cleared at every reset.
#[derive(Debug)]
pub struct Round {
    pub stage: Stage,
    /// Drawer's word-entry buffer, raw.
    pub input: String,
    /// Normalized secret word, empty until a drawer starts a round.
    pub word: String,
    pub elapsed: u32,
    pub guessed: bool,
}

impl Round {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            input: String::new(),
            word: String::new(),
            elapsed: 0,
            guessed: false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
