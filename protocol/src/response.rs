use std::fmt;

use serde::{Serialize, Deserialize};
use crate::{JsonMessage, Role, Scores, Stage};

/// Point-in-time alerts. Not kept anywhere once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Correct,
    Incorrect,
    TimesUp {
        word: String,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Correct => write!(f, "Correct Guess!"),
            Notice::Incorrect => write!(f, "Incorrect Guess. Try again!"),
            Notice::TimesUp { word } => write!(f, "Time's up! The word was: {}", word),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub role: Option<Role>,
    pub stage: Stage,
    pub scores: Scores,
    pub remaining: u32,
    /// Whether `start` would be accepted right now.
    pub can_start: bool,
    /// Letter-spaced word for the drawer, hint for the guesser.
    pub word_line: String,
    pub canvas: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Notice(Notice),
    StageChanged {
        stage: Stage,
        role: Option<Role>,
    },
    CountDown {
        remaining: u32,
        elapsed: u32,
    },
    Hint {
        text: String,
    },
    Scores(Scores),
    View(View),
}

impl JsonMessage for Response {}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Notice(notice) => write!(f, "!! {}", notice),
            Response::StageChanged { stage, role: Some(role) } => write!(f, "== {} ({})", stage, role),
            Response::StageChanged { stage, role: None } => write!(f, "== {}", stage),
            Response::CountDown { remaining, .. } => write!(f, "Time Left: {} sec", remaining),
            Response::Hint { text } => write!(f, "Hint: {}", text),
            Response::Scores(scores) => {
                write!(f, "Drawer Points: {} | Guesser Points: {}", scores.drawer, scores.guesser)
            }
            Response::View(view) => {
                let role = view.role.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
                writeln!(f, "role: {} | stage: {} | time left: {} sec", role, view.stage, view.remaining)?;
                if view.can_start {
                    writeln!(f, "[start]")?;
                }
                writeln!(f, "Drawer Points: {} | Guesser Points: {}", view.scores.drawer, view.scores.guesser)?;
                writeln!(f, "{}", view.word_line)?;
                write!(f, "{}", view.canvas)
            }
        }
    }
}
