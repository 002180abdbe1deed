use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::{JsonMessage, ParseError, Point, Role};

#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub enum Request {
    SelectRole(Role),
    SetWord {
        word: String,
    },
    StartRound,
    Guess {
        text: String,
    },
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
    ResetRound,
    Show,
    Quit,
}

impl JsonMessage for Request {}

fn parse_point(cmd: &str, args: &str) -> Result<Point, ParseError> {
    let mut it = args.split_whitespace().map(str::parse::<i32>);
    match (it.next(), it.next(), it.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Ok(Point::new(x, y)),
        _ => Err(ParseError::BadPoint(cmd.to_string())),
    }
}

/// Text commands, one per line: `role drawer`, `word apple`, `start`, `guess apple`,
/// `down 10 20`, `move 11 21`, `up`, `leave`, `reset`, `show`, `quit`.
impl FromStr for Request {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (cmd, args) = match line.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args),
            None => (line, ""),
        };
        let req = match cmd.to_lowercase().as_str() {
            "" => return Err(ParseError::Empty),
            "role" => match args.trim().to_lowercase().as_str() {
                "drawer" => Request::SelectRole(Role::Drawer),
                "guesser" => Request::SelectRole(Role::Guesser),
                "" => return Err(ParseError::MissingArgument(cmd.to_string())),
                other => return Err(ParseError::UnknownRole(other.to_string())),
            },
            // the buffers keep the raw text, normalization happens on start/compare
            "word" => Request::SetWord { word: args.to_string() },
            "guess" => Request::Guess { text: args.to_string() },
            "start" | "join" => Request::StartRound,
            "down" => Request::PointerDown(parse_point(cmd, args)?),
            "move" => Request::PointerMove(parse_point(cmd, args)?),
            "up" => Request::PointerUp,
            "leave" => Request::PointerLeave,
            "reset" | "again" => Request::ResetRound,
            "show" => Request::Show,
            "quit" | "exit" => Request::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_commands() {
        assert_eq!("role drawer".parse(), Ok(Request::SelectRole(Role::Drawer)));
        assert_eq!("ROLE Guesser".parse(), Ok(Request::SelectRole(Role::Guesser)));
        assert_eq!("start".parse(), Ok(Request::StartRound));
        assert_eq!("join".parse(), Ok(Request::StartRound));
        assert_eq!("down 3 4".parse(), Ok(Request::PointerDown(Point::new(3, 4))));
        assert_eq!("move -1 400".parse(), Ok(Request::PointerMove(Point::new(-1, 400))));
        assert_eq!("leave".parse(), Ok(Request::PointerLeave));
    }

    #[test]
    fn keeps_raw_buffer_text() {
        assert_eq!(
            "guess   Apple ".parse(),
            Ok(Request::Guess { text: "  Apple ".to_string() })
        );
        assert_eq!("word".parse(), Ok(Request::SetWord { word: String::new() }));
    }

    #[test]
    fn rejects_bad_lines() {
        assert_eq!("".parse::<Request>(), Err(ParseError::Empty));
        assert_eq!("dance".parse::<Request>(), Err(ParseError::UnknownCommand("dance".into())));
        assert_eq!("role judge".parse::<Request>(), Err(ParseError::UnknownRole("judge".into())));
        assert_eq!("role".parse::<Request>(), Err(ParseError::MissingArgument("role".into())));
        assert_eq!("down 1".parse::<Request>(), Err(ParseError::BadPoint("down".into())));
        assert_eq!("move a b".parse::<Request>(), Err(ParseError::BadPoint("move".into())));
    }

    #[test]
    fn json_lines() {
        let req = Request::Guess { text: "cat".to_string() };
        let line = req.to_json().unwrap();
        assert_eq!(Request::from_json(&line).unwrap(), req);
        assert!(Request::from_json("{\"Nope\":1}").is_err());
    }
}
