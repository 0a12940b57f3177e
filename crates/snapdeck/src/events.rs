use kurbo::Vec2;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Command(Command),
    ConfigReload,
}

/// Where a collection command applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    Front,
    Back,
    Index(usize),
}

impl FromStr for Place {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front" | "first" => Ok(Self::Front),
            "back" | "last" => Ok(Self::Back),
            other => other
                .parse()
                .map(Self::Index)
                .map_err(|_| CommandError::BadArgument(s.to_string())),
        }
    }
}

/// A control command received over the socket, one per line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Prev,
    GoTo(usize),
    Add { at: Place, title: String },
    Remove(Place),
    Nudge(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Verb {
    Next,
    #[strum(to_string = "prev", serialize = "previous")]
    Prev,
    #[strum(to_string = "goto", serialize = "go")]
    GoTo,
    Add,
    #[strum(to_string = "remove", serialize = "rm")]
    Remove,
    Nudge,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownVerb(String),
    #[error("'{0}' is missing an argument")]
    MissingArgument(String),
    #[error("invalid argument '{0}'")]
    BadArgument(String),
}

fn number<T: FromStr>(arg: Option<&str>, verb: Verb) -> Result<T, CommandError> {
    let arg = arg.ok_or_else(|| CommandError::MissingArgument(verb.to_string()))?;
    arg.parse()
        .map_err(|_| CommandError::BadArgument(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandError::Empty)?;
        let verb: Verb = word
            .parse()
            .map_err(|_| CommandError::UnknownVerb(word.to_string()))?;

        match verb {
            Verb::Next => Ok(Self::Next),
            Verb::Prev => Ok(Self::Prev),
            Verb::GoTo => number(words.next(), verb).map(Self::GoTo),
            Verb::Add => {
                let at = words
                    .next()
                    .ok_or_else(|| CommandError::MissingArgument(verb.to_string()))?
                    .parse()?;
                let title = words.collect::<Vec<_>>().join(" ");
                if title.is_empty() {
                    return Err(CommandError::MissingArgument(verb.to_string()));
                }
                Ok(Self::Add { at, title })
            }
            Verb::Remove => words
                .next()
                .map_or(Ok(Place::Back), str::parse)
                .map(Self::Remove),
            Verb::Nudge => {
                let x = number(words.next(), verb)?;
                let y = number(words.next(), verb)?;
                Ok(Self::Nudge(Vec2::new(x, y)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cases = vec![
            ("next", Command::Next),
            ("  PREV ", Command::Prev),
            ("previous", Command::Prev),
            ("goto 3", Command::GoTo(3)),
            (
                "add front Hello there",
                Command::Add {
                    at: Place::Front,
                    title: "Hello there".to_string(),
                },
            ),
            (
                "add 2 x",
                Command::Add {
                    at: Place::Index(2),
                    title: "x".to_string(),
                },
            ),
            ("remove", Command::Remove(Place::Back)),
            ("rm first", Command::Remove(Place::Front)),
            ("remove 0", Command::Remove(Place::Index(0))),
            ("nudge -1500 0.5", Command::Nudge(Vec2::new(-1500.0, 0.5))),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>(), Ok(expected), "{line}");
        }
    }

    #[test]
    fn test_command_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "show".parse::<Command>(),
            Err(CommandError::UnknownVerb("show".to_string()))
        );
        assert_eq!(
            "goto".parse::<Command>(),
            Err(CommandError::MissingArgument("goto".to_string()))
        );
        assert_eq!(
            "goto -1".parse::<Command>(),
            Err(CommandError::BadArgument("-1".to_string()))
        );
        assert_eq!(
            "add back".parse::<Command>(),
            Err(CommandError::MissingArgument("add".to_string()))
        );
        assert_eq!(
            "add middle x".parse::<Command>(),
            Err(CommandError::BadArgument("middle".to_string()))
        );
    }
}
