//! Command-line flags for the `activity` binary.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use rings_engine::rings::{ActivityValues, RingType};

use crate::progress::{parse_progress, ProgressError};

pub const USAGE: &str = "\
usage: activity [options]

  -out-path <path>   where the PNG is written (default: rings.png)
  -stand <value>     stand ring progress, 1.0 = goal (default: 0)
  -exercise <value>  exercise ring progress (default: 0)
  -move <value>      move ring progress (default: 0)
  -http              serve GET /rings?stand=..&exercise=..&move=.. instead
  -addr <host:port>  address for -http (default: 0.0.0.0:8082)
  -h, -help          show this message

Flags take one or two dashes; values may also be given as -flag=value.";

pub const DEFAULT_PORT: u16 = 8082;

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub out_path: PathBuf,
    pub values: ActivityValues,
    pub http: bool,
    pub addr: SocketAddr,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        let values = RingType::ALL.into_iter().map(|kind| (kind, 0.0)).collect();
        Self {
            out_path: PathBuf::from("rings.png"),
            values,
            http: false,
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            help: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgsError {
    UnknownFlag(String),
    MissingValue(String),
    UnexpectedValue(String),
    InvalidProgress { flag: String, source: ProgressError },
    InvalidAddr(String),
    Positional(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownFlag(flag) => write!(f, "unknown flag -{flag}"),
            ArgsError::MissingValue(flag) => write!(f, "flag -{flag} needs a value"),
            ArgsError::UnexpectedValue(flag) => write!(f, "flag -{flag} does not take a value"),
            ArgsError::InvalidProgress { flag, source } => write!(f, "invalid -{flag}: {source}"),
            ArgsError::InvalidAddr(raw) => write!(f, "invalid -addr `{raw}`"),
            ArgsError::Positional(arg) => write!(f, "unexpected argument `{arg}`"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl Args {
    /// Parses flags (without the program name).
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
                return Err(ArgsError::Positional(arg));
            };
            let (name, inline) = match flag.split_once('=') {
                Some((name, value)) => (name.to_string(), Some(value.to_string())),
                None => (flag.to_string(), None),
            };

            match name.as_str() {
                "h" | "help" | "http" => {
                    if inline.is_some() {
                        return Err(ArgsError::UnexpectedValue(name));
                    }
                    if name == "http" {
                        parsed.http = true;
                    } else {
                        parsed.help = true;
                    }
                }
                "out-path" | "stand" | "exercise" | "move" | "addr" => {
                    let value = match inline {
                        Some(value) => value,
                        None => args.next().ok_or_else(|| ArgsError::MissingValue(name.clone()))?,
                    };
                    parsed.apply(&name, value)?;
                }
                _ => return Err(ArgsError::UnknownFlag(name)),
            }
        }

        Ok(parsed)
    }

    fn apply(&mut self, name: &str, value: String) -> Result<(), ArgsError> {
        match name {
            "out-path" => self.out_path = PathBuf::from(value),
            "addr" => {
                self.addr = value.parse().map_err(|_| ArgsError::InvalidAddr(value))?;
            }
            ring => {
                // Only ring names reach here.
                let Ok(kind) = ring.parse::<RingType>() else {
                    return Err(ArgsError::UnknownFlag(ring.to_string()));
                };
                let progress = parse_progress(&value).map_err(|source| ArgsError::InvalidProgress {
                    flag: ring.to_string(),
                    source,
                })?;
                self.values.insert(kind, progress);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn no_flags_gives_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.out_path, PathBuf::from("rings.png"));
        assert!(!args.http);
        assert_eq!(args.addr.to_string(), "0.0.0.0:8082");
        for kind in RingType::ALL {
            assert_eq!(args.values.get(kind), Some(0.0));
        }
    }

    // ── flag forms ────────────────────────────────────────────────────────

    #[test]
    fn single_and_double_dash_with_separate_values() {
        let args = parse(&["-stand", "0.5", "--move", "1.25", "-out-path", "/tmp/r.png"]).unwrap();
        assert_eq!(args.values.get(RingType::Stand), Some(0.5));
        assert_eq!(args.values.get(RingType::Move), Some(1.25));
        assert_eq!(args.values.get(RingType::Exercise), Some(0.0));
        assert_eq!(args.out_path, PathBuf::from("/tmp/r.png"));
    }

    #[test]
    fn inline_values_and_bool_flags() {
        let args = parse(&["--exercise=2", "-http", "--addr=127.0.0.1:9000"]).unwrap();
        assert_eq!(args.values.get(RingType::Exercise), Some(2.0));
        assert!(args.http);
        assert_eq!(args.addr.port(), 9000);
    }

    #[test]
    fn help_flag() {
        assert!(parse(&["-h"]).unwrap().help);
        assert!(parse(&["--help"]).unwrap().help);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn bad_input_is_rejected() {
        assert_eq!(parse(&["-steps", "3"]), Err(ArgsError::UnknownFlag("steps".into())));
        assert_eq!(parse(&["-stand"]), Err(ArgsError::MissingValue("stand".into())));
        assert_eq!(parse(&["-http=yes"]), Err(ArgsError::UnexpectedValue("http".into())));
        assert_eq!(parse(&["rings.png"]), Err(ArgsError::Positional("rings.png".into())));
        assert_eq!(parse(&["-addr", "nowhere"]), Err(ArgsError::InvalidAddr("nowhere".into())));
        assert!(matches!(
            parse(&["-move", "lots"]),
            Err(ArgsError::InvalidProgress { flag, .. }) if flag == "move"
        ));
    }
}
