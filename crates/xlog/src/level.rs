// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Log severity levels and threshold filtering

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Log severity, ordered from most restrictive to most verbose.
///
/// A level doubles as a threshold: a message of level `S` passes a filter
/// holding threshold `T` iff `S <= T`. [`Level::None`] as a threshold
/// suppresses everything, [`Level::Debug`] allows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
	None = 0,
	Fatal = 1,
	Error = 2,
	Warning = 3,
	Info = 4,
	Debug = 5,
}

impl Level {
	/// Whether a message at this level passes a filter holding
	/// `threshold`.
	pub fn eligible(self, threshold: Level) -> bool {
		self <= threshold
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Level::None => "NONE",
			Level::Fatal => "FATAL",
			Level::Error => "ERROR",
			Level::Warning => "WARNING",
			Level::Info => "INFO",
			Level::Debug => "DEBUG",
		}
	}

	/// Lenient name lookup used by the caller-facing threshold setters:
	/// case-insensitive, unrecognized names map to [`Level::None`].
	pub fn from_name(name: &str) -> Level {
		name.parse().unwrap_or(Level::None)
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Level {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"none" => Ok(Level::None),
			"fatal" => Ok(Level::Fatal),
			"error" => Ok(Level::Error),
			"warning" => Ok(Level::Warning),
			"info" => Ok(Level::Info),
			"debug" => Ok(Level::Debug),
			_ => Err(Error::InvalidLevel(s.to_string())),
		}
	}
}
