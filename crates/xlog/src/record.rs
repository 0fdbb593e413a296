// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Log records and line formatting

use chrono::NaiveDateTime;

use crate::level::Level;

/// A single log event, borrowed from the issuing call site.
///
/// Records carry no timestamp; backends stamp the line at emission time
/// with the local wall clock.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
	pub level: Level,
	/// Caller-supplied module or source-file tag.
	pub origin: Option<&'a str>,
	/// Function at the call site.
	pub function: &'a str,
	pub message: &'a str,
}

impl<'a> Record<'a> {
	pub fn new(
		level: Level,
		origin: Option<&'a str>,
		function: &'a str,
		message: &'a str,
	) -> Self {
		Self {
			level,
			origin,
			function,
			message,
		}
	}

	/// Render the line layout downstream tooling parses:
	///
	/// ```text
	/// YYYY-MM-DD HH:MM:SS.mmm LEVELNAME  [origin function] message\n
	/// ```
	///
	/// The level field is left-justified to 8 columns; the bracket
	/// segment is omitted entirely when the record has no origin.
	pub fn format_line(&self, ts: NaiveDateTime) -> String {
		let mut line = format!(
			"{} {:<8} ",
			ts.format("%Y-%m-%d %H:%M:%S%.3f"),
			self.level.as_str()
		);
		if let Some(origin) = self.origin {
			line.push('[');
			line.push_str(origin);
			line.push(' ');
			line.push_str(self.function);
			line.push_str("] ");
		}
		line.push_str(self.message);
		line.push('\n');
		line
	}

	/// Bracket-prefixed form without a timestamp, for sinks that stamp
	/// lines themselves.
	pub fn tagged_message(&self) -> String {
		match self.origin {
			Some(origin) => format!(
				"[{} {}] {}",
				origin, self.function, self.message
			),
			None => self.message.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;

	fn ts() -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2024, 1, 5)
			.unwrap()
			.and_hms_milli_opt(9, 3, 7, 250)
			.unwrap()
	}

	#[test]
	fn line_layout_is_stable() {
		let record =
			Record::new(Level::Info, Some("mod"), "fn", "value=42");
		assert_eq!(
			record.format_line(ts()),
			"2024-01-05 09:03:07.250 INFO     [mod fn] value=42\n"
		);
	}

	#[test]
	fn bracket_segment_omitted_without_origin() {
		let record = Record::new(Level::Error, None, "fn", "boom");
		assert_eq!(
			record.format_line(ts()),
			"2024-01-05 09:03:07.250 ERROR    boom\n"
		);
	}

	#[test]
	fn level_field_is_eight_columns() {
		let record =
			Record::new(Level::Warning, Some("m"), "f", "msg");
		let line = record.format_line(ts());
		assert!(line.contains("WARNING  [m f] msg"));
	}

	#[test]
	fn tagged_message_prefixes_origin_and_function() {
		let record = Record::new(Level::Info, Some("mod"), "fn", "hi");
		assert_eq!(record.tagged_message(), "[mod fn] hi");

		let record = Record::new(Level::Info, None, "fn", "hi");
		assert_eq!(record.tagged_message(), "hi");
	}
}
