// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Console backend writing to the process's stderr

use std::io::{self, Write};

use chrono::Local;
use colored::Colorize;
use parking_lot::{Mutex, RwLock};

use crate::{backend::Backend, level::Level, record::Record};

/// Backend that writes formatted lines to stderr.
pub struct ConsoleBackend {
	threshold: RwLock<Level>,
	use_color: bool,
	write_lock: Mutex<()>,
}

impl ConsoleBackend {
	pub fn new() -> Self {
		Self {
			threshold: RwLock::new(Level::None),
			use_color: false,
			write_lock: Mutex::new(()),
		}
	}

	/// Colorize lines by severity. Off by default: the plain layout is
	/// what downstream tooling parses.
	pub fn with_color(mut self, enabled: bool) -> Self {
		self.use_color = enabled;
		self
	}

	fn paint(level: Level, line: &str) -> String {
		match level {
			Level::Fatal => line.red().bold().to_string(),
			Level::Error => line.red().to_string(),
			Level::Warning => line.yellow().to_string(),
			Level::Debug => line.dimmed().to_string(),
			_ => line.to_string(),
		}
	}
}

impl Default for ConsoleBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl Backend for ConsoleBackend {
	fn emit(&self, record: &Record<'_>) {
		if !record.level.eligible(*self.threshold.read()) {
			return;
		}
		// Lock held across timestamp + format + write so two emitters
		// never interleave partial lines.
		let _guard = self.write_lock.lock();
		let line = record.format_line(Local::now().naive_local());
		let line = if self.use_color {
			Self::paint(record.level, &line)
		} else {
			line
		};
		let _ = io::stderr().write_all(line.as_bytes());
	}

	fn flush(&self) {
		let _ = io::stderr().flush();
	}

	fn set_threshold(&self, level: Level) {
		*self.threshold.write() = level;
	}

	fn threshold(&self) -> Level {
		*self.threshold.read()
	}
}
