// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Test support for the xlog workspace

use std::{env, fs, path::Path};

use parking_lot::Mutex;
use uuid::Uuid;
use xlog::{Backend, Level, Record};

/// Run `f` inside a uniquely named directory under the OS temp dir and
/// remove the directory afterwards.
pub fn temp_dir<F>(f: F) -> std::io::Result<()>
where
	F: FnOnce(&Path) -> std::io::Result<()>,
{
	let mut path = env::temp_dir();
	path.push(format!("xlog-{}", Uuid::new_v4()));

	fs::create_dir(&path)?;
	let result = f(&path);

	let _ = fs::remove_dir_all(&path);
	result
}

/// Backend that captures emitted records in memory for assertions.
///
/// Starts wide open (threshold [`Level::Debug`]) so tests only have to
/// configure the logger side of the dual filter.
pub struct MemoryBackend {
	threshold: Mutex<Level>,
	lines: Mutex<Vec<String>>,
	flushes: Mutex<usize>,
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self {
			threshold: Mutex::new(Level::Debug),
			lines: Mutex::new(Vec::new()),
			flushes: Mutex::new(0),
		}
	}

	/// Captured lines, one per eligible emit, formatted as
	/// `LEVEL [origin function] message`.
	pub fn lines(&self) -> Vec<String> {
		self.lines.lock().clone()
	}

	pub fn flush_count(&self) -> usize {
		*self.flushes.lock()
	}

	pub fn clear(&self) {
		self.lines.lock().clear();
	}
}

impl Default for MemoryBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl Backend for MemoryBackend {
	fn emit(&self, record: &Record<'_>) {
		if !record.level.eligible(*self.threshold.lock()) {
			return;
		}
		let line = match record.origin {
			Some(origin) => format!(
				"{} [{} {}] {}",
				record.level,
				origin,
				record.function,
				record.message
			),
			None => format!("{} {}", record.level, record.message),
		};
		self.lines.lock().push(line);
	}

	fn flush(&self) {
		*self.flushes.lock() += 1;
	}

	fn set_threshold(&self, level: Level) {
		*self.threshold.lock() = level;
	}

	fn threshold(&self) -> Level {
		*self.threshold.lock()
	}
}
