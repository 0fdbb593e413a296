// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! File backend with process-wide open-path conflict detection

use std::{
	collections::HashSet,
	fs::File,
	io::{self, Write},
	path::{Path, PathBuf},
};

use chrono::Local;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use crate::{
	backend::Backend,
	error::{Error, Result},
	level::Level,
	record::Record,
};

/// Paths currently backed by a live file backend. Two independent
/// backends writing to one file would interleave partial lines, so the
/// second constructor loses.
static OPEN_PATHS: Lazy<Mutex<HashSet<PathBuf>>> =
	Lazy::new(|| Mutex::new(HashSet::new()));

/// Backend that writes formatted lines to a file.
///
/// The handle is opened lazily, truncating, on the first emit (or via
/// [`FileBackend::open`]). An open failure leaves the backend permanently
/// dead: every later emit is a silent no-op. Lines are not flushed
/// automatically; call [`Backend::flush`] for durability. Dropping the
/// backend flushes, closes the handle and releases the path for reuse.
pub struct FileBackend {
	path: PathBuf,
	threshold: RwLock<Level>,
	state: Mutex<FileState>,
}

#[derive(Default)]
struct FileState {
	handle: Option<File>,
	dead: bool,
}

impl FileState {
	// Also the serialization point for the lazy open: callers hold the
	// state lock, so concurrent first-emits cannot double-open.
	fn ensure_open(&mut self, path: &Path) -> io::Result<&mut File> {
		if self.dead {
			return Err(io::Error::other(
				"log file open failed earlier",
			));
		}
		if self.handle.is_none() {
			match File::create(path) {
				Ok(file) => self.handle = Some(file),
				Err(err) => {
					self.dead = true;
					return Err(err);
				}
			}
		}
		match self.handle.as_mut() {
			Some(file) => Ok(file),
			None => Err(io::Error::other("log file not open")),
		}
	}
}

impl FileBackend {
	/// Create a backend for `path`.
	///
	/// Fails with [`Error::HandlerConflict`] when another live backend
	/// already targets the same path. The file itself is not touched
	/// until the first emit.
	pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		if !OPEN_PATHS.lock().insert(path.clone()) {
			return Err(Error::HandlerConflict { path });
		}
		Ok(Self {
			path,
			threshold: RwLock::new(Level::None),
			state: Mutex::new(FileState::default()),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Open the log file eagerly instead of on the first emit,
	/// surfacing the failure that a lazy open would swallow.
	pub fn open(&self) -> Result<()> {
		self.state.lock().ensure_open(&self.path)?;
		Ok(())
	}
}

impl Backend for FileBackend {
	fn emit(&self, record: &Record<'_>) {
		if !record.level.eligible(*self.threshold.read()) {
			return;
		}
		let mut state = self.state.lock();
		let Ok(file) = state.ensure_open(&self.path) else {
			return;
		};
		let line = record.format_line(Local::now().naive_local());
		let _ = file.write_all(line.as_bytes());
	}

	fn flush(&self) {
		if let Some(file) = self.state.lock().handle.as_mut() {
			let _ = file.flush();
		}
	}

	fn set_threshold(&self, level: Level) {
		*self.threshold.write() = level;
	}

	fn threshold(&self) -> Level {
		*self.threshold.read()
	}
}

impl Drop for FileBackend {
	fn drop(&mut self) {
		let mut state = self.state.lock();
		if let Some(mut file) = state.handle.take() {
			let _ = file.flush();
		}
		OPEN_PATHS.lock().remove(&self.path);
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use xlog_testing::temp_dir;

	use super::*;

	#[test]
	fn second_backend_on_same_path_conflicts() {
		temp_dir(|dir| {
			let path = dir.join("app.log");
			let _first = FileBackend::new(&path).unwrap();
			let err = FileBackend::new(&path)
				.err()
				.expect("second backend must fail");
			match err {
				Error::HandlerConflict { path: p } => {
					assert_eq!(p, path)
				}
				other => panic!(
					"expected HandlerConflict, got {other}"
				),
			}
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn path_is_released_on_drop() {
		temp_dir(|dir| {
			let path = dir.join("app.log");
			let first = FileBackend::new(&path).unwrap();
			drop(first);
			assert!(FileBackend::new(&path).is_ok());
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn file_is_opened_lazily() {
		temp_dir(|dir| {
			let path = dir.join("lazy.log");
			let backend = FileBackend::new(&path).unwrap();
			backend.set_threshold(Level::Debug);
			assert!(!path.exists());

			backend.emit(&Record::new(
				Level::Info,
				Some("file"),
				"test",
				"first line",
			));
			assert!(path.exists());
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn emitted_lines_survive_flush() {
		temp_dir(|dir| {
			let path = dir.join("boom.log");
			let backend = FileBackend::new(&path).unwrap();
			backend.set_threshold(Level::Debug);
			backend.emit(&Record::new(
				Level::Error,
				Some("x"),
				"y",
				"boom z",
			));
			backend.flush();

			let contents = fs::read_to_string(&path)?;
			assert!(contents.contains("ERROR"));
			assert!(contents.contains("[x y]"));
			assert!(contents.contains("boom z"));
			assert_eq!(contents.lines().count(), 1);
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn open_failure_poisons_the_backend() {
		temp_dir(|dir| {
			let path = dir.join("missing").join("app.log");
			let backend = FileBackend::new(&path).unwrap();
			backend.set_threshold(Level::Debug);

			assert!(matches!(backend.open(), Err(Error::Io(_))));

			// Dead backend: emits are silent no-ops.
			backend.emit(&Record::new(
				Level::Error,
				None,
				"f",
				"lost",
			));
			backend.flush();
			assert!(!path.exists());
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn sub_threshold_emit_does_not_open_the_file() {
		temp_dir(|dir| {
			let path = dir.join("quiet.log");
			let backend = FileBackend::new(&path).unwrap();
			backend.set_threshold(Level::Error);
			backend.emit(&Record::new(
				Level::Debug,
				None,
				"f",
				"quiet",
			));
			assert!(!path.exists());
			Ok(())
		})
		.unwrap();
	}
}
