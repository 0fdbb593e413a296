// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Logger registry

use std::{
	collections::HashMap,
	fs,
	path::{Path, PathBuf},
	sync::Arc,
};

use parking_lot::Mutex;

use crate::{backend::FileBackend, error::Result, logger::Logger};

/// Catalog guaranteeing a single [`Logger`] instance per name.
///
/// The registry is an explicit context object: the embedding application
/// creates one at startup, hands references to whatever needs to log and
/// drops it at teardown, releasing all loggers with it. There is no
/// removal operation; a logger lives as long as its registry.
pub struct Registry {
	loggers: Mutex<HashMap<String, Arc<Logger>>>,
	log_dir: Mutex<Option<PathBuf>>,
}

impl Registry {
	pub fn new() -> Self {
		Self {
			loggers: Mutex::new(HashMap::new()),
			log_dir: Mutex::new(None),
		}
	}

	/// Return the logger registered under `name`, creating it with
	/// threshold [`Level::None`](crate::Level::None) and no backends on
	/// first use. Concurrent calls with the same unseen name agree on a
	/// single instance.
	pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
		let mut loggers = self.loggers.lock();
		Arc::clone(
			loggers
				.entry(name.to_string())
				.or_insert_with(|| Arc::new(Logger::new(name))),
		)
	}

	/// Record the base directory that future file backends resolve
	/// against and make sure the directory chain exists. A creation
	/// failure is returned to the caller; the hint is kept and the
	/// registry stays usable either way.
	pub fn set_log_directory(&self, dir: impl Into<PathBuf>) -> Result<()> {
		let dir = dir.into();
		*self.log_dir.lock() = Some(dir.clone());
		fs::create_dir_all(&dir)?;
		Ok(())
	}

	pub fn log_directory(&self) -> Option<PathBuf> {
		self.log_dir.lock().clone()
	}

	/// Build a [`FileBackend`] for `file_name`, resolved against the
	/// configured log directory. Absolute paths, and registries without
	/// a directory hint, use `file_name` as given.
	pub fn open_file_backend(
		&self,
		file_name: impl AsRef<Path>,
	) -> Result<Arc<FileBackend>> {
		let file_name = file_name.as_ref();
		let path = match (&*self.log_dir.lock(), file_name.is_absolute())
		{
			(Some(dir), false) => dir.join(file_name),
			_ => file_name.to_path_buf(),
		};
		Ok(Arc::new(FileBackend::new(path)?))
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use std::thread;

	use xlog_testing::{MemoryBackend, temp_dir};

	use crate::Level;

	use super::*;

	#[test]
	fn same_name_returns_the_same_instance() {
		let registry = Registry::new();
		let a = registry.get_or_create("svc");
		let b = registry.get_or_create("svc");
		assert!(Arc::ptr_eq(&a, &b));

		let other = registry.get_or_create("other");
		assert!(!Arc::ptr_eq(&a, &other));
	}

	#[test]
	fn mutations_are_visible_through_every_handle() {
		let registry = Registry::new();
		let backend = Arc::new(MemoryBackend::new());

		registry.get_or_create("svc").attach(backend.clone());
		let other = registry.get_or_create("svc");
		other.set_threshold(Level::Debug);
		other.info(Some("svc"), "run", format_args!("shared"));

		assert_eq!(backend.lines().len(), 1);
	}

	#[test]
	fn concurrent_lookups_agree_on_one_logger() {
		let registry = Registry::new();
		let handles: Vec<_> = thread::scope(|scope| {
			(0..8)
				.map(|_| {
					scope.spawn(|| {
						registry.get_or_create("raced")
					})
				})
				.collect::<Vec<_>>()
				.into_iter()
				.map(|h| h.join().unwrap())
				.collect()
		});
		for handle in &handles[1..] {
			assert!(Arc::ptr_eq(&handles[0], handle));
		}
	}

	#[test]
	fn log_directory_is_created_and_used() {
		temp_dir(|dir| {
			let registry = Registry::new();
			let base = dir.join("logs").join("nested");
			registry.set_log_directory(&base).unwrap();
			assert!(base.is_dir());

			let backend =
				registry.open_file_backend("app.log").unwrap();
			assert_eq!(backend.path(), base.join("app.log"));
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn absolute_paths_bypass_the_directory_hint() {
		temp_dir(|dir| {
			let registry = Registry::new();
			registry.set_log_directory(dir.join("base")).unwrap();

			let absolute = dir.join("elsewhere.log");
			let backend =
				registry.open_file_backend(&absolute).unwrap();
			assert_eq!(backend.path(), absolute);
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn missing_hint_uses_the_name_as_given() {
		temp_dir(|dir| {
			let registry = Registry::new();
			let path = dir.join("plain.log");
			let backend =
				registry.open_file_backend(&path).unwrap();
			assert_eq!(backend.path(), path);
			Ok(())
		})
		.unwrap();
	}
}
