// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Named loggers

use std::{fmt, ptr, sync::Arc};

use parking_lot::RwLock;

use crate::{backend::Backend, level::Level, record::Record};

/// Named entry point through which callers issue leveled messages.
///
/// Loggers are created through
/// [`Registry::get_or_create`](crate::Registry::get_or_create) and shared
/// by handle; the registry keeps them alive. A fresh logger has threshold
/// [`Level::None`] (everything suppressed) and no backends.
pub struct Logger {
	name: String,
	threshold: RwLock<Level>,
	backends: RwLock<Vec<Arc<dyn Backend>>>,
}

impl Logger {
	pub(crate) fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			threshold: RwLock::new(Level::None),
			backends: RwLock::new(Vec::new()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn threshold(&self) -> Level {
		*self.threshold.read()
	}

	/// Replace this logger's threshold and propagate it to every
	/// attached backend. The propagation is a convenience default:
	/// backends keep independent thresholds and may be reconfigured
	/// afterwards.
	pub fn set_threshold(&self, level: Level) {
		*self.threshold.write() = level;
		for backend in self.backends.read().iter() {
			backend.set_threshold(level);
		}
	}

	/// Lenient variant for caller-supplied level names; unrecognized
	/// names fall back (silently) to [`Level::None`].
	pub fn set_threshold_by_name(&self, name: &str) {
		self.set_threshold(Level::from_name(name));
	}

	/// Attach a backend. Attaching one that is already present is a
	/// no-op.
	pub fn attach(&self, backend: Arc<dyn Backend>) {
		let mut backends = self.backends.write();
		if !backends.iter().any(|b| same_backend(b, &backend)) {
			backends.push(backend);
		}
	}

	/// Detach a backend; detaching one that was never attached is a
	/// no-op. Identity is the shared allocation, not the concrete type.
	pub fn detach<B: Backend + ?Sized>(&self, backend: &Arc<B>) {
		self.backends.write().retain(|b| !same_backend(b, backend));
	}

	/// Core leveled call.
	///
	/// Returns without touching the backend set when `level` does not
	/// pass this logger's threshold. Otherwise the message is rendered
	/// once and handed to every attached backend; each backend
	/// re-checks its own threshold and swallows its own i/o failures,
	/// so delivery to siblings is never blocked.
	pub fn log(
		&self,
		origin: Option<&str>,
		function: &str,
		level: Level,
		args: fmt::Arguments<'_>,
	) {
		if !level.eligible(self.threshold()) {
			return;
		}
		let message = args.to_string();
		let record = Record::new(level, origin, function, &message);
		// Snapshot so emitting never races attach/detach.
		let backends = self.backends.read().clone();
		for backend in &backends {
			backend.emit(&record);
		}
	}

	pub fn fatal(
		&self,
		origin: Option<&str>,
		function: &str,
		args: fmt::Arguments<'_>,
	) {
		self.log(origin, function, Level::Fatal, args);
	}

	pub fn error(
		&self,
		origin: Option<&str>,
		function: &str,
		args: fmt::Arguments<'_>,
	) {
		self.log(origin, function, Level::Error, args);
	}

	pub fn warning(
		&self,
		origin: Option<&str>,
		function: &str,
		args: fmt::Arguments<'_>,
	) {
		self.log(origin, function, Level::Warning, args);
	}

	pub fn info(
		&self,
		origin: Option<&str>,
		function: &str,
		args: fmt::Arguments<'_>,
	) {
		self.log(origin, function, Level::Info, args);
	}

	pub fn debug(
		&self,
		origin: Option<&str>,
		function: &str,
		args: fmt::Arguments<'_>,
	) {
		self.log(origin, function, Level::Debug, args);
	}

	/// Flush every attached backend, independent of thresholds.
	pub fn flush(&self) {
		let backends = self.backends.read().clone();
		for backend in &backends {
			backend.flush();
		}
	}
}

fn same_backend<B: Backend + ?Sized>(
	a: &Arc<dyn Backend>,
	b: &Arc<B>,
) -> bool {
	ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
