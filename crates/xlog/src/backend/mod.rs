// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Output backends
//!
//! A backend is a concrete destination for formatted log lines. The set
//! is closed: [`DiscardBackend`], [`ConsoleBackend`], [`FileBackend`] and
//! (on unix) [`SyslogBackend`], all behind the object-safe [`Backend`]
//! trait. Backends are shared via `Arc`; a logger holds handles but the
//! constructor keeps ownership.

mod console;
mod discard;
mod file;
#[cfg(unix)]
mod syslog;

pub use console::ConsoleBackend;
pub use discard::DiscardBackend;
pub use file::FileBackend;
#[cfg(unix)]
pub use syslog::SyslogBackend;

use crate::{level::Level, record::Record};

/// Destination for formatted log lines.
pub trait Backend: Send + Sync {
	/// Write one record, provided its level passes this backend's own
	/// threshold. Writes on a single instance are serialized so that
	/// concurrent emitters never interleave partial lines.
	///
	/// I/o failures are backend-local: implementations swallow them so
	/// one broken sink cannot block delivery through its siblings.
	fn emit(&self, record: &Record<'_>);

	/// Force buffered output to the destination. A no-op where the
	/// destination has no client-side buffer.
	fn flush(&self);

	/// Replace this backend's own threshold. It filters independently
	/// of any logger threshold; both must pass for a line to be
	/// written.
	fn set_threshold(&self, level: Level);

	fn threshold(&self) -> Level;
}
