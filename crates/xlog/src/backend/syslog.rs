// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Syslog backend (unix)

use std::ffi::{CStr, CString};
use std::io;

use parking_lot::RwLock;

use crate::{
	backend::Backend,
	error::{Error, Result},
	level::Level,
	record::Record,
};

/// Backend forwarding messages to the platform syslog facility.
///
/// `openlog`/`closelog` act on one process-wide connection: while several
/// of these backends are alive the most recently constructed identity
/// wins, and dropping any of them closes the shared connection.
pub struct SyslogBackend {
	// openlog retains the pointer; must stay alive until closelog.
	identity: CString,
	threshold: RwLock<Level>,
}

impl SyslogBackend {
	/// Connect to syslog, tagging every message with `identity`.
	pub fn new(identity: &str) -> Result<Self> {
		let identity = CString::new(identity).map_err(|_| {
			Error::Io(io::Error::new(
				io::ErrorKind::InvalidInput,
				"syslog identity contains a NUL byte",
			))
		})?;
		// SAFETY: `identity` lives as long as `self`, and the
		// connection is closed in `Drop` before it is freed.
		unsafe {
			libc::openlog(
				identity.as_ptr(),
				libc::LOG_NDELAY,
				libc::LOG_USER,
			);
		}
		Ok(Self {
			identity,
			threshold: RwLock::new(Level::None),
		})
	}

	pub fn identity(&self) -> &CStr {
		&self.identity
	}

	fn priority(level: Level) -> libc::c_int {
		match level {
			Level::Fatal => libc::LOG_CRIT,
			Level::Error => libc::LOG_ERR,
			Level::Warning => libc::LOG_WARNING,
			Level::Info => libc::LOG_INFO,
			_ => libc::LOG_DEBUG,
		}
	}
}

impl Backend for SyslogBackend {
	fn emit(&self, record: &Record<'_>) {
		if !record.level.eligible(*self.threshold.read()) {
			return;
		}
		// Syslog stamps lines itself; forward the bracket-prefixed
		// message only. Messages with interior NULs are dropped.
		let Ok(message) = CString::new(record.tagged_message()) else {
			return;
		};
		// SAFETY: both pointers are valid NUL-terminated strings for
		// the duration of the call.
		unsafe {
			libc::syslog(
				Self::priority(record.level),
				c"%s".as_ptr(),
				message.as_ptr(),
			);
		}
	}

	// No client-side buffer.
	fn flush(&self) {}

	fn set_threshold(&self, level: Level) {
		*self.threshold.write() = level;
		// Second filtering layer: have the platform itself drop
		// anything more verbose than the new threshold (LOG_UPTO).
		let mask = (1 << (Self::priority(level) + 1)) - 1;
		// SAFETY: setlogmask has no pointer arguments.
		unsafe {
			libc::setlogmask(mask);
		}
	}

	fn threshold(&self) -> Level {
		*self.threshold.read()
	}
}

impl Drop for SyslogBackend {
	fn drop(&mut self) {
		// SAFETY: closes the connection opened in `new`.
		unsafe {
			libc::closelog();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn severity_maps_to_platform_priorities() {
		assert_eq!(
			SyslogBackend::priority(Level::Fatal),
			libc::LOG_CRIT
		);
		assert_eq!(
			SyslogBackend::priority(Level::Error),
			libc::LOG_ERR
		);
		assert_eq!(
			SyslogBackend::priority(Level::Warning),
			libc::LOG_WARNING
		);
		assert_eq!(
			SyslogBackend::priority(Level::Info),
			libc::LOG_INFO
		);
		assert_eq!(
			SyslogBackend::priority(Level::Debug),
			libc::LOG_DEBUG
		);
	}

	#[test]
	fn identity_is_kept_for_the_connection() {
		let backend = SyslogBackend::new("xlog-test").unwrap();
		assert_eq!(
			backend.identity().to_str().unwrap(),
			"xlog-test"
		);
	}

	#[test]
	fn identity_with_nul_is_rejected() {
		assert!(matches!(
			SyslogBackend::new("bad\0tag"),
			Err(Error::Io(_))
		));
	}
}
