// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! No-op backend for tests and disabled logging paths

use crate::{backend::Backend, level::Level, record::Record};

/// Backend that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardBackend;

impl DiscardBackend {
	pub fn new() -> Self {
		Self
	}
}

impl Backend for DiscardBackend {
	fn emit(&self, _record: &Record<'_>) {}

	fn flush(&self) {}

	fn set_threshold(&self, _level: Level) {}

	fn threshold(&self) -> Level {
		Level::None
	}
}
