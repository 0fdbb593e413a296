// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Error types for backend construction and configuration
//!
//! Emit and flush failures never surface here: they are swallowed inside
//! the failing backend so one broken sink cannot block delivery through
//! its siblings or crash the caller.

use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Another live file backend already writes to the same path.
	#[error("another file backend already writes to {}", path.display())]
	HandlerConflict { path: PathBuf },

	/// Open, write or flush failure on a log destination.
	#[error("log destination i/o failure")]
	Io(#[from] io::Error),

	/// Unrecognized level name supplied to a strict threshold setter.
	#[error("unrecognized log level name `{0}`")]
	InvalidLevel(String),
}
