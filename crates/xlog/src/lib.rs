// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Synchronous named-logger framework with pluggable output backends.
//!
//! Callers obtain a [`Logger`] from a [`Registry`] by name, attach one or
//! more backends, set a severity threshold and issue leveled calls. Every
//! eligible call is forwarded to every attached backend; each backend
//! re-checks its own threshold, stamps the line and writes it through
//! backend-specific, thread-safe i/o.
//!
//! ```
//! use std::sync::Arc;
//!
//! use xlog::{ConsoleBackend, Level, Registry};
//!
//! let registry = Registry::new();
//! let logger = registry.get_or_create("svc");
//! logger.attach(Arc::new(ConsoleBackend::new()));
//! logger.set_threshold(Level::Info);
//! xlog::info!(logger, "svc", "run", "started with {} workers", 4);
//! logger.flush();
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

#[cfg(unix)]
pub use backend::SyslogBackend;
pub use backend::{Backend, ConsoleBackend, DiscardBackend, FileBackend};
pub use error::{Error, Result};
pub use level::Level;
pub use logger::Logger;
pub use record::Record;
pub use registry::Registry;

pub mod backend;
mod error;
mod level;
mod logger;
mod macros;
mod record;
mod registry;
