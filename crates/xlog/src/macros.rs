// Copyright (c) 2025 the xlog authors
// This file is licensed under the MIT license, see license.md file

//! Call-site macros for leveled logging

/// Core logging macro; the leveled variants below are the usual entry
/// points.
///
/// ```
/// # use std::sync::Arc;
/// # use xlog::{DiscardBackend, Level, Registry};
/// # let registry = Registry::new();
/// # let logger = registry.get_or_create("doc");
/// # logger.attach(Arc::new(DiscardBackend::new()));
/// # logger.set_threshold(Level::Debug);
/// xlog::log!(logger, "mod", "fn", Level::Info, "value={}", 42);
/// ```
#[macro_export]
macro_rules! log {
	($logger:expr, $origin:expr, $function:expr, $level:expr, $($arg:tt)+) => {
		$logger.log(
			::core::option::Option::Some($origin),
			$function,
			$level,
			format_args!($($arg)+),
		)
	};
}

/// Fatal level logging
#[macro_export]
macro_rules! fatal {
	($logger:expr, $origin:expr, $function:expr, $($arg:tt)+) => {
		$crate::log!($logger, $origin, $function, $crate::Level::Fatal, $($arg)+)
	};
}

/// Error level logging
#[macro_export]
macro_rules! error {
	($logger:expr, $origin:expr, $function:expr, $($arg:tt)+) => {
		$crate::log!($logger, $origin, $function, $crate::Level::Error, $($arg)+)
	};
}

/// Warning level logging
#[macro_export]
macro_rules! warning {
	($logger:expr, $origin:expr, $function:expr, $($arg:tt)+) => {
		$crate::log!($logger, $origin, $function, $crate::Level::Warning, $($arg)+)
	};
}

/// Info level logging
#[macro_export]
macro_rules! info {
	($logger:expr, $origin:expr, $function:expr, $($arg:tt)+) => {
		$crate::log!($logger, $origin, $function, $crate::Level::Info, $($arg)+)
	};
}

/// Debug level logging
#[macro_export]
macro_rules! debug {
	($logger:expr, $origin:expr, $function:expr, $($arg:tt)+) => {
		$crate::log!($logger, $origin, $function, $crate::Level::Debug, $($arg)+)
	};
}
