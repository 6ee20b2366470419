//! Tracing for hot loops that is compiled away unless the
//! `nerode_debug-trace` feature is enabled.

/// Forwards to `log::trace!` when the `nerode_debug-trace` feature is enabled,
/// expands to nothing otherwise. The calling crate must depend on `log`.
///
/// # Examples
///
/// ```
/// nerode_utilities::debug_trace!("Reading symbol {} at position {}", 'a', 0);
/// ```
#[macro_export]
#[cfg(feature = "nerode_debug-trace")]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        {
            log::trace!($($arg)*);
        }
    };
}

#[macro_export]
#[cfg(not(feature = "nerode_debug-trace"))]
macro_rules! debug_trace {
    ($($arg:tt)*) => {{}};
}
