//! Generic error handling utilities
//!
//! Provides unified error reporting across the queue, notification and
//! configuration error types while keeping domain-specific wording.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (a rejected name, a duplicate request) carry a
/// message meant for the person at the desk. System errors (a closed channel,
/// an unreadable config file) are reported with generic context and their
/// details go to the debug log.
///
/// # Implementation Consistency
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`. When it returns `false`, `user_message()` returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message that should be shown directly
    fn is_user_actionable(&self) -> bool;

    /// Returns the user-facing message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log an error with a level and wording that depends on who can act on it
///
/// - User-actionable errors are logged at warn level with their own message
/// - System errors are logged at error level with the operation context
///
/// Full details are always emitted at debug level.
///
/// # Examples
/// ```rust,no_run
/// # use helpqueue::core::error_handling::log_error_with_context;
/// # use helpqueue::queue::ValidationError;
/// let err = ValidationError::Empty;
/// log_error_with_context(&err, "Quick help request");
/// // Logs: "Quick help request: Please enter a valid name in the given field."
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => {
            log::warn!("{}: {}", operation_context, user_msg);
        }
        _ => {
            log::error!("{} failed", operation_context);
        }
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
