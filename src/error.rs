//! Error types for the algoviz library.
//!
//! ## Key Components
//!
//! - [`VizError`]: Returned by algorithm steppers, the priority queue, the
//!   metrics recorder and the driver. Any error aborts the current run.
//! - [`ConfigError`]: Returned when run configuration parameters are invalid
//!   (e.g. edge density outside `[0.0, 1.0]`, zero-length sample inputs).
//! - [`InvariantError`]: Returned by `check_invariants` methods when a data
//!   structure's internal invariants are violated.
//!
//! ## Example Usage
//!
//! ```
//! use algoviz::ds::PriorityQueue;
//! use algoviz::error::VizError;
//!
//! let mut queue: PriorityQueue<usize, u64> = PriorityQueue::new();
//! assert_eq!(queue.pop(), Err(VizError::EmptyQueue));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// VizError
// ---------------------------------------------------------------------------

/// Failure raised while running an algorithm or reporting on a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VizError {
    /// An argument was outside the accepted domain (node index out of range,
    /// non-power-of-two transform length, density outside `[0, 1]`, ...).
    InvalidInput(String),
    /// `pop` was called on an empty priority queue.
    EmptyQueue,
    /// A report was requested before the run was finished.
    RunNotFinished,
}

impl VizError {
    /// Creates an [`VizError::InvalidInput`] with the given description.
    #[inline]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            VizError::EmptyQueue => f.write_str("pop from an empty priority queue"),
            VizError::RunNotFinished => {
                f.write_str("metrics report requested before finish() was called")
            },
        }
    }
}

impl std::error::Error for VizError {}

impl From<ConfigError> for VizError {
    fn from(err: ConfigError) -> Self {
        VizError::InvalidInput(err.0)
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal invariants are violated.
///
/// Produced by `check_invariants` methods (e.g.
/// [`PriorityQueue::check_invariants`](crate::ds::PriorityQueue::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when run configuration parameters are invalid.
///
/// Produced by [`RunConfig::validate`](crate::driver::RunConfig::validate)
/// and [`RunConfigBuilder::try_build`](crate::driver::RunConfigBuilder::try_build).
///
/// # Example
///
/// ```
/// use algoviz::driver::RunConfig;
///
/// let err = RunConfig::builder().edge_density(1.5).try_build().unwrap_err();
/// assert!(err.to_string().contains("edge_density"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- VizError ---------------------------------------------------------

    #[test]
    fn viz_display_invalid_input() {
        let err = VizError::invalid_input("start node 9 out of range");
        assert_eq!(err.to_string(), "invalid input: start node 9 out of range");
    }

    #[test]
    fn viz_display_empty_queue() {
        assert!(VizError::EmptyQueue.to_string().contains("empty"));
    }

    #[test]
    fn viz_display_run_not_finished() {
        assert!(VizError::RunNotFinished.to_string().contains("finish()"));
    }

    #[test]
    fn viz_from_config_error() {
        let err: VizError = ConfigError::new("sort_len must be > 0").into();
        assert_eq!(err, VizError::InvalidInput("sort_len must be > 0".into()));
    }

    #[test]
    fn viz_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<VizError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("heap order violated at index 3");
        assert_eq!(err.to_string(), "heap order violated at index 3");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("cache_capacity must be > 0");
        assert_eq!(err.to_string(), "cache_capacity must be > 0");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.message(), "x");
    }
}
