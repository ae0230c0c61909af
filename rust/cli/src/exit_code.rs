//! Exit codes returned by [`crate::run`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// A simulation stopped early; records written so far are kept.
pub const INTERRUPTED: i32 = 130;
