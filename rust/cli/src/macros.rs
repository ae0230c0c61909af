//! Macros for common CLI error handling patterns.

/// Write a line to a stream, returning the error exit code if writing fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line or report it and continue to the next iteration.
///
/// # Examples
///
/// ```ignore
/// let record: GameRecord = parse_json_or_continue!(line, err, line_no);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                let _ = $crate::ui::write_error(
                    $err,
                    &format!("Failed to parse record {}: {}", $context, e),
                );
                continue;
            }
        }
    };
}
