//! File and input helpers shared by the commands.
//!
//! - Reading a line of player input
//! - Reading JSONL text files (UTF-8 BOM stripped)
//! - Ensuring parent directories exist before file writes
//! - Scripted input for non-interactive runs

use std::io::BufRead;

/// Environment variable holding scripted player input; when set, `play`
/// reads from it instead of stdin.
pub const TEST_INPUT_ENV: &str = "TONGITS_TEST_INPUT";

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims whitespace and returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use tongits_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  meld 1 2 3 \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("meld 1 2 3"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Scripted input from [`TEST_INPUT_ENV`], if set.
pub fn scripted_input() -> Option<String> {
    std::env::var(TEST_INPUT_ENV).ok()
}

/// Read a text file, stripping a leading UTF-8 BOM.
pub fn read_text(path: &str) -> Result<String, String> {
    let mut content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
