//! Line input for interactive commands.

use std::io::{BufRead, ErrorKind};

use crate::error::CliError;

/// Reads one line and trims it.
///
/// Returns `Ok(None)` on EOF. An interrupted read becomes
/// [`CliError::Interrupted`] so the caller can exit with code 130.
///
/// ```rust
/// use std::io::Cursor;
/// use headsup_cli::io_utils::read_line;
///
/// let mut input = Cursor::new("  call \n");
/// assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("call"));
/// assert_eq!(read_line(&mut input).unwrap(), None);
/// ```
pub fn read_line(input: &mut dyn BufRead) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::Interrupted => {
            Err(CliError::Interrupted("input interrupted".into()))
        }
        Err(e) => Err(CliError::Io(e)),
    }
}
