//! Error and warning lines on the error stream.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message with a "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_messages() {
        let mut err = Vec::new();
        write_error(&mut err, "bad card").unwrap();
        display_warning(&mut err, "seed ignored").unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: bad card\nWARNING: seed ignored\n"
        );
    }
}
