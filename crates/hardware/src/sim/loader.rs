//! Program Image Loader.
//!
//! This module reads program images in the plain hex text format. It performs:
//! 1. **Parsing:** One 32-bit hexadecimal word per line, with an optional `0x`
//!    prefix. Blank lines and `#` comments are ignored.
//! 2. **Error reporting:** Malformed lines are reported with their 1-based
//!    line number.
//! 3. **File access:** Reads the image from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::LoadError;

/// Parses a hex program image into instruction words.
///
/// # Arguments
///
/// * `text` - Program source, one word per line.
///
/// # Returns
///
/// The words in program order, or the first malformed line.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_program;
///
/// let words = parse_program("# add\n0x00221820\n\n2401000a # li $1, 10\n").unwrap();
/// assert_eq!(words, vec![0x0022_1820, 0x2401_000A]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let word = u32::from_str_radix(digits, 16).map_err(|_| LoadError::InvalidWord {
            line: idx + 1,
            text: line.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads and parses a hex program image from disk.
pub fn load_program_file(path: &Path) -> Result<Vec<u32>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let words = parse_program(&text)?;
    debug!(path = %path.display(), words = words.len(), "program image parsed");
    Ok(words)
}
