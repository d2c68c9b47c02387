use std::fs;
use std::io;
use std::path::Path;

use reo_types::{ClusterPolicy, MangleOptions};
use tracing::debug;

use crate::analyzer::{Mangler, TextNormalizer};

/// Reads each file as UTF-8 and joins the contents with a blank line.
///
/// # Errors
/// Returns the first I/O or UTF-8 decoding error encountered.
pub fn load_raw_text<P: AsRef<Path>>(paths: &[P]) -> io::Result<String> {
    let mut raw = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = text.len(), "loaded corpus file");
        raw.push(text);
    }
    Ok(raw.join("\n\n"))
}

/// Loads, normalizes and mangles a set of corpus files.
///
/// # Errors
/// See [`load_raw_text`].
pub fn load_text<P: AsRef<Path>>(
    paths: &[P],
    options: &MangleOptions,
    policy: ClusterPolicy,
) -> io::Result<String> {
    let raw = load_raw_text(paths)?;
    let normalized = TextNormalizer::new().normalize(&raw);
    Ok(Mangler::new(policy).mangle(&normalized, options))
}
