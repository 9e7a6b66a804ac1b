use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// The marker comment literals. Immutable; passed explicitly into the toggler.
/// A flip replaces the span of whichever literal is currently present.
#[derive(Debug, Clone, Copy)]
pub struct MarkerSpec {
    pub prefix: &'static str,
    pub on: &'static str,
    pub off: &'static str,
}

pub const DUMMY_MARKER: MarkerSpec = MarkerSpec {
    prefix: "\n<!-- dummy commit: ",
    on: "\n<!-- dummy commit: on -->\n",
    off: "\n<!-- dummy commit: off -->\n",
};

/// Toggle the marker comment in `path` between its on and off states,
/// appending the on state if the marker is absent.
/// Returns the number of marker bytes written.
///
/// # Errors
/// Returns an error if the file cannot be read or written.
pub fn toggle(path: &Path, spec: &MarkerSpec) -> Result<usize> {
    let mut contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let written = match contents.find(spec.prefix) {
        None => {
            contents.push_str(spec.on);
            spec.on.len()
        }
        Some(idx) => {
            let (cur, next) = if is_on(&contents, spec) {
                (spec.on, spec.off)
            } else {
                (spec.off, spec.on)
            };
            let end = (idx + cur.len()).min(contents.len());
            contents.replace_range(idx..end, next);
            next.len()
        }
    };

    fs::write(path, &contents).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(written)
}

/// Whether the marker is present and in its on state.
fn is_on(contents: &str, spec: &MarkerSpec) -> bool {
    contents.contains(spec.on)
}
