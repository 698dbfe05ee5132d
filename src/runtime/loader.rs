//! Program loading.
//!
//! Reads program text from a file and pads it into the fixed 25x80 canvas.
//! The padding rules themselves live on [`Playfield::from_source`]; this
//! module only adds the filesystem edge and its error mapping.

use std::fs;
use std::path::Path;

use crate::core::error::{BefResult, BefungeError};
use crate::core::grid::Playfield;

/// Load a program from `path` into a playfield.
///
/// Fails with [`BefungeError::Load`] before any execution begins if the file
/// cannot be read.
pub fn load_file(path: impl AsRef<Path>) -> BefResult<Playfield> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|err| BefungeError::Load {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    Ok(Playfield::from_source(&source))
}
