// Fri Oct 16 2026 - Alex

//! Reading and writing raw file images. Nothing here looks inside the bytes.

use crate::config::{OutputPolicy, BACKUP_SUFFIX};
use crate::error::PatchError;
use log::info;
use memmap2::Mmap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Loads the whole file into an owned, mutable buffer.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, PatchError> {
    let path = path.as_ref();
    let not_found = |source| PatchError::InputNotFound {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(not_found)?;
    let len = file.metadata().map_err(not_found)?.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let mmap = unsafe { Mmap::map(&file) }.map_err(not_found)?;
    Ok(mmap.to_vec())
}

pub fn write<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), PatchError> {
    let path = path.as_ref();
    fs::write(path, bytes).map_err(|source| PatchError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// `dir/stem.ext` becomes `dir/stem{suffix}.ext`.
pub fn derive_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

pub fn backup_path(input: &Path) -> PathBuf {
    derive_path(input, BACKUP_SUFFIX)
}

pub fn output_path(input: &Path, policy: &OutputPolicy) -> PathBuf {
    match policy {
        OutputPolicy::Suffixed { suffix } => derive_path(input, suffix),
        OutputPolicy::InPlace { .. } => input.to_path_buf(),
    }
}

/// Persists a patched buffer according to `policy`.
///
/// When `backup` holds the unmodified image it is written to
/// `stem_original.ext` before the output.
pub fn persist(input: &Path, backup: Option<&[u8]>, patched: &[u8], policy: &OutputPolicy) -> Result<PathBuf, PatchError> {
    if let Some(original) = backup {
        let path = backup_path(input);
        write(&path, original)?;
        info!("Backup written to {}", path.display());
    }

    let target = output_path(input, policy);
    write(&target, patched)?;
    info!("Wrote {} bytes to {}", patched.len(), target.display());
    Ok(target)
}
