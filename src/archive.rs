//! Unpacks the zip archive that backs the shell's directory tree.

use crate::error::{Result, ShellError};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

/// Extract every entry of `archive` into `destination`, keeping the archive's
/// relative paths. Returns the number of entries.
///
/// `destination` is created first, so it exists (and stays empty) even when
/// the archive is missing.
pub fn extract(archive: &Path, destination: &Path) -> Result<usize> {
    fs::create_dir_all(destination)?;

    if !archive.is_file() {
        log::warn!("archive {} does not exist", archive.display());
        return Err(ShellError::ArchiveNotFound(archive.to_path_buf()));
    }

    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;
    let entries = zip.len();
    zip.extract(destination)?;

    log::info!(
        "unpacked {} entries from {} into {}",
        entries,
        archive.display(),
        destination.display()
    );
    Ok(entries)
}
