use std::{fs::File, path::Path};

use tracing::{debug, instrument};
use zip::ZipArchive;

use crate::error::Result;

/// Unpack every entry of `zip_path` into `dest_dir`, keeping each entry's
/// stored relative path. Existing files are overwritten; entries written
/// before a failure are left in place.
///
/// Returns the number of entries in the archive.
#[instrument(level = "debug", skip(zip_path, dest_dir), fields(zip = %zip_path.as_ref().display()))]
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(zip_path: P, dest_dir: Q) -> Result<usize> {
    let file = File::open(zip_path.as_ref())?;
    let mut archive = ZipArchive::new(file)?;
    let entries = archive.len();

    archive.extract(dest_dir.as_ref())?;
    debug!(entries, dest = %dest_dir.as_ref().display(), "extracted archive");

    Ok(entries)
}
