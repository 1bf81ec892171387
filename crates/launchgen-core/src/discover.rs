use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};

/// Extension of IntelliJ run configuration files.
pub const DESCRIPTOR_EXTENSION: &str = "xml";

/// List the run configuration files directly inside `dir`.
///
/// Sub-directories are not searched. The result is sorted by path so that diagnostics are
/// reproducible; the manifest order does not depend on it.
pub fn descriptor_files(dir: &Path) -> ConvertResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConvertError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|err| ConvertError::Io {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf()),
            source: err.into(),
        })?;

        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == DESCRIPTOR_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
