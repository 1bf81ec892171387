use std::path::{Path, PathBuf};

use crate::descriptor::Descriptor;
use crate::discover::descriptor_files;
use crate::entry::LaunchEntry;
use crate::error::{ConvertError, ConvertResult};
use crate::manifest::LaunchManifest;

/// File written into the current working directory.
pub const LAUNCH_FILE_NAME: &str = "launch.json";

/// What a conversion run does when one run configuration cannot be converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first bad file; nothing is written.
    #[default]
    AbortOnFirstError,
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Module name used for every entry instead of the one the descriptor names.
    pub module_override: Option<String>,
    pub failure_policy: FailurePolicy,
}

/// Decode one run configuration from text and build its launch entry.
pub fn convert_text(text: &str, module_override: Option<&str>) -> ConvertResult<LaunchEntry> {
    let descriptor = Descriptor::parse(text)?;
    LaunchEntry::build(&descriptor, module_override)
}

pub fn convert_file(path: &Path, module_override: Option<&str>) -> ConvertResult<LaunchEntry> {
    let descriptor = Descriptor::from_file(path)?;
    LaunchEntry::build(&descriptor, module_override).map_err(|err| err.with_path(path))
}

/// Convert every run configuration in `dir` into a sorted manifest.
pub fn convert_dir(dir: &Path, options: &ConvertOptions) -> ConvertResult<LaunchManifest> {
    let files = descriptor_files(dir)?;
    tracing::debug!(
        target: "launchgen.convert",
        dir = %dir.display(),
        files = files.len(),
        "found run configurations"
    );

    let mut entries = Vec::with_capacity(files.len());
    for path in &files {
        match convert_file(path, options.module_override.as_deref()) {
            Ok(entry) => {
                tracing::debug!(
                    target: "launchgen.convert",
                    path = %path.display(),
                    name = %entry.name,
                    "converted run configuration"
                );
                entries.push(entry);
            }
            Err(err) => match options.failure_policy {
                FailurePolicy::AbortOnFirstError => {
                    tracing::debug!(
                        target: "launchgen.convert",
                        path = %path.display(),
                        error = %err,
                        "aborting conversion"
                    );
                    return Err(err);
                }
            },
        }
    }

    let manifest = LaunchManifest::new(entries);
    tracing::info!(
        target: "launchgen.convert",
        configurations = manifest.configurations().len(),
        "built launch manifest"
    );
    Ok(manifest)
}

/// Write `manifest` to [`LAUNCH_FILE_NAME`] in the current working directory, replacing any
/// existing file.
pub fn write_manifest(manifest: &LaunchManifest) -> ConvertResult<PathBuf> {
    let path = PathBuf::from(LAUNCH_FILE_NAME);
    write_manifest_to(&path, manifest)?;
    Ok(path)
}

pub fn write_manifest_to(path: &Path, manifest: &LaunchManifest) -> ConvertResult<()> {
    let text = manifest
        .to_json_pretty()
        .map_err(|err| ConvertError::OutputWriteFailure {
            path: path.to_path_buf(),
            source: err.into(),
        })?;
    std::fs::write(path, text).map_err(|source| ConvertError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(target: "launchgen.convert", path = %path.display(), "wrote launch manifest");
    Ok(())
}
