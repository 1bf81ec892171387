//! Conversion of IntelliJ run configurations into a VS Code `launch.json`.
//!
//! The pipeline is:
//! - [`discover::descriptor_files`] lists `*.xml` files in a directory
//! - [`Descriptor::parse`] decodes each file
//! - [`LaunchEntry::build`] derives one launch configuration per file
//! - [`LaunchManifest::new`] sorts the entries by name
//! - [`convert::write_manifest`] writes `launch.json`

pub mod convert;
pub mod descriptor;
pub mod discover;
pub mod entry;
mod error;
pub mod manifest;

pub use convert::{
    convert_dir, convert_file, convert_text, write_manifest, write_manifest_to, ConvertOptions,
    FailurePolicy, LAUNCH_FILE_NAME,
};
pub use descriptor::{Descriptor, DescriptorChild, Method, MethodOption};
pub use entry::LaunchEntry;
pub use error::{ConvertError, ConvertResult};
pub use manifest::{LaunchManifest, LAUNCH_FORMAT_VERSION};
