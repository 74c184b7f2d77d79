//! # Network files
//!
//! Reading `.net` files from disk and analysing them.
use std::path::{Path, PathBuf};

/// # Execution
mod test;

/// Folder where the network files are stored.
fn network_file_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("import").join("network_files")
}

/// Compute the path of a network file, based on its name.
///
/// # Arguments
///
/// * `name`: File name without extension.
fn get_test_file_path(name: &str) -> PathBuf {
    network_file_directory().join(name).with_extension("net")
}
