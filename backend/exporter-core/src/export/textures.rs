use crate::config::ExporterConfig;
use crate::executor::Attachment;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Texture files directly inside `dir`, sorted by name.
///
/// Sub-directories are not searched. A missing directory is an empty set,
/// not an error.
pub fn collect_textures(dir: &Path, config: &ExporterConfig) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No texture directory at {}", dir.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Cannot list texture directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut textures: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .map(|name| config.is_texture(&name.to_string_lossy()))
                .unwrap_or(false)
        })
        .collect();

    textures.sort();
    debug!("Found {} texture(s) in {}", textures.len(), dir.display());
    textures
}

/// One `textures[i]` part per file, in the given order.
pub fn texture_attachments(textures: &[PathBuf]) -> Vec<Attachment> {
    textures
        .iter()
        .enumerate()
        .map(|(index, path)| Attachment::new(format!("textures[{index}]"), path))
        .collect()
}
