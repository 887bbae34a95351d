use crate::config::ExporterConfig;
use crate::export::textures::{collect_textures, texture_attachments};

use std::fs;

#[test]
fn given_missing_directory_when_collected_then_empty() {
    let dir = tempfile::tempdir().unwrap();

    let textures = collect_textures(&dir.path().join("textures"), &ExporterConfig::default());

    assert!(textures.is_empty());
}

/// **VALUE**: Only flat png/jpg files are picked up, in a stable order.
///
/// **WHY THIS MATTERS**: The `textures[i]` index is part of the upload contract. A
/// directory listing order that changes between runs would reshuffle indices.
#[test]
fn given_mixed_directory_when_collected_then_only_sorted_flat_images() {
    let dir = tempfile::tempdir().unwrap();
    let textures_dir = dir.path().join("textures");
    fs::create_dir_all(textures_dir.join("nested")).unwrap();
    fs::write(textures_dir.join("wall.png"), b"png").unwrap();
    fs::write(textures_dir.join("b_roof.jpg"), b"jpg").unwrap();
    fs::write(textures_dir.join("notes.txt"), b"txt").unwrap();
    fs::write(textures_dir.join("nested").join("deep.png"), b"png").unwrap();
    fs::create_dir_all(textures_dir.join("folder.png")).unwrap();

    let textures = collect_textures(&textures_dir, &ExporterConfig::default());

    let names: Vec<String> = textures
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["b_roof.jpg", "wall.png"]);

    let attachments = texture_attachments(&textures);
    assert_eq!(attachments[0].field, "textures[0]");
    assert_eq!(attachments[0].file_name, "b_roof.jpg");
    assert_eq!(attachments[1].field, "textures[1]");
}
