use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{In, Reader, Tag, Value};
use tracing::{debug, warn};

use crate::error::{Result, ShowcaseError};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

pub fn is_supported_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension(path).as_str())
}

// --- List slide images in a directory, sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| ShowcaseError::Io { path: dir_path.to_path_buf(), source };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(ShowcaseError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("Could not read EXIF data: {}", e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let image_err = |reason: String| ShowcaseError::Image { path: image_path.to_path_buf(), reason };

    let file_bytes = fs::read(image_path)
        .map_err(|source| ShowcaseError::Io { path: image_path.to_path_buf(), source })?;

    let extension = extension(image_path);
    // Only JPEG carries EXIF reliably
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| image_err(e.to_string()))?;

    // 3 = 180°, 6 = 90° CW, 8 = 90° CCW; flipped orientations are drawn as-is
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %image_path.display(), orientation, "loaded slide image");

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| image_err(e.to_string()))
}
