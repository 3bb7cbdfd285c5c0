//! PNG export of the grid.
//!
//! Each painted cell becomes a solid block of `EXPORT_CELL_PIXELS` pixels;
//! white and unresolvable cells stay fully transparent.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::{position, GridStore, Rgba, EXPORT_CELL_PIXELS, EXPORT_FILE_NAME, GRID_CELLS};
use crate::error::ExportError;

/// Rasterize the grid onto a transparent canvas
pub fn rasterize(grid: &GridStore) -> RgbaImage {
    let side = GRID_CELLS as u32 * EXPORT_CELL_PIXELS;
    let mut image = RgbaImage::new(side, side);

    for (index, value) in grid.colors().iter().enumerate() {
        if value == "white" {
            continue;
        }
        let rgba = match Rgba::parse_css(value) {
            Ok(Rgba::WHITE) => continue,
            Ok(rgba) => rgba,
            Err(err) => {
                warn!(index, %err, "cell color does not resolve, leaving it transparent");
                continue;
            }
        };

        let (row, col) = position(index);
        fill_block(&mut image, col as u32 * EXPORT_CELL_PIXELS, row as u32 * EXPORT_CELL_PIXELS, rgba);
    }

    image
}

fn fill_block(image: &mut RgbaImage, x: u32, y: u32, color: Rgba) {
    let pixel = color.to_image_rgba();
    for py in y..y + EXPORT_CELL_PIXELS {
        for px in x..x + EXPORT_CELL_PIXELS {
            image.put_pixel(px, py, pixel);
        }
    }
}

/// Write `dot_image.png` into `dir` without clobbering an earlier download
pub fn export(grid: &GridStore, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = unique_download_path(dir, EXPORT_FILE_NAME);
    rasterize(grid)
        .save_with_format(&path, image::ImageFormat::Png)
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), "image exported");
    Ok(path)
}

/// `name`, or `stem (n).ext` with the first free n, the way browsers name repeated downloads
pub fn unique_download_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{ext}")),
        None => (name, String::new()),
    };
    (1..)
        .map(|n| dir.join(format!("{stem} ({n}){ext}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
