use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::error::{IconError, Result};

/// (file name, edge length in px) for every slot `iconutil` expects.
pub const ICONSET_SIZES: [(&str, u32); 10] = [
    ("icon_16x16.png", 16),
    ("icon_16x16@2x.png", 32),
    ("icon_32x32.png", 32),
    ("icon_32x32@2x.png", 64),
    ("icon_128x128.png", 128),
    ("icon_128x128@2x.png", 256),
    ("icon_256x256.png", 256),
    ("icon_256x256@2x.png", 512),
    ("icon_512x512.png", 512),
    ("icon_512x512@2x.png", 1024),
];

pub fn load_master(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.into_rgba8())
}

/// Recreates `dir` empty so nothing from an earlier run ends up in the bundle.
pub fn prepare_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(IconError::io(dir))?;
    }
    fs::create_dir_all(dir).map_err(IconError::io(dir))
}

pub fn write_iconset(
    master: &RgbaImage,
    out_dir: &Path,
    sizes: &[(&str, u32)],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(sizes.len());
    for &(name, sz) in sizes {
        let resized = if master.dimensions() == (sz, sz) {
            master.clone()
        } else {
            imageops::resize(master, sz, sz, FilterType::Lanczos3)
        };
        let path = out_dir.join(name);
        resized.save_with_format(&path, ImageFormat::Png)?;
        println!("  {}  ({}x{})", name, sz, sz);
        written.push(path);
    }
    Ok(written)
}
