use std::path::{Path, PathBuf};

use crate::iconset::ICONSET_SIZES;

pub const SVG_NAME: &str = "icon.svg";
pub const OUTPUT_ICNS: &str = "AppIcon.icns";
pub const ICONSET_DIR: &str = "AppIcon.iconset";
pub const MASTER_PNG: &str = "icon_master_1024.png";
pub const MASTER_SIZE: u32 = 1024;

pub const RASTERIZER: &str = "rsvg-convert";
pub const RASTERIZER_HINT: &str = "brew install librsvg";
/// Checked in order before falling back to a `PATH` lookup.
pub const RASTERIZER_CANDIDATES: [&str; 2] = [
    "/opt/homebrew/bin/rsvg-convert",
    "/usr/local/bin/rsvg-convert",
];
pub const BUNDLER: &str = "iconutil";

/// Everything a single icon build touches. The defaults are the fixed
/// layout used by the packaging scripts; tests relocate the outputs.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub svg_path: PathBuf,
    pub output_path: PathBuf,
    pub iconset_dir: PathBuf,
    pub master_png: PathBuf,
    pub master_size: u32,
    pub sizes: &'static [(&'static str, u32)],
    pub rasterizer: String,
    pub rasterizer_candidates: Vec<PathBuf>,
    pub bundler: PathBuf,
}

impl BuildConfig {
    /// Reads `svg_path` and places the master, the iconset and the
    /// `.icns` inside `work_dir`. An empty `work_dir` means the current
    /// directory.
    pub fn in_dir(svg_path: impl Into<PathBuf>, work_dir: &Path) -> Self {
        Self {
            svg_path: svg_path.into(),
            output_path: work_dir.join(OUTPUT_ICNS),
            iconset_dir: work_dir.join(ICONSET_DIR),
            master_png: work_dir.join(MASTER_PNG),
            master_size: MASTER_SIZE,
            sizes: &ICONSET_SIZES,
            rasterizer: RASTERIZER.to_string(),
            rasterizer_candidates: RASTERIZER_CANDIDATES.iter().map(PathBuf::from).collect(),
            bundler: PathBuf::from(BUNDLER),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        let svg = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(SVG_NAME);
        Self::in_dir(svg, Path::new(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_cwd_relative() {
        let cfg = BuildConfig::default();
        assert_eq!(cfg.output_path, PathBuf::from("AppIcon.icns"));
        assert_eq!(cfg.iconset_dir, PathBuf::from("AppIcon.iconset"));
        assert_eq!(cfg.master_png, PathBuf::from("icon_master_1024.png"));
        assert!(cfg.svg_path.is_absolute());
        assert!(cfg.svg_path.ends_with("assets/icon.svg"));
    }

    #[test]
    fn test_in_dir_relocates_outputs_only() {
        let cfg = BuildConfig::in_dir("/src/icon.svg", Path::new("/tmp/build"));
        assert_eq!(cfg.svg_path, PathBuf::from("/src/icon.svg"));
        assert_eq!(cfg.output_path, PathBuf::from("/tmp/build/AppIcon.icns"));
        assert_eq!(cfg.iconset_dir, PathBuf::from("/tmp/build/AppIcon.iconset"));
        assert_eq!(cfg.bundler, PathBuf::from("iconutil"));
        assert_eq!(cfg.rasterizer_candidates.len(), 2);
    }

    #[test]
    fn test_iconset_dir_has_iconutil_suffix() {
        let cfg = BuildConfig::default();
        assert_eq!(cfg.iconset_dir.extension().and_then(|e| e.to_str()), Some("iconset"));
    }
}
