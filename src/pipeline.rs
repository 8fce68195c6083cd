//! Resolve → render → resize → bundle → cleanup.
//!
//! Every stage aborts the build on error. Scratch files (the master PNG
//! and the iconset directory) are removed when the build returns, on
//! success or on any failure after preflight.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::{IconError, Result};
use crate::iconset;
use crate::logger::log_error;
use crate::resolver;
use crate::runner::{CommandOutput, CommandRunner};

/// Builds the `.icns` described by `config` and returns its path.
pub fn build_icns(config: &BuildConfig, runner: &dyn CommandRunner) -> Result<PathBuf> {
    let rsvg = resolver::find_rasterizer(&config.rasterizer_candidates, &config.rasterizer)?;
    if !config.svg_path.exists() {
        return Err(IconError::SourceNotFound(config.svg_path.clone()));
    }

    let scratch = Scratch::new(config);

    render_master(config, runner, &rsvg)?;

    let master = iconset::load_master(&config.master_png)?;
    iconset::prepare_dir(&config.iconset_dir)?;
    iconset::write_iconset(&master, &config.iconset_dir, config.sizes)?;

    bundle(config, runner)?;

    drop(scratch);
    println!("Created {}", config.output_path.display());
    Ok(config.output_path.clone())
}

/// Rasterizes the SVG into the square master PNG.
pub fn render_master(config: &BuildConfig, runner: &dyn CommandRunner, rsvg: &Path) -> Result<()> {
    let name = config
        .svg_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.svg_path.display().to_string());
    let sz = config.master_size;
    println!("Rendering {} at {}x{} ...", name, sz, sz);

    let args: Vec<OsString> = vec![
        "-w".into(),
        sz.to_string().into(),
        "-h".into(),
        sz.to_string().into(),
        config.svg_path.clone().into(),
        "-o".into(),
        config.master_png.clone().into(),
    ];
    let out = launch(runner, rsvg, &args)?;
    if !out.success() {
        return Err(IconError::RenderFailed {
            tool: tool_name(rsvg),
            status: out.status,
            stderr: out.stderr,
        });
    }
    Ok(())
}

/// Packs the iconset into the output `.icns`, replacing any earlier artifact.
pub fn bundle(config: &BuildConfig, runner: &dyn CommandRunner) -> Result<()> {
    if config.output_path.exists() {
        fs::remove_file(&config.output_path).map_err(IconError::io(&config.output_path))?;
    }

    let args: Vec<OsString> = vec![
        "-c".into(),
        "icns".into(),
        config.iconset_dir.clone().into(),
        "-o".into(),
        config.output_path.clone().into(),
    ];
    let out = launch(runner, &config.bundler, &args)?;
    if !out.success() {
        return Err(IconError::BundleFailed {
            tool: tool_name(&config.bundler),
            status: out.status,
            stderr: out.stderr,
        });
    }
    Ok(())
}

fn launch(runner: &dyn CommandRunner, program: &Path, args: &[OsString]) -> Result<CommandOutput> {
    runner.run(program, args).map_err(|source| IconError::Spawn {
        program: program.to_path_buf(),
        source,
    })
}

fn tool_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}

/// Removes the intermediate master and iconset when dropped.
struct Scratch<'a> {
    master_png: &'a Path,
    iconset_dir: &'a Path,
}

impl<'a> Scratch<'a> {
    fn new(config: &'a BuildConfig) -> Self {
        Self {
            master_png: &config.master_png,
            iconset_dir: &config.iconset_dir,
        }
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        if self.iconset_dir.exists() {
            if let Err(e) = fs::remove_dir_all(self.iconset_dir) {
                log_error(&format!("could not remove {}", self.iconset_dir.display()), &e);
            }
        }
        if self.master_png.exists() {
            if let Err(e) = fs::remove_file(self.master_png) {
                log_error(&format!("could not remove {}", self.master_png.display()), &e);
            }
        }
    }
}
