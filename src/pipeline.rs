use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use crate::{
    encode::encode_png,
    foundation::{
        core::Canvas,
        error::{BackgroundError, BackgroundResult},
    },
    scene::{SceneConfig, build_scene},
};

pub const OUTPUT_FILE_NAME: &str = "dmg_background.png";

/// Where the generator writes by default: next to its own sources.
pub fn default_output_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_FILE_NAME)
}

/// Write `bytes` to `path`, creating or truncating it. The handle is dropped
/// (and thus closed) on every return path.
#[tracing::instrument(skip(bytes), fields(path = %path.display(), len = bytes.len()))]
pub fn write_png(path: &Path, bytes: &[u8]) -> BackgroundResult<()> {
    let file = File::create(path).map_err(|e| BackgroundError::write(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(bytes)
        .map_err(|e| BackgroundError::write(path, e))?;
    out.flush().map_err(|e| BackgroundError::write(path, e))
}

/// Result of a successful [`generate`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub canvas: Canvas,
    pub bytes: usize,
}

/// Render the scene, encode it and write it to `out_path`.
#[tracing::instrument(skip(cfg, out_path), fields(out = %out_path.display()))]
pub fn generate(cfg: &SceneConfig, out_path: &Path) -> BackgroundResult<Generated> {
    let surface = build_scene(cfg)?;
    let png = encode_png(&surface)?;
    write_png(out_path, &png)?;
    tracing::info!(bytes = png.len(), "background written");

    Ok(Generated {
        path: out_path.to_path_buf(),
        canvas: surface.canvas(),
        bytes: png.len(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
