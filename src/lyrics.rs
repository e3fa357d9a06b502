use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_for_track(track_path: &Path) -> Result<Option<String>> {
    for extension in ["lrc", "txt"] {
        let sidecar = track_path.with_extension(extension);
        if !sidecar.exists() {
            continue;
        }

        let raw = fs::read_to_string(&sidecar)
            .with_context(|| format!("failed to read lyrics file {}", sidecar.display()))?;
        return Ok(Some(raw));
    }

    Ok(None)
}
