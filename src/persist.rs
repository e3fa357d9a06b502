use crate::model::Track;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const PLAYLIST_FILE: &str = "playlist.txt";

#[derive(Debug, Clone)]
pub struct PlaylistFile {
    path: PathBuf,
}

impl PlaylistFile {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PLAYLIST_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, tracks: &[Track]) -> Result<()> {
        let dir = self
            .path
            .parent()
            .with_context(|| format!("{} has no parent directory", self.path.display()))?;
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

        let mut contents = String::new();
        for track in tracks {
            contents.push_str(&track.path.to_string_lossy());
            contents.push('\n');
        }

        let staging = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&staging)
                .with_context(|| format!("failed to create {}", staging.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("failed to write {}", staging.display()))?;
            file.sync_all()
                .with_context(|| format!("failed to flush {}", staging.display()))?;
        }
        fs::rename(&staging, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<PathBuf>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Ok(raw
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}
