use crate::model::Track;
use crate::probe;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["mp3", "flac", "aac", "wav", "m4a", "ogg", "wma", "ncm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
    Unsupported,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistEvent {
    Added { index: usize },
    Removed { index: usize },
    Cleared,
    Loaded,
}

pub type Listener = Box<dyn FnMut(&[Track], &PlaylistEvent)>;

#[derive(Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    known_paths: HashSet<PathBuf>,
    listeners: Vec<Listener>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn add_file(&mut self, path: &Path) -> AddOutcome {
        let outcome = self.ingest(path);
        if outcome == AddOutcome::Added {
            self.emit(&PlaylistEvent::Added {
                index: self.tracks.len() - 1,
            });
        }
        outcome
    }

    pub fn add_folder(&mut self, root: &Path) -> usize {
        let mut added = 0;
        for path in sorted_files(root, Some(1)) {
            if self.add_file(&path) == AddOutcome::Added {
                added += 1;
            }
        }
        added
    }

    pub fn add_dropped(&mut self, paths: &[PathBuf]) -> usize {
        let mut added = 0;
        for path in paths {
            if path.is_dir() {
                for file in sorted_files(path, None) {
                    if self.add_file(&file) == AddOutcome::Added {
                        added += 1;
                    }
                }
            } else if self.add_file(path) == AddOutcome::Added {
                added += 1;
            }
        }
        added
    }

    pub fn remove(&mut self, index: usize) {
        if index >= self.tracks.len() {
            return;
        }

        let track = self.tracks.remove(index);
        self.known_paths.remove(&track.path);
        self.emit(&PlaylistEvent::Removed { index });
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.known_paths.clear();
        self.emit(&PlaylistEvent::Cleared);
    }

    pub fn load_paths(&mut self, paths: &[PathBuf]) {
        self.tracks.clear();
        self.known_paths.clear();

        for path in paths {
            if self.ingest(path) == AddOutcome::Missing {
                log::debug!("skipping vanished track {}", path.display());
            }
        }

        self.emit(&PlaylistEvent::Loaded);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn path_of(&self, index: usize) -> Option<&Path> {
        self.tracks.get(index).map(|track| track.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn ingest(&mut self, path: &Path) -> AddOutcome {
        if !path.is_file() {
            return AddOutcome::Missing;
        }
        if !is_supported(path) {
            return AddOutcome::Unsupported;
        }

        let normalized = normalize_path(path);
        if self.known_paths.contains(&normalized) {
            return AddOutcome::Duplicate;
        }

        let track = probe::probe_track(&normalized);
        self.known_paths.insert(normalized);
        self.tracks.push(track);
        AddOutcome::Added
    }

    fn emit(&mut self, event: &PlaylistEvent) {
        let Self {
            tracks, listeners, ..
        } = self;
        for listener in listeners.iter_mut() {
            listener(tracks.as_slice(), event);
        }
    }
}

pub fn is_supported(path: &Path) -> bool {
    let ext = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| ext.eq_ignore_ascii_case(supported))
}

fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn sorted_files(root: &Path, max_depth: Option<usize>) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).follow_links(true);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}
