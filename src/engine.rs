use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

pub trait PlaybackEngine {
    fn set_source(&mut self, path: &Path) -> Result<()>;
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
    fn set_position(&mut self, position: Duration) -> Result<()>;
    fn position(&self) -> Duration;
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
    fn state(&self) -> PlaybackState;
    fn source(&self) -> Option<&Path>;
}

#[derive(Debug, Default)]
pub struct NullPlaybackEngine {
    state: PlaybackState,
    source: Option<PathBuf>,
    position: Duration,
    volume: f32,
}

impl NullPlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaybackEngine for NullPlaybackEngine {
    fn set_source(&mut self, path: &Path) -> Result<()> {
        self.source = Some(path.to_path_buf());
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            anyhow::bail!("no source loaded");
        }
        self.state = PlaybackState::Playing;
        Ok(())
    }

    fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    fn set_position(&mut self, position: Duration) -> Result<()> {
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_engine_tracks_state_transitions() {
        let mut engine = NullPlaybackEngine::new();
        assert_eq!(engine.state(), PlaybackState::Stopped);

        engine.set_source(Path::new("a.mp3")).expect("set source");
        engine.play().expect("play");
        assert_eq!(engine.state(), PlaybackState::Playing);
        assert_eq!(engine.position(), Duration::ZERO);

        engine.pause();
        assert_eq!(engine.state(), PlaybackState::Paused);

        engine.play().expect("resume");
        assert_eq!(engine.state(), PlaybackState::Playing);
    }

    #[test]
    fn play_without_source_is_an_error() {
        let mut engine = NullPlaybackEngine::new();
        assert!(engine.play().is_err());
        assert_eq!(engine.state(), PlaybackState::Stopped);
    }

    #[test]
    fn pause_from_stopped_stays_stopped() {
        let mut engine = NullPlaybackEngine::new();
        engine.pause();
        assert_eq!(engine.state(), PlaybackState::Stopped);
    }

    #[test]
    fn volume_is_clamped_to_unit_range() {
        let mut engine = NullPlaybackEngine::new();
        engine.set_volume(1.7);
        assert_eq!(engine.volume(), 1.0);
        engine.set_volume(-0.3);
        assert_eq!(engine.volume(), 0.0);
    }
}
