use crate::engine::{PlaybackEngine, PlaybackState};
use crate::model::{PlayMode, Track};
use crate::notify::{Notifier, NowPlaying};
use crate::order::PlayOrder;
use crate::persist::PlaylistFile;
use crate::playlist::{AddOutcome, Playlist, PlaylistEvent};
use crate::probe;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_VOLUME: f32 = 0.5;

pub struct Player {
    playlist: Playlist,
    order: PlayOrder,
    current: Option<usize>,
    muted: bool,
    saved_volume: f32,
    volume: f32,
    engine_state: PlaybackState,
    engine: Box<dyn PlaybackEngine>,
    notifier: Box<dyn Notifier>,
}

impl Player {
    pub fn new(
        data_dir: &Path,
        mut engine: Box<dyn PlaybackEngine>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let store = PlaylistFile::new(data_dir);
        let mut playlist = Playlist::new();

        let save_on_change = store.clone();
        playlist.add_listener(Box::new(move |tracks, event| {
            if *event == PlaylistEvent::Loaded {
                return;
            }
            if let Err(err) = save_on_change.save(tracks) {
                log::warn!("could not save playlist: {err:#}");
            }
        }));

        match store.load() {
            Ok(paths) => playlist.load_paths(&paths),
            Err(err) => log::warn!("could not load playlist: {err:#}"),
        }

        engine.set_volume(DEFAULT_VOLUME);

        Self {
            playlist,
            order: PlayOrder::new(),
            current: None,
            muted: false,
            saved_volume: DEFAULT_VOLUME,
            volume: DEFAULT_VOLUME,
            engine_state: PlaybackState::Stopped,
            engine,
            notifier,
        }
    }

    pub fn play_at(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            return;
        };

        let path = track.path.clone();
        let info = NowPlaying {
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover: track
                .cover
                .clone()
                .or_else(|| probe::directory_cover(&path)),
        };

        if let Err(err) = self.engine.set_source(&path) {
            log::warn!("cannot open {}: {err:#}", path.display());
            return;
        }
        if let Err(err) = self.engine.play() {
            log::warn!("playback failed for {}: {err:#}", path.display());
            return;
        }

        self.current = Some(index);
        self.engine_state = PlaybackState::Playing;
        self.notifier.now_playing(&info);
    }

    pub fn toggle_play_pause(&mut self) {
        match self.engine.state() {
            PlaybackState::Playing => {
                self.engine.pause();
                self.engine_state = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                if let Err(err) = self.engine.play() {
                    log::warn!("resume failed: {err:#}");
                } else {
                    self.engine_state = PlaybackState::Playing;
                }
            }
            PlaybackState::Stopped => {
                if self.playlist.is_empty() {
                    return;
                }
                let index = self
                    .current
                    .filter(|index| *index < self.playlist.len())
                    .unwrap_or(0);
                self.play_at(index);
            }
        }
    }

    pub fn advance(&mut self) {
        let Some(next) = self.order.next(self.current, self.playlist.len()) else {
            return;
        };
        self.play_at(next);
    }

    pub fn retreat(&mut self) {
        let Some(previous) = self.order.previous(self.current, self.playlist.len()) else {
            return;
        };
        self.play_at(previous);
    }

    pub fn on_media_finished(&mut self) {
        self.advance();
    }

    pub fn on_state_changed(&mut self, state: PlaybackState) {
        self.engine_state = state;
    }

    pub fn seek_to(&mut self, position: Duration) {
        if self.current.is_none() {
            return;
        }
        if let Err(err) = self.engine.set_position(position) {
            log::warn!("seek failed: {err:#}");
        }
    }

    pub fn cycle_mode(&mut self) -> PlayMode {
        self.order.cycle_mode(self.playlist.len(), self.current)
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if volume == 0.0 {
            if self.volume > 0.0 {
                self.saved_volume = self.volume;
            }
            self.muted = true;
        } else {
            self.muted = false;
        }
        self.volume = volume;
        self.engine.set_volume(volume);
    }

    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.muted = false;
            self.volume = self.saved_volume;
        } else {
            if self.volume > 0.0 {
                self.saved_volume = self.volume;
            }
            self.muted = true;
            self.volume = 0.0;
        }
        self.engine.set_volume(self.volume);
    }

    pub fn add_file(&mut self, path: &Path) -> AddOutcome {
        self.playlist.add_file(path)
    }

    pub fn add_folder(&mut self, path: &Path) -> usize {
        self.playlist.add_folder(path)
    }

    pub fn add_dropped(&mut self, paths: &[PathBuf]) -> usize {
        self.playlist.add_dropped(paths)
    }

    pub fn remove(&mut self, index: usize) {
        self.playlist.remove(index);
    }

    pub fn clear(&mut self) {
        self.playlist.clear();
        self.engine.pause();
        self.engine_state = self.engine.state();
        self.current = None;
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn mode(&self) -> PlayMode {
        self.order.mode()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|index| self.playlist.get(index))
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.engine_state
    }

    pub fn position(&self) -> Duration {
        self.engine.position()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}
