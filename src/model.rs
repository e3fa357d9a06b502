use std::path::PathBuf;
use std::time::Duration;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    #[default]
    Sequential,
    RepeatOne,
    Shuffle,
}

impl PlayMode {
    pub fn next(self) -> Self {
        match self {
            Self::Sequential => Self::RepeatOne,
            Self::RepeatOne => Self::Shuffle,
            Self::Shuffle => Self::Sequential,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::RepeatOne => "Repeat One",
            Self::Shuffle => "Shuffle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: Option<Duration>,
    pub cover: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Remove,
    Title,
    Artist,
    Album,
    Duration,
}

impl Column {
    pub const ALL: [Self; 5] = [
        Self::Remove,
        Self::Title,
        Self::Artist,
        Self::Album,
        Self::Duration,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Self::Remove => "",
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Duration => "Duration",
        }
    }
}

impl Track {
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Remove => String::new(),
            Column::Title => self.title.clone(),
            Column::Artist => self.artist.clone(),
            Column::Album => self.album.clone(),
            Column::Duration => format_duration(self.duration),
        }
    }
}

pub fn format_duration(duration: Option<Duration>) -> String {
    let Some(duration) = duration else {
        return String::from("--:--");
    };

    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
