use crate::model::{Track, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::prelude::ItemKey;
use lofty::probe::Probe;
use lofty::tag::Tag;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

const COVER_NAMES: &[&str] = &["cover", "folder", "front", "album"];
const COVER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub fn probe_track(path: &Path) -> Track {
    let tagged = match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged) => Some(tagged),
        Err(err) => {
            log::debug!("unreadable tags in {}: {err}", path.display());
            None
        }
    };

    let duration = tagged
        .as_ref()
        .map(|file| file.properties().duration())
        .filter(|duration| !duration.is_zero());
    let tag = tagged
        .as_ref()
        .and_then(|file| file.primary_tag().or_else(|| file.first_tag()));

    let title = tag
        .and_then(|tag| tag_text(tag, ItemKey::TrackTitle))
        .unwrap_or_else(|| stem_title(path));
    let artist = tag
        .and_then(|tag| {
            tag_text(tag, ItemKey::TrackArtist)
                .or_else(|| tag_text(tag, ItemKey::AlbumArtist))
                .or_else(|| tag_text(tag, ItemKey::Performer))
        })
        .unwrap_or_else(|| String::from(UNKNOWN_ARTIST));
    let album = tag
        .and_then(|tag| tag_text(tag, ItemKey::AlbumTitle))
        .unwrap_or_else(|| String::from(UNKNOWN_ALBUM));
    let cover = tag
        .and_then(|tag| tag.pictures().first())
        .map(|picture| picture.data().to_vec());

    Track {
        path: path.to_path_buf(),
        title,
        artist,
        album,
        duration,
        cover,
    }
}

pub fn directory_cover(track_path: &Path) -> Option<Vec<u8>> {
    let dir = track_path.parent()?;
    let entries = fs::read_dir(dir).ok()?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_cover_file(path))
        .collect();
    candidates.sort();

    candidates.into_iter().find_map(|path| fs::read(&path).ok())
}

fn tag_text(tag: &Tag, key: ItemKey) -> Option<String> {
    tag.get_string(key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

fn stem_title(path: &Path) -> String {
    path.file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("Unknown")
        .to_string()
}

fn is_cover_file(path: &Path) -> bool {
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or_default();
    let ext = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    COVER_NAMES.iter().any(|name| stem.eq_ignore_ascii_case(name))
        && COVER_EXTENSIONS
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported))
}
