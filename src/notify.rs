#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub cover: Option<Vec<u8>>,
}

pub trait Notifier {
    fn now_playing(&mut self, info: &NowPlaying);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl NullNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for NullNotifier {
    fn now_playing(&mut self, _info: &NowPlaying) {}
}
