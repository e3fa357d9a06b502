use crate::model::PlayMode;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

#[derive(Debug)]
pub struct PlayOrder {
    mode: PlayMode,
    shuffle_order: Vec<usize>,
    shuffle_cursor: usize,
    shuffle_rng: SmallRng,
}

impl Default for PlayOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayOrder {
    pub fn new() -> Self {
        Self {
            mode: PlayMode::Sequential,
            shuffle_order: Vec::new(),
            shuffle_cursor: 0,
            shuffle_rng: SmallRng::from_os_rng(),
        }
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn cycle_mode(&mut self, len: usize, current: Option<usize>) -> PlayMode {
        self.mode = self.mode.next();
        if self.mode == PlayMode::Shuffle {
            self.rebuild_shuffle_order(len, current);
        } else {
            self.shuffle_order.clear();
            self.shuffle_cursor = 0;
        }
        self.mode
    }

    pub fn next(&mut self, current: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        match self.mode {
            PlayMode::Sequential => Some(match current {
                Some(index) => (index + 1) % len,
                None => 0,
            }),
            PlayMode::RepeatOne => Some(current.unwrap_or(0)),
            PlayMode::Shuffle => self.step_shuffle(current, len, false),
        }
    }

    pub fn previous(&mut self, current: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        match self.mode {
            PlayMode::Sequential => Some(match current {
                Some(index) => (index + len - 1) % len,
                None => len - 1,
            }),
            PlayMode::RepeatOne => Some(current.unwrap_or(0)),
            PlayMode::Shuffle => self.step_shuffle(current, len, true),
        }
    }

    fn rebuild_shuffle_order(&mut self, len: usize, current: Option<usize>) {
        self.shuffle_order = (0..len).collect();
        self.shuffle_order.shuffle(&mut self.shuffle_rng);
        self.shuffle_cursor = current
            .and_then(|playing| self.shuffle_order.iter().position(|idx| *idx == playing))
            .unwrap_or(0);
    }

    fn step_shuffle(&mut self, current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
        let order_len = self.shuffle_order.len();
        if order_len == 0 {
            return None;
        }

        let mut cursor = self.shuffle_cursor;
        // with nothing playing the cursor slot itself is the first candidate
        let mut stepping = match current {
            Some(playing) => {
                if let Some(pos) = self.shuffle_order.iter().position(|idx| *idx == playing) {
                    cursor = pos;
                }
                true
            }
            None => false,
        };

        for _ in 0..order_len {
            if stepping {
                cursor = if backwards {
                    (cursor + order_len - 1) % order_len
                } else {
                    (cursor + 1) % order_len
                };
            }
            stepping = true;

            // entries at or past len are leftovers from removals
            let candidate = self.shuffle_order[cursor];
            if candidate < len {
                self.shuffle_cursor = cursor;
                return Some(candidate);
            }
        }

        None
    }
}
