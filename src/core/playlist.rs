//! Track-list state and progress math for the audio widget.
//!
//! Pure and platform-free; the DOM wiring in `audio.rs` consumes it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub url: &'static str,
}

/// Built-in track table; the widget ships with a single song.
pub static TRACKS: &[Track] = &[Track {
    title: "mAnITtA - bATEMENE",
    url: "mAnITtA - bATEMENE.mp3",
}];

/// Cursor over a fixed track table with wraparound navigation.
pub struct Playlist {
    tracks: &'static [Track],
    current: usize,
}

impl Playlist {
    pub fn new(tracks: &'static [Track]) -> Self {
        Self { tracks, current: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Advance with wraparound and return the new current track.
    pub fn next(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.tracks.len();
        self.current()
    }

    /// Step back with wraparound and return the new current track.
    pub fn prev(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
        self.current()
    }

    /// Jump to `index` if it is in range.
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index < self.tracks.len() {
            self.current = index;
        } else {
            return None;
        }
        self.current()
    }
}

/// Map a click x offset on the seek bar to a playback-time fraction in [0, 1].
pub fn seek_fraction(click_x: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    (click_x / width).clamp(0.0, 1.0)
}

/// Playback progress as a percentage in [0, 100].
///
/// Media elements report `NaN` duration before metadata loads; treat anything
/// non-finite or non-positive as zero progress.
pub fn progress_percent(position: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    (position / duration * 100.0).clamp(0.0, 100.0)
}
