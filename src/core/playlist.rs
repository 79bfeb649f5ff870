// Mock music player state: a flat playlist built from the release
// catalogue plus transport flags. No audio is actually loaded.

use super::constants::DEFAULT_VOLUME_PERCENT;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct ReleaseTrack {
    pub title: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub upcoming: bool,
    #[serde(default)]
    pub tracks: Option<Vec<ReleaseTrack>>,
}

/// Top-level shape of `releases.json`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReleaseCatalog {
    #[serde(default)]
    pub releases: Vec<Release>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover: String,
    pub duration: String,
}

#[derive(Clone, Debug)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: usize,
    playing: bool,
    volume_percent: u8,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: 0,
            playing: false,
            volume_percent: DEFAULT_VOLUME_PERCENT,
        }
    }

    /// Every track of every released (not upcoming) release, in catalogue
    /// order.
    pub fn from_catalog(catalog: &ReleaseCatalog) -> Self {
        let tracks = catalog
            .releases
            .iter()
            .filter(|r| !r.upcoming)
            .flat_map(|r| {
                r.tracks.iter().flatten().map(move |t| Track {
                    title: t.title.clone(),
                    artist: r.artist.clone(),
                    album: r.title.clone(),
                    cover: r.cover_image.clone(),
                    duration: t.duration.clone(),
                })
            })
            .collect();
        Self::new(tracks)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index >= self.tracks.len() {
            return None;
        }
        self.current = index;
        self.tracks.get(index)
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pause when playing, play otherwise; returns the new `is_playing`.
    pub fn toggle_play(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
        self.playing
    }

    pub fn next(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        self.select((self.current + 1) % self.tracks.len())
    }

    pub fn previous(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let index = self.current.checked_sub(1).unwrap_or(self.tracks.len() - 1);
        self.select(index)
    }

    pub fn volume_percent(&self) -> u8 {
        self.volume_percent
    }

    /// Slider value clamped to 0..=100; returns the media volume in 0..=1.
    pub fn set_volume_percent(&mut self, percent: f64) -> f64 {
        let clamped = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            DEFAULT_VOLUME_PERCENT as f64
        };
        self.volume_percent = clamped.round() as u8;
        clamped / 100.0
    }
}

/// `m:ss`; anything non-finite or negative shows as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Seek target for a click `offset_x` pixels into a bar `width` wide.
pub fn seek_target(offset_x: f64, width: f64, duration: f64) -> Option<f64> {
    if width <= 0.0 || !duration.is_finite() {
        return None;
    }
    Some((offset_x / width).clamp(0.0, 1.0) * duration)
}

/// Progress bar fill in percent.
pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if !current.is_finite() || !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    (current / duration * 100.0).clamp(0.0, 100.0)
}
