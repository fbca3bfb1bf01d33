// Host-side tests for the pure playlist state and progress math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/playlist.rs"]
mod playlist;

use playlist::*;

static TWO_TRACKS: &[Track] = &[
    Track {
        title: "first",
        url: "first.mp3",
    },
    Track {
        title: "second",
        url: "second.mp3",
    },
];

static NO_TRACKS: &[Track] = &[];

#[test]
fn builtin_table_has_a_track() {
    let playlist = Playlist::new(TRACKS);
    assert!(!playlist.is_empty());
    assert_eq!(playlist.current().unwrap().title, "mAnITtA - bATEMENE");
}

#[test]
fn single_track_wraps_to_itself() {
    let mut playlist = Playlist::new(TRACKS);
    let title = playlist.current().unwrap().title;
    assert_eq!(playlist.next().unwrap().title, title);
    assert_eq!(playlist.prev().unwrap().title, title);
}

#[test]
fn navigation_wraps_both_ways() {
    let mut playlist = Playlist::new(TWO_TRACKS);
    assert_eq!(playlist.current().unwrap().title, "first");
    assert_eq!(playlist.next().unwrap().title, "second");
    assert_eq!(playlist.next().unwrap().title, "first");
    assert_eq!(playlist.prev().unwrap().title, "second");
}

#[test]
fn select_is_bounds_checked() {
    let mut playlist = Playlist::new(TWO_TRACKS);
    assert_eq!(playlist.select(1).unwrap().title, "second");
    assert!(playlist.select(2).is_none());
    // A rejected select leaves the cursor alone.
    assert_eq!(playlist.current().unwrap().title, "second");
}

#[test]
fn empty_playlist_yields_nothing() {
    let mut playlist = Playlist::new(NO_TRACKS);
    assert!(playlist.is_empty());
    assert_eq!(playlist.len(), 0);
    assert!(playlist.current().is_none());
    assert!(playlist.next().is_none());
    assert!(playlist.prev().is_none());
}

#[test]
fn seek_fraction_clamps_to_unit_range() {
    assert_eq!(seek_fraction(50.0, 100.0), 0.5);
    assert_eq!(seek_fraction(-10.0, 100.0), 0.0);
    assert_eq!(seek_fraction(150.0, 100.0), 1.0);
    assert_eq!(seek_fraction(10.0, 0.0), 0.0);
    assert_eq!(seek_fraction(10.0, -5.0), 0.0);
}

#[test]
fn progress_percent_handles_missing_duration() {
    assert_eq!(progress_percent(30.0, 120.0), 25.0);
    assert_eq!(progress_percent(0.0, 0.0), 0.0);
    assert_eq!(progress_percent(10.0, f64::NAN), 0.0);
    assert_eq!(progress_percent(10.0, f64::INFINITY), 0.0);
    assert_eq!(progress_percent(200.0, 100.0), 100.0);
}
