//! DOM wiring for the single-track audio widget.
//!
//! Thin glue over an `<audio>` element and a handful of fixed controls; the
//! track cursor and progress math live in `core::playlist`.

use crate::core::{progress_percent, seek_fraction, Playlist, Track, TRACKS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct PlayerElements {
    audio: web::HtmlAudioElement,
    play_pause: web::HtmlElement,
    track_info: web::HtmlElement,
    progress_bar: web::HtmlElement,
    progress_track: web::HtmlElement,
}

fn lookup_elements(document: &web::Document) -> anyhow::Result<PlayerElements> {
    Ok(PlayerElements {
        audio: dom::element_by_id(document, "audio-player")?,
        play_pause: dom::element_by_id(document, "play-pause-btn")?,
        track_info: dom::element_by_id(document, "track-info")?,
        progress_bar: dom::element_by_id(document, "progress-bar")?,
        progress_track: dom::element_by_id(document, "progress-bar-container")?,
    })
}

fn load_and_play(els: &PlayerElements, track: &Track) {
    els.audio.set_src(track.url);
    _ = els.audio.play();
    els.track_info.set_text_content(Some(track.title));
    els.play_pause.set_text_content(Some("Pause"));
}

fn toggle_play_pause(els: &PlayerElements) {
    if els.audio.paused() {
        _ = els.audio.play();
        els.play_pause.set_text_content(Some("Pause"));
    } else {
        _ = els.audio.pause();
        els.play_pause.set_text_content(Some("Play"));
    }
}

/// Wire all widget controls and start the first track.
pub fn wire_player(document: &web::Document) -> anyhow::Result<()> {
    let els = lookup_elements(document)?;
    let playlist = Rc::new(RefCell::new(Playlist::new(TRACKS)));
    if playlist.borrow().is_empty() {
        log::warn!("no tracks configured; audio widget left idle");
        return Ok(());
    }

    let els_toggle = els.clone();
    dom::add_click_listener(document, "play-pause-btn", move || {
        toggle_play_pause(&els_toggle);
    });

    let els_prev = els.clone();
    let playlist_prev = playlist.clone();
    dom::add_click_listener(document, "prev-btn", move || {
        if let Some(track) = playlist_prev.borrow_mut().prev() {
            load_and_play(&els_prev, track);
        }
    });

    let els_next = els.clone();
    let playlist_next = playlist.clone();
    dom::add_click_listener(document, "next-btn", move || {
        if let Some(track) = playlist_next.borrow_mut().next() {
            load_and_play(&els_next, track);
        }
    });

    // A finished track rolls over to the next one (wraps on a single track).
    let els_ended = els.clone();
    let playlist_ended = playlist.clone();
    let ended = Closure::wrap(Box::new(move || {
        if let Some(track) = playlist_ended.borrow_mut().next() {
            load_and_play(&els_ended, track);
        }
    }) as Box<dyn FnMut()>);
    _ = els
        .audio
        .add_event_listener_with_callback("ended", ended.as_ref().unchecked_ref());
    ended.forget();

    let els_progress = els.clone();
    let timeupdate = Closure::wrap(Box::new(move || {
        let pct = progress_percent(
            els_progress.audio.current_time(),
            els_progress.audio.duration(),
        );
        _ = els_progress
            .progress_bar
            .style()
            .set_property("width", &format!("{pct:.2}%"));
    }) as Box<dyn FnMut()>);
    _ = els
        .audio
        .add_event_listener_with_callback("timeupdate", timeupdate.as_ref().unchecked_ref());
    timeupdate.forget();

    // Click-to-seek on the progress track; ignored until metadata reports a
    // usable duration.
    let els_seek = els.clone();
    let seek = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let duration = els_seek.audio.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        let width = els_seek.progress_track.client_width() as f64;
        let fraction = seek_fraction(ev.offset_x() as f64, width);
        els_seek.audio.set_current_time(fraction * duration);
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = els
        .progress_track
        .add_event_listener_with_callback("click", seek.as_ref().unchecked_ref());
    seek.forget();

    if let Some(track) = playlist.borrow().current() {
        load_and_play(&els, track);
    }
    Ok(())
}
