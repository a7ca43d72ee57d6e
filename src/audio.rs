//! Audio Playback
//!
//! Plays synthesized speech returned by the backend as base64 mp3.
//! Playback is best effort: a refused autoplay or a bad payload logs a
//! warning and the chat flow continues silently.

use web_sys::HtmlAudioElement;

pub fn play_base64_mp3(base64_mp3: &str) {
    let src = format!("data:audio/mp3;base64,{}", base64_mp3);
    match HtmlAudioElement::new_with_src(&src) {
        Ok(audio) => {
            if let Err(e) = audio.play() {
                web_sys::console::warn_2(&"audio playback refused:".into(), &e);
            }
        }
        Err(e) => {
            web_sys::console::warn_2(&"audio element creation failed:".into(), &e);
        }
    }
}
