//! Voice Input
//!
//! Two capture paths for the chat screen's microphone button. Browsers
//! with the Web Speech API transcribe locally; everywhere else we record
//! up to ten seconds with MediaRecorder and send the clip to the backend
//! transcriber.
//!
//! The `stop` callback is polled while listening; when it turns true the
//! capture ends early and whatever was heard so far still goes through
//! transcription. `Ok(None)` means the attempt produced no usable text
//! (silence, a recognition error, a denied microphone); callers just
//! leave the input box alone.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, MediaRecorder, MediaStream, MediaStreamConstraints, SpeechRecognition,
    SpeechRecognitionEvent,
};

use crate::commands;

/// Hard cap on the recording fallback, in milliseconds
const MAX_RECORDING_MS: u32 = 10_000;
/// How often the stop callback is polled
const POLL_MS: u32 = 200;

pub async fn capture_voice_input(
    stop: impl Fn() -> bool + 'static,
) -> Result<Option<String>, String> {
    match recognize_once(&stop).await {
        Ok(text) => Ok(text),
        // Unsupported browser: fall back to record-and-transcribe
        Err(_) => record_and_transcribe(&stop).await,
    }
}

// ========================
// Web Speech API path
// ========================

/// One recognition pass; resolves with the transcript when the engine
/// fires a result, or with nothing when it errors or ends silent. A stop
/// request closes the engine, which settles the promise either way.
async fn recognize_once(stop: &impl Fn() -> bool) -> Result<Option<String>, String> {
    let recognition =
        SpeechRecognition::new().map_err(|_| "speech recognition unavailable".to_string())?;
    recognition.set_lang("en-US");
    recognition.set_interim_results(false);

    let settled = Rc::new(RefCell::new(false));

    let promise = Promise::new(&mut |resolve, _reject| {
        let settled_result = Rc::clone(&settled);
        let resolve_result = resolve.clone();
        let onresult = Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(
            move |event: SpeechRecognitionEvent| {
                *settled_result.borrow_mut() = true;
                let transcript = event
                    .results()
                    .and_then(|results| results.get(0))
                    .and_then(|r| r.get(0))
                    .map(|alt| alt.transcript());
                let value = match transcript {
                    Some(text) => JsValue::from_str(&text),
                    None => JsValue::NULL,
                };
                let _ = resolve_result.call1(&JsValue::NULL, &value);
            },
        );
        recognition.set_onresult(Some(onresult.as_ref().unchecked_ref()));
        onresult.forget();

        // Errors and silent ends both resolve empty; the recognition
        // object settles the same promise at most once.
        let settled_error = Rc::clone(&settled);
        let resolve_error = resolve.clone();
        let onerror = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            *settled_error.borrow_mut() = true;
            let _ = resolve_error.call1(&JsValue::NULL, &JsValue::NULL);
        });
        recognition.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        let settled_end = Rc::clone(&settled);
        let resolve_end = resolve.clone();
        let onend = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            *settled_end.borrow_mut() = true;
            let _ = resolve_end.call1(&JsValue::NULL, &JsValue::NULL);
        });
        recognition.set_onend(Some(onend.as_ref().unchecked_ref()));
        onend.forget();

        if recognition.start().is_err() {
            *settled.borrow_mut() = true;
            let _ = resolve.call1(&JsValue::NULL, &JsValue::NULL);
        }
    });

    // Stop request or timeout closes the engine; its final result (if any)
    // still lands through onresult before onend settles the promise.
    let mut elapsed = 0;
    while !*settled.borrow() && elapsed < MAX_RECORDING_MS {
        TimeoutFuture::new(POLL_MS).await;
        elapsed += POLL_MS;
        if stop() {
            break;
        }
    }
    if !*settled.borrow() {
        recognition.stop();
    }

    let value = JsFuture::from(promise)
        .await
        .map_err(|e| format!("speech recognition failed: {:?}", e))?;
    Ok(value.as_string().filter(|s| !s.trim().is_empty()))
}

// ========================
// MediaRecorder fallback
// ========================

async fn record_and_transcribe(stop: &impl Fn() -> bool) -> Result<Option<String>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| "media devices unavailable".to_string())?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let stream_promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| "microphone request failed".to_string())?;
    let stream: MediaStream = match JsFuture::from(stream_promise).await {
        Ok(value) => value.unchecked_into(),
        // Denied microphone: not an error worth surfacing
        Err(_) => return Ok(None),
    };

    let recorder = MediaRecorder::new_with_media_stream(&stream)
        .map_err(|e| format!("recorder creation failed: {:?}", e))?;

    let chunks: Rc<RefCell<Vec<Blob>>> = Rc::new(RefCell::new(Vec::new()));
    let chunks_sink = Rc::clone(&chunks);
    let ondata = Closure::<dyn FnMut(BlobEvent)>::new(move |event: BlobEvent| {
        if let Some(blob) = event.data() {
            chunks_sink.borrow_mut().push(blob);
        }
    });
    recorder.set_ondataavailable(Some(ondata.as_ref().unchecked_ref()));

    let stopped = Promise::new(&mut |resolve, _reject| {
        let onstop = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        recorder.set_onstop(Some(onstop.as_ref().unchecked_ref()));
        onstop.forget();
    });

    recorder
        .start()
        .map_err(|e| format!("recording failed to start: {:?}", e))?;
    let mut elapsed = 0;
    while elapsed < MAX_RECORDING_MS {
        TimeoutFuture::new(POLL_MS).await;
        elapsed += POLL_MS;
        if stop() {
            break;
        }
    }
    let _ = recorder.stop();
    let _ = JsFuture::from(stopped).await;
    drop(ondata);

    // Release the microphone before the transcription round-trip
    for track in stream.get_tracks().iter() {
        track.unchecked_into::<web_sys::MediaStreamTrack>().stop();
    }

    let parts = Array::new();
    for blob in chunks.borrow().iter() {
        parts.push(blob);
    }
    if parts.length() == 0 {
        return Ok(None);
    }
    let clip = Blob::new_with_blob_sequence(&parts)
        .map_err(|e| format!("clip assembly failed: {:?}", e))?;
    let buffer = JsFuture::from(clip.array_buffer())
        .await
        .map_err(|e| format!("clip read failed: {:?}", e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let text = commands::transcribe_audio(bytes).await?;
    Ok(Some(text).filter(|s| !s.trim().is_empty()))
}
