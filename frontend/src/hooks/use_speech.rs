use gloo::file::{Blob, ObjectUrl};
use speechdown_core::speech::synthesize_with;
use speechdown_core::SpeechPlayback;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

const AUDIO_MIME: &str = "audio/mpeg";

#[derive(Clone, PartialEq)]
pub struct SpeechState {
    pub busy: bool,
    /// Object URL of the latest synthesized audio
    pub audio_url: Option<String>,
    pub error: Option<String>,
}

pub struct UseSpeechResult {
    pub state: SpeechState,
    pub speak: Callback<String>,
}

/// Wrap MP3 bytes in a blob URL the audio element can play
fn audio_url(audio: &[u8]) -> ObjectUrl {
    ObjectUrl::from(Blob::new_with_options(audio, Some(AUDIO_MIME)))
}

#[hook]
pub fn use_speech(api_client: &ApiClient) -> UseSpeechResult {
    // Holds the ObjectUrl so the blob stays alive while it is playable
    let playback = use_mut_ref(SpeechPlayback::<ObjectUrl>::default);
    let rerender = use_force_update();

    let speak = {
        let api_client = api_client.clone();
        let playback = playback.clone();
        let rerender = rerender.clone();

        Callback::from(move |text: String| {
            let Some(ticket) = playback.borrow_mut().begin(&text) else {
                return;
            };
            rerender.force_update();

            let api_client = api_client.clone();
            let playback = playback.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                let result = synthesize_with(&api_client, &text, |audio| Ok(audio_url(&audio))).await;
                if playback.borrow_mut().finish(ticket, result) {
                    rerender.force_update();
                }
            });
        })
    };

    let state = {
        let playback = playback.borrow();
        SpeechState {
            busy: playback.is_busy(),
            audio_url: playback.current().map(|url| url.to_string()),
            error: playback.last_error().map(str::to_string),
        }
    };

    UseSpeechResult { state, speak }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_audio_is_exposed_as_blob_url() {
        let url = audio_url(&[0xFF, 0xFB, 0x90, 0x00]);
        assert!(url.starts_with("blob:"));
    }
}
