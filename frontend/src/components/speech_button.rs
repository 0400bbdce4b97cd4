use yew::prelude::*;

use crate::hooks::use_speech::use_speech;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct SpeechButtonProps {
    pub api_client: ApiClient,
    pub text: String,
    #[prop_or(AttrValue::from("🔊 Listen"))]
    pub label: AttrValue,
}

/// Synthesizes `text` on click and plays the result
#[function_component(SpeechButton)]
pub fn speech_button(props: &SpeechButtonProps) -> Html {
    let speech = use_speech(&props.api_client);

    let onclick = {
        let speak = speech.speak.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| speak.emit(text.clone()))
    };

    let disabled = speech.state.busy || props.text.trim().is_empty();

    html! {
        <div class="speech-player">
            <button type="button" class="btn btn-info" {onclick} {disabled}>
                {if speech.state.busy { "Generating audio...".to_string() } else { props.label.to_string() }}
            </button>

            {if let Some(error) = speech.state.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if let Some(url) = speech.state.audio_url.as_ref() {
                html! { <audio key={url.clone()} class="speech-audio" controls=true autoplay=true src={url.clone()} /> }
            } else { html! {} }}
        </div>
    }
}
