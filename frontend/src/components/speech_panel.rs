use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::speech_button::SpeechButton;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct SpeechPanelProps {
    pub api_client: ApiClient,
}

/// Free text box read aloud on demand
#[function_component(SpeechPanel)]
pub fn speech_panel(props: &SpeechPanelProps) -> Html {
    let text = use_state(String::new);

    let on_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    html! {
        <section class="speech-panel">
            <h2>{"🗣️ Text to speech"}</h2>
            <div class="form-group">
                <label for="speech-text">{"Write something to hear it"}</label>
                <textarea
                    id="speech-text"
                    class="form-control"
                    rows="4"
                    placeholder="Hola, ¿cómo estás?"
                    value={(*text).clone()}
                    oninput={on_input}
                />
            </div>
            <SpeechButton api_client={props.api_client.clone()} text={(*text).clone()} />
        </section>
    }
}
