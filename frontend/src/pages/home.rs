use yew::prelude::*;

use crate::components::SpeechPanel;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub api_client: ApiClient,
    pub on_open_activities: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let onclick = {
        let on_open_activities = props.on_open_activities.clone();
        Callback::from(move |_: MouseEvent| on_open_activities.emit(()))
    };

    html! {
        <>
            <section class="welcome">
                <h2>{"Welcome to SpeechDown"}</h2>
                <p>{"Reading, pronunciation and comprehension activities for speech therapy sessions."}</p>
                <button class="btn btn-primary" {onclick}>{"Go to activities"}</button>
            </section>
            <SpeechPanel api_client={props.api_client.clone()} />
        </>
    }
}
