use speechdown_core::{ActivityLoad, Notice};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::SpeechButton;
use crate::hooks::use_activity_runner::use_activity_runner;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ActivityRunnerPageProps {
    pub api_client: ApiClient,
    pub activity_id: String,
    pub on_back: Callback<()>,
}

#[function_component(ActivityRunnerPage)]
pub fn activity_runner_page(props: &ActivityRunnerPageProps) -> Html {
    let runner = use_activity_runner(&props.api_client, &props.activity_id);
    let state = &runner.state;
    let actions = &runner.actions;

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let back_button = html! {
        <button class="btn btn-link" onclick={on_back}>{"← Back to activities"}</button>
    };

    let activity = match state.load() {
        ActivityLoad::Loading => {
            return html! {
                <section class="runner-section">
                    {back_button}
                    <div class="loading">{"Loading activity..."}</div>
                </section>
            };
        }
        ActivityLoad::Failed(message) => {
            return html! {
                <section class="runner-section">
                    {back_button}
                    <div class="form-message error">{format!("Could not load the activity: {}", message)}</div>
                </section>
            };
        }
        ActivityLoad::Loaded(activity) => activity,
    };

    let on_notes = {
        let set_notes = actions.set_notes.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set_notes.emit(input.value());
        })
    };

    let on_completed = {
        let set_completed = actions.set_completed.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_completed.emit(input.checked());
        })
    };

    let on_submit = {
        let save = actions.save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save.emit(());
        })
    };

    let on_dismiss = {
        let dismiss = actions.dismiss_notice.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    html! {
        <section class="runner-section">
            {back_button}
            <h2>{&activity.title}</h2>
            <p class="runner-creator">
                <strong>{"Therapist: "}</strong>{state.creator_name()}
            </p>

            <div class="runner-content">
                <p>{&activity.content}</p>
                <SpeechButton api_client={props.api_client.clone()} text={activity.content.clone()} />
            </div>

            {match state.notice() {
                Some(Notice::Saved) => html! {
                    <div class="form-message success">
                        {"Progress saved!"}
                        <button class="btn-close" onclick={on_dismiss}>{"×"}</button>
                    </div>
                },
                Some(Notice::Failed(message)) => html! {
                    <div class="form-message error">
                        {format!("Failed to save progress: {}", message)}
                        <button class="btn-close" onclick={on_dismiss}>{"×"}</button>
                    </div>
                },
                None => html! {},
            }}

            <form class="progress-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="progress-notes">{"Progress notes"}</label>
                    <textarea
                        id="progress-notes"
                        class="form-control"
                        rows="4"
                        value={state.progress().notes.clone()}
                        oninput={on_notes}
                        disabled={state.is_saving()}
                    />
                </div>

                <div class="form-check">
                    <input
                        id="progress-completed"
                        type="checkbox"
                        class="form-check-input"
                        checked={state.progress().completed}
                        onchange={on_completed}
                        disabled={state.is_saving()}
                    />
                    <label class="form-check-label" for="progress-completed">{"Activity completed"}</label>
                </div>

                <button type="submit" class="btn btn-success" disabled={state.is_saving()}>
                    {if state.is_saving() { "Saving..." } else { "Save progress" }}
                </button>
            </form>
        </section>
    }
}
