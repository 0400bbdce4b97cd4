use yew::prelude::*;

use crate::components::{ActivityFormModal, ActivityTable, CategorySelector};
use crate::hooks::use_activities::use_activities;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ActivitiesPageProps {
    pub api_client: ApiClient,
    pub on_run: Callback<String>,
}

#[function_component(ActivitiesPageView)]
pub fn activities_page(props: &ActivitiesPageProps) -> Html {
    let activities = use_activities(&props.api_client);
    let page = &activities.page;
    let actions = &activities.actions;
    let form = page.form();

    let on_create = {
        let open = actions.open_manual_create.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };

    let on_generate = {
        let open = actions.open_generation.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };

    let on_dismiss = {
        let dismiss = actions.dismiss_notice.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    html! {
        <section class="activities-section">
            <h2>{"Activities"}</h2>

            <CategorySelector
                selected={page.category()}
                disabled={form.is_open()}
                on_select={actions.select_category.clone()}
            />

            {if let Some(error) = page.directory_error() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if let Some(notice) = page.notice() {
                html! {
                    <div class="form-message error">
                        {notice}
                        <button class="btn-close" onclick={on_dismiss}>{"×"}</button>
                    </div>
                }
            } else { html! {} }}

            {if let Some(category) = page.category() {
                html! {
                    <>
                        <div class="activities-toolbar">
                            <h3>{format!("{} {}", category.emoji(), category.label())}</h3>
                            <button class="btn btn-primary" onclick={on_create}>{"➕ New activity"}</button>
                            <button class="btn btn-secondary" onclick={on_generate}>{"✨ Create with AI"}</button>
                        </div>
                        <ActivityTable
                            rows={page.rows()}
                            loading={page.is_loading()}
                            on_run={props.on_run.clone()}
                            on_edit={actions.open_edit.clone()}
                            on_delete={actions.delete.clone()}
                        />
                    </>
                }
            } else {
                html! { <p class="hint">{"Choose a category to see its activities."}</p> }
            }}

            <ActivityFormModal
                dialog={form.dialog().clone()}
                therapists={page.directory().therapists().to_vec()}
                submitting={form.is_submitting()}
                error={form.error().map(str::to_string)}
                on_manual_change={actions.edit_manual.clone()}
                on_generation_change={actions.edit_generation.clone()}
                on_submit={actions.submit.clone()}
                on_close={actions.close_dialog.clone()}
            />
        </section>
    }
}
