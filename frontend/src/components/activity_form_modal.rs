use shared::User;
use speechdown_core::{FormDialog, GenerationField, ManualField};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::forms::{GenerationFormFields, ManualFormFields};

#[derive(Properties, PartialEq)]
pub struct ActivityFormModalProps {
    pub dialog: FormDialog,
    pub therapists: Vec<User>,
    pub submitting: bool,
    pub error: Option<String>,
    pub on_manual_change: Callback<(ManualField, String)>,
    pub on_generation_change: Callback<(GenerationField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

/// Create, edit and AI-generation dialog; renders nothing while closed
#[function_component(ActivityFormModal)]
pub fn activity_form_modal(props: &ActivityFormModalProps) -> Html {
    let fields = match &props.dialog {
        FormDialog::Closed => return html! {},
        FormDialog::ManualCreate { form } | FormDialog::ManualEdit { form, .. } => html! {
            <ManualFormFields
                form={form.clone()}
                therapists={props.therapists.clone()}
                disabled={props.submitting}
                on_change={props.on_manual_change.clone()}
            />
        },
        FormDialog::Generate { form } => html! {
            <GenerationFormFields
                form={form.clone()}
                therapists={props.therapists.clone()}
                disabled={props.submitting}
                on_change={props.on_generation_change.clone()}
            />
        },
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let submitting = props.submitting;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !submitting {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="activity-modal-backdrop" onclick={on_backdrop_click}>
            <div class="activity-modal" onclick={on_modal_click}>
                <h3 class="activity-modal-title">{props.dialog.title()}</h3>

                {if let Some(error) = props.error.clone() {
                    html! {
                        <div class="form-message error">
                            {error}
                        </div>
                    }
                } else {
                    html! {}
                }}

                <form class="activity-form" onsubmit={on_submit}>
                    {fields}

                    <div class="activity-modal-buttons">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={props.submitting}
                        >
                            {if props.submitting {
                                "Saving..."
                            } else {
                                props.dialog.submit_label()
                            }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel}
                            disabled={props.submitting}
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
