use shared::User;
use speechdown_core::form::ManualForm;
use speechdown_core::ManualField;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::therapist_select::TherapistSelect;

#[derive(Properties, PartialEq)]
pub struct ManualFormFieldsProps {
    pub form: ManualForm,
    pub therapists: Vec<User>,
    pub disabled: bool,
    pub on_change: Callback<(ManualField, String)>,
}

/// Title, content and creator inputs shared by create and edit
#[function_component(ManualFormFields)]
pub fn manual_form_fields(props: &ManualFormFieldsProps) -> Html {
    let on_title = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((ManualField::Title, input.value()));
        })
    };

    let on_content = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((ManualField::Content, input.value()));
        })
    };

    let on_creator = {
        let on_change = props.on_change.clone();
        Callback::from(move |id: String| on_change.emit((ManualField::Creator, id)))
    };

    html! {
        <>
            <div class="form-group">
                <label for="activity-title">{"Title"}</label>
                <input
                    id="activity-title"
                    type="text"
                    class="form-control"
                    value={props.form.title.clone()}
                    oninput={on_title}
                    disabled={props.disabled}
                />
            </div>

            <div class="form-group">
                <label for="activity-content">{"Content"}</label>
                <textarea
                    id="activity-content"
                    class="form-control"
                    rows="5"
                    value={props.form.content.clone()}
                    oninput={on_content}
                    disabled={props.disabled}
                />
            </div>

            <div class="form-group">
                <label for="activity-creator">{"Created by"}</label>
                <TherapistSelect
                    id="activity-creator"
                    therapists={props.therapists.clone()}
                    value={props.form.created_by.clone()}
                    disabled={props.disabled}
                    on_change={on_creator}
                />
            </div>
        </>
    }
}
