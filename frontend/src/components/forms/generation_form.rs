use shared::User;
use speechdown_core::form::GenerationForm;
use speechdown_core::generation::FieldSpec;
use speechdown_core::{GenerationField, InputKind};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::therapist_select::TherapistSelect;

#[derive(Properties, PartialEq)]
pub struct GenerationFormFieldsProps {
    pub form: GenerationForm,
    pub therapists: Vec<User>,
    pub disabled: bool,
    pub on_change: Callback<(GenerationField, String)>,
}

/// Inputs of the category's generation schema, in schema order
#[function_component(GenerationFormFields)]
pub fn generation_form_fields(props: &GenerationFormFieldsProps) -> Html {
    let render_field = |spec: &FieldSpec| {
        let field = spec.field;
        let id = format!("generation-{:?}", field).to_lowercase();
        let value = props.form.values.get(field).to_string();
        let label = if spec.required {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };

        let input = match spec.input {
            InputKind::TherapistPicker => {
                let on_change = props.on_change.clone();
                html! {
                    <TherapistSelect
                        id={id.clone()}
                        therapists={props.therapists.clone()}
                        {value}
                        disabled={props.disabled}
                        on_change={Callback::from(move |id: String| on_change.emit((field, id)))}
                    />
                }
            }
            InputKind::Number | InputKind::Text => {
                let on_change = props.on_change.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((field, input.value()));
                });
                let (kind, placeholder) = match (spec.input, spec.default) {
                    (InputKind::Number, Some(default)) => ("number", default.to_string()),
                    (InputKind::Number, None) => ("number", String::new()),
                    _ => ("text", String::new()),
                };
                html! {
                    <input
                        id={id.clone()}
                        type={kind}
                        min={(kind == "number").then_some("1")}
                        class="form-control"
                        {placeholder}
                        {value}
                        {oninput}
                        disabled={props.disabled}
                    />
                }
            }
        };

        html! {
            <div class="form-group" key={id.clone()}>
                <label for={id}>{label}</label>
                {input}
            </div>
        }
    };

    html! {
        <>
            {for props.form.schema().fields.iter().map(render_field)}
        </>
    }
}
