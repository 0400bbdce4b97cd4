use shared::User;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TherapistSelectProps {
    pub id: AttrValue,
    pub therapists: Vec<User>,
    /// Selected therapist id, empty for none
    pub value: String,
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(TherapistSelect)]
pub fn therapist_select(props: &TherapistSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <select id={props.id.clone()} class="form-select" {onchange} disabled={props.disabled}>
            <option value="" selected={props.value.is_empty()}>{"Select a therapist"}</option>
            {for props.therapists.iter().map(|therapist| html! {
                <option value={therapist.id.clone()} selected={therapist.id == props.value}>
                    {&therapist.name}
                </option>
            })}
        </select>
    }
}
