use speechdown_core::ActivityRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityTableProps {
    pub rows: Vec<ActivityRow>,
    pub loading: bool,
    pub on_run: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(ActivityTable)]
pub fn activity_table(props: &ActivityTableProps) -> Html {
    if props.loading && props.rows.is_empty() {
        return html! { <div class="loading">{"Loading activities..."}</div> };
    }

    let row_button = |label: &'static str, class: &'static str, id: &str, callback: &Callback<String>| {
        let id = id.to_string();
        let callback = callback.clone();
        let onclick = Callback::from(move |_: MouseEvent| callback.emit(id.clone()));
        html! { <button class={classes!("btn", "btn-sm", class)} {onclick}>{label}</button> }
    };

    html! {
        <div class="table-container">
            <table class="activities-table">
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        <th>{"Created by"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.rows.is_empty() {
                        html! {
                            <tr>
                                <td colspan="3" class="empty-state">{"No activities yet"}</td>
                            </tr>
                        }
                    } else {
                        html! {
                            <>
                            {for props.rows.iter().map(|row| html! {
                                <tr key={row.id.clone()}>
                                    <td class="title">
                                        {&row.title}
                                        {if row.ai_generated {
                                            html! { <span class="badge ai-badge">{"AI"}</span> }
                                        } else { html! {} }}
                                    </td>
                                    <td class="creator">{&row.creator}</td>
                                    <td class="actions">
                                        {row_button("Run", "btn-success", &row.id, &props.on_run)}
                                        {row_button("Edit", "btn-primary", &row.id, &props.on_edit)}
                                        {row_button("Delete", "btn-danger", &row.id, &props.on_delete)}
                                    </td>
                                </tr>
                            })}
                            </>
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
