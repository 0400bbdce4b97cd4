use shared::ActivityCategory;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategorySelectorProps {
    pub selected: Option<ActivityCategory>,
    /// Locked while the activity dialog is open
    pub disabled: bool,
    pub on_select: Callback<ActivityCategory>,
}

#[function_component(CategorySelector)]
pub fn category_selector(props: &CategorySelectorProps) -> Html {
    html! {
        <div class="category-selector">
            {for ActivityCategory::ALL.iter().map(|&category| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(category));
                let selected = props.selected == Some(category);
                html! {
                    <button
                        class={classes!("category-card", selected.then_some("selected"))}
                        disabled={props.disabled}
                        {onclick}
                    >
                        <span class="category-emoji">{category.emoji()}</span>
                        <span class="category-label">{category.label()}</span>
                    </button>
                }
            })}
        </div>
    }
}
