use yew::prelude::*;

/// Top-level screens reachable from the navigation bar
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Home,
    Activities,
    /// Running one activity, by id
    Run(String),
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: View,
    pub on_navigate: Callback<View>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_link = |label: &'static str, target: View| {
        let active = match (&props.current, &target) {
            (View::Run(_), View::Activities) => true,
            (current, target) => current == target,
        };
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()));
        html! {
            <button class={classes!("nav-link", active.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"SpeechDown"}</h1>
                <nav class="header-nav">
                    {nav_link("Home", View::Home)}
                    {nav_link("Activities", View::Activities)}
                </nav>
            </div>
        </header>
    }
}
