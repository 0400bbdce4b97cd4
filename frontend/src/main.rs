mod components;
mod hooks;
mod pages;
mod services;

use speechdown_core::ClientConfig;
use yew::prelude::*;

use components::{Header, View};
use pages::{ActivitiesPageView, ActivityRunnerPage, HomePage};
use services::api::ApiClient;

#[derive(Properties, PartialEq)]
struct AppProps {
    api_client: ApiClient,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let view = use_state(|| View::Home);

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |next: View| view.set(next))
    };

    let on_open_activities = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Activities))
    };

    let on_run = {
        let view = view.clone();
        Callback::from(move |id: String| view.set(View::Run(id)))
    };

    let content = match &*view {
        View::Home => html! {
            <HomePage api_client={props.api_client.clone()} {on_open_activities} />
        },
        View::Activities => html! {
            <ActivitiesPageView api_client={props.api_client.clone()} {on_run} />
        },
        View::Run(id) => html! {
            <ActivityRunnerPage
                key={id.clone()}
                api_client={props.api_client.clone()}
                activity_id={id.clone()}
                on_back={on_open_activities}
            />
        },
    };

    html! {
        <>
            <Header current={(*view).clone()} {on_navigate} />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    services::logging::init();

    let config = match ClientConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using {}", e, speechdown_core::config::DEFAULT_API_BASE_URL);
            ClientConfig::default()
        }
    };
    log::info!("SpeechDown client using backend {}", config.api_base_url());

    yew::Renderer::<App>::with_props(AppProps {
        api_client: ApiClient::new(config),
    })
    .render();
}
