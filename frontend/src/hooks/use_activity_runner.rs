use std::rc::Rc;

use speechdown_core::runner::{load_activity, load_users, save_progress};
use speechdown_core::{RunnerAction, RunnerState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct RunnerView(pub RunnerState);

impl Reducible for RunnerView {
    type Action = RunnerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(RunnerView(state))
    }
}

#[derive(Clone, PartialEq)]
pub struct UseActivityRunnerActions {
    pub set_notes: Callback<String>,
    pub set_completed: Callback<bool>,
    pub save: Callback<()>,
    pub dismiss_notice: Callback<()>,
}

pub struct UseActivityRunnerResult {
    pub state: RunnerState,
    pub actions: UseActivityRunnerActions,
}

/// State of the runner for `activity_id`. Mount under a key of the id so a
/// different activity starts from a fresh state.
#[hook]
pub fn use_activity_runner(api_client: &ApiClient, activity_id: &str) -> UseActivityRunnerResult {
    let state = {
        let activity_id = activity_id.to_string();
        use_reducer(move || RunnerView(RunnerState::new(activity_id)))
    };

    use_effect_with(activity_id.to_string(), {
        let api_client = api_client.clone();
        let state = state.clone();
        move |activity_id: &String| {
            let activity_id = activity_id.clone();
            spawn_local(async move {
                state.dispatch(load_activity(&api_client, &activity_id).await);
                state.dispatch(load_users(&api_client).await);
            });
            || ()
        }
    });

    let set_notes = {
        let state = state.clone();
        Callback::from(move |notes| state.dispatch(RunnerAction::SetNotes(notes)))
    };

    let set_completed = {
        let state = state.clone();
        Callback::from(move |completed| state.dispatch(RunnerAction::SetCompleted(completed)))
    };

    let save = {
        let api_client = api_client.clone();
        let state = state.clone();
        Callback::from(move |_| {
            let Some(entry) = state.0.pending_entry() else {
                return;
            };
            state.dispatch(RunnerAction::SaveStarted);

            let api_client = api_client.clone();
            let state = state.clone();
            let activity_id = state.0.activity_id().to_string();
            spawn_local(async move {
                state.dispatch(save_progress(&api_client, &activity_id, &entry).await);
            });
        })
    };

    let dismiss_notice = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(RunnerAction::DismissNotice))
    };

    UseActivityRunnerResult {
        state: state.0.clone(),
        actions: UseActivityRunnerActions {
            set_notes,
            set_completed,
            save,
            dismiss_notice,
        },
    }
}
