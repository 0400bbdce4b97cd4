use std::rc::Rc;

use shared::ActivityCategory;
use speechdown_core::{
    ActivitiesPage, ActivityWorkflow, GenerationField, ManualField, PageAction, SubmitBlocked,
    UserDirectory,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::dialogs::BrowserConfirmation;

/// Page state as a Yew reducer
#[derive(Clone, Default, PartialEq)]
pub struct PageState(pub ActivitiesPage);

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut page = self.0.clone();
        page.apply(action);
        Rc::new(PageState(page))
    }
}

#[derive(Clone, PartialEq)]
pub struct UseActivitiesActions {
    pub select_category: Callback<ActivityCategory>,
    pub open_manual_create: Callback<()>,
    pub open_generation: Callback<()>,
    pub open_edit: Callback<String>,
    pub close_dialog: Callback<()>,
    pub edit_manual: Callback<(ManualField, String)>,
    pub edit_generation: Callback<(GenerationField, String)>,
    pub submit: Callback<()>,
    pub delete: Callback<String>,
    pub dismiss_notice: Callback<()>,
}

pub struct UseActivitiesResult {
    pub page: ActivitiesPage,
    pub actions: UseActivitiesActions,
}

#[hook]
pub fn use_activities(api_client: &ApiClient) -> UseActivitiesResult {
    let state = use_reducer(PageState::default);
    let workflow = ActivityWorkflow::new(api_client.clone());

    // Therapist directory, once
    use_effect_with((), {
        let state = state.clone();
        let workflow = workflow.clone();
        move |_| {
            spawn_local(async move {
                let users = workflow.backend().list_users().await;
                state.dispatch(PageAction::UsersLoaded(users));
            });
            || ()
        }
    });

    // Fetch whenever a category is (re)selected
    use_effect_with(state.0.selection(), {
        let category = state.0.category();
        let state = state.clone();
        let workflow = workflow.clone();
        move |_| {
            if let Some(category) = category {
                spawn_local(async move {
                    let refresh = workflow.load_category(category).await;
                    state.dispatch(PageAction::ActivitiesLoaded(refresh));
                });
            }
            || ()
        }
    });

    let select_category = {
        let state = state.clone();
        Callback::from(move |category| state.dispatch(PageAction::SelectCategory(category)))
    };

    let open_manual_create = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PageAction::OpenManualCreate))
    };

    let open_generation = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PageAction::OpenGeneration))
    };

    let open_edit = {
        let state = state.clone();
        Callback::from(move |id| state.dispatch(PageAction::OpenEdit(id)))
    };

    let close_dialog = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PageAction::CloseDialog))
    };

    let edit_manual = {
        let state = state.clone();
        Callback::from(move |(field, value): (ManualField, String)| {
            state.dispatch(PageAction::EditManual(field, value))
        })
    };

    let edit_generation = {
        let state = state.clone();
        Callback::from(move |(field, value): (GenerationField, String)| {
            state.dispatch(PageAction::EditGeneration(field, value))
        })
    };

    let submit = {
        let state = state.clone();
        let workflow = workflow.clone();
        Callback::from(move |_| {
            let submission = match state.0.form().submission() {
                Ok(submission) => submission,
                Err(SubmitBlocked::Invalid(error)) => {
                    state.dispatch(PageAction::SubmitRejected(error));
                    return;
                }
                Err(blocked) => {
                    log::warn!("Submit ignored: {:?}", blocked);
                    return;
                }
            };
            let Some(token) = state.0.form().token() else {
                return;
            };
            state.dispatch(PageAction::SubmitStarted);

            let state = state.clone();
            let workflow = workflow.clone();
            spawn_local(async move {
                match workflow.submit(&submission).await {
                    Ok(refresh) => {
                        state.dispatch(PageAction::SubmitSucceeded(token));
                        state.dispatch(PageAction::ActivitiesLoaded(refresh));
                    }
                    Err(e) => state.dispatch(PageAction::SubmitFailed(token, e.to_string())),
                }
            });
        })
    };

    let delete = {
        let state = state.clone();
        let workflow = workflow.clone();
        Callback::from(move |id: String| {
            let Some(category) = state.0.category() else {
                return;
            };
            let state = state.clone();
            let workflow = workflow.clone();
            spawn_local(async move {
                match workflow.delete(&id, category, &BrowserConfirmation).await {
                    Ok(Some(refresh)) => state.dispatch(PageAction::ActivitiesLoaded(refresh)),
                    Ok(None) => {}
                    Err(e) => state.dispatch(PageAction::DeleteFailed(e.to_string())),
                }
            });
        })
    };

    let dismiss_notice = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PageAction::DismissNotice))
    };

    UseActivitiesResult {
        page: state.0.clone(),
        actions: UseActivitiesActions {
            select_category,
            open_manual_create,
            open_generation,
            open_edit,
            close_dialog,
            edit_manual,
            edit_generation,
            submit,
            delete,
            dismiss_notice,
        },
    }
}
