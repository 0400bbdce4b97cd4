//! # Activities Page State
//!
//! Reducer state for the activities screen: the category selector, the
//! displayed (category-scoped) list, the therapist directory and the embedded
//! form dialog. Every change goes through [`ActivitiesPage::apply`]; network
//! calls live in [`crate::workflow`] and report back as actions.
//!
//! The displayed list is a cache of the last successful fetch. It is replaced
//! wholesale by refreshes and never patched in place.

use log::{error, info, warn};
use shared::{Activity, ActivityCategory, User};

use crate::error::{ClientResult, ValidationError};
use crate::form::{ActivityFormController, DialogToken, ManualField};
use crate::generation::GenerationField;
use crate::listing::{self, ActivityRow, CreatorDirectory, ListRefresh};

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    SelectCategory(ActivityCategory),
    ActivitiesLoaded(ListRefresh),
    UsersLoaded(ClientResult<Vec<User>>),
    OpenManualCreate,
    /// Open the edit dialog for a displayed activity, by id
    OpenEdit(String),
    OpenGeneration,
    CloseDialog,
    EditManual(ManualField, String),
    EditGeneration(GenerationField, String),
    SubmitStarted,
    SubmitRejected(ValidationError),
    SubmitSucceeded(DialogToken),
    SubmitFailed(DialogToken, String),
    DeleteFailed(String),
    DismissNotice,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitiesPage {
    category: Option<ActivityCategory>,
    /// Bumped on every accepted selection; the view fetches when it changes
    selection: u32,
    activities: Vec<Activity>,
    directory: CreatorDirectory,
    loading: bool,
    notice: Option<String>,
    /// Failed therapist load; outlives category changes
    directory_error: Option<String>,
    form: ActivityFormController,
}

impl ActivitiesPage {
    pub fn category(&self) -> Option<ActivityCategory> {
        self.category
    }

    pub fn selection(&self) -> u32 {
        self.selection
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn directory(&self) -> &CreatorDirectory {
        &self.directory
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Page-level error, e.g. a failed load or delete
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Why the therapist directory is missing, if it failed to load
    pub fn directory_error(&self) -> Option<&str> {
        self.directory_error.as_deref()
    }

    pub fn form(&self) -> &ActivityFormController {
        &self.form
    }

    pub fn rows(&self) -> Vec<ActivityRow> {
        listing::rows(&self.activities, &self.directory)
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::SelectCategory(category) => self.select_category(category),
            PageAction::ActivitiesLoaded(refresh) => self.activities_loaded(refresh),
            PageAction::UsersLoaded(Ok(users)) => {
                self.directory = CreatorDirectory::from_users(users);
                self.directory_error = None;
            }
            PageAction::UsersLoaded(Err(e)) => {
                error!("Failed to load users: {}", e);
                self.directory_error = Some(format!("Failed to load therapists: {}", e));
            }
            PageAction::OpenManualCreate => match self.category {
                Some(category) => self.form.open_manual_create(category),
                None => warn!("Ignoring create: no category selected"),
            },
            PageAction::OpenEdit(id) => {
                match self.activities.iter().find(|activity| activity.id == id) {
                    Some(activity) => {
                        self.form.open_edit(activity);
                    }
                    None => warn!("Ignoring edit of activity {} not in the current list", id),
                }
            }
            PageAction::OpenGeneration => match self.category {
                Some(category) => self.form.open_generation(category),
                None => warn!("Ignoring AI create: no category selected"),
            },
            PageAction::CloseDialog => self.form.close(),
            PageAction::EditManual(field, value) => self.form.set_manual(field, value),
            PageAction::EditGeneration(field, value) => self.form.set_generation(field, value),
            PageAction::SubmitStarted => self.form.mark_submitting(),
            PageAction::SubmitRejected(error) => self.form.reject(error),
            PageAction::SubmitSucceeded(token) => {
                self.form.succeed(token);
            }
            PageAction::SubmitFailed(token, message) => {
                if !self.form.fail(token, message.clone()) {
                    self.notice = Some(message);
                }
            }
            PageAction::DeleteFailed(message) => {
                self.notice = Some(format!("Failed to delete: {}", message));
            }
            PageAction::DismissNotice => self.notice = None,
        }
    }

    fn select_category(&mut self, category: ActivityCategory) {
        // The dialog's form shape was fixed by the category at open time
        if self.form.is_open() {
            warn!("Ignoring category change to {} while the dialog is open", category);
            return;
        }
        if self.category != Some(category) {
            self.activities.clear();
        }
        self.category = Some(category);
        self.selection = self.selection.wrapping_add(1);
        self.loading = true;
        self.notice = None;
    }

    fn activities_loaded(&mut self, refresh: ListRefresh) {
        if self.category != Some(refresh.category) {
            warn!(
                "Dropping {} activities response; {:?} is selected",
                refresh.category, self.category
            );
            return;
        }
        self.loading = false;
        match refresh.result {
            Ok(activities) => {
                info!("Showing {} {} activities", activities.len(), refresh.category);
                self.activities = listing::filter_by_category(activities, refresh.category);
            }
            Err(e) => {
                error!("Failed to load {} activities: {}", refresh.category, e);
                self.notice = Some(format!("Failed to load activities: {}", e));
            }
        }
    }
}
