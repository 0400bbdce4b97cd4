//! # Activity Runner
//!
//! State for running one activity with a child: the activity itself (loaded
//! once on entry), the creator's display name and a progress form. Saving
//! progress posts a single entry for this activity and never touches the
//! loaded activity; the form keeps its values after a save.
//!
//! Every result is tagged with the activity id it was requested for, so a
//! response that arrives after the user moved to another activity is ignored.

use log::{error, info, warn};
use shared::{Activity, ProgressEntry, User};

use crate::error::ClientResult;
use crate::listing::CreatorDirectory;
use crate::ports::{ActivityRepository, UserDirectory};

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityLoad {
    Loading,
    Loaded(Activity),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressForm {
    pub notes: String,
    pub completed: bool,
}

impl ProgressForm {
    pub fn to_entry(&self) -> ProgressEntry {
        ProgressEntry {
            notes: self.notes.clone(),
            completed: self.completed,
        }
    }
}

/// Outcome of the last progress save, shown until dismissed
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Saved,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunnerAction {
    Loaded {
        activity_id: String,
        result: ClientResult<Activity>,
    },
    UsersLoaded(ClientResult<Vec<User>>),
    SetNotes(String),
    SetCompleted(bool),
    SaveStarted,
    SaveFinished {
        activity_id: String,
        result: ClientResult<()>,
    },
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerState {
    activity_id: String,
    load: ActivityLoad,
    directory: CreatorDirectory,
    progress: ProgressForm,
    saving: bool,
    notice: Option<Notice>,
}

impl RunnerState {
    pub fn new(activity_id: impl Into<String>) -> Self {
        Self {
            activity_id: activity_id.into(),
            load: ActivityLoad::Loading,
            directory: CreatorDirectory::default(),
            progress: ProgressForm::default(),
            saving: false,
            notice: None,
        }
    }

    pub fn activity_id(&self) -> &str {
        &self.activity_id
    }

    pub fn load(&self) -> &ActivityLoad {
        &self.load
    }

    pub fn activity(&self) -> Option<&Activity> {
        match &self.load {
            ActivityLoad::Loaded(activity) => Some(activity),
            _ => None,
        }
    }

    pub fn creator_name(&self) -> &str {
        self.directory
            .name_for(self.activity().and_then(|a| a.created_by.as_deref()))
    }

    pub fn progress(&self) -> &ProgressForm {
        &self.progress
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Entry to post, or `None` when a save is already outstanding or the
    /// activity has not loaded
    pub fn pending_entry(&self) -> Option<ProgressEntry> {
        if self.saving || self.activity().is_none() {
            return None;
        }
        Some(self.progress.to_entry())
    }

    pub fn apply(&mut self, action: RunnerAction) {
        match action {
            RunnerAction::Loaded { activity_id, result } => {
                if activity_id != self.activity_id {
                    warn!("Dropping activity {} load; running {}", activity_id, self.activity_id);
                    return;
                }
                self.load = match result {
                    Ok(activity) => ActivityLoad::Loaded(activity),
                    Err(e) => {
                        error!("Failed to load activity {}: {}", activity_id, e);
                        ActivityLoad::Failed(e.to_string())
                    }
                };
            }
            RunnerAction::UsersLoaded(Ok(users)) => {
                self.directory = CreatorDirectory::from_users(users);
            }
            RunnerAction::UsersLoaded(Err(e)) => {
                // Creator falls back to the unknown label
                error!("Failed to load users: {}", e);
            }
            RunnerAction::SetNotes(notes) => self.progress.notes = notes,
            RunnerAction::SetCompleted(completed) => self.progress.completed = completed,
            RunnerAction::SaveStarted => {
                self.saving = true;
                self.notice = None;
            }
            RunnerAction::SaveFinished { activity_id, result } => {
                if activity_id != self.activity_id {
                    warn!("Dropping progress result for {}; running {}", activity_id, self.activity_id);
                    return;
                }
                self.saving = false;
                self.notice = Some(match result {
                    Ok(()) => Notice::Saved,
                    Err(e) => Notice::Failed(e.to_string()),
                });
            }
            RunnerAction::DismissNotice => self.notice = None,
        }
    }
}

/// Fetch the activity to run
pub async fn load_activity<R>(repository: &R, activity_id: &str) -> RunnerAction
where
    R: ActivityRepository + ?Sized,
{
    RunnerAction::Loaded {
        activity_id: activity_id.to_string(),
        result: repository.get_activity(activity_id).await,
    }
}

pub async fn load_users<D>(directory: &D) -> RunnerAction
where
    D: UserDirectory + ?Sized,
{
    RunnerAction::UsersLoaded(directory.list_users().await)
}

/// Post one progress entry for `activity_id`
pub async fn save_progress<R>(repository: &R, activity_id: &str, entry: &ProgressEntry) -> RunnerAction
where
    R: ActivityRepository + ?Sized,
{
    let result = repository.record_progress(activity_id, entry).await;
    match &result {
        Ok(()) => info!("Recorded progress for activity {}", activity_id),
        Err(e) => error!("Failed to record progress for activity {}: {}", activity_id, e),
    }
    RunnerAction::SaveFinished {
        activity_id: activity_id.to_string(),
        result,
    }
}
