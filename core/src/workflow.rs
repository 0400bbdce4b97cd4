//! # Activity Workflow
//!
//! Async operations of the activities screen. Each write awaits the backend's
//! answer before anything else happens: the list refresh that follows a
//! create, update, generate or delete is only issued after that write has
//! succeeded, so the refreshed list always reflects it. Nothing is retried.

use log::{error, info};
use shared::ActivityCategory;

use crate::error::ClientResult;
use crate::form::Submission;
use crate::listing::{filter_by_category, ListRefresh};
use crate::ports::{ActivityRepository, Confirmation, UserDirectory};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this activity?";

#[derive(Debug, Clone)]
pub struct ActivityWorkflow<B> {
    backend: B,
}

impl<B> ActivityWorkflow<B>
where
    B: ActivityRepository + UserDirectory,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch all activities and keep those of `category`
    pub async fn load_category(&self, category: ActivityCategory) -> ListRefresh {
        let result = self
            .backend
            .list_activities()
            .await
            .map(|activities| filter_by_category(activities, category));
        if let Err(e) = &result {
            error!("Failed to list {} activities: {}", category, e);
        }
        ListRefresh { category, result }
    }

    /// Dispatch a validated dialog submission, then refresh its category.
    ///
    /// An error means the write itself failed and no refresh was issued; a
    /// failed refresh after a successful write is reported inside the
    /// returned [`ListRefresh`].
    pub async fn submit(&self, submission: &Submission) -> ClientResult<ListRefresh> {
        match submission {
            Submission::Create(activity) => {
                let id = self.backend.create_activity(activity).await?;
                info!("Created {} activity {}", activity.category, id);
            }
            Submission::Update { id, update, .. } => {
                self.backend.update_activity(id, update).await?;
                info!("Updated activity {}", id);
            }
            Submission::Generate(request) => {
                let generated = self.backend.generate_activity(request).await?;
                info!("Generated {} activity {}", request.category(), generated.id);
            }
        }
        Ok(self.load_category(submission.category()).await)
    }

    /// Delete after confirmation, then refresh `category`.
    ///
    /// Returns `Ok(None)` when the user declines; nothing is sent in that case.
    pub async fn delete(
        &self,
        id: &str,
        category: ActivityCategory,
        confirmation: &dyn Confirmation,
    ) -> ClientResult<Option<ListRefresh>> {
        if !confirmation.confirm(DELETE_CONFIRMATION) {
            info!("Delete of activity {} cancelled", id);
            return Ok(None);
        }
        self.backend.delete_activity(id).await?;
        info!("Deleted activity {}", id);
        Ok(Some(self.load_category(category).await))
    }
}
