//! # Activity Listing
//!
//! The activities endpoint returns every activity; scoping to the selected
//! category happens here. Creator ids are resolved against the therapist
//! directory for display.

use shared::{Activity, ActivityCategory, User};

use crate::error::ClientResult;

/// Shown in place of a creator that cannot be resolved
pub const UNKNOWN_CREATOR: &str = "Unknown";

/// Keep only activities of `category`, preserving server order
pub fn filter_by_category(activities: Vec<Activity>, category: ActivityCategory) -> Vec<Activity> {
    activities
        .into_iter()
        .filter(|activity| activity.belongs_to(category))
        .collect()
}

/// Result of a category-scoped list fetch.
///
/// Tagged with the category it was requested for so a late response for a
/// previous selection can be recognized and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRefresh {
    pub category: ActivityCategory,
    pub result: ClientResult<Vec<Activity>>,
}

/// Therapists available as activity creators
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatorDirectory {
    therapists: Vec<User>,
}

impl CreatorDirectory {
    /// Build from the full user list, keeping only therapists
    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            therapists: users.into_iter().filter(User::is_therapist).collect(),
        }
    }

    pub fn therapists(&self) -> &[User] {
        &self.therapists
    }

    pub fn name_for(&self, creator_id: Option<&str>) -> &str {
        creator_id
            .and_then(|id| self.therapists.iter().find(|user| user.id == id))
            .map(|user| user.name.as_str())
            .unwrap_or(UNKNOWN_CREATOR)
    }
}

/// One table row as displayed
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub ai_generated: bool,
}

pub fn rows(activities: &[Activity], directory: &CreatorDirectory) -> Vec<ActivityRow> {
    activities
        .iter()
        .map(|activity| ActivityRow {
            id: activity.id.clone(),
            title: activity.title.clone(),
            creator: directory.name_for(activity.created_by.as_deref()).to_string(),
            ai_generated: activity.is_ai_generated,
        })
        .collect()
}
