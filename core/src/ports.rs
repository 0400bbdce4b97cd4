//! # Collaborator Ports
//!
//! The workflow talks to the outside world only through these traits. The
//! browser client implements them over HTTP; tests implement them in memory.
//!
//! The traits are `?Send` because the browser event loop is single-threaded
//! and its futures are not `Send`.

use async_trait::async_trait;
use shared::{Activity, ActivityUpdate, GenerationRequest, NewActivity, ProgressEntry, User};

use crate::error::ClientResult;

/// Activities collection, generation endpoints and progress recording
#[async_trait(?Send)]
pub trait ActivityRepository {
    /// List every activity. The endpoint is unscoped; callers filter by category.
    async fn list_activities(&self) -> ClientResult<Vec<Activity>>;

    /// Fetch a single activity, failing with `NotFound` if it was deleted
    async fn get_activity(&self, id: &str) -> ClientResult<Activity>;

    /// Create a manual activity and return its id
    async fn create_activity(&self, activity: &NewActivity) -> ClientResult<String>;

    async fn update_activity(&self, id: &str, update: &ActivityUpdate) -> ClientResult<()>;

    async fn delete_activity(&self, id: &str) -> ClientResult<()>;

    /// Ask the backend to generate and persist a new activity
    async fn generate_activity(&self, request: &GenerationRequest) -> ClientResult<Activity>;

    /// Record one progress entry against an activity
    async fn record_progress(&self, activity_id: &str, entry: &ProgressEntry) -> ClientResult<()>;
}

#[async_trait(?Send)]
pub trait UserDirectory {
    async fn list_users(&self) -> ClientResult<Vec<User>>;
}

/// Text-to-speech. Returns the encoded audio (MP3) for the text.
#[async_trait(?Send)]
pub trait SpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> ClientResult<Vec<u8>>;
}

/// Synchronous yes/no prompt shown before destructive actions
pub trait Confirmation {
    fn confirm(&self, message: &str) -> bool;
}

/// API paths relative to the configured base URL
pub mod routes {
    pub const ACTIVITIES: &str = "/activities/";
    pub const USERS: &str = "/users/";
    pub const SPEECH: &str = "/tts/hablar";

    pub fn activity(id: &str) -> String {
        format!("/activities/{}", id)
    }

    pub fn activity_progress(id: &str) -> String {
        format!("/activities/{}/progress", id)
    }
}
