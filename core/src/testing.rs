//! In-memory backend for unit tests.
//!
//! Implements every port over a `RefCell`, records each call in order and can
//! be told to fail the next call with a given error.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use shared::{
    Activity, ActivityCategory, ActivityUpdate, GenerationRequest, NewActivity, ProgressEntry,
    User, UserRole,
};

use crate::error::{ClientError, ClientResult};
use crate::ports::{ActivityRepository, Confirmation, SpeechSynthesizer, UserDirectory};

pub fn activity(id: &str, title: &str, category: ActivityCategory, creator: &str) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("Content of {}", title),
        category: Some(category),
        created_by: Some(creator.to_string()),
        is_ai_generated: false,
    }
}

pub fn user(id: &str, name: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        role,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListActivities,
    GetActivity(String),
    CreateActivity(NewActivity),
    UpdateActivity(String, ActivityUpdate),
    DeleteActivity(String),
    Generate(GenerationRequest),
    RecordProgress(String, ProgressEntry),
    ListUsers,
    Synthesize(String),
}

#[derive(Default)]
pub struct FakeBackend {
    activities: RefCell<Vec<Activity>>,
    users: RefCell<Vec<User>>,
    calls: RefCell<Vec<Call>>,
    fail_next: RefCell<Option<ClientError>>,
    next_id: Cell<u32>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activity(self, activity: Activity) -> Self {
        self.activities.borrow_mut().push(activity);
        self
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.borrow_mut().push(user);
        self
    }

    /// Make the next call of any kind fail with `error`
    pub fn fail_next(&self, error: ClientError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn activities(&self) -> Vec<Activity> {
        self.activities.borrow().clone()
    }

    pub fn activity(&self, id: &str) -> Option<Activity> {
        self.activities.borrow().iter().find(|a| a.id == id).cloned()
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn allocate_id(&self) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("gen-{}", id)
    }

    fn not_found(id: &str) -> ClientError {
        ClientError::NotFound(format!("activity {}", id))
    }
}

#[async_trait(?Send)]
impl ActivityRepository for FakeBackend {
    async fn list_activities(&self) -> ClientResult<Vec<Activity>> {
        self.record(Call::ListActivities)?;
        Ok(self.activities())
    }

    async fn get_activity(&self, id: &str) -> ClientResult<Activity> {
        self.record(Call::GetActivity(id.to_string()))?;
        self.activity(id).ok_or_else(|| Self::not_found(id))
    }

    async fn create_activity(&self, activity: &NewActivity) -> ClientResult<String> {
        self.record(Call::CreateActivity(activity.clone()))?;
        let id = self.allocate_id();
        self.activities.borrow_mut().push(Activity {
            id: id.clone(),
            title: activity.title.clone(),
            content: activity.content.clone(),
            category: Some(activity.category),
            created_by: Some(activity.created_by.clone()),
            is_ai_generated: false,
        });
        Ok(id)
    }

    async fn update_activity(&self, id: &str, update: &ActivityUpdate) -> ClientResult<()> {
        self.record(Call::UpdateActivity(id.to_string(), update.clone()))?;
        let mut activities = self.activities.borrow_mut();
        let existing = activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        existing.title = update.title.clone();
        existing.content = update.content.clone();
        existing.created_by = Some(update.created_by.clone());
        Ok(())
    }

    async fn delete_activity(&self, id: &str) -> ClientResult<()> {
        self.record(Call::DeleteActivity(id.to_string()))?;
        let mut activities = self.activities.borrow_mut();
        let before = activities.len();
        activities.retain(|a| a.id != id);
        if activities.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    async fn generate_activity(&self, request: &GenerationRequest) -> ClientResult<Activity> {
        self.record(Call::Generate(request.clone()))?;
        let generated = Activity {
            id: self.allocate_id(),
            title: format!("Generated {}", request.category().label()),
            content: "Había una vez...".to_string(),
            category: Some(request.category()),
            created_by: Some(request.therapist_id().to_string()),
            is_ai_generated: true,
        };
        self.activities.borrow_mut().push(generated.clone());
        Ok(generated)
    }

    async fn record_progress(&self, activity_id: &str, entry: &ProgressEntry) -> ClientResult<()> {
        self.record(Call::RecordProgress(activity_id.to_string(), entry.clone()))
    }
}

#[async_trait(?Send)]
impl UserDirectory for FakeBackend {
    async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.record(Call::ListUsers)?;
        Ok(self.users.borrow().clone())
    }
}

#[async_trait(?Send)]
impl SpeechSynthesizer for FakeBackend {
    async fn synthesize(&self, text: &str) -> ClientResult<Vec<u8>> {
        self.record(Call::Synthesize(text.to_string()))?;
        Ok(text.as_bytes().to_vec())
    }
}

/// Confirmation that always answers the same way and remembers each prompt
pub struct ScriptedConfirmation {
    answer: bool,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirmation {
    pub fn accepting() -> Self {
        Self { answer: true, prompts: RefCell::default() }
    }

    pub fn declining() -> Self {
        Self { answer: false, prompts: RefCell::default() }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirmation for ScriptedConfirmation {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }
}
