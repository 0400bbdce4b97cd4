use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Therapeutic activity category. Fixed when the activity is created.
///
/// Serialized with the backend's tags: "lectura", "pronunciacion", "comprension".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityCategory {
    #[serde(rename = "lectura")]
    Reading,
    #[serde(rename = "pronunciacion")]
    Pronunciation,
    #[serde(rename = "comprension")]
    Comprehension,
}

impl ActivityCategory {
    /// All categories in display order
    pub const ALL: [ActivityCategory; 3] = [
        ActivityCategory::Reading,
        ActivityCategory::Pronunciation,
        ActivityCategory::Comprehension,
    ];

    /// Tag used by the backend in the `type` field
    pub fn wire_tag(&self) -> &'static str {
        match self {
            ActivityCategory::Reading => "lectura",
            ActivityCategory::Pronunciation => "pronunciacion",
            ActivityCategory::Comprehension => "comprension",
        }
    }

    /// Parse a backend tag, returning None for anything unrecognized
    pub fn from_wire_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.wire_tag() == tag)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Reading => "Reading games",
            ActivityCategory::Pronunciation => "Pronunciation games",
            ActivityCategory::Comprehension => "Comprehension games",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ActivityCategory::Reading => "📖",
            ActivityCategory::Pronunciation => "🎤",
            ActivityCategory::Comprehension => "🧩",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_tag())
    }
}

/// Role of a platform user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Parent,
    Therapist,
    /// Any role this client does not know about; excluded from every picker
    #[serde(other)]
    Other,
}

/// A therapist or parent account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn is_therapist(&self) -> bool {
        self.role == UserRole::Therapist
    }
}

/// A child in therapy. Parent and therapist are referenced by user id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: u32,
    /// Free-text diagnosis
    #[serde(default)]
    pub diagnosis: String,
    pub parent_id: String,
    pub therapist_id: String,
    #[serde(default)]
    pub notes: String,
}

/// A therapeutic exercise as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Missing or unrecognized tags decode as None; such records belong to no listing
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<ActivityCategory>,
    /// Id of the therapist who authored the activity
    #[serde(default)]
    pub created_by: Option<String>,
    /// Set by the backend for generated activities; never written by this client
    #[serde(default)]
    pub is_ai_generated: bool,
}

impl Activity {
    pub fn belongs_to(&self, category: ActivityCategory) -> bool {
        self.category == Some(category)
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<ActivityCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.as_deref().and_then(ActivityCategory::from_wire_tag))
}

/// Body of a manual activity creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub title: String,
    pub content: String,
    pub created_by: String,
    #[serde(rename = "type")]
    pub category: ActivityCategory,
}

/// Body of an activity edit. Carries no category, so an edit can never move
/// an activity to another category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityUpdate {
    pub title: String,
    pub content: String,
    pub created_by: String,
}

/// AI generation payload for a reading story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingGenerationRequest {
    pub age: u32,
    pub therapist_id: String,
    /// Number of sentences
    pub length: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// AI generation payload for a pronunciation word list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationGenerationRequest {
    pub age: u32,
    pub therapist_id: String,
    /// Target syllable pattern, e.g. "trabadas"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllable_type: Option<String>,
    /// Number of words
    pub count: u32,
}

/// AI generation payload for a comprehension text with questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensionGenerationRequest {
    pub age: u32,
    pub therapist_id: String,
    pub question_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// One of the three category-specific generation payloads.
///
/// Serialized untagged: the endpoint, not the body, identifies the category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationRequest {
    Reading(ReadingGenerationRequest),
    Pronunciation(PronunciationGenerationRequest),
    Comprehension(ComprehensionGenerationRequest),
}

impl GenerationRequest {
    pub fn category(&self) -> ActivityCategory {
        match self {
            GenerationRequest::Reading(_) => ActivityCategory::Reading,
            GenerationRequest::Pronunciation(_) => ActivityCategory::Pronunciation,
            GenerationRequest::Comprehension(_) => ActivityCategory::Comprehension,
        }
    }

    pub fn therapist_id(&self) -> &str {
        match self {
            GenerationRequest::Reading(request) => &request.therapist_id,
            GenerationRequest::Pronunciation(request) => &request.therapist_id,
            GenerationRequest::Comprehension(request) => &request.therapist_id,
        }
    }
}

/// A single progress submission against one activity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub notes: String,
    pub completed: bool,
}

/// Text-to-speech request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    #[serde(rename = "texto")]
    pub text: String,
}

/// Response to a successful create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Error body returned by the backend on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
