//! # SpeechDown Core
//!
//! Platform-independent state and workflow of the activity management
//! screens: category selection and listing, the create/edit/generate dialog,
//! the activity runner with progress recording, and speech playback.
//!
//! Network access goes through the traits in [`ports`], so everything here
//! runs natively under test and in the browser unchanged.

pub mod config;
pub mod error;
pub mod form;
pub mod generation;
pub mod listing;
pub mod page;
pub mod ports;
pub mod runner;
pub mod speech;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, ClientResult, ValidationError};
pub use form::{ActivityFormController, DialogToken, FormDialog, ManualField, Submission, SubmitBlocked};
pub use generation::{schema_for, GenerationField, GenerationSchema, InputKind};
pub use listing::{ActivityRow, CreatorDirectory, ListRefresh};
pub use page::{ActivitiesPage, PageAction};
pub use ports::{ActivityRepository, Confirmation, SpeechSynthesizer, UserDirectory};
pub use runner::{ActivityLoad, Notice, RunnerAction, RunnerState};
pub use speech::{SpeechPlayback, SpeechTicket};
pub use workflow::ActivityWorkflow;
