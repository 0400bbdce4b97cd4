//! # Activity Form Controller
//!
//! State machine behind the create/edit dialog. The dialog is in exactly one
//! of four states and each open state owns its own form shape:
//!
//! ```text
//! Closed ──open_manual_create──▶ ManualCreate { form }
//! Closed ──open_edit───────────▶ ManualEdit { activity_id, category, form }
//! Closed ──open_generation─────▶ Generate { form }   (shape picked by category)
//! any    ──close / success─────▶ Closed
//! ```
//!
//! An edit id only exists inside `ManualEdit`, so a generation dialog with a
//! selected activity cannot be expressed.

use log::{info, warn};
use shared::{Activity, ActivityCategory, ActivityUpdate, GenerationRequest, NewActivity};

use crate::error::ValidationError;
use crate::generation::{schema_for, GenerationField, GenerationSchema, GenerationValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualField {
    Title,
    Content,
    Creator,
}

/// Fields of the manual create/edit form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualForm {
    pub title: String,
    pub content: String,
    /// Id of the selected therapist, empty when none is selected
    pub created_by: String,
}

impl ManualForm {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            title: activity.title.clone(),
            content: activity.content.clone(),
            created_by: activity.created_by.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: ManualField, value: String) {
        match field {
            ManualField::Title => self.title = value,
            ManualField::Content => self.content = value,
            ManualField::Creator => self.created_by = value,
        }
    }

    fn validated(&self) -> Result<ActivityUpdate, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingContent);
        }
        if self.created_by.trim().is_empty() {
            return Err(ValidationError::MissingCreator);
        }
        Ok(ActivityUpdate {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            created_by: self.created_by.trim().to_string(),
        })
    }
}

/// Generation inputs for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationForm {
    pub category: ActivityCategory,
    pub values: GenerationValues,
}

impl GenerationForm {
    pub fn new(category: ActivityCategory) -> Self {
        Self {
            category,
            values: GenerationValues::default(),
        }
    }

    pub fn schema(&self) -> &'static GenerationSchema {
        schema_for(self.category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormDialog {
    #[default]
    Closed,
    ManualCreate {
        form: ManualForm,
    },
    ManualEdit {
        activity_id: String,
        category: ActivityCategory,
        form: ManualForm,
    },
    Generate {
        form: GenerationForm,
    },
}

impl FormDialog {
    pub fn title(&self) -> &'static str {
        match self {
            FormDialog::Closed => "",
            FormDialog::ManualCreate { .. } => "Create activity",
            FormDialog::ManualEdit { .. } => "Edit activity",
            FormDialog::Generate { .. } => "Create with AI",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormDialog::Closed => "",
            FormDialog::ManualCreate { .. } => "Create",
            FormDialog::ManualEdit { .. } => "Update",
            FormDialog::Generate { .. } => "Generate with AI",
        }
    }
}

/// A validated write, ready to dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(NewActivity),
    Update {
        id: String,
        category: ActivityCategory,
        update: ActivityUpdate,
    },
    Generate(GenerationRequest),
}

impl Submission {
    /// Category whose listing must be refreshed after the write succeeds
    pub fn category(&self) -> ActivityCategory {
        match self {
            Submission::Create(activity) => activity.category,
            Submission::Update { category, .. } => *category,
            Submission::Generate(request) => request.category(),
        }
    }
}

/// Why a submit produced nothing to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    Closed,
    /// A previous submission has not answered yet
    InFlight,
    Invalid(ValidationError),
}

/// Identifies one opening of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogToken(u32);

/// The dialog plus its submission status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFormController {
    dialog: FormDialog,
    /// Bumped on every open; survives close
    opened: u32,
    /// Category captured at open time; the form shape derives from it
    open_category: Option<ActivityCategory>,
    submitting: bool,
    error: Option<String>,
}

impl ActivityFormController {
    pub fn dialog(&self) -> &FormDialog {
        &self.dialog
    }

    pub fn is_open(&self) -> bool {
        self.dialog != FormDialog::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Token of the dialog currently open, if any
    pub fn token(&self) -> Option<DialogToken> {
        if self.is_open() {
            Some(DialogToken(self.opened))
        } else {
            None
        }
    }

    /// Category captured when the dialog was opened
    pub fn category(&self) -> Option<ActivityCategory> {
        if self.is_open() {
            self.open_category
        } else {
            None
        }
    }

    pub fn open_manual_create(&mut self, category: ActivityCategory) {
        self.open(FormDialog::ManualCreate { form: ManualForm::default() }, category);
    }

    /// Open the edit form pre-filled from `activity`.
    ///
    /// Returns false, leaving the dialog untouched, when the activity has no
    /// category to keep.
    pub fn open_edit(&mut self, activity: &Activity) -> bool {
        let Some(category) = activity.category else {
            warn!("Refusing to edit uncategorized activity {}", activity.id);
            return false;
        };
        self.open(
            FormDialog::ManualEdit {
                activity_id: activity.id.clone(),
                category,
                form: ManualForm::from_activity(activity),
            },
            category,
        );
        true
    }

    pub fn open_generation(&mut self, category: ActivityCategory) {
        self.open(FormDialog::Generate { form: GenerationForm::new(category) }, category);
    }

    fn open(&mut self, dialog: FormDialog, category: ActivityCategory) {
        self.dialog = dialog;
        self.opened = self.opened.wrapping_add(1);
        self.open_category = Some(category);
        self.submitting = false;
        self.error = None;
    }

    pub fn close(&mut self) {
        *self = Self {
            opened: self.opened,
            ..Self::default()
        };
    }

    /// Update a manual field; ignored outside the manual states
    pub fn set_manual(&mut self, field: ManualField, value: String) {
        match &mut self.dialog {
            FormDialog::ManualCreate { form } | FormDialog::ManualEdit { form, .. } => {
                form.set(field, value);
                self.error = None;
            }
            _ => warn!("Ignoring manual field {:?} while dialog is {:?}", field, self.dialog.title()),
        }
    }

    /// Update a generation field; ignored outside the generation state
    pub fn set_generation(&mut self, field: GenerationField, value: String) {
        match &mut self.dialog {
            FormDialog::Generate { form } => {
                form.values.set(field, value);
                self.error = None;
            }
            _ => warn!("Ignoring generation field {:?} while dialog is {:?}", field, self.dialog.title()),
        }
    }

    /// Validate the current form and build the write it describes.
    ///
    /// Pure: use [`begin_submit`](Self::begin_submit) to also record the outcome.
    pub fn submission(&self) -> Result<Submission, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        match &self.dialog {
            FormDialog::Closed => Err(SubmitBlocked::Closed),
            FormDialog::ManualCreate { form } => {
                let category = self.open_category.ok_or(SubmitBlocked::Closed)?;
                let fields = form.validated().map_err(SubmitBlocked::Invalid)?;
                Ok(Submission::Create(NewActivity {
                    title: fields.title,
                    content: fields.content,
                    created_by: fields.created_by,
                    category,
                }))
            }
            FormDialog::ManualEdit { activity_id, category, form } => {
                let update = form.validated().map_err(SubmitBlocked::Invalid)?;
                Ok(Submission::Update {
                    id: activity_id.clone(),
                    category: *category,
                    update,
                })
            }
            FormDialog::Generate { form } => form
                .schema()
                .build(&form.values)
                .map(Submission::Generate)
                .map_err(SubmitBlocked::Invalid),
        }
    }

    /// Validate and, when valid, mark the dialog as submitting.
    ///
    /// A validation failure is stored as the dialog error.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        match self.submission() {
            Ok(submission) => {
                self.mark_submitting();
                Ok(submission)
            }
            Err(SubmitBlocked::Invalid(error)) => {
                self.reject(error.clone());
                Err(SubmitBlocked::Invalid(error))
            }
            Err(blocked) => Err(blocked),
        }
    }

    pub fn mark_submitting(&mut self) {
        if self.is_open() {
            self.submitting = true;
            self.error = None;
        }
    }

    pub fn reject(&mut self, error: ValidationError) {
        if self.is_open() {
            self.error = Some(error.to_string());
        }
    }

    /// Close the dialog identified by `token` after its write succeeded.
    ///
    /// Returns false, leaving any other dialog untouched, when that dialog is
    /// no longer open.
    pub fn succeed(&mut self, token: DialogToken) -> bool {
        if self.token() != Some(token) {
            warn!("Ignoring success for a dialog that is no longer open");
            return false;
        }
        info!("Activity dialog submitted, closing");
        self.close();
        true
    }

    /// Keep the dialog identified by `token` open with the error shown.
    ///
    /// Returns false when that dialog was already closed and the caller must
    /// surface the error elsewhere.
    pub fn fail(&mut self, token: DialogToken, message: String) -> bool {
        if self.token() != Some(token) {
            return false;
        }
        self.submitting = false;
        self.error = Some(message);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::activity;

    fn filled_manual(controller: &mut ActivityFormController) {
        controller.set_manual(ManualField::Title, "T".to_string());
        controller.set_manual(ManualField::Content, "X".to_string());
        controller.set_manual(ManualField::Creator, "id1".to_string());
    }

    #[test]
    fn test_starts_closed() {
        let controller = ActivityFormController::default();
        assert!(!controller.is_open());
        assert_eq!(controller.category(), None);
        assert_eq!(controller.submission(), Err(SubmitBlocked::Closed));
    }

    #[test]
    fn test_manual_create_builds_new_activity() {
        let mut controller = ActivityFormController::default();
        controller.open_manual_create(ActivityCategory::Reading);
        assert_eq!(controller.dialog(), &FormDialog::ManualCreate { form: ManualForm::default() });
        filled_manual(&mut controller);

        let token = controller.token().unwrap();
        let submission = controller.begin_submit().unwrap();
        assert_eq!(
            submission,
            Submission::Create(NewActivity {
                title: "T".to_string(),
                content: "X".to_string(),
                created_by: "id1".to_string(),
                category: ActivityCategory::Reading,
            })
        );
        assert!(controller.is_submitting());
        assert_eq!(controller.begin_submit(), Err(SubmitBlocked::InFlight));

        assert!(controller.succeed(token));
        assert!(!controller.is_open());
        assert!(!controller.is_submitting());
    }

    #[test]
    fn test_success_only_closes_the_submitted_dialog() {
        let mut controller = ActivityFormController::default();
        controller.open_manual_create(ActivityCategory::Reading);
        filled_manual(&mut controller);
        let submitted = controller.token().unwrap();
        controller.begin_submit().unwrap();

        controller.close();
        controller.open_generation(ActivityCategory::Reading);
        assert_ne!(controller.token(), Some(submitted));

        assert!(!controller.succeed(submitted));
        assert!(controller.is_open());
        assert!(!controller.fail(submitted, "late".to_string()));
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn test_manual_fields_are_trimmed() {
        let mut controller = ActivityFormController::default();
        controller.open_manual_create(ActivityCategory::Reading);
        controller.set_manual(ManualField::Title, "  Cuento ".to_string());
        controller.set_manual(ManualField::Content, "\nHabía una vez \n".to_string());
        controller.set_manual(ManualField::Creator, " id1".to_string());

        match controller.submission().unwrap() {
            Submission::Create(activity) => {
                assert_eq!(activity.title, "Cuento");
                assert_eq!(activity.content, "Había una vez");
                assert_eq!(activity.created_by, "id1");
            }
            other => panic!("unexpected submission {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_block_dispatch() {
        let mut controller = ActivityFormController::default();
        controller.open_manual_create(ActivityCategory::Pronunciation);
        controller.set_manual(ManualField::Title, "  ".to_string());

        assert_eq!(
            controller.begin_submit(),
            Err(SubmitBlocked::Invalid(ValidationError::MissingTitle))
        );
        assert!(!controller.is_submitting());
        assert_eq!(controller.error(), Some("Please enter a title"));

        controller.set_manual(ManualField::Title, "Erre".to_string());
        controller.set_manual(ManualField::Content, "perro, carro".to_string());
        assert_eq!(controller.error(), None);
        assert_eq!(
            controller.begin_submit(),
            Err(SubmitBlocked::Invalid(ValidationError::MissingCreator))
        );
    }

    #[test]
    fn test_edit_prefills_and_keeps_category() {
        let existing = activity("a1", "Old", ActivityCategory::Comprehension, "t1");
        let mut controller = ActivityFormController::default();
        assert!(controller.open_edit(&existing));
        assert_eq!(controller.category(), Some(ActivityCategory::Comprehension));

        match controller.dialog() {
            FormDialog::ManualEdit { activity_id, form, .. } => {
                assert_eq!(activity_id, "a1");
                assert_eq!(form.title, "Old");
                assert_eq!(form.created_by, "t1");
            }
            other => panic!("unexpected dialog {:?}", other),
        }

        controller.set_manual(ManualField::Title, "New".to_string());
        let submission = controller.begin_submit().unwrap();
        assert_eq!(submission.category(), ActivityCategory::Comprehension);
        match submission {
            Submission::Update { id, update, .. } => {
                assert_eq!(id, "a1");
                assert_eq!(update.title, "New");
                assert_eq!(update.content, existing.content);
            }
            other => panic!("unexpected submission {:?}", other),
        }
    }

    #[test]
    fn test_uncategorized_activity_cannot_be_edited() {
        let mut loose = activity("a1", "Old", ActivityCategory::Reading, "t1");
        loose.category = None;
        let mut controller = ActivityFormController::default();
        assert!(!controller.open_edit(&loose));
        assert!(!controller.is_open());
    }

    #[test]
    fn test_generation_shape_follows_category() {
        let mut controller = ActivityFormController::default();
        controller.open_generation(ActivityCategory::Pronunciation);

        match controller.dialog() {
            FormDialog::Generate { form } => {
                assert_eq!(form.schema().endpoint, "/activities/generate/pronunciation");
            }
            other => panic!("unexpected dialog {:?}", other),
        }

        controller.set_generation(GenerationField::Age, "5".to_string());
        controller.set_generation(GenerationField::Therapist, "t1".to_string());
        let submission = controller.begin_submit().unwrap();
        assert_eq!(submission.category(), ActivityCategory::Pronunciation);
        assert!(matches!(submission, Submission::Generate(GenerationRequest::Pronunciation(_))));
    }

    #[test]
    fn test_switching_modes_discards_edits() {
        let mut controller = ActivityFormController::default();
        controller.open_manual_create(ActivityCategory::Reading);
        filled_manual(&mut controller);

        controller.open_generation(ActivityCategory::Reading);
        controller.set_manual(ManualField::Title, "ignored".to_string());
        controller.open_manual_create(ActivityCategory::Reading);

        assert_eq!(controller.dialog(), &FormDialog::ManualCreate { form: ManualForm::default() });
    }

    #[test]
    fn test_failure_keeps_dialog_open() {
        let mut controller = ActivityFormController::default();
        controller.open_manual_create(ActivityCategory::Reading);
        filled_manual(&mut controller);
        let token = controller.token().unwrap();
        controller.begin_submit().unwrap();

        assert!(controller.fail(token, "Server error 500: boom".to_string()));
        assert!(controller.is_open());
        assert!(!controller.is_submitting());
        assert_eq!(controller.error(), Some("Server error 500: boom"));

        controller.close();
        assert!(!controller.fail(token, "late".to_string()));
        assert_eq!(controller.error(), None);
    }
}
