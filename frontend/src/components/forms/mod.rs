pub mod generation_form;
pub mod manual_form;
pub mod therapist_select;

pub use generation_form::GenerationFormFields;
pub use manual_form::ManualFormFields;
