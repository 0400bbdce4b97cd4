pub mod activity_form_modal;
pub mod activity_table;
pub mod category_selector;
pub mod forms;
pub mod header;
pub mod speech_button;
pub mod speech_panel;

pub use activity_form_modal::ActivityFormModal;
pub use activity_table::ActivityTable;
pub use category_selector::CategorySelector;
pub use header::{Header, View};
pub use speech_button::SpeechButton;
pub use speech_panel::SpeechPanel;
