pub mod use_activities;
pub mod use_activity_runner;
pub mod use_speech;
