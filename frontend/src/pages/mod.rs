pub mod activities;
pub mod activity_runner;
pub mod home;

pub use activities::ActivitiesPageView;
pub use activity_runner::ActivityRunnerPage;
pub use home::HomePage;
