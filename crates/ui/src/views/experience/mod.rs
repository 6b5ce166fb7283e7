mod auth;
mod countdown;
mod landing;
mod questions;
mod summary;
mod view;

pub use auth::AuthStage;
pub use countdown::CountdownStage;
pub use landing::LandingStage;
pub use questions::QuestionsStage;
pub use summary::FinalStage;
pub use view::ExperienceView;

#[cfg(test)]
pub(crate) use view::ExperienceTestHandles;
