mod experience;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use experience::{
    AuthStage, CountdownStage, ExperienceView, FinalStage, LandingStage, QuestionsStage,
};
pub use state::ViewError;
