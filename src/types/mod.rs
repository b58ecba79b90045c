pub mod idea;

pub use idea::{Difficulty, EstimatedTime, IdeaRecord, find_idea};
