mod model;
mod routes;

pub use model::{ExerciseBody, ExerciseSummary, ExerciseView, SetPath, SetView};
pub use routes::routes;
