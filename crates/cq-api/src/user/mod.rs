pub mod routes;

pub use routes::{UpdateProfileRequest, routes};
