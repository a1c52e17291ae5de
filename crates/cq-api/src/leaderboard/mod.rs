mod routes;

pub use routes::{LeaderboardQuery, routes};
