mod routes;

pub use routes::{ContentRequest, MAX_CONTENT_BYTES, SelectRequest, routes};
