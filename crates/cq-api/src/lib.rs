//! HTTP API for the codequest learning platform.
//!
//! Routes are grouped by concern (auth, users, leaderboard, catalog,
//! progress) and merged in [`router::router`]. Binaries wrap them with the
//! middleware stack from [`router::app`].

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod metrics;
pub mod middleware;
pub mod progress;
pub mod progress_store;
pub mod router;
pub mod state;
pub mod tracing;
pub mod user;

pub use config::{ApiConfig, Environment};
pub use progress_store::{CachedProgressStore, ProgressBackend};
pub use state::{ApiState, AuthConfig};
