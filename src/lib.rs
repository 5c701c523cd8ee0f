pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod face_db;
pub mod matcher;
mod metrics;
pub mod server;
pub mod store;

pub use config::Opts;
pub use errors::{FaceError, FaceResult};
pub use face_db::{FaceDB, FaceDBBuilder};
pub use matcher::{MatchPolicy, MatchResult};
pub use store::{FaceStore, MemoryFaceStore};
