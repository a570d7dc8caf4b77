//! Core domain types shared by every hangar crate.
//!
//! This crate is dependency-light on purpose: evaluators, the index and the
//! runtime all speak in these types, so nothing heavier than serde/toml may
//! live here.

mod config;
mod error;
mod load;
mod project;
mod tag;
mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use load::{LoadFailure, LoadResult, Remediation};
pub use project::{EvaluatedProject, ProjectHandle};
pub use tag::EvaluatorTag;
pub use version::ToolVersion;
