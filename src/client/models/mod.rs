//! CircleCI API data models
//!
//! Wire types returned by the CircleCI v2 API, organized by resource.

mod collaboration;
mod context;
mod project;
mod vcs;

pub use collaboration::Collaboration;
pub use context::{Context, ContextVariable};
pub use project::{CheckoutKey, Project, ProjectVariable};
pub use vcs::VcsProvider;
