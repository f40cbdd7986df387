//! CLI subcommand implementations.

pub mod count;
pub mod fetch;
pub mod filters;
pub mod info;
pub mod names;
pub mod query;
pub mod version;
