//! CLI subcommand modules.

pub(crate) mod batch;
pub(crate) mod metrics;
pub(crate) mod score;
