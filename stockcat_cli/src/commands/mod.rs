//! CLI subcommand implementations.

pub mod info;
pub mod revenue;
pub mod stocks;
