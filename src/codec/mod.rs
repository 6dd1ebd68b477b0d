mod line;
mod migrate;

pub use migrate::{upgrade_line, SCHEMA_VERSION};
