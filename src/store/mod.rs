mod keys;
mod persist;
mod profile;

pub use keys::UiKeyMap;
pub use persist::*;
pub use profile::ProfileStore;
