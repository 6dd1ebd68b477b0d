pub mod codec;
pub mod store;
pub mod types;

pub use codec::*;
pub use store::*;
pub use types::*;
