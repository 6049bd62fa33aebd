//! IRC message prefix (origin) types.

mod types;

pub use self::types::Prefix;
