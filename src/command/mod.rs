//! Outbound command building.
//!
//! A [`CommandBuilder`] pairs a [`Verb`] with its parameters and produces one
//! wire line, enforcing each verb's arity and shaping rules.

mod builder;
pub mod list;
mod verb;

pub use self::builder::CommandBuilder;
pub use self::list::{build_list, prefix_channel, prefix_message};
pub use self::verb::{Arity, Verb};
