//! Domain types shared across the crate.

mod protocol;

pub use protocol::{Action, Protocol};
