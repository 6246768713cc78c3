//! Cross-component integration scenarios.

pub mod fixtures;

mod account;
mod multicall;
