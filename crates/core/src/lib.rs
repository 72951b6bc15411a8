//! Domain types shared by the store and HTTP layers.
//!
//! Nothing in this crate touches the database or the network.

pub mod catalog;
pub mod error;
pub mod roles;
pub mod types;
