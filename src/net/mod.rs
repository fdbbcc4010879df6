//! Network layer: endpoint wire types and fetch helpers.

pub mod api;
pub mod types;
