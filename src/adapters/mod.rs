//! Adapter layer. Infrastructure implementations of the ports.

pub mod ai;
pub mod content;
pub mod ui;
