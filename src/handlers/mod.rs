//! HTTP handlers

pub mod health;
pub mod features;
pub mod assess;
pub mod predict;
