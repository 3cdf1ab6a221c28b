//! Route handlers organized by resource

pub mod files;
pub mod health;
