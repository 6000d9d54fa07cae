//! Domain types: materials, their rule table, tuning config and errors.

pub mod config;
pub mod error;
pub mod materials;
pub mod rules;
