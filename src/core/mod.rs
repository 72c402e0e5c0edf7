//! Core module - daemon state model, configuration, and sync events

pub mod config;
pub mod events;
pub mod state;
