//! Multi-day train trip stopover planner.
//!
//! Answers: "If I travel by local trains from A to B, limited to so many
//! hours a day and arriving no later than a given hour, where could I
//! stop each night?"

pub mod backend;
pub mod cache;
pub mod domain;
pub mod export;
pub mod navitime;
pub mod planner;
pub mod settings;
pub mod web;
