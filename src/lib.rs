//! Doc Agent - Project Documentation Generation Service
//!
//! This crate turns a project's live data (tasks, sprints, team, activity,
//! blockers) into professional documents. A static catalog describes each
//! document type; project context is gathered from the project backend; a
//! generative model writes the markdown, which is parsed into sections.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
