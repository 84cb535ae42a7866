//! Skill extraction for bilingual (Vietnamese/English) job postings.
//!
//! The `extraction` module is the engine consumed by the crawl layer; the rest
//! is the HTTP service wrapped around it.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod routes;
pub mod state;

pub use extraction::{extend_dictionary, extract_skills, extract_skills_strict, list_dictionary};
