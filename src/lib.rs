//! Unimatch - Explainable University Course Recommendation Engine
//!
//! Matches a student profile (free text or structured answers) against a
//! university course catalog using TF-IDF vector-space similarity, filters
//! out ineligible courses, fuses in an external university-rank table, and
//! delivers an explainable top-K shortlist in fixed-size batches.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod index;
pub mod profile;
pub mod ranking;
pub mod results;
pub mod text;

pub use error::{Result, UnimatchError};
