//! SkillGap: compares a résumé with a job description.
//!
//! The matching engine (`matching`) is pure and synchronous. `documents` and
//! `courses` are the collaborators around it, and `routes` exposes everything
//! over HTTP.

pub mod config;
pub mod courses;
pub mod documents;
pub mod errors;
pub mod matching;
pub mod routes;
pub mod state;
