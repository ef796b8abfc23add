//! Matching engine: skill extraction, lexical similarity, summaries.
//! Everything here is synchronous and pure; the HTTP layer lives in `handlers`.

pub mod handlers;
pub mod similarity;
pub mod skills;
pub mod text;
pub mod vocabulary;
