//! Resume analysis engine: normalization, extraction, keyword matching,
//! scoring and optimization planning

pub mod text_processor;
pub mod metrics;
pub mod contact;
pub mod document;
pub mod keywords;
pub mod ats_matcher;
pub mod scoring;
pub mod optimizer;
pub mod analyzer;
