// Spanish-language marketing copy templates

pub mod engine;

pub use engine::ContentEngine;
