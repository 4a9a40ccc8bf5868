// src/core.rs
pub mod filter;
pub mod git;
pub mod ranker;
pub mod walker;
