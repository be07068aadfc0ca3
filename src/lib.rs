// lib.rs

#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod report;
