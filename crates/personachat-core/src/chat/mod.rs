//! Chat session and message lifecycle.

pub mod ordering;
pub mod repository;
pub mod service;
