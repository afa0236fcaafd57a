//! Infrastructure layer for personachat.
//!
//! Contains implementations of the traits defined in `personachat-core`:
//! SQLite storage, the OpenAI-compatible completion client, the JWT token
//! codec, and the config loader.

pub mod auth;
pub mod config;
pub mod llm;
pub mod sqlite;
