//! Shared domain types for personachat.
//!
//! This crate contains the core domain types used across the service:
//! User, ChatSession, ChatMessage, PersonaKind, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod user;
