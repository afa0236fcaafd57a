//! Persona catalog: system prompts, display cards, and greeting pools.

mod catalog;

pub use catalog::{cards, greeting_pool, random_greeting, system_prompt};
