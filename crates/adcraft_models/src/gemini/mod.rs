//! Gemini `generateContent` integration.

mod client;
mod dto;

pub use client::{DEFAULT_GEMINI_MODEL, GEMINI_API_BASE, GeminiClient};
