//! OpenAI-compatible chat completion adapter
//!
//! Talks to any server exposing `POST {base_url}/chat/completions`
//! (OpenAI, Azure-style proxies, local model servers).

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
