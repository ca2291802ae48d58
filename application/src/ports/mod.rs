//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod completion;
pub mod conversation_logger;
pub mod llm_gateway;
pub mod notification;
pub mod preference_store;
pub mod progress;
pub mod translate;
