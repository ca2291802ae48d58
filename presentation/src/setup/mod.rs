//! Setup form shown before each interview

mod form;

pub use form::{SetupForm, SetupOutcome};
