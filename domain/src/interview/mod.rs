//! Interview domain.
//!
//! - [`parameters::SessionParameters`] — role, difficulty and question count of a run
//! - [`setup::SetupSelection`] — builds parameters from the setup form
//! - [`route`] — navigation address encoding and decoding
//! - [`session::InterviewSession`] — the session state machine
//! - [`view::InterviewView`] — per-phase view data

pub mod feedback;
pub mod notification;
pub mod parameters;
pub mod phase;
pub mod route;
pub mod session;
pub mod setup;
pub mod view;
