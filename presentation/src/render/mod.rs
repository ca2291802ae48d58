//! Per-phase rendering of the interview session

mod view;

pub use view::ViewRenderer;
