pub mod console;
pub mod notifier;
