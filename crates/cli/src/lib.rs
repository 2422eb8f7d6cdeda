//! `shoestock-cli` — interactive menu over the shoe inventory store.

pub mod console;
pub mod menu;
pub mod render;
pub mod session;

pub use console::Console;
pub use menu::MenuOption;
pub use session::{SessionConfig, SessionError};
