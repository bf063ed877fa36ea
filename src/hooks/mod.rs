pub mod use_shell_state;

pub use use_shell_state::{use_shell_state, ShellHandle};
