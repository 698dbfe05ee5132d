//! Runtime collaborators: program loading and the I/O ports.
//!
//! These are the thin edges around the engine. The loader turns a file into
//! a playfield; the ports carry `&`, `~`, `.` and `,` traffic between the
//! engine and the outside world.

pub mod io;
pub mod loader;

pub use io::{ConsolePort, IoPort, ScriptedPort};
pub use loader::load_file;
