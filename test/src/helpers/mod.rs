pub mod interpreter;

pub use interpreter::{spawn_command, RecordingInterpreter, SPAWN_COMMAND};
pub use session::{instant_at, Session};
