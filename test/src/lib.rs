pub mod helpers;
pub mod local_socket;

pub use helpers::*;
pub use local_socket::{LinkConditioner, LocalLink, LocalSender, LocalSocketPair};
pub use test_world::{Body, TestObject, TestWorld};
