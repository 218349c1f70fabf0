pub mod error;
pub mod node_state;
pub mod priority;
pub mod registry;
pub mod transform;
pub mod world_type;
