pub mod config;
pub mod input_interpreter;
pub mod read_synchronizer;
pub mod write_synchronizer;
