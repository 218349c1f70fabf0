pub mod error;
pub mod jitter_buffer;
pub mod jitter_buffer_config;
pub mod packet;
