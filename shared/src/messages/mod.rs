pub mod error;
pub mod input;
pub mod input_deduper;
pub mod input_window_buffer;
pub mod input_write_queue;
