use std::default::Default;

/// Contains Config properties for the receive-side jitter buffer
#[derive(Clone, Debug)]
pub struct JitterBufferConfig {
    /// Number of packet slots in the ring. Must comfortably exceed
    /// `min_delay` plus the worst expected reordering, in ticks.
    pub capacity: usize,
    /// Fixed delay, in ticks, between a packet's sequence and the tick at
    /// which it is released to the application. Higher values absorb more
    /// arrival jitter at the cost of latency.
    pub min_delay: u16,
}

impl Default for JitterBufferConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            min_delay: 5,
        }
    }
}
