use std::default::Default;

use replicast_shared::{JitterBufferConfig, SyncConfig};

/// Contains Config properties which will be used by a Peer
#[derive(Clone, Debug)]
pub struct PeerConfig {
    /// Rate of the shared tick clock. Both peers must agree on it.
    pub ticks_per_second: u32,
    /// A packet is written and sent at most once every this many ticks
    pub send_interval: u16,
    /// How many skipped remote ticks are drained from the jitter buffer when
    /// the render loop falls behind
    pub catch_up_limit: u16,
    /// Used to configure the write and read synchronizers
    pub sync: SyncConfig,
    /// Used to configure the receive-side jitter buffer
    pub jitter_buffer: JitterBufferConfig,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            send_interval: 1,
            catch_up_limit: 8,
            sync: SyncConfig::default(),
            jitter_buffer: JitterBufferConfig::default(),
        }
    }
}
