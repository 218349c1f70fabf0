/// In-memory transport for end-to-end testing
/// Routes datagrams between two peers without network I/O
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use fastrand::Rng;
use log::trace;

use replicast_peer::PacketSender;
use replicast_shared::{TransportError, MTU_SIZE_BYTES};

/// Loss and reordering applied to one direction of a link
#[derive(Clone, Copy, Debug)]
pub struct LinkConditioner {
    /// Probability in [0, 1] that a datagram is dropped
    pub loss: f32,
    /// Shuffle datagrams delivered in the same batch
    pub reorder: bool,
    pub seed: u64,
}

impl LinkConditioner {
    pub fn perfect() -> Self {
        Self {
            loss: 0.0,
            reorder: false,
            seed: 0,
        }
    }

    pub fn lossy(loss: f32, seed: u64) -> Self {
        Self {
            loss,
            reorder: true,
            seed,
        }
    }
}

struct Wire {
    queue: VecDeque<Vec<u8>>,
    rng: Rng,
    conditioner: LinkConditioner,
    sent: usize,
    dropped: usize,
}

/// One direction of a link
#[derive(Clone)]
pub struct LocalLink {
    wire: Arc<Mutex<Wire>>,
}

impl LocalLink {
    pub fn new(conditioner: LinkConditioner) -> Self {
        Self {
            wire: Arc::new(Mutex::new(Wire {
                queue: VecDeque::new(),
                rng: Rng::with_seed(conditioner.seed),
                conditioner,
                sent: 0,
                dropped: 0,
            })),
        }
    }

    pub fn sender(&self) -> LocalSender {
        LocalSender { link: self.clone() }
    }

    /// Everything currently in flight, in delivery order
    pub fn drain(&self) -> Vec<Vec<u8>> {
        let mut wire = self.lock();
        let mut datagrams: Vec<Vec<u8>> = wire.queue.drain(..).collect();
        if wire.conditioner.reorder {
            wire.rng.shuffle(&mut datagrams);
        }
        datagrams
    }

    pub fn sent(&self) -> usize {
        self.lock().sent
    }

    pub fn dropped(&self) -> usize {
        self.lock().dropped
    }

    fn lock(&self) -> MutexGuard<'_, Wire> {
        self.wire.lock().unwrap()
    }
}

/// Sending end of a `LocalLink`
#[derive(Clone)]
pub struct LocalSender {
    link: LocalLink,
}

impl PacketSender for LocalSender {
    fn send(&self, payload: &[u8]) -> Result<(), TransportError> {
        if payload.len() > MTU_SIZE_BYTES {
            return Err(TransportError::DatagramTooLarge {
                length: payload.len(),
                max: MTU_SIZE_BYTES,
            });
        }

        let mut wire = self.link.lock();
        wire.sent += 1;
        let loss = wire.conditioner.loss;
        if loss > 0.0 && wire.rng.f32() < loss {
            wire.dropped += 1;
            trace!("Dropping datagram of {} bytes", payload.len());
            return Ok(());
        }
        wire.queue.push_back(payload.to_vec());
        Ok(())
    }
}

/// Pair of links connecting a host and a peer
pub struct LocalSocketPair {
    pub host_to_peer: LocalLink,
    pub peer_to_host: LocalLink,
}

impl LocalSocketPair {
    pub fn new() -> Self {
        Self::conditioned(LinkConditioner::perfect(), LinkConditioner::perfect())
    }

    pub fn conditioned(host_to_peer: LinkConditioner, peer_to_host: LinkConditioner) -> Self {
        Self {
            host_to_peer: LocalLink::new(host_to_peer),
            peer_to_host: LocalLink::new(peer_to_host),
        }
    }
}

impl Default for LocalSocketPair {
    fn default() -> Self {
        Self::new()
    }
}
