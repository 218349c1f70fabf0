use replicast_shared::Role;

/// Picks which member of a roster hosts the session
pub trait HostElection<P> {
    /// `None` only for an empty roster
    fn elect_host(&self, peers: &[P]) -> Option<P>;
}

/// Deterministic election: every peer sorts the same roster and agrees on the
/// lowest id without exchanging anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestPeerId;

impl<P: Ord + Clone> HostElection<P> for LowestPeerId {
    fn elect_host(&self, peers: &[P]) -> Option<P> {
        peers.iter().min().cloned()
    }
}

/// Role of `local` within `peers` (which must include it) under `election`
pub fn elect_role<P: PartialEq, E: HostElection<P>>(
    election: &E,
    local: &P,
    peers: &[P],
) -> Option<Role> {
    let host = election.elect_host(peers)?;
    Some(if host == *local { Role::Host } else { Role::Peer })
}
