use log::info;

use replicast_shared::{Instant, Role, Sequence, SequenceClock};

use crate::error::NegotiationError;

/// Where a peer is in the clock handshake
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NegotiationState {
    /// Host election has not finished
    AwaitingRole,
    /// Confirmed as a non-host. Idle until the host's first packet arrives.
    Listening,
    /// Producing packets, local tick 0 at `origin`
    Sending { origin: Instant },
    /// Producing packets and reading the remote's. The remote's tick 0 is
    /// placed at `remote_origin` so that its first packet lands on the tick
    /// it was stamped with.
    SendingAndReceiving {
        origin: Instant,
        remote_origin: Instant,
    },
}

/// Decides when each clock starts.
///
/// The host starts its clock as soon as its role is confirmed. Everyone else
/// starts theirs on the first packet received from the host, so no peer can
/// run ahead of the host and have all of its packets held back as being from
/// the future.
pub struct RoleNegotiation {
    role: Option<Role>,
    state: NegotiationState,
    ticks_per_second: u32,
}

impl RoleNegotiation {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            role: None,
            state: NegotiationState::AwaitingRole,
            ticks_per_second,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn state(&self) -> NegotiationState {
        self.state
    }

    pub fn confirm_role(&mut self, role: Role, now: &Instant) -> Result<(), NegotiationError> {
        if let Some(role) = self.role {
            return Err(NegotiationError::RoleAlreadyConfirmed { role });
        }
        self.role = Some(role);
        self.state = if role.is_host() {
            NegotiationState::Sending { origin: *now }
        } else {
            NegotiationState::Listening
        };
        info!("Role confirmed as {:?}, now {:?}", role, self.state);
        Ok(())
    }

    /// Records the arrival at `now` of a remote packet stamped `sequence`
    pub fn on_data(&mut self, now: &Instant, sequence: Sequence) -> Result<(), NegotiationError> {
        let remote_origin = match self.state {
            NegotiationState::AwaitingRole => return Err(NegotiationError::ProtocolViolation),
            NegotiationState::SendingAndReceiving { .. } => return Ok(()),
            _ => *SequenceClock::anchored(*now, sequence, self.ticks_per_second).origin(),
        };
        let next = match self.state {
            NegotiationState::Sending { origin } => NegotiationState::SendingAndReceiving {
                origin,
                remote_origin,
            },
            _ => NegotiationState::SendingAndReceiving {
                origin: *now,
                remote_origin,
            },
        };
        info!("First remote packet received, now {:?}", next);
        self.state = next;
        Ok(())
    }

    pub fn local_origin(&self) -> Option<Instant> {
        match self.state {
            NegotiationState::Sending { origin }
            | NegotiationState::SendingAndReceiving { origin, .. } => Some(origin),
            _ => None,
        }
    }

    pub fn remote_origin(&self) -> Option<Instant> {
        match self.state {
            NegotiationState::SendingAndReceiving { remote_origin, .. } => Some(remote_origin),
            _ => None,
        }
    }
}
