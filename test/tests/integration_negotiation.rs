//! Clock handshake between a host and a follower

use replicast_peer::{
    elect_role, LowestPeerId, NegotiationError, NegotiationState, PeerConfig, PeerError, Received,
};
use replicast_shared::{Packet, Priority, Quat, Role, Transform, Vec3, WorldRefType};
use replicast_test::{Body, LocalSocketPair, Session};

fn at(x: f32, y: f32, z: f32) -> Transform {
    Transform::new(Vec3::new(x, y, z), Quat::IDENTITY)
}

#[test]
fn data_before_role_is_reported() {
    let session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    let inbox = session.peer.receive_handle();

    let result = inbox.on_data(&session.start, &Packet::new(0).encode());

    assert_eq!(
        result,
        Err(PeerError::Negotiation(NegotiationError::ProtocolViolation))
    );
}

#[test]
fn follower_is_silent_until_host_speaks() {
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    let start = session.start;
    session.peer.confirm_role(Role::Peer, &start).unwrap();

    for tick in 0..30 {
        let (_, peer_report) = session.step(tick);
        assert_eq!(peer_report.written, None);
    }

    assert_eq!(session.links.peer_to_host.sent(), 0);
    assert_eq!(session.peer.state(), NegotiationState::Listening);
}

#[test]
fn follower_clock_starts_on_first_packet() {
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    let start = session.start;
    session.peer.confirm_role(Role::Peer, &start).unwrap();
    let beacon = session.host_world.spawn(Body::kinematic(at(0.0, 5.0, 0.0)));
    session.host.register(beacon, Priority::Constant(1.0)).unwrap();
    session.run(0..30);

    session.host.confirm_role(Role::Host, &start).unwrap();
    let (host_report, peer_report) = session.step(30);

    assert_eq!(host_report.written, Some(30));
    assert_eq!(peer_report.written, Some(0));
    let first_arrival = session.at(30);
    // The host's first packet was stamped 30, so its clock reads 30 on arrival
    assert_eq!(
        session.peer.state(),
        NegotiationState::SendingAndReceiving {
            origin: first_arrival,
            remote_origin: session.at(0),
        }
    );
    assert_eq!(
        session.host.state(),
        NegotiationState::SendingAndReceiving {
            origin: start,
            remote_origin: first_arrival,
        }
    );

    session.run(31..40);

    let placeholders = session.peer_world.placeholders();
    assert_eq!(placeholders.len(), 1);
    assert_eq!(session.peer_world.transform(&placeholders[0]), Some(at(0.0, 5.0, 0.0)));
}

#[test]
fn follower_joins_long_after_host() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    let start = session.start;
    session.host.confirm_role(Role::Host, &start).unwrap();
    let lamp = session.host_world.spawn(Body::kinematic(at(3.0, 0.0, -2.0)));
    session.host.register(lamp, Priority::Constant(1.0)).unwrap();

    // Nobody is listening yet, everything the host sends is lost
    for tick in 0..1100 {
        let now = session.at(tick);
        session
            .host
            .tick(&now, &mut session.host_world, &mut session.host_interpreter);
        session.links.host_to_peer.drain();
    }

    let joined = session.at(1100);
    session.peer.confirm_role(Role::Peer, &joined).unwrap();
    session.run(1100..1400);

    let placeholders = session.peer_world.placeholders();
    assert_eq!(placeholders.len(), 1);
    assert_eq!(session.peer_world.transform(&placeholders[0]), Some(at(3.0, 0.0, -2.0)));
    assert_eq!(session.links.host_to_peer.sent(), 1400);
}

#[test]
fn undecodable_data_is_dropped() {
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    session.confirm_roles();
    let inbox = session.peer.receive_handle();

    let received = inbox.on_data(&session.start, &[0xFF; 3]).unwrap();

    assert!(matches!(received, Received::Dropped(_)));
    assert_eq!(session.peer.state(), NegotiationState::Listening);
}

#[test]
fn roles_come_from_election() {
    let roster = vec!["peer-b".to_string(), "peer-a".to_string()];
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    let start = session.start;

    let host_role = elect_role(&LowestPeerId, &roster[1], &roster).unwrap();
    let peer_role = elect_role(&LowestPeerId, &roster[0], &roster).unwrap();
    session.host.confirm_role(host_role, &start).unwrap();
    session.peer.confirm_role(peer_role, &start).unwrap();

    assert_eq!(session.host.state(), NegotiationState::Sending { origin: start });
    assert_eq!(session.peer.state(), NegotiationState::Listening);
    assert_eq!(
        session.host.confirm_role(Role::Peer, &start),
        Err(PeerError::Negotiation(NegotiationError::RoleAlreadyConfirmed {
            role: Role::Host
        }))
    );
}
