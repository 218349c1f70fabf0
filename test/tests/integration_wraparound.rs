//! Replication across the point where 16-bit sequences wrap to zero

use replicast_peer::PeerConfig;
use replicast_shared::{Priority, Quat, SequenceClock, Transform, Vec3, WorldRefType};
use replicast_test::{Body, LocalSocketPair, Session};

const WRAP: u64 = 1 << 16;

fn at(x: f32) -> Transform {
    Transform::new(Vec3::new(x, 0.0, 0.0), Quat::IDENTITY)
}

#[test]
fn sequences_wrap_with_the_clock() {
    assert_eq!(SequenceClock::sequence_of(WRAP - 1), u16::MAX);
    assert_eq!(SequenceClock::sequence_of(WRAP), 0);
    assert_eq!(SequenceClock::sequence_of(WRAP + 5), 5);
}

#[test]
fn session_survives_the_wrap() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    session.confirm_roles();
    let marker = session.host_world.spawn(Body::kinematic(at(0.0)));
    session.host.register(marker, Priority::Constant(1.0)).unwrap();
    session.run(0..20);
    let replica = session.peer_world.placeholders()[0];

    // Both render loops stall and resume shortly before the wrap
    session.run(WRAP - 40..WRAP - 8);
    for index in 0..8u8 {
        session.host.input(vec![index]).unwrap();
    }
    for tick in WRAP - 8..WRAP + 12 {
        session.host_world.body_mut(&marker).unwrap().transform = at(tick as f32);
        session.step(tick);
    }

    // The newest packet applied is the one sent min_delay ticks ago
    let applied = (WRAP + 11 - 5) as f32;
    assert_eq!(session.peer_world.transform(&replica), Some(at(applied)));

    let sequences: Vec<u16> = session
        .peer_interpreter
        .applied
        .iter()
        .map(|input| input.sequence)
        .collect();
    assert_eq!(sequences, vec![65528, 65529, 65530, 65531, 65532, 65533, 65534, 65535]);
    let payloads: Vec<Vec<u8>> = (0..8u8).map(|index| vec![index]).collect();
    assert_eq!(session.peer_interpreter.payloads(), payloads);
}
