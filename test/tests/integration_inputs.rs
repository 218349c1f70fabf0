//! Input delivery: every input issued by one peer is applied exactly once,
//! in issue order, by the other, even over a lossy link

use replicast_peer::{PeerConfig, PeerError};
use replicast_shared::{InputError, MAX_INPUT_PAYLOAD_BYTES};
use replicast_test::{LinkConditioner, LocalSocketPair, Session};

fn payload(index: u8) -> Vec<u8> {
    vec![index, index.wrapping_mul(3)]
}

#[test]
fn inputs_apply_once_in_order() {
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    session.confirm_roles();
    for index in 0..10 {
        session.host.input(payload(index)).unwrap();
    }

    session.run(0..60);

    let expected: Vec<Vec<u8>> = (0..10).map(payload).collect();
    assert_eq!(session.peer_interpreter.payloads(), expected);
}

#[test]
fn one_input_leaves_per_tick() {
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    session.confirm_roles();
    for index in 0..4 {
        session.host.input(payload(index)).unwrap();
    }

    session.step(0);
    assert_eq!(session.host.writer().pending_inputs(), 3);
    session.run(1..4);
    assert_eq!(session.host.writer().pending_inputs(), 0);

    session.run(4..20);
    let sequences: Vec<u16> = session
        .peer_interpreter
        .applied
        .iter()
        .map(|input| input.sequence)
        .collect();
    assert_eq!(sequences, vec![0, 1, 2, 3]);
}

#[test]
fn full_size_inputs_every_tick_are_delivered() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());
    session.confirm_roles();

    let mut sent = 0;
    for tick in 0..110u64 {
        if tick < 100 {
            let input = vec![tick as u8; MAX_INPUT_PAYLOAD_BYTES];
            session.host.input(input).unwrap();
        }
        let (host_report, _) = session.step(tick);
        sent += host_report.packets_sent;
    }

    assert_eq!(sent, 110);
    let expected: Vec<Vec<u8>> = (0..100u8)
        .map(|index| vec![index; MAX_INPUT_PAYLOAD_BYTES])
        .collect();
    assert_eq!(session.peer_interpreter.payloads(), expected);
}

#[test]
fn inputs_survive_heavy_loss() {
    let _ = env_logger::builder().is_test(true).try_init();
    let links = LocalSocketPair::conditioned(
        LinkConditioner::lossy(0.3, 7),
        LinkConditioner::lossy(0.3, 11),
    );
    let mut session = Session::new(PeerConfig::default(), links);
    session.confirm_roles();
    for index in 0..40 {
        session.host.input(payload(index)).unwrap();
        session.peer.input(payload(index)).unwrap();
    }

    session.run(0..300);

    let expected: Vec<Vec<u8>> = (0..40).map(payload).collect();
    assert!(session.links.host_to_peer.dropped() > 0);
    assert_eq!(session.peer_interpreter.payloads(), expected);
    assert_eq!(session.host_interpreter.payloads(), expected);
}

#[test]
fn oversized_inputs_are_refused() {
    let mut session = Session::new(PeerConfig::default(), LocalSocketPair::new());

    let result = session.host.input(vec![0; MAX_INPUT_PAYLOAD_BYTES + 1]);

    assert_eq!(
        result,
        Err(PeerError::Input(InputError::PayloadTooLarge {
            length: MAX_INPUT_PAYLOAD_BYTES + 1,
            max: MAX_INPUT_PAYLOAD_BYTES,
        }))
    );
    assert_eq!(session.host.writer().pending_inputs(), 0);
}
