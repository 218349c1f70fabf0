//! Property tests for the packet codec

use proptest::{collection::vec, prelude::*};

use replicast_shared::{
    CompactNodeState, DecodeError, FullNodeState, Input, ObjectId, Packet, Quat, Vec3,
    MAX_INPUTS_PER_PACKET, MAX_INPUT_PAYLOAD_BYTES, MAX_STATE_UPDATES_PER_PACKET,
};

fn component() -> impl Strategy<Value = f32> {
    -1.0e4f32..1.0e4f32
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn quat() -> impl Strategy<Value = Quat> {
    (component(), component(), component(), component())
        .prop_map(|(x, y, z, w)| Quat::new(x, y, z, w))
}

fn input() -> impl Strategy<Value = Input> {
    (any::<u16>(), vec(any::<u8>(), 0..=MAX_INPUT_PAYLOAD_BYTES))
        .prop_map(|(sequence, payload)| Input::new(sequence, payload))
}

fn compact() -> impl Strategy<Value = CompactNodeState> {
    (1..=u16::MAX, vec3(), quat()).prop_map(|(id, position, orientation)| CompactNodeState {
        id: ObjectId::new(id),
        position,
        orientation,
    })
}

fn full() -> impl Strategy<Value = FullNodeState> {
    (1..=u16::MAX, vec3(), quat(), vec3(), quat()).prop_map(
        |(id, position, orientation, linear_velocity, angular_velocity)| FullNodeState {
            id: ObjectId::new(id),
            position,
            orientation,
            linear_velocity,
            angular_velocity,
        },
    )
}

fn packet() -> impl Strategy<Value = Packet> {
    let half = MAX_STATE_UPDATES_PER_PACKET / 2;
    (
        any::<u16>(),
        vec(input(), 0..=MAX_INPUTS_PER_PACKET),
        vec(compact(), 0..=half),
        vec(full(), 0..=half),
    )
        .prop_map(|(sequence, inputs, compact_updates, full_updates)| Packet {
            sequence,
            inputs,
            compact_updates,
            full_updates,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn packets_survive_the_wire(packet in packet()) {
        let bytes = packet.encode();

        prop_assert_eq!(bytes.len(), packet.byte_length());
        prop_assert_eq!(Packet::decode(&bytes), Ok(packet));
    }

    #[test]
    fn every_proper_prefix_is_truncated(packet in packet(), cut in any::<prop::sample::Index>()) {
        let bytes = packet.encode();
        let length = cut.index(bytes.len());

        let result = Packet::decode(&bytes[..length]);
        prop_assert!(
            matches!(result, Err(DecodeError::Truncated { .. })),
            "prefix of {} bytes decoded as {:?}",
            length,
            result
        );
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in vec(any::<u8>(), 0..2048)) {
        if let Ok(packet) = Packet::decode(&bytes) {
            prop_assert!(packet.inputs.len() <= MAX_INPUTS_PER_PACKET);
            prop_assert!(packet.update_count() <= MAX_STATE_UPDATES_PER_PACKET);
            prop_assert_eq!(packet.encode(), bytes);
        }
    }
}
