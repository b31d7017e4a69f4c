//! Property tests for frame validation

use proptest::prelude::*;
use sitstand_protocol::{checksum, Frame, FrameError, MAX_FRAME_LEN, MAX_PARAMS};

/// A valid frame padded out to a full block with arbitrary trailing bytes
fn valid_block() -> impl Strategy<Value = [u8; MAX_FRAME_LEN]> {
    (
        any::<[u8; 2]>(),
        any::<u8>(),
        prop::collection::vec(any::<u8>(), 0..=MAX_PARAMS),
        any::<[u8; MAX_FRAME_LEN]>(),
    )
        .prop_map(|(address, command, params, tail)| {
            let frame = Frame::new(address, command, &params).unwrap();
            let mut block = tail;
            let len = frame.encode(&mut block).unwrap();
            assert!(len <= MAX_FRAME_LEN);
            block
        })
}

proptest! {
    #[test]
    fn valid_frames_decode(block in valid_block()) {
        prop_assert!(Frame::decode(&block).is_ok());
    }

    #[test]
    fn oversize_param_len_rejected(mut block in any::<[u8; MAX_FRAME_LEN]>(), len in 5u8..=255) {
        // 3 + len + 1 >= MAX_FRAME_LEN
        block[3] = len;
        prop_assert_eq!(Frame::decode(&block), Err(FrameError::ParamsTooLong));
    }

    #[test]
    fn any_block_decodes_without_panic(block in any::<[u8; MAX_FRAME_LEN]>()) {
        let _ = Frame::decode(&block);
    }

    #[test]
    fn single_byte_corruption_detected(block in valid_block(), pick in any::<prop::sample::Index>(), flip in 1u8..=255) {
        // COMMAND or any PARAM byte; changing PARAM_LEN moves the checksum
        // and is covered by the unit tests.
        let param_len = block[3] as usize;
        let mut candidates = vec![2usize];
        candidates.extend(4..4 + param_len);
        let index = candidates[pick.index(candidates.len())];

        let mut corrupted = block;
        corrupted[index] = corrupted[index].wrapping_add(flip);
        prop_assert_eq!(Frame::decode(&corrupted), Err(FrameError::InvalidChecksum));
    }
}

#[test]
fn wake_packet_checksum() {
    let wake = [0xF1, 0xF1, 0x29, 0x00, 0x29, 0x7E];
    assert_eq!(checksum(&wake[2..4]), 0x29);
}
