//! Property-based tests for the wire codec's round-trip laws (spec §8, properties 1-3).
//!
//! These exercise the codec directly rather than going over a socket: metadata
//! encode/decode, file-id split/join, and integer/header encode/decode must each be
//! exact inverses of one another for every input the wire format allows.

use fastdfs::protocol::{
    decode_header, decode_int64, decode_metadata, encode_header, encode_int64, encode_metadata,
};
use fastdfs::types::{FileId, FDFS_MAX_META_NAME_LEN, FDFS_MAX_META_VALUE_LEN};
use proptest::collection::hash_map;
use proptest::prelude::*;

/// Printable ASCII, no NUL and no field/record separator bytes, bounded to the wire
/// field limits so the round trip doesn't hit the truncation rule.
fn meta_name_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,64}".prop_filter("must fit the wire limit", |s| {
        s.len() <= FDFS_MAX_META_NAME_LEN
    })
}

fn meta_value_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,256}".prop_filter("must fit the wire limit", |s| {
        s.len() <= FDFS_MAX_META_VALUE_LEN
    })
}

proptest! {
    /// Property 1: for all metadata maps with keys <= 64 bytes and values <= 256
    /// bytes, decode(encode(M)) == M.
    #[test]
    fn metadata_round_trips(
        map in hash_map(meta_name_strategy(), meta_value_strategy(), 0..8)
    ) {
        let encoded = encode_metadata(&map);
        let decoded = decode_metadata(&encoded).unwrap();
        prop_assert_eq!(decoded, map);
    }

    /// Property 2: for all (group, remote) with valid lengths, split(join(group,
    /// remote)) == (group, remote). Exercised through the typed `FileId` wrapper,
    /// whose `Display`/`parse` are the split/join pair.
    #[test]
    fn file_id_round_trips(
        group in "[a-zA-Z0-9_]{1,16}",
        remote in "[a-zA-Z0-9_/.]{1,64}"
    ) {
        let id = FileId::new(group.clone(), remote.clone()).unwrap();
        let text = id.to_string();
        let parsed = FileId::parse(&text).unwrap();
        prop_assert_eq!(parsed.group_name, group);
        prop_assert_eq!(parsed.remote_path, remote);
    }

    /// Property 3 (first half): for all i in u64 (spec.md describes i64, but every
    /// length/offset field in the protocol is carried as an unsigned wire value and
    /// never negative per §4.1), decode_int64_be(encode_int64_be(i)) == i.
    #[test]
    fn int64_round_trips(n in any::<u64>()) {
        let encoded = encode_int64(n);
        prop_assert_eq!(decode_int64(&encoded).unwrap(), n);
    }

    /// Property 3 (second half): header round-trips for all (length, cmd, status).
    #[test]
    fn header_round_trips(length in any::<u64>(), cmd in any::<u8>(), status in any::<u8>()) {
        let encoded = encode_header(length, cmd, status);
        let decoded = decode_header(&encoded).unwrap();
        prop_assert_eq!(decoded.length, length);
        prop_assert_eq!(decoded.cmd, cmd);
        prop_assert_eq!(decoded.status, status);
    }
}
