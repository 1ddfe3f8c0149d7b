use ab_block_header::{
    BlockNumber, Header, HeaderError, HeaderPair, HeaderPairError, HeaderV0, ShardId,
};
use ab_tagged_codec::{TAG_MARKER, TaggedCodecError};
use parity_scale_codec::Encode;

fn header_pair() -> HeaderPair {
    HeaderPair {
        beacon_header: Some(
            Header::new(HeaderV0::default())
                .unwrap()
                .with()
                .number(BlockNumber::new(10))
                .build()
                .unwrap(),
        ),
        shard_header: Some(
            Header::default()
                .with()
                .number(BlockNumber::new(20))
                .shard_id(ShardId::new(1))
                .build()
                .unwrap(),
        ),
    }
}

#[test]
fn round_trip() {
    let pair = header_pair();

    let encoding = pair.encode().unwrap();
    let mut input = encoding.as_slice();
    let decoded = HeaderPair::decode(&mut input).unwrap();

    assert!(input.is_empty());
    assert_eq!(decoded, pair);
}

#[test]
fn absent_header() {
    let mut pair = header_pair();
    pair.shard_header = None;
    assert!(matches!(
        pair.encode(),
        Err(HeaderPairError::ShardHeader {
            error: HeaderError::NilReceiver
        })
    ));

    let mut pair = header_pair();
    pair.beacon_header = None;
    assert!(matches!(
        pair.encode(),
        Err(HeaderPairError::BeaconHeader {
            error: HeaderError::NilReceiver
        })
    ));
}

#[test]
fn failed_side() {
    // Shard chain header missing
    let encoding = header_pair()
        .beacon_header
        .unwrap()
        .encode()
        .unwrap();
    let error = HeaderPair::decode(&mut encoding.as_slice()).unwrap_err();
    assert!(matches!(
        error,
        HeaderPairError::ShardHeader {
            error: HeaderError::Codec(_)
        }
    ));
    assert!(error.to_string().starts_with("Shard chain header: "));

    // Beacon chain header with unknown tag
    let mut encoding = vec![TAG_MARKER];
    "v9".encode_to(&mut encoding);
    encoding.extend(header_pair().shard_header.unwrap().encode().unwrap());
    let error = HeaderPair::decode(&mut encoding.as_slice()).unwrap_err();
    assert!(matches!(
        error.header_error(),
        HeaderError::Codec(TaggedCodecError::UnknownTag { tag }) if tag == "v9"
    ));
    assert!(matches!(error, HeaderPairError::BeaconHeader { .. }));
    assert!(error.to_string().starts_with("Beacon chain header: "));
}

#[test]
fn json() {
    let pair = header_pair();
    let json = serde_json::to_value(&pair).unwrap();

    assert_eq!(json["beacon-chain-header"]["number"], 10);
    assert_eq!(json["shard-chain-header"]["number"], 20);

    let json = serde_json::to_value(HeaderPair::default()).unwrap();
    assert!(json["beacon-chain-header"].is_null());
    assert!(json["shard-chain-header"].is_null());
}
