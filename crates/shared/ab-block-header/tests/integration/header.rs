use crate::{random_base, random_bytes, random_u64, random_vec};
use ab_block_header::{
    Blake3Hash, BlockHash, BlockNumber, EpochNumber, Header, HeaderError, HeaderFields, HeaderV0,
    HeaderV1, HeaderV2, HeaderV3, MaybeHeader, ShardId, header_registry,
};
use ab_tagged_codec::{TAG_MARKER, Tag, TaggedCodecError};
use chacha20::ChaCha8Rng;
use chacha20::rand_core::SeedableRng;
use parity_scale_codec::{Decode, Encode};

fn random_headers(rng: &mut ChaCha8Rng) -> Vec<Header> {
    vec![
        Header::new(HeaderV0 {
            base: random_base(rng),
        })
        .unwrap(),
        Header::new(HeaderV1 {
            base: random_base(rng),
            view_id: random_u64(rng),
            outgoing_receipts_root: Blake3Hash::new(random_bytes(rng)),
            incoming_receipts_root: Blake3Hash::new(random_bytes(rng)),
        })
        .unwrap(),
        Header::new(HeaderV2 {
            base: random_base(rng),
            view_id: random_u64(rng),
            outgoing_receipts_root: Blake3Hash::new(random_bytes(rng)),
            incoming_receipts_root: Blake3Hash::new(random_bytes(rng)),
            vrf: random_vec(rng, 32),
            vdf: random_vec(rng, 258),
        })
        .unwrap(),
        Header::new(HeaderV3 {
            base: random_base(rng),
            view_id: random_u64(rng),
            outgoing_receipts_root: Blake3Hash::new(random_bytes(rng)),
            incoming_receipts_root: Blake3Hash::new(random_bytes(rng)),
            vrf: random_vec(rng, 32),
            vdf: random_vec(rng, 258),
            cross_links: random_vec(rng, 64),
            slashes: random_vec(rng, 16),
        })
        .unwrap(),
    ]
}

#[test]
fn registered_revisions() {
    let registry = header_registry();

    assert_eq!(
        registry.tags().collect::<Vec<_>>(),
        [HeaderV0::TAG, HeaderV1::TAG, HeaderV2::TAG, HeaderV3::TAG]
    );
    assert_eq!(
        registry.type_name_of(Tag::new("v2")),
        Some(core::any::type_name::<HeaderV2>())
    );
    assert_eq!(registry.type_name_of(Tag::new("v4")), None);
}

#[test]
fn round_trip() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());

    for header in random_headers(&mut rng) {
        let encoding = header.encode().unwrap();
        let decoded = Header::decode_from_slice(&encoding).unwrap();

        assert_eq!(decoded, header);
        assert_eq!(decoded.tag(), header.tag());
        assert_eq!(decoded.number(), header.number());
        assert_eq!(decoded.parent_hash(), header.parent_hash());
        assert_eq!(decoded.logs_bloom(), header.logs_bloom());
        assert_eq!(decoded.shard_state(), header.shard_state());
        assert_eq!(decoded.view_id(), header.view_id());
        assert_eq!(decoded.vdf(), header.vdf());
        assert_eq!(decoded.slashes(), header.slashes());
        assert_eq!(decoded.encode().unwrap(), encoding);
        assert_eq!(decoded.hash(), header.hash());
    }
}

#[test]
fn stream_of_headers() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let headers = random_headers(&mut rng);

    let mut encoding = Vec::new();
    for header in &headers {
        header.encode_to(&mut encoding).unwrap();
    }

    let mut input = encoding.as_slice();
    for header in &headers {
        assert_eq!(&Header::decode(&mut input).unwrap(), header);
    }
    assert!(input.is_empty());
}

#[test]
fn tagged_revision() {
    let header = Header::new(HeaderV1 {
        base: Default::default(),
        view_id: 0,
        outgoing_receipts_root: Blake3Hash::default(),
        incoming_receipts_root: Blake3Hash::default(),
    })
    .unwrap()
    .with()
    .number(BlockNumber::new(5))
    .parent_hash(BlockHash::new(Blake3Hash::new([0xaa; 32])))
    .build()
    .unwrap();

    let encoding = header.encode().unwrap();
    assert_eq!(encoding[..4], [TAG_MARKER, 0x08, b'v', b'1']);
    assert_eq!(
        encoding[4..],
        header.revision::<HeaderV1>().unwrap().encode()
    );

    let decoded = Header::decode_from_slice(&encoding).unwrap();
    assert_eq!(decoded.tag(), Tag::new("v1"));
    assert_eq!(decoded.number(), BlockNumber::new(5));
    assert_eq!(
        decoded.parent_hash(),
        BlockHash::new(Blake3Hash::new([0xaa; 32]))
    );
    assert!(decoded.revision::<HeaderV1>().is_some());
    assert!(decoded.revision::<HeaderV0>().is_none());
    assert!(!decoded.is_last_block_in_epoch());

    let last_block = decoded.with().shard_state(vec![1, 2, 3]).build().unwrap();
    assert!(last_block.is_last_block_in_epoch());
    assert!(
        Header::decode_from_slice(&last_block.encode().unwrap())
            .unwrap()
            .is_last_block_in_epoch()
    );
}

#[test]
fn legacy_revision() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let legacy = HeaderV0 {
        base: random_base(&mut rng),
    };

    let header = Header::new(legacy.clone()).unwrap();
    let encoding = header.encode().unwrap();
    // No tag marker in front of the payload
    assert_eq!(encoding, legacy.encode());
    assert_ne!(encoding[0], TAG_MARKER);

    let decoded = Header::decode_from_slice(&encoding).unwrap();
    assert!(decoded.tag().is_legacy());
    assert_eq!(decoded.revision::<HeaderV0>(), Some(&legacy));
    assert_eq!(
        HeaderV0::decode(&mut encoding.as_slice()).unwrap(),
        legacy
    );
}

#[test]
fn legacy_payload_never_starts_with_marker() {
    for number in [
        0,
        63,
        64,
        2_u64.pow(14) - 1,
        2_u64.pow(14),
        2_u64.pow(30) - 1,
        2_u64.pow(30),
        u64::from(u32::MAX),
        u64::MAX,
    ] {
        let header = Header::new(HeaderV0::default())
            .unwrap()
            .with()
            .number(BlockNumber::new(number))
            .build()
            .unwrap();
        let encoding = header.encode().unwrap();

        assert_ne!(encoding[0], TAG_MARKER, "number {number}");
        assert_eq!(
            Header::decode_from_slice(&encoding).unwrap().number(),
            BlockNumber::new(number)
        );
    }
}

#[test]
fn defaults_of_older_revisions() {
    let header = Header::new(HeaderV0::default()).unwrap();

    assert_eq!(header.view_id(), 0);
    assert_eq!(header.outgoing_receipts_root(), Blake3Hash::default());
    assert_eq!(header.incoming_receipts_root(), Blake3Hash::default());
    assert!(header.vrf().is_empty());
    assert!(header.vdf().is_empty());
    assert!(header.cross_links().is_empty());
    assert!(header.slashes().is_empty());
    assert!(!header.is_last_block_in_epoch());
}

#[test]
fn unknown_tag() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let original = Header::new(HeaderV2 {
        base: random_base(&mut rng),
        ..HeaderV2::default()
    })
    .unwrap();

    let mut encoding = vec![TAG_MARKER];
    "v9".encode_to(&mut encoding);
    encoding.extend_from_slice(&HeaderV3::default().encode());

    assert!(matches!(
        Header::decode_from_slice(&encoding),
        Err(HeaderError::Codec(TaggedCodecError::UnknownTag { tag })) if tag == "v9"
    ));

    // Failed decoding leaves the previous header intact
    let mut header = original.clone();
    assert!(matches!(
        header.decode_in_place(&mut encoding.as_slice()),
        Err(HeaderError::Codec(TaggedCodecError::UnknownTag { .. }))
    ));
    assert_eq!(header, original);
}

#[test]
fn decode_in_place() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let headers = random_headers(&mut rng);

    let mut header = headers[0].clone();
    header
        .decode_in_place(&mut headers[3].encode().unwrap().as_slice())
        .unwrap();
    assert_eq!(header, headers[3]);
    assert!(header.revision::<HeaderV3>().is_some());

    // Truncated input
    let encoding = headers[1].encode().unwrap();
    assert!(matches!(
        header.decode_in_place(&mut &encoding[..encoding.len() - 1]),
        Err(HeaderError::Codec(TaggedCodecError::PayloadDecode { tag, .. })) if tag == Tag::new("v1")
    ));
    assert_eq!(header, headers[3]);
}

#[test]
fn trailing_bytes() {
    let mut encoding = Header::default().encode().unwrap();
    encoding.extend_from_slice(&[1, 2, 3]);

    assert!(matches!(
        Header::decode_from_slice(&encoding),
        Err(HeaderError::Codec(TaggedCodecError::TrailingBytes { extra: 3 }))
    ));
    // Stream decoding leaves the rest of the input alone
    let mut input = encoding.as_slice();
    assert_eq!(Header::decode(&mut input).unwrap(), Header::default());
    assert_eq!(input, [1, 2, 3]);
}

#[test]
fn absent_header() {
    let mut header = None::<Header>;

    assert!(matches!(header.encode_tagged(), Err(HeaderError::NilReceiver)));
    assert!(matches!(
        header.encode_tagged_to(&mut Vec::<u8>::new()),
        Err(HeaderError::NilReceiver)
    ));
    let encoding = Header::default().encode().unwrap();
    assert!(matches!(
        header.decode_tagged_in_place(&mut encoding.as_slice()),
        Err(HeaderError::NilReceiver)
    ));
    assert!(header.is_none());

    let mut header = Some(Header::new(HeaderV0::default()).unwrap());
    header
        .decode_tagged_in_place(&mut encoding.as_slice())
        .unwrap();
    assert_eq!(header, Some(Header::default()));
    assert_eq!(header.encode_tagged().unwrap(), encoding);
}

#[test]
fn unregistered_revision() {
    #[derive(Debug, Default, Clone, Encode, Decode)]
    struct HeaderV4 {
        base: ab_block_header::BaseFields,
    }

    impl HeaderFields for HeaderV4 {
        fn base(&self) -> &ab_block_header::BaseFields {
            &self.base
        }

        fn clone_boxed(&self) -> Box<dyn HeaderFields> {
            Box::new(self.clone())
        }

        fn set_field(
            &mut self,
            value: ab_block_header::FieldValue,
        ) -> Result<(), ab_block_header::FieldValue> {
            self.base.set_field(value)
        }
    }

    assert!(matches!(
        Header::new(HeaderV4::default()),
        Err(HeaderError::Codec(TaggedCodecError::UnregisteredType { type_name }))
            if type_name.ends_with("HeaderV4")
    ));
}

#[test]
fn hash() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());

    for header in random_headers(&mut rng) {
        let hash = header.hash();

        assert_eq!(header.clone().hash(), hash);
        assert_eq!(
            hash,
            BlockHash::new(Blake3Hash::hash(&header.encode().unwrap()))
        );

        let modified = header.with().gas_used(header.gas_used() ^ 1).build().unwrap();
        assert_ne!(modified.hash(), hash);
    }

    // Same fields under different revisions hash differently
    let v0 = Header::new(HeaderV0::default()).unwrap();
    let v3 = Header::default();
    assert_ne!(v0.hash(), v3.hash());
    assert_ne!(v0, v3);
}

#[test]
fn json() {
    let header = Header::new(HeaderV0::default())
        .unwrap()
        .with()
        .number(BlockNumber::new(5))
        .parent_hash(BlockHash::new(Blake3Hash::new([0xaa; 32])))
        .extra_data(vec![0xde, 0xad])
        .gas_limit(30_000_000)
        .gas_used(21_000)
        .timestamp(1_700_000_000)
        .shard_id(ShardId::new(1))
        .epoch(EpochNumber::new(2))
        .build()
        .unwrap();

    let json_string = serde_json::to_string(&header).unwrap();
    let key_positions = [
        "number",
        "hash",
        "parentHash",
        "logsBloom",
        "transactionsRoot",
        "stateRoot",
        "receiptsRoot",
        "miner",
        "extraData",
        "gasLimit",
        "gasUsed",
        "timestamp",
    ]
    .map(|key| json_string.find(&format!("\"{key}\":")).unwrap());
    assert!(key_positions.is_sorted());

    let json = serde_json::to_value(&header).unwrap();
    assert_eq!(json.as_object().unwrap().len(), key_positions.len());
    assert_eq!(json["number"], 5);
    assert_eq!(json["hash"], format!("0x{}", header.hash()));
    assert_eq!(json["parentHash"], format!("0x{}", "aa".repeat(32)));
    assert_eq!(json["logsBloom"], format!("0x{}", "00".repeat(256)));
    assert_eq!(json["miner"], format!("0x{}", "00".repeat(20)));
    assert_eq!(json["extraData"], "0xdead");
    assert_eq!(json["gasLimit"], 30_000_000);
    assert_eq!(json["gasUsed"], 21_000);
    assert_eq!(json["timestamp"], 1_700_000_000_u64);

    assert_eq!(header.to_string(), serde_json::to_string(&header).unwrap());
}

#[test]
fn span() {
    let header = Header::default();
    // Creating a span must not fail even without a subscriber
    let _entered = header.span().entered();
}

#[test]
fn empty() {
    for tag in header_registry().tags() {
        let header = Header::empty(tag).unwrap();

        assert_eq!(header.tag(), tag);
        assert_eq!(header.number(), BlockNumber::ZERO);
        assert!(!header.is_last_block_in_epoch());
    }

    assert!(matches!(
        Header::empty(Tag::new("v4")),
        Err(HeaderError::Codec(TaggedCodecError::UnknownTag { .. }))
    ));
}
