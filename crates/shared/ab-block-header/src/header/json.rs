use crate::header::Header;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeaderJson {
    number: u64,
    hash: String,
    parent_hash: String,
    logs_bloom: String,
    transactions_root: String,
    state_root: String,
    receipts_root: String,
    miner: String,
    extra_data: String,
    gas_limit: u64,
    gas_used: u64,
    timestamp: u64,
}

impl From<&Header> for HeaderJson {
    fn from(header: &Header) -> Self {
        Self {
            number: header.number().as_u64(),
            hash: prefixed_hex(header.hash()),
            parent_hash: prefixed_hex(header.parent_hash()),
            logs_bloom: prefixed_hex(header.logs_bloom()),
            transactions_root: prefixed_hex(header.transactions_root()),
            state_root: prefixed_hex(header.state_root()),
            receipts_root: prefixed_hex(header.receipts_root()),
            miner: prefixed_hex(header.coinbase()),
            extra_data: prefixed_hex(header.extra_data()),
            gas_limit: header.gas_limit(),
            gas_used: header.gas_used(),
            timestamp: header.timestamp(),
        }
    }
}

impl Serialize for Header {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        HeaderJson::from(self).serialize(serializer)
    }
}

fn prefixed_hex<T>(bytes: T) -> String
where
    T: AsRef<[u8]>,
{
    format!("0x{}", hex::encode(bytes))
}
