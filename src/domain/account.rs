//! 账户标识与加密类型
//!
//! AccountId 为定长字节标识：Ethereum 系链 20 字节，其余链 32 字节

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Substrate 系账户标识长度（字节）
pub const SUBSTRATE_ACCOUNT_ID_LENGTH: usize = 32;
/// Ethereum 系账户标识长度（字节）
pub const ETHEREUM_ACCOUNT_ID_LENGTH: usize = 20;

/// 链上账户标识
///
/// 不绑定任何编码格式；展示层通过 `utils::address_format` 转换为
/// SS58 / EIP-55 地址，序列化统一使用 hex 字符串
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(Vec<u8>);

impl AccountId {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// 从 hex 字符串解析（允许 0x 前缀）
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(stripped).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 是否为 Substrate 系标识（32 字节）
    pub fn is_substrate_size(&self) -> bool {
        self.0.len() == SUBSTRATE_ACCOUNT_ID_LENGTH
    }

    /// 是否为 Ethereum 系标识（20 字节）
    pub fn is_ethereum_size(&self) -> bool {
        self.0.len() == ETHEREUM_ACCOUNT_ID_LENGTH
    }

    /// 0x 前缀 hex 表示，作为地址格式化失败时的兜底展示
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl From<[u8; SUBSTRATE_ACCOUNT_ID_LENGTH]> for AccountId {
    fn from(bytes: [u8; SUBSTRATE_ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<[u8; ETHEREUM_ACCOUNT_ID_LENGTH]> for AccountId {
    fn from(bytes: [u8; ETHEREUM_ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_hex_prefixed())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_prefixed())
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_prefixed())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AccountId::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// 账户加密类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CryptoType {
    /// sr25519（Substrate 默认）
    Sr25519,
    /// ed25519
    Ed25519,
    /// Substrate 上的 secp256k1
    SubstrateEcdsa,
    /// Ethereum 系 secp256k1
    EthereumEcdsa,
}
