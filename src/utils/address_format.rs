//! 地址格式化
//!
//! 委托钱包命名链路的兜底环节：身份展示名 -> 链格式地址 -> hex。
//! Substrate 系输出 SS58，Ethereum 系输出 EIP-55 校验和地址

use blake2::{Blake2b512, Digest};
use sha3::Keccak256;

use crate::domain::account::AccountId;
use crate::domain::chain::ChainFormat;
use crate::domain::identity::IdentityMap;

/// SS58 通用网络前缀，用于不绑定具体链的跨链多签钱包
pub const SS58_GENERIC_PREFIX: u16 = 42;

const SS58_CHECKSUM_PREAMBLE: &[u8] = b"SS58PRE";

/// SS58 编码（仅接受 32 字节账户）
pub fn ss58_encode(account_id: &AccountId, prefix: u16) -> Option<String> {
    if !account_id.is_substrate_size() {
        return None;
    }

    let mut data = Vec::with_capacity(2 + account_id.len() + 2);

    // 网络前缀：0..=63 单字节，更大的前缀按 SS58 规范拆成两字节
    if prefix < 64 {
        data.push(prefix as u8);
    } else {
        let ident = prefix & 0x3FFF;
        data.push(((ident & 0x00FC) >> 2) as u8 | 0b0100_0000);
        data.push((ident >> 8) as u8 | ((ident & 0x0003) as u8) << 6);
    }

    data.extend_from_slice(account_id.as_bytes());

    let mut hasher = Blake2b512::new();
    hasher.update(SS58_CHECKSUM_PREAMBLE);
    hasher.update(&data);
    let checksum = hasher.finalize();
    data.extend_from_slice(&checksum[0..2]);

    Some(bs58::encode(data).into_string())
}

/// EIP-55 校验和地址（仅接受 20 字节账户）
pub fn eth_checksum_address(account_id: &AccountId) -> Option<String> {
    if !account_id.is_ethereum_size() {
        return None;
    }

    let lower = hex::encode(account_id.as_bytes());
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");

    for (index, ch) in lower.chars().enumerate() {
        let nibble = if index % 2 == 0 {
            hash[index / 2] >> 4
        } else {
            hash[index / 2] & 0x0F
        };

        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }

    Some(out)
}

/// 按链格式转换地址；账户长度与格式不符时返回 None
pub fn format_address(account_id: &AccountId, format: &ChainFormat) -> Option<String> {
    match format {
        ChainFormat::Substrate(prefix) => ss58_encode(account_id, *prefix),
        ChainFormat::Ethereum => eth_checksum_address(account_id),
    }
}

/// 解析委托钱包展示名
///
/// 依次尝试：身份查找表 -> 链格式地址 -> 0x hex
pub fn delegate_wallet_name(
    account_id: &AccountId,
    format: &ChainFormat,
    identities: &IdentityMap,
) -> String {
    if let Some(identity) = identities.get(account_id) {
        return identity.display_name.clone();
    }

    format_address(account_id, format).unwrap_or_else(|| account_id.to_hex_prefixed())
}
