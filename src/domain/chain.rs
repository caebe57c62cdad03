//! 链模型与链注册表
//!
//! 记录每条链的地址格式与委托能力（proxy / multisig），
//! 对账引擎据此装配工厂集合

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::account::{
    CryptoType, ETHEREUM_ACCOUNT_ID_LENGTH, SUBSTRATE_ACCOUNT_ID_LENGTH,
};

/// 链标识
pub type ChainId = String;

/// 地址格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFormat {
    /// SS58 编码，携带网络前缀
    Substrate(u16),
    /// 0x + EIP-55 校验和
    Ethereum,
}

/// 链配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// 链标识
    pub chain_id: ChainId,
    /// 链名称
    pub name: String,
    /// SS58 网络前缀（Ethereum 系链忽略）
    pub address_prefix: u16,
    /// 是否为 Ethereum 系链（20 字节账户）
    pub is_ethereum_based: bool,
    /// 是否支持 proxy pallet
    pub has_proxy: bool,
    /// 是否支持 multisig pallet
    pub has_multisig: bool,
}

impl Chain {
    pub fn chain_format(&self) -> ChainFormat {
        if self.is_ethereum_based {
            ChainFormat::Ethereum
        } else {
            ChainFormat::Substrate(self.address_prefix)
        }
    }

    /// 本链上合成委托账户使用的加密类型
    pub fn default_crypto_type(&self) -> CryptoType {
        if self.is_ethereum_based {
            CryptoType::EthereumEcdsa
        } else {
            CryptoType::Sr25519
        }
    }

    /// 本链账户标识的期望字节长度
    pub fn expected_account_len(&self) -> usize {
        if self.is_ethereum_based {
            ETHEREUM_ACCOUNT_ID_LENGTH
        } else {
            SUBSTRATE_ACCOUNT_ID_LENGTH
        }
    }
}

/// 链注册表
///
/// 由调用方提供的链目录快照构建；BTreeMap 保证工厂装配顺序稳定，
/// 同一快照下对账结果可复现
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: BTreeMap<ChainId, Chain>,
}

impl ChainRegistry {
    pub fn new(chains: Vec<Chain>) -> Self {
        Self {
            chains: chains
                .into_iter()
                .map(|chain| (chain.chain_id.clone(), chain))
                .collect(),
        }
    }

    /// 内置主网目录
    pub fn mainnet() -> Self {
        Self::new(vec![
            Chain {
                chain_id: "polkadot".into(),
                name: "Polkadot".into(),
                address_prefix: 0,
                is_ethereum_based: false,
                has_proxy: true,
                has_multisig: true,
            },
            Chain {
                chain_id: "kusama".into(),
                name: "Kusama".into(),
                address_prefix: 2,
                is_ethereum_based: false,
                has_proxy: true,
                has_multisig: true,
            },
            Chain {
                chain_id: "polkadot-asset-hub".into(),
                name: "Polkadot Asset Hub".into(),
                address_prefix: 0,
                is_ethereum_based: false,
                has_proxy: true,
                has_multisig: true,
            },
            Chain {
                chain_id: "moonbeam".into(),
                name: "Moonbeam".into(),
                address_prefix: 1284,
                is_ethereum_based: true,
                has_proxy: true,
                has_multisig: true,
            },
            Chain {
                chain_id: "astar".into(),
                name: "Astar".into(),
                address_prefix: 5,
                is_ethereum_based: false,
                has_proxy: false,
                has_multisig: true,
            },
        ])
    }

    pub fn get(&self, chain_id: &str) -> Option<&Chain> {
        self.chains.get(chain_id)
    }

    /// 按 chain_id 升序遍历
    pub fn chains(&self) -> impl Iterator<Item = &Chain> {
        self.chains.values()
    }

    /// 是否存在任一支持 multisig 的链
    pub fn any_multisig(&self) -> bool {
        self.chains.values().any(|chain| chain.has_multisig)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
