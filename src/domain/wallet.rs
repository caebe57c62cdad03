//! 钱包领域模型
//!
//! 一个 Wallet 对应用户持有的一组密钥/账户：可携带 substrate 根账户、
//! ethereum 根账户和若干链级 ChainAccount；委托关系（proxy / multisig）
//! 挂在 ChainAccount 或（跨链 multisig 时）根级字段上

use serde::{Deserialize, Serialize};

use crate::domain::account::{AccountId, CryptoType};
use crate::domain::chain::{Chain, ChainId};

/// 钱包类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalletKind {
    /// 本地助记词/种子钱包
    Secrets,
    /// 只读观察钱包
    WatchOnly,
    /// Ledger（基于通用 app）
    GenericLedger,
    /// Ledger（链专用 app）
    Ledger,
    /// Parity Signer / 旧版离线签名器
    ParitySigner,
    /// Polkadot Vault
    PolkadotVault,
    /// 由链上 proxy 关系合成的被代理钱包
    Proxied,
    /// 由链上 multisig 关系合成的多签钱包
    Multisig,
}

impl WalletKind {
    /// 是否为对账引擎合成的委托钱包类型
    pub fn is_delegated(&self) -> bool {
        matches!(self, WalletKind::Proxied | WalletKind::Multisig)
    }
}

/// 委托关系生命周期状态
///
/// New = 链上仍可观察到该关系；Revoked = 关系已消失，钱包软保留
/// （历史记录 / 资金找回），仅 New <-> Revoked 两个转换合法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegatedAccountStatus {
    New,
    Revoked,
}

impl DelegatedAccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelegatedAccountStatus::New => "new",
            DelegatedAccountStatus::Revoked => "revoked",
        }
    }
}

/// proxy pallet 权限类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProxyType {
    Any,
    NonTransfer,
    Governance,
    Staking,
    IdentityJudgement,
    CancelProxy,
    Auction,
    NominationPools,
    /// 未识别的链自定义类型，保留原始判别值
    Other(u8),
}

/// 被代理账户与其控制方的关系
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRelation {
    /// 控制方（proxy）账户
    pub proxy_account_id: AccountId,
    pub proxy_type: ProxyType,
    pub status: DelegatedAccountStatus,
}

/// 多签账户与某个签名人的关系
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigRelation {
    /// 多签账户本身
    pub account_id: AccountId,
    /// 本地持有的签名人
    pub signatory: AccountId,
    /// 其余签名人（不含 signatory）
    pub other_signatories: Vec<AccountId>,
    pub threshold: u32,
    pub status: DelegatedAccountStatus,
}

/// 链级账户
///
/// 不变量：proxy 与 multisig 至多一个有值，经由构造函数保证
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainAccount {
    pub chain_id: ChainId,
    pub account_id: AccountId,
    pub public_key: AccountId,
    pub crypto_type: CryptoType,
    pub proxy: Option<ProxyRelation>,
    pub multisig: Option<MultisigRelation>,
}

impl ChainAccount {
    /// 无委托关系的普通链账户
    pub fn plain(chain_id: ChainId, account_id: AccountId, crypto_type: CryptoType) -> Self {
        Self {
            chain_id,
            public_key: account_id.clone(),
            account_id,
            crypto_type,
            proxy: None,
            multisig: None,
        }
    }

    pub fn with_proxy(
        chain_id: ChainId,
        account_id: AccountId,
        crypto_type: CryptoType,
        proxy: ProxyRelation,
    ) -> Self {
        Self {
            chain_id,
            public_key: account_id.clone(),
            account_id,
            crypto_type,
            proxy: Some(proxy),
            multisig: None,
        }
    }

    pub fn with_multisig(
        chain_id: ChainId,
        account_id: AccountId,
        crypto_type: CryptoType,
        multisig: MultisigRelation,
    ) -> Self {
        Self {
            chain_id,
            public_key: account_id.clone(),
            account_id,
            crypto_type,
            proxy: None,
            multisig: Some(multisig),
        }
    }
}

/// 钱包
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// 本地唯一标识（UUID）
    pub meta_id: String,
    /// 展示名
    pub name: String,
    pub kind: WalletKind,
    pub substrate_account_id: Option<AccountId>,
    pub substrate_crypto_type: Option<CryptoType>,
    pub ethereum_address: Option<AccountId>,
    pub chain_accounts: Vec<ChainAccount>,
    /// 根级 multisig 关系，仅跨链（universal）多签钱包有值
    pub multisig: Option<MultisigRelation>,
}

impl Wallet {
    /// 在指定链上解析本钱包的账户
    ///
    /// 优先取该链的 ChainAccount；否则回落到与链家族匹配的根账户
    /// （Ethereum 系链取 ethereum 根，其余取 substrate 根）
    pub fn account_id_on(&self, chain: &Chain) -> Option<&AccountId> {
        if let Some(chain_account) = self
            .chain_accounts
            .iter()
            .find(|account| account.chain_id == chain.chain_id)
        {
            return Some(&chain_account.account_id);
        }

        if chain.is_ethereum_based {
            self.ethereum_address.as_ref()
        } else {
            self.substrate_account_id.as_ref()
        }
    }

    /// 是否可作为跨链（universal）多签的签名人钱包
    ///
    /// 统一的判定入口：单链多签工厂与跨链多签工厂共用，
    /// 要求钱包不含链级账户且类型为可移植密钥钱包
    pub fn supports_universal_multisig(&self) -> bool {
        self.chain_accounts.is_empty()
            && matches!(
                self.kind,
                WalletKind::PolkadotVault | WalletKind::Secrets | WalletKind::WatchOnly
            )
    }

    pub fn is_delegated(&self) -> bool {
        self.kind.is_delegated()
    }

    /// 指定链上携带 proxy 关系的链账户
    pub fn proxy_chain_account(&self, chain_id: &str) -> Option<&ChainAccount> {
        self.chain_accounts
            .iter()
            .find(|account| account.chain_id == chain_id && account.proxy.is_some())
    }

    /// 本钱包委托关系的当前状态（非委托钱包为 None）
    pub fn relation_status(&self) -> Option<DelegatedAccountStatus> {
        if let Some(multisig) = &self.multisig {
            return Some(multisig.status);
        }

        self.chain_accounts.iter().find_map(|account| {
            account
                .multisig
                .as_ref()
                .map(|m| m.status)
                .or_else(|| account.proxy.as_ref().map(|p| p.status))
        })
    }
}
