//! DeleSync - 多链钱包委托账户发现与对账引擎
//!
//! 把链上发现的委托关系（multisig / proxy）与本地钱包集合对齐：
//! 合成缺失的委托钱包，翻转已跟踪关系的生命周期状态（new / revoked）。
//! 纯内存计算，扫描、持久化与调度由外部协作方负责

pub mod domain;
pub mod error;
pub mod service;
pub mod utils;

pub use error::EngineError;

// 统一模块导出
pub mod prelude {
    pub use crate::{
        domain::{
            AccountId, Chain, ChainRegistry, CryptoType, DelegatedAccountStatus,
            DiscoveredAccount, IdentityMap, Wallet, WalletKind,
        },
        error::EngineError,
        service::{
            CompoundFactory, DelegateIdentifier, ReconciliationEngine, ReconciliationOutput,
        },
    };
}
