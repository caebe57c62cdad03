//! Domain 模块
//!
//! 委托账户对账的核心领域模型

pub mod account;
pub mod chain;
pub mod discovery;
pub mod identity;
pub mod wallet;


// 重新导出常用类型
pub use account::{AccountId, CryptoType};
pub use chain::{Chain, ChainFormat, ChainId, ChainRegistry};
pub use discovery::{DiscoveredAccount, DiscoveredMultisig, DiscoveredProxied};
pub use identity::{AccountIdentity, IdentityMap};
pub use wallet::{
    ChainAccount, DelegatedAccountStatus, MultisigRelation, ProxyRelation, ProxyType, Wallet,
    WalletKind,
};
