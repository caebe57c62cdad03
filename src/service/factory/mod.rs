//! 委托钱包工厂
//!
//! 按（链能力 × 关系种类）装配策略集合：跨链多签工厂全局一个，
//! 单链多签/被代理工厂按链实例化。发现条目逐一扇出到全部工厂，
//! 收集所有非空合成结果

pub mod multisig_single;
pub mod multisig_universal;
pub mod proxy;

pub use multisig_single::SingleChainMultisigWalletFactory;
pub use multisig_universal::UniversalMultisigWalletFactory;
pub use proxy::ProxyWalletFactory;

use crate::domain::chain::ChainRegistry;
use crate::domain::discovery::DiscoveredAccount;
use crate::domain::identity::IdentityMap;
use crate::domain::wallet::Wallet;

/// 委托钱包合成策略
///
/// 全函数：前置条件不满足（链不匹配、找不到控制方/签名人钱包、
/// 加密家族不一致）一律返回 None，不抛错误
pub trait DelegatedWalletFactory: Send + Sync {
    fn create(
        &self,
        discovered: &DiscoveredAccount,
        wallets: &[Wallet],
        identities: &IdentityMap,
    ) -> Option<Wallet>;
}

/// 组合工厂
pub struct CompoundFactory {
    factories: Vec<Box<dyn DelegatedWalletFactory>>,
}

impl CompoundFactory {
    /// 按链目录能力装配工厂集合
    ///
    /// 任一链支持 multisig 即加入跨链多签工厂；每条链按
    /// has_multisig / has_proxy 分别加入单链多签工厂与被代理工厂
    pub fn from_registry(registry: &ChainRegistry) -> Self {
        let mut factories: Vec<Box<dyn DelegatedWalletFactory>> = Vec::new();

        if registry.any_multisig() {
            factories.push(Box::new(UniversalMultisigWalletFactory::new()));
        }

        for chain in registry.chains() {
            if chain.has_multisig {
                factories.push(Box::new(SingleChainMultisigWalletFactory::new(
                    chain.clone(),
                )));
            }
            if chain.has_proxy {
                factories.push(Box::new(ProxyWalletFactory::new(chain.clone())));
            }
        }

        Self { factories }
    }

    /// 单条发现结果扇出到全部工厂，收集所有合成钱包
    ///
    /// 单链多签工厂对跨链路径的让位保证同一关系不会重复合成；
    /// 这里的聚合只为跨链独立的关系（多条链、多个 proxy 关系）服务
    pub fn create_all(
        &self,
        discovered: &DiscoveredAccount,
        wallets: &[Wallet],
        identities: &IdentityMap,
    ) -> Vec<Wallet> {
        self.factories
            .iter()
            .filter_map(|factory| factory.create(discovered, wallets, identities))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
