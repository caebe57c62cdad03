//! 链上发现结果模型
//!
//! 扫描器每轮产出的委托关系快照条目；multisig 与 proxied 用带标签的
//! 枚举承载，工厂按穷尽匹配分发，不存在静默的类型转换失败路径

use serde::{Deserialize, Serialize};

use crate::domain::account::AccountId;
use crate::domain::chain::ChainId;
use crate::domain::wallet::ProxyType;

/// 链上观察到的多签关系
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredMultisig {
    /// 多签账户
    pub account_id: AccountId,
    /// 命中的本地签名人
    pub signatory: AccountId,
    /// 全部其余签名人
    pub other_signatories: Vec<AccountId>,
    pub threshold: u32,
    /// 观察到该关系的链
    pub chain_id: ChainId,
}

impl DiscoveredMultisig {
    /// 其余签名人列表，并从中剔除给定签名人
    ///
    /// 上游数据偶尔会把 signatory 一并列入 other_signatories，
    /// 合成关系时统一走这里过滤
    pub fn other_signatories_than(&self, signatory: &AccountId) -> Vec<AccountId> {
        self.other_signatories
            .iter()
            .filter(|account| *account != signatory)
            .cloned()
            .collect()
    }
}

/// 链上观察到的代理关系
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredProxied {
    pub chain_id: ChainId,
    /// 被代理账户
    pub account_id: AccountId,
    /// 控制方账户
    pub proxy_account_id: AccountId,
    pub proxy_type: ProxyType,
}

/// 单条发现结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DiscoveredAccount {
    Multisig(DiscoveredMultisig),
    Proxied(DiscoveredProxied),
}
