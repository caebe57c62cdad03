//! 对账引擎
//!
//! 一轮对账 = 一份发现快照 × 一份本地钱包快照：
//! 1. 折叠本地钱包得到已跟踪关系索引
//! 2. 发现条目扇出到组合工厂，迭代到不动点（本轮新合成的钱包
//!    可以作为后续条目的控制方/签名人，例如多签账户又被代理）
//! 3. 对每个已跟踪关系按 出现/缺席 应用 renew / mark_revoked
//!
//! 引擎无副作用：不做 I/O，不持共享状态，产出交由持久化方提交

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::chain::ChainRegistry;
use crate::domain::discovery::DiscoveredAccount;
use crate::domain::identity::IdentityMap;
use crate::domain::wallet::{DelegatedAccountStatus, Wallet};
use crate::service::factory::CompoundFactory;
use crate::service::identifier::{
    build_delegate_index, delegate_identifier, DelegateIdentifier, DelegateKind,
};
use crate::service::status_transition::{mark_revoked, renew};

/// 单条状态变更
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub identifier: DelegateIdentifier,
    pub new_status: DelegatedAccountStatus,
}

/// 一轮对账的产出
#[derive(Debug, Clone, Default)]
pub struct ReconciliationOutput {
    /// 待插入的新委托钱包
    pub created: Vec<Wallet>,
    /// 已跟踪关系的状态翻转（仅含实际变化）
    pub status_changes: Vec<StatusChange>,
}

/// 对账引擎
pub struct ReconciliationEngine {
    registry: ChainRegistry,
}

impl ReconciliationEngine {
    pub fn new(registry: ChainRegistry) -> Self {
        Self { registry }
    }

    /// 计算一轮对账的更新
    pub fn calculate_updates(
        &self,
        discovered: &[DiscoveredAccount],
        wallets: &[Wallet],
        identities: &IdentityMap,
    ) -> Result<ReconciliationOutput> {
        let index =
            build_delegate_index(wallets).context("failed to index tracked delegated wallets")?;

        tracing::debug!(
            discovered = discovered.len(),
            wallets = wallets.len(),
            tracked = index.len(),
            "starting reconciliation pass"
        );

        let factory = CompoundFactory::from_registry(&self.registry);

        // 合成视图 = 本地钱包 ∪ 本轮已合成钱包
        let mut view: Vec<Wallet> = wallets.to_vec();
        let mut known: std::collections::HashSet<DelegateIdentifier> =
            index.keys().cloned().collect();
        let mut created: Vec<Wallet> = Vec::new();

        // 不动点迭代：每轮至少新增一个标识，标识总数有限，必然终止
        loop {
            let mut progress = false;

            for item in discovered {
                for wallet in factory.create_all(item, &view, identities) {
                    let Some(identifier) = delegate_identifier(&wallet) else {
                        continue;
                    };

                    if known.insert(identifier) {
                        view.push(wallet.clone());
                        created.push(wallet);
                        progress = true;
                    }
                }
            }

            if !progress {
                break;
            }
        }

        let mut status_changes = Vec::new();

        for (identifier, wallet) in &index {
            let present = Self::is_present(identifier, discovered);

            let updated = if present {
                renew(wallet)
            } else {
                mark_revoked(wallet)
            };

            if updated.relation_status() != wallet.relation_status() {
                let new_status = updated
                    .relation_status()
                    .context("tracked delegated wallet lost its relation")?;

                status_changes.push(StatusChange {
                    identifier: identifier.clone(),
                    new_status,
                });
            }
        }

        tracing::debug!(
            created = created.len(),
            status_changes = status_changes.len(),
            "reconciliation pass finished"
        );

        Ok(ReconciliationOutput {
            created,
            status_changes,
        })
    }

    /// 已跟踪关系是否出现在本轮发现集中
    fn is_present(identifier: &DelegateIdentifier, discovered: &[DiscoveredAccount]) -> bool {
        discovered.iter().any(|item| match (item, &identifier.kind) {
            (
                DiscoveredAccount::Proxied(proxied),
                DelegateKind::Proxy {
                    proxy_type,
                    chain_id,
                },
            ) => {
                proxied.chain_id == *chain_id
                    && proxied.account_id == identifier.delegator
                    && proxied.proxy_account_id == identifier.delegate
                    && proxied.proxy_type == *proxy_type
            }
            // 多签关系不绑定观察链：任意链上出现即视为仍然存在
            (DiscoveredAccount::Multisig(multisig), DelegateKind::Multisig { .. }) => {
                multisig.account_id == identifier.delegator
                    && multisig.signatory == identifier.delegate
            }
            _ => false,
        })
    }
}
