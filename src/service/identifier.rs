//! 委托标识与本地索引
//!
//! DelegateIdentifier 是一条委托关系的稳定键：同一关系在多轮对账之间
//! 派生结果不变，引擎据此识别"已跟踪"的委托钱包

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::account::AccountId;
use crate::domain::chain::ChainId;
use crate::domain::wallet::{ProxyType, Wallet, WalletKind};
use crate::error::EngineError;

/// 多签关系的作用域
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultisigScope {
    /// 跨链，substrate 家族
    UniversalSubstrate,
    /// 跨链，evm 家族
    UniversalEvm,
    /// 绑定单条链
    SingleChain(ChainId),
}

/// 委托关系种类
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DelegateKind {
    Proxy {
        proxy_type: ProxyType,
        chain_id: ChainId,
    },
    Multisig {
        scope: MultisigScope,
    },
}

/// 一条已跟踪委托关系的唯一键
///
/// delegator = 被委托控制的账户（被代理账户 / 多签账户），
/// delegate = 本地持有的控制账户（proxy 账户 / 签名人）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateIdentifier {
    pub delegator: AccountId,
    pub delegate: AccountId,
    pub kind: DelegateKind,
}

/// 从钱包派生委托标识；非委托钱包返回 None
pub fn delegate_identifier(wallet: &Wallet) -> Option<DelegateIdentifier> {
    match wallet.kind {
        WalletKind::Multisig => {
            if let Some(multisig) = &wallet.multisig {
                // 跨链多签：关系挂在根上，所在根决定家族
                let scope = if wallet.substrate_account_id.is_some() {
                    MultisigScope::UniversalSubstrate
                } else {
                    MultisigScope::UniversalEvm
                };

                Some(DelegateIdentifier {
                    delegator: multisig.account_id.clone(),
                    delegate: multisig.signatory.clone(),
                    kind: DelegateKind::Multisig { scope },
                })
            } else {
                // 单链多签：关系挂在唯一的链账户上，额外按链 ID 键控
                let chain_account = wallet
                    .chain_accounts
                    .iter()
                    .find(|account| account.multisig.is_some())?;
                let multisig = chain_account.multisig.as_ref()?;

                Some(DelegateIdentifier {
                    delegator: multisig.account_id.clone(),
                    delegate: multisig.signatory.clone(),
                    kind: DelegateKind::Multisig {
                        scope: MultisigScope::SingleChain(chain_account.chain_id.clone()),
                    },
                })
            }
        }
        WalletKind::Proxied => {
            let chain_account = wallet
                .chain_accounts
                .iter()
                .find(|account| account.proxy.is_some())?;
            let proxy = chain_account.proxy.as_ref()?;

            Some(DelegateIdentifier {
                delegator: chain_account.account_id.clone(),
                delegate: proxy.proxy_account_id.clone(),
                kind: DelegateKind::Proxy {
                    proxy_type: proxy.proxy_type,
                    chain_id: chain_account.chain_id.clone(),
                },
            })
        }
        _ => None,
    }
}

/// 已跟踪委托关系索引
pub type DelegateIndex = BTreeMap<DelegateIdentifier, Wallet>;

/// 折叠本地钱包集合，得到 标识 -> 钱包 的索引
///
/// 标识按不变量唯一；两个钱包折叠出同一标识视为本地数据损坏，上报错误
pub fn build_delegate_index(wallets: &[Wallet]) -> Result<DelegateIndex, EngineError> {
    let mut index = DelegateIndex::new();

    for wallet in wallets {
        let Some(identifier) = delegate_identifier(wallet) else {
            continue;
        };

        if let Some(existing) = index.get(&identifier) {
            return Err(EngineError::DuplicateDelegateIdentifier {
                identifier,
                first_meta_id: existing.meta_id.clone(),
                second_meta_id: wallet.meta_id.clone(),
            });
        }

        index.insert(identifier, wallet.clone());
    }

    Ok(index)
}
