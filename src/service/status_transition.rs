//! 委托关系状态机
//!
//! 每条关系只有 New / Revoked 两个状态：关系从链上消失 -> Revoked，
//! 再次出现 -> New，可循环，无终态。renew / mark_revoked 为全函数，
//! 对已处于目标状态的钱包是无操作，从不报错

use crate::domain::wallet::{DelegatedAccountStatus, Wallet};

/// 关系重新出现：Revoked -> New，其余状态无操作
pub fn renew(wallet: &Wallet) -> Wallet {
    map_relation_status(wallet, |status| match status {
        DelegatedAccountStatus::Revoked => DelegatedAccountStatus::New,
        other => other,
    })
}

/// 关系从链上消失：New -> Revoked（软删除），其余状态无操作
pub fn mark_revoked(wallet: &Wallet) -> Wallet {
    map_relation_status(wallet, |status| match status {
        DelegatedAccountStatus::New => DelegatedAccountStatus::Revoked,
        other => other,
    })
}

/// 对钱包唯一的委托关系应用状态变换，其余字段原样保留
///
/// 对账只允许改动关系的 status 字段
fn map_relation_status(
    wallet: &Wallet,
    transform: impl Fn(DelegatedAccountStatus) -> DelegatedAccountStatus,
) -> Wallet {
    let mut updated = wallet.clone();

    if let Some(multisig) = updated.multisig.as_mut() {
        multisig.status = transform(multisig.status);
        return updated;
    }

    for chain_account in updated.chain_accounts.iter_mut() {
        if let Some(multisig) = chain_account.multisig.as_mut() {
            multisig.status = transform(multisig.status);
            return updated;
        }
        if let Some(proxy) = chain_account.proxy.as_mut() {
            proxy.status = transform(proxy.status);
            return updated;
        }
    }

    updated
}
