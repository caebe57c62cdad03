//! 引擎错误类型
//!
//! 常规的"无法合成"结果（找不到控制方钱包、加密家族不一致、链不匹配）
//! 一律以 None/空集表达，不进入错误通道；这里只承载数据完整性问题

use thiserror::Error;

use crate::service::identifier::DelegateIdentifier;

#[derive(Debug, Error)]
pub enum EngineError {
    /// 两个本地钱包折叠出同一个委托标识
    ///
    /// 标识按不变量应当唯一；出现碰撞说明本地数据已损坏，
    /// 必须上报而不是静默覆盖
    #[error("duplicate delegate identifier {identifier:?} held by wallets {first_meta_id} and {second_meta_id}")]
    DuplicateDelegateIdentifier {
        identifier: DelegateIdentifier,
        first_meta_id: String,
        second_meta_id: String,
    },
}
