//! 身份快照
//!
//! 命名委托钱包时使用的 AccountId -> 展示名 查找表，由身份解析服务
//! 在每轮对账前提供，引擎内只做内存读取

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::account::AccountId;

/// 链上身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdentity {
    pub display_name: String,
}

impl AccountIdentity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// 身份查找表快照
pub type IdentityMap = HashMap<AccountId, AccountIdentity>;
