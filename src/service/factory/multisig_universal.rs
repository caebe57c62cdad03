//! 跨链（universal）多签钱包工厂
//!
//! 全局单实例。签名人命中的本地钱包全部是同一加密家族的可移植
//! 密钥钱包时，合成不绑定链的多签钱包：零链账户，关系挂在对应根上

use uuid::Uuid;

use crate::domain::account::{AccountId, CryptoType};
use crate::domain::chain::ChainFormat;
use crate::domain::discovery::{DiscoveredAccount, DiscoveredMultisig};
use crate::domain::identity::IdentityMap;
use crate::domain::wallet::{DelegatedAccountStatus, MultisigRelation, Wallet, WalletKind};
use crate::service::factory::DelegatedWalletFactory;
use crate::utils::address_format::{delegate_wallet_name, SS58_GENERIC_PREFIX};

/// 合成出的跨链表示所属的加密家族
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UniversalFamily {
    Substrate,
    Evm,
}

#[derive(Debug, Default)]
pub struct UniversalMultisigWalletFactory;

impl UniversalMultisigWalletFactory {
    pub fn new() -> Self {
        Self
    }

    /// 判定签名人所属加密家族
    ///
    /// 收集根账户命中签名人的钱包，过滤出可移植密钥钱包：
    /// 全部以 substrate 根命中 -> Substrate；全部以 ethereum 根命中 -> Evm；
    /// 混合或无命中 -> None（家族不明，放弃跨链表示）
    fn resolve_family(&self, signatory: &AccountId, wallets: &[Wallet]) -> Option<UniversalFamily> {
        let eligible: Vec<&Wallet> = wallets
            .iter()
            .filter(|wallet| {
                wallet.substrate_account_id.as_ref() == Some(signatory)
                    || wallet.ethereum_address.as_ref() == Some(signatory)
            })
            .filter(|wallet| wallet.supports_universal_multisig())
            .collect();

        if eligible.is_empty() {
            return None;
        }

        if eligible
            .iter()
            .all(|wallet| wallet.substrate_account_id.as_ref() == Some(signatory))
        {
            Some(UniversalFamily::Substrate)
        } else if eligible
            .iter()
            .all(|wallet| wallet.ethereum_address.as_ref() == Some(signatory))
        {
            Some(UniversalFamily::Evm)
        } else {
            None
        }
    }

    fn synthesize(
        &self,
        discovered: &DiscoveredMultisig,
        family: UniversalFamily,
        identities: &IdentityMap,
    ) -> Wallet {
        let relation = MultisigRelation {
            account_id: discovered.account_id.clone(),
            signatory: discovered.signatory.clone(),
            other_signatories: discovered.other_signatories_than(&discovered.signatory),
            threshold: discovered.threshold,
            status: DelegatedAccountStatus::New,
        };

        let name_format = match family {
            UniversalFamily::Substrate => ChainFormat::Substrate(SS58_GENERIC_PREFIX),
            UniversalFamily::Evm => ChainFormat::Ethereum,
        };
        let name = delegate_wallet_name(&discovered.account_id, &name_format, identities);

        match family {
            UniversalFamily::Substrate => Wallet {
                meta_id: Uuid::new_v4().to_string(),
                name,
                kind: WalletKind::Multisig,
                substrate_account_id: Some(discovered.account_id.clone()),
                substrate_crypto_type: Some(CryptoType::Sr25519),
                ethereum_address: None,
                chain_accounts: vec![],
                multisig: Some(relation),
            },
            UniversalFamily::Evm => Wallet {
                meta_id: Uuid::new_v4().to_string(),
                name,
                kind: WalletKind::Multisig,
                substrate_account_id: None,
                substrate_crypto_type: None,
                ethereum_address: Some(discovered.account_id.clone()),
                chain_accounts: vec![],
                multisig: Some(relation),
            },
        }
    }
}

impl DelegatedWalletFactory for UniversalMultisigWalletFactory {
    fn create(
        &self,
        discovered: &DiscoveredAccount,
        wallets: &[Wallet],
        identities: &IdentityMap,
    ) -> Option<Wallet> {
        let DiscoveredAccount::Multisig(multisig) = discovered else {
            return None;
        };

        let family = self.resolve_family(&multisig.signatory, wallets)?;

        Some(self.synthesize(multisig, family, identities))
    }
}
