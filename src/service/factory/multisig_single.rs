//! 单链多签钱包工厂
//!
//! 每条支持 multisig 的链一个实例。签名人在本链可解析、但其钱包
//! 不满足跨链表示条件时（硬件钱包、已带链账户等），合成绑定本链
//! 的多签钱包。任一命中钱包满足跨链条件时让位给跨链工厂，
//! 避免同一关系生成两个钱包

use uuid::Uuid;

use crate::domain::account::AccountId;
use crate::domain::chain::Chain;
use crate::domain::discovery::{DiscoveredAccount, DiscoveredMultisig};
use crate::domain::identity::IdentityMap;
use crate::domain::wallet::{
    ChainAccount, DelegatedAccountStatus, MultisigRelation, Wallet, WalletKind,
};
use crate::service::factory::DelegatedWalletFactory;
use crate::utils::address_format::delegate_wallet_name;

pub struct SingleChainMultisigWalletFactory {
    chain: Chain,
}

impl SingleChainMultisigWalletFactory {
    pub fn new(chain: Chain) -> Self {
        Self { chain }
    }

    /// 本链上命中签名人的钱包
    ///
    /// 多签关系本身不绑定链：只要签名人在本链能解析出账户即命中，
    /// 与发现条目记录的观察链无关
    fn matching_wallets<'a>(
        &self,
        signatory: &AccountId,
        wallets: &'a [Wallet],
    ) -> Vec<&'a Wallet> {
        wallets
            .iter()
            .filter(|wallet| wallet.account_id_on(&self.chain) == Some(signatory))
            .collect()
    }

    fn synthesize(&self, discovered: &DiscoveredMultisig, identities: &IdentityMap) -> Wallet {
        let relation = MultisigRelation {
            account_id: discovered.account_id.clone(),
            signatory: discovered.signatory.clone(),
            other_signatories: discovered.other_signatories_than(&discovered.signatory),
            threshold: discovered.threshold,
            status: DelegatedAccountStatus::New,
        };

        let chain_account = ChainAccount::with_multisig(
            self.chain.chain_id.clone(),
            discovered.account_id.clone(),
            self.chain.default_crypto_type(),
            relation,
        );

        let name = delegate_wallet_name(
            &discovered.account_id,
            &self.chain.chain_format(),
            identities,
        );

        Wallet {
            meta_id: Uuid::new_v4().to_string(),
            name,
            kind: WalletKind::Multisig,
            substrate_account_id: None,
            substrate_crypto_type: None,
            ethereum_address: None,
            chain_accounts: vec![chain_account],
            multisig: None,
        }
    }
}

impl DelegatedWalletFactory for SingleChainMultisigWalletFactory {
    fn create(
        &self,
        discovered: &DiscoveredAccount,
        wallets: &[Wallet],
        identities: &IdentityMap,
    ) -> Option<Wallet> {
        let DiscoveredAccount::Multisig(multisig) = discovered else {
            return None;
        };

        let matching = self.matching_wallets(&multisig.signatory, wallets);
        if matching.is_empty() {
            return None;
        }

        // 跨链路径优先：任一命中钱包可跨链表示时本工厂退出
        if matching
            .iter()
            .any(|wallet| wallet.supports_universal_multisig())
        {
            return None;
        }

        Some(self.synthesize(multisig, identities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::CryptoType;
    use crate::domain::chain::ChainRegistry;

    fn account(byte: u8) -> AccountId {
        AccountId::new(vec![byte; 32])
    }

    fn polkadot() -> Chain {
        ChainRegistry::mainnet().get("polkadot").unwrap().clone()
    }

    fn wallet(kind: WalletKind, substrate: Option<AccountId>) -> Wallet {
        Wallet {
            meta_id: Uuid::new_v4().to_string(),
            name: "w".into(),
            kind,
            substrate_crypto_type: substrate.as_ref().map(|_| CryptoType::Sr25519),
            substrate_account_id: substrate,
            ethereum_address: None,
            chain_accounts: vec![],
            multisig: None,
        }
    }

    fn discovered(signatory: AccountId) -> DiscoveredAccount {
        DiscoveredAccount::Multisig(DiscoveredMultisig {
            account_id: account(100),
            signatory,
            other_signatories: vec![account(101), account(102)],
            threshold: 2,
            chain_id: "polkadot".into(),
        })
    }

    #[test]
    fn test_synthesizes_for_non_portable_signatory_wallet() {
        let factory = SingleChainMultisigWalletFactory::new(polkadot());
        let wallets = vec![wallet(WalletKind::ParitySigner, Some(account(1)))];

        let synthesized = factory
            .create(&discovered(account(1)), &wallets, &IdentityMap::new())
            .unwrap();

        assert_eq!(synthesized.kind, WalletKind::Multisig);
        assert!(synthesized.multisig.is_none());
        assert_eq!(synthesized.chain_accounts.len(), 1);

        let chain_account = &synthesized.chain_accounts[0];
        assert_eq!(chain_account.chain_id, "polkadot");
        assert_eq!(chain_account.account_id, account(100));

        let relation = chain_account.multisig.as_ref().unwrap();
        assert_eq!(relation.account_id, account(100));
        assert_eq!(relation.signatory, account(1));
        assert_eq!(relation.threshold, 2);
        assert_eq!(relation.status, DelegatedAccountStatus::New);
    }

    #[test]
    fn test_defers_to_universal_path() {
        let factory = SingleChainMultisigWalletFactory::new(polkadot());
        // Secrets 无链账户 -> 可跨链表示，本工厂必须退出
        let wallets = vec![wallet(WalletKind::Secrets, Some(account(1)))];

        assert!(factory
            .create(&discovered(account(1)), &wallets, &IdentityMap::new())
            .is_none());
    }

    #[test]
    fn test_defers_when_any_matching_wallet_is_universal_eligible() {
        let factory = SingleChainMultisigWalletFactory::new(polkadot());
        let wallets = vec![
            wallet(WalletKind::ParitySigner, Some(account(1))),
            wallet(WalletKind::Secrets, Some(account(1))),
        ];

        assert!(factory
            .create(&discovered(account(1)), &wallets, &IdentityMap::new())
            .is_none());
    }

    #[test]
    fn test_none_without_matching_signatory() {
        let factory = SingleChainMultisigWalletFactory::new(polkadot());
        let wallets = vec![wallet(WalletKind::ParitySigner, Some(account(9)))];

        assert!(factory
            .create(&discovered(account(1)), &wallets, &IdentityMap::new())
            .is_none());
    }

    #[test]
    fn test_none_for_proxied_discovery() {
        use crate::domain::discovery::DiscoveredProxied;
        use crate::domain::wallet::ProxyType;

        let factory = SingleChainMultisigWalletFactory::new(polkadot());
        let wallets = vec![wallet(WalletKind::ParitySigner, Some(account(1)))];

        let result = factory.create(
            &DiscoveredAccount::Proxied(DiscoveredProxied {
                chain_id: "polkadot".into(),
                account_id: account(2),
                proxy_account_id: account(1),
                proxy_type: ProxyType::Any,
            }),
            &wallets,
            &IdentityMap::new(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_matches_signatory_via_chain_account() {
        let factory = SingleChainMultisigWalletFactory::new(polkadot());

        // 签名人经由链账户命中（如已合成的被代理钱包），不可跨链表示
        let mut holder = wallet(WalletKind::Proxied, None);
        holder.chain_accounts.push(ChainAccount::plain(
            "polkadot".into(),
            account(1),
            CryptoType::Sr25519,
        ));

        let synthesized = factory
            .create(&discovered(account(1)), &vec![holder], &IdentityMap::new())
            .unwrap();
        assert_eq!(synthesized.chain_accounts[0].account_id, account(100));
    }
}
