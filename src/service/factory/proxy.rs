//! 被代理钱包工厂
//!
//! 每条支持 proxy 的链一个实例。链上发现某账户把权限代理给了
//! 本地持有的账户时，合成对应的 Proxied 钱包

use uuid::Uuid;

use crate::domain::account::AccountId;
use crate::domain::chain::Chain;
use crate::domain::discovery::{DiscoveredAccount, DiscoveredProxied};
use crate::domain::identity::IdentityMap;
use crate::domain::wallet::{
    ChainAccount, DelegatedAccountStatus, ProxyRelation, Wallet, WalletKind,
};
use crate::service::factory::DelegatedWalletFactory;
use crate::utils::address_format::delegate_wallet_name;

pub struct ProxyWalletFactory {
    chain: Chain,
}

impl ProxyWalletFactory {
    pub fn new(chain: Chain) -> Self {
        Self { chain }
    }

    /// 本链上是否有钱包持有给定账户
    fn has_wallet_holding(&self, account_id: &AccountId, wallets: &[Wallet]) -> bool {
        wallets
            .iter()
            .any(|wallet| wallet.account_id_on(&self.chain) == Some(account_id))
    }

    fn synthesize(&self, discovered: &DiscoveredProxied, identities: &IdentityMap) -> Wallet {
        let chain_account = ChainAccount::with_proxy(
            self.chain.chain_id.clone(),
            discovered.account_id.clone(),
            self.chain.default_crypto_type(),
            ProxyRelation {
                proxy_account_id: discovered.proxy_account_id.clone(),
                proxy_type: discovered.proxy_type,
                status: DelegatedAccountStatus::New,
            },
        );

        let name = delegate_wallet_name(
            &discovered.account_id,
            &self.chain.chain_format(),
            identities,
        );

        Wallet {
            meta_id: Uuid::new_v4().to_string(),
            name,
            kind: WalletKind::Proxied,
            substrate_account_id: None,
            substrate_crypto_type: None,
            ethereum_address: None,
            chain_accounts: vec![chain_account],
            multisig: None,
        }
    }
}

impl DelegatedWalletFactory for ProxyWalletFactory {
    fn create(
        &self,
        discovered: &DiscoveredAccount,
        wallets: &[Wallet],
        identities: &IdentityMap,
    ) -> Option<Wallet> {
        let DiscoveredAccount::Proxied(proxied) = discovered else {
            return None;
        };

        if proxied.chain_id != self.chain.chain_id {
            return None;
        }

        // 控制方账户必须已由某个本地钱包持有
        if !self.has_wallet_holding(&proxied.proxy_account_id, wallets) {
            return None;
        }

        Some(self.synthesize(proxied, identities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::CryptoType;
    use crate::domain::chain::ChainRegistry;
    use crate::domain::identity::AccountIdentity;
    use crate::domain::wallet::ProxyType;

    fn account(byte: u8) -> AccountId {
        AccountId::new(vec![byte; 32])
    }

    fn secrets_wallet(substrate: AccountId) -> Wallet {
        Wallet {
            meta_id: "secrets".into(),
            name: "mine".into(),
            kind: WalletKind::Secrets,
            substrate_account_id: Some(substrate),
            substrate_crypto_type: Some(CryptoType::Sr25519),
            ethereum_address: None,
            chain_accounts: vec![],
            multisig: None,
        }
    }

    fn polkadot() -> Chain {
        ChainRegistry::mainnet().get("polkadot").unwrap().clone()
    }

    fn discovered(chain_id: &str, proxied: AccountId, proxy: AccountId) -> DiscoveredAccount {
        DiscoveredAccount::Proxied(DiscoveredProxied {
            chain_id: chain_id.into(),
            account_id: proxied,
            proxy_account_id: proxy,
            proxy_type: ProxyType::Any,
        })
    }

    #[test]
    fn test_synthesizes_when_proxy_account_is_local() {
        let factory = ProxyWalletFactory::new(polkadot());
        let wallets = vec![secrets_wallet(account(1))];

        let wallet = factory
            .create(
                &discovered("polkadot", account(2), account(1)),
                &wallets,
                &IdentityMap::new(),
            )
            .unwrap();

        assert_eq!(wallet.kind, WalletKind::Proxied);
        assert_eq!(wallet.chain_accounts.len(), 1);

        let chain_account = &wallet.chain_accounts[0];
        assert_eq!(chain_account.account_id, account(2));
        assert_eq!(chain_account.crypto_type, CryptoType::Sr25519);

        let proxy = chain_account.proxy.as_ref().unwrap();
        assert_eq!(proxy.proxy_account_id, account(1));
        assert_eq!(proxy.status, DelegatedAccountStatus::New);
    }

    #[test]
    fn test_returns_none_without_controlling_wallet() {
        let factory = ProxyWalletFactory::new(polkadot());
        // 本地钱包持有 X，但控制方是 Y
        let wallets = vec![secrets_wallet(account(1))];

        let result = factory.create(
            &discovered("polkadot", account(3), account(9)),
            &wallets,
            &IdentityMap::new(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_returns_none_for_other_chain() {
        let factory = ProxyWalletFactory::new(polkadot());
        let wallets = vec![secrets_wallet(account(1))];

        let result = factory.create(
            &discovered("kusama", account(2), account(1)),
            &wallets,
            &IdentityMap::new(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_returns_none_for_multisig_discovery() {
        use crate::domain::discovery::DiscoveredMultisig;

        let factory = ProxyWalletFactory::new(polkadot());
        let wallets = vec![secrets_wallet(account(1))];

        let result = factory.create(
            &DiscoveredAccount::Multisig(DiscoveredMultisig {
                account_id: account(7),
                signatory: account(1),
                other_signatories: vec![],
                threshold: 2,
                chain_id: "polkadot".into(),
            }),
            &wallets,
            &IdentityMap::new(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_name_prefers_identity() {
        let factory = ProxyWalletFactory::new(polkadot());
        let wallets = vec![secrets_wallet(account(1))];

        let mut identities = IdentityMap::new();
        identities.insert(account(2), AccountIdentity::new("Treasury"));

        let wallet = factory
            .create(
                &discovered("polkadot", account(2), account(1)),
                &wallets,
                &identities,
            )
            .unwrap();
        assert_eq!(wallet.name, "Treasury");
    }
}
