//! 测试辅助模块
//! 链目录、钱包与发现条目的生成器

use rand::RngCore;
use std::sync::atomic::{AtomicU64, Ordering};

use delesync::domain::{
    AccountId, Chain, CryptoType, DiscoveredAccount, DiscoveredMultisig, DiscoveredProxied,
    ProxyType, Wallet, WalletKind,
};

/// 随机 32 字节账户（substrate 系）
pub fn random_substrate_account() -> AccountId {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    AccountId::from(bytes)
}

/// 随机 20 字节账户（ethereum 系）
pub fn random_eth_account() -> AccountId {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    AccountId::from(bytes)
}

pub fn substrate_chain(chain_id: &str, has_proxy: bool, has_multisig: bool) -> Chain {
    Chain {
        chain_id: chain_id.into(),
        name: chain_id.into(),
        address_prefix: 42,
        is_ethereum_based: false,
        has_proxy,
        has_multisig,
    }
}

pub fn evm_chain(chain_id: &str, has_proxy: bool, has_multisig: bool) -> Chain {
    Chain {
        chain_id: chain_id.into(),
        name: chain_id.into(),
        address_prefix: 0,
        is_ethereum_based: true,
        has_proxy,
        has_multisig,
    }
}

/// 无链账户的用户钱包，substrate 与 ethereum 根各一个
pub fn user_wallet(kind: WalletKind) -> Wallet {
    Wallet {
        meta_id: next_meta_id(),
        name: "user".into(),
        kind,
        substrate_account_id: Some(random_substrate_account()),
        substrate_crypto_type: Some(CryptoType::Sr25519),
        ethereum_address: Some(random_eth_account()),
        chain_accounts: vec![],
        multisig: None,
    }
}

/// 针对给定签名人的多签发现条目（2/3）
pub fn multisig_discovery(signatory: &AccountId, chain_id: &str) -> DiscoveredAccount {
    let random_peer = || {
        if signatory.is_ethereum_size() {
            random_eth_account()
        } else {
            random_substrate_account()
        }
    };

    DiscoveredAccount::Multisig(DiscoveredMultisig {
        account_id: random_peer(),
        signatory: signatory.clone(),
        other_signatories: vec![random_peer(), random_peer()],
        threshold: 2,
        chain_id: chain_id.into(),
    })
}

/// 针对给定控制方的代理发现条目
pub fn proxied_discovery(proxy: &AccountId, chain_id: &str) -> DiscoveredAccount {
    DiscoveredAccount::Proxied(DiscoveredProxied {
        chain_id: chain_id.into(),
        account_id: random_substrate_account(),
        proxy_account_id: proxy.clone(),
        proxy_type: ProxyType::Any,
    })
}

fn next_meta_id() -> String {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    format!("test-wallet-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}
