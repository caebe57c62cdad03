pub mod factory;
pub mod identifier;
pub mod reconciliation;
pub mod status_transition;

pub use factory::{
    CompoundFactory, DelegatedWalletFactory, ProxyWalletFactory,
    SingleChainMultisigWalletFactory, UniversalMultisigWalletFactory,
};
pub use identifier::{
    build_delegate_index, delegate_identifier, DelegateIdentifier, DelegateIndex, DelegateKind,
    MultisigScope,
};
pub use reconciliation::{ReconciliationEngine, ReconciliationOutput, StatusChange};
pub use status_transition::{mark_revoked, renew};
