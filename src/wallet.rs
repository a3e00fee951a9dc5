//! Wallet collaborator.
//!
//! The garden only needs three things from a wallet: an account to gate the
//! main view on, a way to sign and execute a transaction, and a way to wait
//! for that transaction to be confirmed. [`WalletClient`] captures exactly
//! that; [`SimulatedWallet`] is the in-browser backend used by the app.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use gloo::timers::future::TimeoutFuture;

use crate::config::AppConfig;
use crate::util::random_hex;

pub type LocalBoxFuture<T> = Pin<Box<dyn Future<Output = T>>>;
pub type WalletResult<T> = Result<T, WalletError>;

#[derive(Clone, Debug, PartialEq)]
pub enum WalletError {
    /// The user or the wallet declined to sign.
    Rejected(String),
    Network(String),
    NotConnected,
    Timeout,
}

impl Display for WalletError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "request rejected: {reason}"),
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::NotConnected => write!(f, "no wallet account connected"),
            Self::Timeout => write!(f, "timed out waiting for confirmation"),
        }
    }
}

impl Error for WalletError {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub address: String,
}

/// A programmable transaction. The garden only ever submits an empty one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub chain: String,
    pub commands: Vec<String>,
}

impl Transaction {
    pub fn empty(chain: &str) -> Self {
        Self {
            chain: chain.to_string(),
            commands: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub digest: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub digest: String,
    pub checkpoint: Option<u64>,
}

pub trait WalletClient {
    fn connect(&self) -> LocalBoxFuture<WalletResult<WalletAccount>>;
    fn sign_and_execute(&self, tx: Transaction) -> LocalBoxFuture<WalletResult<ExecutionResult>>;
    fn wait_for_transaction(&self, digest: String) -> LocalBoxFuture<WalletResult<TransactionDetails>>;
}

/// Submit `tx`, report the execution through `on_executed`, then wait for
/// confirmation. The first failure short-circuits.
pub async fn submit_and_confirm(
    client: &dyn WalletClient,
    tx: Transaction,
    on_executed: impl FnOnce(&ExecutionResult),
) -> WalletResult<TransactionDetails> {
    let executed = client.sign_and_execute(tx).await?;
    on_executed(&executed);
    client.wait_for_transaction(executed.digest).await
}

/// Wallet that lives entirely in the page: fixed latency, random addresses
/// and digests, and an optional failure rate to exercise error paths.
#[derive(Debug)]
pub struct SimulatedWallet {
    latency_ms: u32,
    failure_rate: f64,
    checkpoint: Cell<u64>,
}

impl SimulatedWallet {
    pub fn new(latency_ms: u32, failure_rate: f64) -> Self {
        Self {
            latency_ms,
            failure_rate: failure_rate.clamp(0.0, 1.0),
            checkpoint: Cell::new(1),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.wallet_latency_ms, config.wallet_failure_rate)
    }

    fn should_fail(&self) -> bool {
        self.failure_rate > 0.0 && js_sys::Math::random() < self.failure_rate
    }
}

impl WalletClient for SimulatedWallet {
    fn connect(&self) -> LocalBoxFuture<WalletResult<WalletAccount>> {
        let latency = self.latency_ms;
        let fail = self.should_fail();
        Box::pin(async move {
            TimeoutFuture::new(latency).await;
            if fail {
                return Err(WalletError::Network("wallet extension did not respond".into()));
            }
            Ok(WalletAccount {
                address: format!("0x{}", random_hex(32, js_sys::Math::random)),
            })
        })
    }

    fn sign_and_execute(&self, tx: Transaction) -> LocalBoxFuture<WalletResult<ExecutionResult>> {
        let latency = self.latency_ms;
        let fail = self.should_fail();
        Box::pin(async move {
            TimeoutFuture::new(latency).await;
            if fail {
                return Err(WalletError::Rejected(format!("signing declined on {}", tx.chain)));
            }
            Ok(ExecutionResult {
                digest: random_hex(32, js_sys::Math::random),
            })
        })
    }

    fn wait_for_transaction(&self, digest: String) -> LocalBoxFuture<WalletResult<TransactionDetails>> {
        let latency = self.latency_ms;
        let fail = self.should_fail();
        let checkpoint = self.checkpoint.get();
        self.checkpoint.set(checkpoint + 1);
        Box::pin(async move {
            TimeoutFuture::new(latency.saturating_mul(2)).await;
            if fail {
                return Err(WalletError::Timeout);
            }
            Ok(TransactionDetails {
                digest,
                checkpoint: Some(checkpoint),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::future::ready;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    fn block_on<F: Future>(fut: F) -> F::Output {
        let mut cx = Context::from_waker(Waker::noop());
        let mut fut = pin!(fut);
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("test futures resolve immediately"),
        }
    }

    struct ScriptedWallet {
        execute: WalletResult<ExecutionResult>,
        confirm: WalletResult<()>,
        submitted: RefCell<Vec<Transaction>>,
    }

    impl WalletClient for ScriptedWallet {
        fn connect(&self) -> LocalBoxFuture<WalletResult<WalletAccount>> {
            Box::pin(ready(Ok(WalletAccount {
                address: "0x1".into(),
            })))
        }

        fn sign_and_execute(&self, tx: Transaction) -> LocalBoxFuture<WalletResult<ExecutionResult>> {
            self.submitted.borrow_mut().push(tx);
            Box::pin(ready(self.execute.clone()))
        }

        fn wait_for_transaction(&self, digest: String) -> LocalBoxFuture<WalletResult<TransactionDetails>> {
            let out = self.confirm.clone().map(|_| TransactionDetails {
                digest,
                checkpoint: Some(7),
            });
            Box::pin(ready(out))
        }
    }

    fn scripted(execute: WalletResult<ExecutionResult>, confirm: WalletResult<()>) -> ScriptedWallet {
        ScriptedWallet {
            execute,
            confirm,
            submitted: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn confirmed_digest_comes_from_execution() {
        let wallet = scripted(
            Ok(ExecutionResult {
                digest: "d1g35t".into(),
            }),
            Ok(()),
        );
        let mut seen = None;
        let out = block_on(submit_and_confirm(&wallet, Transaction::empty("sui:devnet"), |r| {
            seen = Some(r.digest.clone())
        }));
        assert_eq!(out.unwrap().digest, "d1g35t");
        assert_eq!(seen.as_deref(), Some("d1g35t"));
        let sent = wallet.submitted.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].commands.is_empty());
        assert_eq!(sent[0].chain, "sui:devnet");
    }

    #[test]
    fn execution_failure_skips_confirmation() {
        let wallet = scripted(Err(WalletError::Rejected("user said no".into())), Ok(()));
        let mut called = false;
        let out = block_on(submit_and_confirm(&wallet, Transaction::empty("sui:devnet"), |_| {
            called = true
        }));
        assert_eq!(out, Err(WalletError::Rejected("user said no".into())));
        assert!(!called);
    }

    #[test]
    fn confirmation_failure_is_returned() {
        let wallet = scripted(
            Ok(ExecutionResult {
                digest: "x".into(),
            }),
            Err(WalletError::Timeout),
        );
        let out = block_on(submit_and_confirm(&wallet, Transaction::empty("sui:devnet"), |_| {}));
        assert_eq!(out, Err(WalletError::Timeout));
        assert_eq!(
            WalletError::Timeout.to_string(),
            "timed out waiting for confirmation"
        );
    }

    #[test]
    fn network_failure_is_reported_with_its_cause() {
        let err = WalletError::Network("wallet extension did not respond".into());
        let wallet = scripted(Err(err.clone()), Ok(()));
        let out = block_on(submit_and_confirm(&wallet, Transaction::empty("sui:devnet"), |_| {}));
        assert_eq!(out, Err(err));
        assert_eq!(
            WalletError::Network("wallet extension did not respond".into()).to_string(),
            "network error: wallet extension did not respond"
        );
    }
}
