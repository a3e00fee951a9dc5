use std::rc::Rc;
use yew::Reducible;

/// Lifecycle of the placeholder "Save" transaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TxStatus {
    #[default]
    Idle,
    Submitting,
    Confirming { digest: String },
    Confirmed { digest: String },
    Failed { message: String },
}

impl TxStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Submitting | Self::Confirming { .. })
    }
}

#[derive(Clone, Debug)]
pub enum TxAction {
    Submit,
    Submitted { digest: String },
    Confirmed { digest: String },
    Failed { message: String },
    Dismiss,
    /// Forget any in-flight request, e.g. when the account goes away.
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TxState {
    pub status: TxStatus,
    /// Digest of the most recent confirmed transaction; survives later failures.
    pub last_digest: Option<String>,
}

impl Reducible for TxState {
    type Action = TxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use TxAction::*;
        if matches!(action, Reset) {
            return Rc::new(Self::default());
        }
        let pending = self.status.is_pending();
        let status = match action {
            Submit if !pending => TxStatus::Submitting,
            Submitted { digest } if self.status == TxStatus::Submitting => {
                TxStatus::Confirming { digest }
            }
            Confirmed { digest } if pending => {
                return Rc::new(Self {
                    status: TxStatus::Confirmed {
                        digest: digest.clone(),
                    },
                    last_digest: Some(digest),
                });
            }
            Failed { message } if pending => TxStatus::Failed { message },
            Dismiss if matches!(self.status, TxStatus::Failed { .. }) => TxStatus::Idle,
            _ => return self,
        };
        Rc::new(Self {
            status,
            last_digest: self.last_digest.clone(),
        })
    }
}
