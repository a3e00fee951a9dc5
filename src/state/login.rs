use std::rc::Rc;
use yew::Reducible;

/// Login gate phases. `LoggedIn` is sticky until an explicit `Reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Loading,
    LoggedIn,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginState {
    pub phase: LoginPhase,
    /// Last connect failure, shown under the button.
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
pub enum LoginAction {
    Begin,
    Complete,
    Fail { message: String },
    Reset,
}

impl LoginState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoginPhase::Loading
    }

    pub fn is_logged_in(&self) -> bool {
        self.phase == LoginPhase::LoggedIn
    }
}

impl Reducible for LoginState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LoginAction::*;
        match (action, self.phase) {
            (Begin, LoginPhase::Idle) => Rc::new(Self {
                phase: LoginPhase::Loading,
                error: None,
            }),
            // A wallet may report an already-authorised account without a click.
            (Complete, LoginPhase::Idle | LoginPhase::Loading) => Rc::new(Self {
                phase: LoginPhase::LoggedIn,
                error: None,
            }),
            (Fail { message }, LoginPhase::Loading) => Rc::new(Self {
                phase: LoginPhase::Idle,
                error: Some(message),
            }),
            (Reset, _) => Rc::new(Self::default()),
            _ => self,
        }
    }
}
