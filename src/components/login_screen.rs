use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::config::AppMode;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginScreenProps {
    pub mode: AppMode,
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    /// Fired when the button is pressed.
    pub on_begin: Callback<()>,
    /// Fired when a timed login elapses. Wallet logins complete from outside.
    pub on_complete: Callback<()>,
    pub delay_ms: u32,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    // dropped with the component, which cancels a login still in flight
    let timer = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let begin = props.on_begin.clone();
        let complete = props.on_complete.clone();
        let mode = props.mode;
        let delay = props.delay_ms;
        let loading = props.loading;
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            if loading {
                return;
            }
            begin.emit(());
            if mode == AppMode::DraftThenSave {
                let complete = complete.clone();
                *timer.borrow_mut() = Some(Timeout::new(delay, move || complete.emit(())));
            }
        })
    };

    let (subtitle, idle_label, busy_label) = match props.mode {
        AppMode::DraftThenSave => ("Explore your interactive DeFi aquarium", "Enter", "Entering..."),
        AppMode::WalletCommit => ("Please connect your wallet to continue.", "Connect Wallet", "Connecting..."),
    };

    html! {
        <div style="display:flex; align-items:center; justify-content:center; min-height:100vh; background:linear-gradient(180deg, #60a5fa, #14b8a6);">
            <div style="background:rgba(255,255,255,0.9); padding:40px; border-radius:16px; box-shadow:0 10px 30px rgba(0,0,0,0.2); max-width:448px; width:100%; animation:panel-in 0.8s ease-out;">
                <div style="display:flex; flex-direction:column; align-items:center; gap:24px;">
                    <div style="width:96px; height:96px; border-radius:50%; background:linear-gradient(135deg, #2dd4bf, #3b82f6); display:flex; align-items:center; justify-content:center; color:#fff; font-size:44px;">
                        {"🌊"}
                    </div>
                    <h1 style="margin:0; font-size:30px; font-weight:700; text-align:center; color:#1f2937;">{"Ocean DeFi Garden"}</h1>
                    <p style="margin:0; text-align:center; color:#4b5563;">{ subtitle }</p>
                    <button
                        {onclick}
                        disabled={props.loading}
                        style="width:100%; padding:12px 24px; background:linear-gradient(90deg, #14b8a6, #3b82f6); color:#fff; border:none; border-radius:8px; font-weight:500; box-shadow:0 2px 6px rgba(0,0,0,0.15); cursor:pointer;"
                    >
                        if props.loading {
                            <span style="display:flex; align-items:center; justify-content:center; gap:10px;">
                                <span class="spinner"></span>
                                { busy_label }
                            </span>
                        } else {
                            { idle_label }
                        }
                    </button>
                    if let Some(err) = props.error.clone() {
                        <p style="margin:0; font-size:13px; color:#b91c1c; text-align:center;">{ err }</p>
                    }
                </div>
            </div>
        </div>
    }
}
