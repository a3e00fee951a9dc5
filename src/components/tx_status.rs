use yew::prelude::*;

use crate::state::TxStatus;

#[derive(Properties, PartialEq, Clone)]
pub struct TxStatusPanelProps {
    pub status: TxStatus,
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn TxStatusPanel(props: &TxStatusPanelProps) -> Html {
    let box_style = "position:absolute; bottom:80px; right:24px; padding:8px 12px; border-radius:6px; box-shadow:0 2px 6px rgba(0,0,0,0.15); font-size:13px; max-width:360px; word-break:break-all;";
    match &props.status {
        TxStatus::Idle => html! {},
        TxStatus::Submitting => html! {
            <p style={format!("{box_style} background:rgba(255,255,255,0.9); color:#1f2937;")}>
                <span class="spinner dark"></span>{" Waiting for signature..."}
            </p>
        },
        TxStatus::Confirming { digest } => html! {
            <p style={format!("{box_style} background:rgba(255,255,255,0.9); color:#1f2937;")}>
                <span class="spinner dark"></span>{ format!(" Confirming {digest}...") }
            </p>
        },
        TxStatus::Confirmed { digest } => html! {
            <p style={format!("{box_style} background:rgba(255,255,255,0.9); color:#1f2937;")}>
                { format!("Tx Digest: {digest}") }
            </p>
        },
        TxStatus::Failed { message } => {
            let dismiss = {
                let cb = props.on_dismiss.clone();
                Callback::from(move |_: MouseEvent| cb.emit(()))
            };
            html! {
                <p role="alert" style={format!("{box_style} background:#fee2e2; color:#991b1b; display:flex; gap:8px; align-items:center;")}>
                    <span>{ format!("Transaction failed: {message}") }</span>
                    <button onclick={dismiss} style="background:none; border:none; color:#991b1b; cursor:pointer;">{"✕"}</button>
                </p>
            }
        }
    }
}
