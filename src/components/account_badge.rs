use yew::prelude::*;

use crate::util::short_address;
use crate::wallet::WalletAccount;

#[derive(Properties, PartialEq, Clone)]
pub struct AccountBadgeProps {
    pub account: WalletAccount,
    pub on_disconnect: Callback<()>,
}

#[function_component]
pub fn AccountBadge(props: &AccountBadgeProps) -> Html {
    let disconnect = {
        let cb = props.on_disconnect.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:16px; right:16px; padding:8px 12px; border-radius:8px; background:rgba(255,255,255,0.9); box-shadow:0 4px 12px rgba(0,0,0,0.2); z-index:40; display:flex; gap:10px; align-items:center; font-size:13px;">
            <span title={props.account.address.clone()} style="font-family:monospace;">{ short_address(&props.account.address) }</span>
            <button onclick={disconnect} style="padding:4px 8px; border:1px solid #cbd5e1; border-radius:6px; background:#fff; cursor:pointer;">{"Disconnect"}</button>
        </div>
    }
}
