use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    account_badge::AccountBadge, aquarium_view::AquariumView, login_screen::LoginScreen,
    project_detail_modal::ProjectDetailModal, project_panel::ProjectPanel,
    save_notice::SaveNotice, tx_status::TxStatusPanel,
};
use crate::config::{AppConfig, AppMode};
use crate::model::{GardenAction, GardenState, Position, Project, sample_projects};
use crate::state::{LoginAction, LoginState, NoticeState, TaskScope, TxAction, TxState};
use crate::util::{clog, cwarn};
use crate::wallet::{self, SimulatedWallet, Transaction, WalletAccount, WalletClient};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let mode = config.mode;
    let garden = use_reducer(|| GardenState::new(sample_projects()));
    let login = use_reducer(LoginState::default);
    let tx = use_reducer(TxState::default);
    let account = use_state(|| None::<WalletAccount>);
    let notice = use_state(NoticeState::default);
    let wallet = {
        let config = config.clone();
        use_memo((), move |_| -> Rc<dyn WalletClient> {
            Rc::new(SimulatedWallet::from_config(&config))
        })
    };
    // replaced on disconnect so work started for one account never lands in the next
    let tasks = use_mut_ref(TaskScope::default);

    // Effect: late async results are discarded once the app is torn down
    {
        let tasks = tasks.clone();
        use_effect_with((), move |_| move || tasks.borrow().cancel());
    }

    let on_login_begin = {
        let login = login.clone();
        let account = account.clone();
        let wallet = wallet.clone();
        let tasks = tasks.clone();
        Callback::from(move |_| {
            login.dispatch(LoginAction::Begin);
            if mode != AppMode::WalletCommit {
                return;
            }
            let login = login.clone();
            let account = account.clone();
            let client = (*wallet).clone();
            let token = tasks.borrow().token();
            spawn_local(async move {
                let outcome = client.connect().await;
                if token.is_cancelled() {
                    return;
                }
                match outcome {
                    Ok(acc) => {
                        clog(&format!("wallet connected: {}", acc.address));
                        account.set(Some(acc));
                        login.dispatch(LoginAction::Complete);
                    }
                    Err(err) => {
                        cwarn(&format!("wallet connect failed: {err}"));
                        login.dispatch(LoginAction::Fail {
                            message: err.to_string(),
                        });
                    }
                }
            });
        })
    };
    let on_login_complete = {
        let login = login.clone();
        Callback::from(move |_| {
            clog("login complete");
            login.dispatch(LoginAction::Complete);
        })
    };

    let gate_open = match mode {
        AppMode::DraftThenSave => login.is_logged_in(),
        AppMode::WalletCommit => login.is_logged_in() && account.is_some(),
    };
    if !gate_open {
        return html! {
            <LoginScreen
                mode={mode}
                loading={login.is_loading()}
                error={login.error.clone()}
                on_begin={on_login_begin}
                on_complete={on_login_complete}
                delay_ms={config.login_delay_ms}
            />
        };
    }

    let on_animal_move = {
        let garden = garden.clone();
        Callback::from(move |(animal_id, position): (String, Position)| {
            let action = match mode {
                AppMode::DraftThenSave => GardenAction::StageMove { animal_id, position },
                AppMode::WalletCommit => GardenAction::MoveAnimal { animal_id, position },
            };
            garden.dispatch(action);
        })
    };
    let on_select_project = {
        let garden = garden.clone();
        Callback::from(move |project: Project| {
            garden.dispatch(GardenAction::Select {
                project_id: project.id,
            })
        })
    };
    let on_close_modal = {
        let garden = garden.clone();
        Callback::from(move |_| garden.dispatch(GardenAction::CloseDetail))
    };

    let save_draft = {
        let garden = garden.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            clog(&format!("saving {} staged move(s)", garden.pending.len()));
            garden.dispatch(GardenAction::CommitPending);
            notice.set(notice.shown());
        })
    };
    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(notice.dismissed()))
    };

    let submit_tx = {
        let tx = tx.clone();
        let account = account.clone();
        let wallet = wallet.clone();
        let tasks = tasks.clone();
        let chain = config.chain.clone();
        Callback::from(move |_: MouseEvent| {
            if tx.status.is_pending() {
                return;
            }
            tx.dispatch(TxAction::Submit);
            if account.is_none() {
                tx.dispatch(TxAction::Failed {
                    message: wallet::WalletError::NotConnected.to_string(),
                });
                return;
            }
            let tx = tx.clone();
            let client = (*wallet).clone();
            let token = tasks.borrow().token();
            let transaction = Transaction::empty(&chain);
            clog(&format!("submitting empty transaction on {chain}"));
            spawn_local(async move {
                let on_executed = {
                    let tx = tx.clone();
                    let token = token.clone();
                    move |result: &wallet::ExecutionResult| {
                        if !token.is_cancelled() {
                            clog(&format!("transaction executed: {}", result.digest));
                            tx.dispatch(TxAction::Submitted {
                                digest: result.digest.clone(),
                            });
                        }
                    }
                };
                let outcome = wallet::submit_and_confirm(client.as_ref(), transaction, on_executed).await;
                if token.is_cancelled() {
                    return;
                }
                match outcome {
                    Ok(details) => {
                        clog(&format!("transaction confirmed: {}", details.digest));
                        tx.dispatch(TxAction::Confirmed {
                            digest: details.digest,
                        });
                    }
                    Err(err) => {
                        cwarn(&format!("transaction failed: {err}"));
                        tx.dispatch(TxAction::Failed {
                            message: err.to_string(),
                        });
                    }
                }
            });
        })
    };
    let dismiss_tx = {
        let tx = tx.clone();
        Callback::from(move |_| tx.dispatch(TxAction::Dismiss))
    };
    let disconnect = {
        let account = account.clone();
        let login = login.clone();
        let tx = tx.clone();
        let tasks = tasks.clone();
        Callback::from(move |_| {
            clog("wallet disconnected");
            tasks.borrow_mut().renew();
            tx.dispatch(TxAction::Reset);
            account.set(None);
            login.dispatch(LoginAction::Reset);
        })
    };

    let projects = garden.display_projects();
    let button_style = "position:absolute; bottom:48px; right:48px; padding:16px 32px; border-radius:999px; background:linear-gradient(90deg, #2dd4bf, #3b82f6); color:#fff; font-weight:700; font-size:18px; border:none; box-shadow:0 4px 12px rgba(0,0,0,0.25); cursor:pointer;";

    let save_controls = match mode {
        AppMode::DraftThenSave => html! {
            <>
                if garden.has_pending() {
                    <button onclick={save_draft} style={button_style}>{"Save Configuration"}</button>
                }
                <SaveNotice visible={notice.visible} generation={notice.generation} duration_ms={config.notice_duration_ms} on_dismiss={dismiss_notice} />
            </>
        },
        AppMode::WalletCommit => {
            let pending = tx.status.is_pending();
            html! {
                <>
                    <button onclick={submit_tx} disabled={pending} style={format!("{button_style} opacity:{};", if pending { 0.7 } else { 1.0 })}>
                        {"Save"}
                    </button>
                    <TxStatusPanel status={tx.status.clone()} on_dismiss={dismiss_tx} />
                </>
            }
        }
    };

    html! {
        <ContextProvider<AppConfig> context={config.clone()}>
            <div style="position:relative; display:flex; flex-direction:column; height:100vh; background:linear-gradient(180deg, #1e40af, #dbeafe);">
                if let Some(acc) = (*account).clone() {
                    <AccountBadge account={acc} on_disconnect={disconnect} />
                }
                <div style="flex-grow:1; position:relative; padding:16px; min-height:0;">
                    <div style="height:100%; border:4px solid #3b82f6; border-radius:16px; box-shadow:inset 0 2px 8px rgba(0,0,0,0.2); background:#fff;">
                        <AquariumView projects={projects.clone()} on_animal_move={on_animal_move} />
                    </div>
                    { save_controls }
                </div>
                <div style="height:33%; background:#fff; border-top:1px solid #bfdbfe; box-shadow:inset 0 2px 6px rgba(0,0,0,0.06); overflow:auto; padding:16px;">
                    <ProjectPanel projects={projects} on_select_project={on_select_project} />
                </div>
                if let Some(project) = garden.selected_project().cloned() {
                    <ProjectDetailModal project={project} on_close={on_close_modal} />
                }
            </div>
        </ContextProvider<AppConfig>>
    }
}
