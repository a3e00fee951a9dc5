use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::model::Project;
use crate::state::{LevelPreview, PreviewVisibility, layout::sprite_size, level_preview};
use crate::util::{cwarn, with_alpha};

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectDetailModalProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ProjectDetailModal(props: &ProjectDetailModalProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let preview = use_state(PreviewVisibility::default);

    // Effect: Escape closes while the modal is mounted
    {
        let on_close = props.on_close.clone();
        use_effect_with(on_close, move |on_close| {
            let on_close = on_close.clone();
            let listener = web_sys::window().map(|win| {
                EventListener::new(&win, "keydown", move |event| {
                    if let Some(e) = event.dyn_ref::<KeyboardEvent>() {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let p = &props.project;
    let accent = p.accent_color.as_str();
    let current_size = sprite_size(config.preview_base_size, config.sprite_size_factor, p.level);
    let next = level_preview(p, config.preview_base_size, config.sprite_size_factor);

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let toggle_cb = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| preview.set(preview.toggled()))
    };
    let details_cb = Callback::from(|_: MouseEvent| {
        if let Some(win) = web_sys::window() {
            if let Err(err) = win.open_with_url_and_target("#", "_blank") {
                cwarn(&format!("could not open project details: {err:?}"));
            }
        }
    });

    let level_badge = |level: u32| {
        html! {
            <div style={format!("position:absolute; top:-4px; right:-4px; width:24px; height:24px; border-radius:50%; background:#fff; display:flex; align-items:center; justify-content:center; font-size:12px; font-weight:700; box-shadow:0 1px 2px rgba(0,0,0,0.1); color:{accent}; border:2px solid {accent};")}>
                { level }
            </div>
        }
    };

    let next_html = match next {
        LevelPreview::MaxLevel => html! {
            <div style="display:flex; flex-direction:column; align-items:center;">
                <div style={format!("position:relative; width:{current_size}px; height:{current_size}px; border-radius:50%; border:2px dashed {accent}; display:flex; align-items:center; justify-content:center; margin-bottom:8px; color:{accent}; font-size:32px;")}>
                    {"🏆"}
                </div>
                <span style="font-size:14px; color:#4b5563;">{"Max Level"}</span>
            </div>
        },
        LevelPreview::Next { level, size } => {
            let shown = preview.is_shown();
            let bg = with_alpha(accent, if shown { "40" } else { "10" });
            let img_style = format!(
                "width:75%; height:75%; object-fit:contain; transition:opacity 0.5s; opacity:{};{}",
                if shown { 1.0 } else { 0.3 },
                if shown { " animation:sprite-grow 3s ease-in-out infinite;" } else { "" }
            );
            html! {
                <div style="display:flex; flex-direction:column; align-items:center;">
                    <div style={format!("position:relative; width:{size}px; height:{size}px; border-radius:50%; display:flex; align-items:center; justify-content:center; margin-bottom:8px; transition:all 0.5s; background:{bg};")}>
                        <img src={p.theme_animal.image.clone()} alt={p.theme_animal.name.clone()} style={img_style} />
                        { level_badge(level) }
                    </div>
                    <span style="font-size:14px; color:#4b5563;">{"Next Level"}</span>
                </div>
            }
        }
    };

    html! {
        <div class="modal-backdrop" onclick={close_cb.clone()} style="position:fixed; inset:0; background:rgba(0,0,0,0.5); display:flex; align-items:center; justify-content:center; z-index:50; padding:16px;">
            <div class="modal" onclick={stop} style="background:#fff; border-radius:16px; box-shadow:0 10px 30px rgba(0,0,0,0.3); max-width:448px; width:100%; overflow:hidden;">
                <div style={format!("padding:24px; display:flex; align-items:center; justify-content:space-between; border-bottom:1px solid #e5e7eb; background:{};", with_alpha(accent, "10"))}>
                    <div style="display:flex; align-items:center;">
                        <div style={format!("width:48px; height:48px; border-radius:50%; display:flex; align-items:center; justify-content:center; margin-right:16px; background:{};", with_alpha(accent, "30"))}>
                            <img src={p.theme_animal.image.clone()} alt={p.theme_animal.name.clone()} style="width:32px; height:32px; object-fit:contain;" />
                        </div>
                        <div>
                            <h2 style="margin:0; font-size:20px; font-weight:700; color:#1f2937;">{ p.name.clone() }</h2>
                            <p style="margin:0; font-size:14px; color:#4b5563;">{ format!("Theme Animal: {}", p.theme_animal.name) }</p>
                        </div>
                    </div>
                    <button onclick={close_cb} aria-label="Close" style="background:none; border:none; font-size:20px; color:#6b7280; cursor:pointer;">{"✕"}</button>
                </div>

                <div style="padding:24px;">
                    <div style="margin-bottom:24px;">
                        <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:8px;">
                            <h3 style="margin:0; font-weight:500; color:#374151;">{"Progress"}</h3>
                            <span style={format!("font-size:14px; font-weight:600; color:{accent};")}>
                                { format!("{}/{} Transactions", p.current_transactions, p.target_transactions) }
                            </span>
                        </div>
                        <div style="width:100%; height:12px; background:#f3f4f6; border-radius:999px; overflow:hidden; margin-bottom:8px;">
                            <div style={format!("height:100%; border-radius:999px; transition:width 0.5s; width:{}%; background:linear-gradient(90deg, {}, {accent});", p.progress(), with_alpha(accent, "80"))}></div>
                        </div>
                        <div style="display:flex; justify-content:space-between; font-size:12px; color:#6b7280;">
                            <span>{ format!("Level {}", p.level) }</span>
                            <span>{ format!("Level {}", p.max_level) }</span>
                        </div>
                    </div>

                    <div style="background:#f9fafb; border-radius:12px; padding:16px; margin-bottom:24px;">
                        <h3 style="margin:0 0 12px 0; font-weight:500; color:#374151;">{"Growth Preview"}</h3>
                        <div style="display:flex; align-items:center; justify-content:center;">
                            <div style="display:flex; flex-direction:column; align-items:center;">
                                <div style={format!("position:relative; width:{current_size}px; height:{current_size}px; border-radius:50%; display:flex; align-items:center; justify-content:center; margin-bottom:8px; background:{};", with_alpha(accent, "20"))}>
                                    <img src={p.theme_animal.image.clone()} alt={p.theme_animal.name.clone()} style="width:75%; height:75%; object-fit:contain; animation:sprite-float 3s ease-in-out infinite;" />
                                    { level_badge(p.level) }
                                </div>
                                <span style="font-size:14px; color:#4b5563;">{"Current"}</span>
                            </div>
                            <span style="margin:0 16px; color:#9ca3af; font-size:20px;">{"›"}</span>
                            { next_html }
                        </div>
                    </div>

                    <div style="display:flex; gap:12px;">
                        <button onclick={details_cb} style="flex:1; padding:8px 16px; background:#f3f4f6; color:#1f2937; border:none; border-radius:8px; font-weight:500; cursor:pointer;">
                            {"View Details"}
                        </button>
                        if !p.is_max_level() {
                            <button onclick={toggle_cb} style={format!("flex:1; padding:8px 16px; color:#fff; border:none; border-radius:8px; font-weight:500; cursor:pointer; background:{accent};")}>
                                { preview.button_label() }
                            </button>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
