use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::model::Project;
use crate::util::with_alpha;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectPanelProps {
    pub projects: Vec<Project>,
    pub on_select_project: Callback<Project>,
}

fn scroll_by(node: &NodeRef, left: f64) {
    if let Some(el) = node.cast::<Element>() {
        let opts = ScrollToOptions::new();
        opts.set_left(left);
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&opts);
    }
}

#[function_component(ProjectPanel)]
pub fn project_panel(props: &ProjectPanelProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let scroll_ref = use_node_ref();
    let step = config.scroll_step;

    let scroll_left = {
        let node = scroll_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_by(&node, -step))
    };
    let scroll_right = {
        let node = scroll_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_by(&node, step))
    };
    let arrow_style = "position:absolute; top:50%; transform:translateY(-50%); z-index:10; background:rgba(255,255,255,0.8); border:none; border-radius:50%; width:28px; height:28px; box-shadow:0 1px 4px rgba(0,0,0,0.2); cursor:pointer; color:#4b5563;";

    html! {
        <div style="position:relative; height:100%; padding:12px 16px;">
            <div style="position:relative;">
                <button onclick={scroll_left} style={format!("{arrow_style} left:0;")} aria-label="Scroll left">{"‹"}</button>
                <button onclick={scroll_right} style={format!("{arrow_style} right:0;")} aria-label="Scroll right">{"›"}</button>
                <div ref={scroll_ref} class="no-scrollbar" style="display:flex; overflow-x:auto; padding:0 24px 8px 24px;">
                    { for props.projects.iter().map(|project| {
                        let on_select = props.on_select_project.clone();
                        let selected = project.clone();
                        html! {
                            <ProjectCard
                                key={project.id.clone()}
                                project={project.clone()}
                                on_click={Callback::from(move |_| on_select.emit(selected.clone()))}
                            />
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: Project,
    pub on_click: Callback<()>,
}

#[function_component]
pub fn ProjectCard(props: &ProjectCardProps) -> Html {
    let p = &props.project;
    let accent = p.accent_color.as_str();
    let border = if p.is_completed() { accent } else { "transparent" };
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let card_style = format!(
        "flex-shrink:0; width:256px; margin-right:16px; border-radius:12px; overflow:hidden; cursor:pointer; border:2px solid {border}; background:{}; box-shadow:0 2px 6px rgba(0,0,0,0.12);",
        with_alpha(accent, "30")
    );
    let bar_style = format!(
        "height:100%; border-radius:999px; width:{}%; background:linear-gradient(90deg, {}, {accent}); transition:width 0.5s;",
        p.progress(),
        with_alpha(accent, "80")
    );
    html! {
        <div class="card" style={card_style} {onclick}>
            <div style="padding:24px;">
                <div style="display:flex; align-items:center; margin-bottom:16px;">
                    <div style={format!("width:56px; height:56px; border-radius:50%; display:flex; align-items:center; justify-content:center; margin-right:16px; background:{};", with_alpha(accent, "20"))}>
                        <img src={p.theme_animal.image.clone()} alt={p.theme_animal.name.clone()} style="width:32px; height:32px; object-fit:contain;" />
                    </div>
                    <div>
                        <h3 style="margin:0; font-weight:500; color:#1f2937;">{ p.name.clone() }</h3>
                        <p style="margin:0; font-size:12px; color:#6b7280;">{ format!("Level {}/{}", p.level, p.max_level) }</p>
                    </div>
                </div>
                <div style="display:flex; justify-content:space-between; font-size:12px; margin-bottom:4px;">
                    <span style="color:#4b5563;">{"Progress"}</span>
                    <span style={format!("font-weight:500; color:{accent};")}>{ format!("{}%", p.progress()) }</span>
                </div>
                <div style="width:100%; height:8px; background:#f3f4f6; border-radius:999px; overflow:hidden;">
                    <div style={bar_style}></div>
                </div>
            </div>
        </div>
    }
}
