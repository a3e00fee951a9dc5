use web_sys::PointerEvent;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::model::{Position, ThemeAnimal};
use crate::state::{AnimalDragItem, DragKind, DragSession, SpriteMetrics};
use crate::util::{percent, with_alpha};

#[derive(Properties, PartialEq, Clone)]
pub struct DraggableAnimalProps {
    pub animal: ThemeAnimal,
    pub accent_color: String,
    /// This sprite is the source of the active gesture.
    #[prop_or_default]
    pub dragging: bool,
    pub on_drag_start: Callback<DragSession>,
}

#[function_component]
pub fn DraggableAnimal(props: &DraggableAnimalProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let animal = &props.animal;
    let metrics = SpriteMetrics::compute(
        config.sprite_base_size,
        config.sprite_size_factor,
        animal.level,
        animal.max_level,
    );
    let accent = props.accent_color.as_str();

    let pointer_down = {
        let cb = props.on_drag_start.clone();
        let item = AnimalDragItem::from(animal);
        let footprint = metrics.size;
        Callback::from(move |e: PointerEvent| {
            // primary button only for mice; touch and pen report button 0
            if e.button() != 0 {
                return;
            }
            e.prevent_default();
            cb.emit(DragSession::start(
                DragKind::Animal,
                item.clone(),
                footprint,
                e.pointer_id(),
                e.client_x() as f64,
                e.client_y() as f64,
            ));
        })
    };

    let opacity = if props.dragging { 0.5 } else { 1.0 };
    let wrapper_style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; opacity:{}; cursor:move; user-select:none; touch-action:none; animation:sprite-appear 0.5s ease-out;",
        animal.position.x, animal.position.y, metrics.size, metrics.size, opacity
    );
    let badge_style = format!(
        "position:absolute; top:-8px; right:-8px; width:24px; height:24px; border-radius:50%; display:flex; align-items:center; justify-content:center; font-size:12px; font-weight:700; color:#fff; z-index:10; background:{accent}; box-shadow:0 0 10px {accent};"
    );
    let glow_style = format!(
        "position:absolute; inset:0; border-radius:50%; filter:blur(8px); z-index:-1; background:{accent}; opacity:{};",
        metrics.glow_opacity
    );
    let bar_fill_style = format!(
        "height:100%; border-radius:999px; width:{}; background:{accent};",
        percent(metrics.level_fraction)
    );

    html! {
        <div class="sprite" style={wrapper_style} onpointerdown={pointer_down}>
            <div style={badge_style}>{ animal.level }</div>
            <div style={glow_style}></div>
            <img
                src={animal.image.clone()}
                alt={animal.name.clone()}
                draggable="false"
                style="width:100%; height:100%; object-fit:contain; animation:sprite-float 3s ease-in-out infinite;"
            />
            <div style="position:absolute; bottom:-8px; left:10%; width:80%;">
                <div style={format!("height:6px; border-radius:999px; overflow:hidden; background:{};", with_alpha("#FFFFFF", "4D"))}>
                    <div style={bar_fill_style}></div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct DragGhostProps {
    pub session: DragSession,
    /// Top-left corner inside the aquarium.
    pub at: Position,
}

/// Semi-transparent copy of the dragged sprite that follows the pointer.
#[function_component]
pub fn DragGhost(props: &DragGhostProps) -> Html {
    let s = &props.session;
    let at = props.at;
    let style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; opacity:0.75; pointer-events:none; z-index:30;",
        at.x, at.y, s.footprint, s.footprint
    );
    html! {
        <div style={style}>
            <img src={s.item.image.clone()} alt={s.item.name.clone()} draggable="false" style="width:100%; height:100%; object-fit:contain;" />
        </div>
    }
}
