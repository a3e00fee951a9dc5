use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, PointerEvent};
use yew::prelude::*;

use super::bubbles::Bubbles;
use super::draggable_animal::{DragGhost, DraggableAnimal};
use crate::config::AppConfig;
use crate::model::{Position, Project};
use crate::state::{
    ContainerSize, DragKind, DragSession, DropOutcome, SurfaceRect, ghost_position, resolve_drop,
};
use crate::util::{clog, cwarn};

const ACCEPTS: [DragKind; 1] = [DragKind::Animal];

#[derive(Properties, PartialEq, Clone)]
pub struct AquariumViewProps {
    pub projects: Vec<Project>,
    pub on_animal_move: Callback<(String, Position)>,
}

fn measure(container_ref: &NodeRef) -> Option<ContainerSize> {
    let el = container_ref.cast::<HtmlElement>()?;
    Some(ContainerSize {
        width: el.offset_width() as f64,
        height: el.offset_height() as f64,
    })
}

fn surface_rect(container_ref: &NodeRef) -> Option<SurfaceRect> {
    let rect = container_ref.cast::<HtmlElement>()?.get_bounding_client_rect();
    Some(SurfaceRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

#[function_component(AquariumView)]
pub fn aquarium_view(props: &AquariumViewProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let container_ref = use_node_ref();
    let container_size = use_state(ContainerSize::default);
    // listeners read these; the state handles above only drive rendering
    let size_ref = use_mut_ref(ContainerSize::default);
    let session_ref = use_mut_ref(|| None::<DragSession>);
    let drag = use_state(|| None::<DragSession>);

    // Effect: track container size for the component's lifetime
    {
        let container_ref = container_ref.clone();
        let container_size = container_size.clone();
        let size_ref = size_ref.clone();
        use_effect_with((), move |_| {
            let update = move || {
                if let Some(size) = measure(&container_ref) {
                    *size_ref.borrow_mut() = size;
                    container_size.set(size);
                }
            };
            update();
            let listener =
                web_sys::window().map(|win| EventListener::new(&win, "resize", move |_| update()));
            move || drop(listener)
        });
    }

    // Effect: follow the pointer while a gesture is active
    {
        let drag_active = drag.is_some();
        let drag = drag.clone();
        let session_ref = session_ref.clone();
        let size_ref = size_ref.clone();
        let container_ref = container_ref.clone();
        let on_move = props.on_animal_move.clone();
        let strategy = config.drop_strategy;
        use_effect_with(drag_active, move |active| {
            let mut listeners = Vec::new();
            if let (true, Some(win)) = (*active, web_sys::window()) {
                let move_session = session_ref.clone();
                let move_drag = drag.clone();
                listeners.push(EventListener::new(&win, "pointermove", move |event| {
                    let Some(e) = event.dyn_ref::<PointerEvent>() else {
                        return;
                    };
                    let mut slot = move_session.borrow_mut();
                    if let Some(session) = slot.as_mut() {
                        if session.pointer_id == e.pointer_id() {
                            session.update(e.client_x() as f64, e.client_y() as f64);
                            move_drag.set(Some(session.clone()));
                        }
                    }
                }));

                let up_session = session_ref.clone();
                let up_drag = drag.clone();
                listeners.push(EventListener::new(&win, "pointerup", move |event| {
                    let Some(e) = event.dyn_ref::<PointerEvent>() else {
                        return;
                    };
                    let matches = up_session
                        .borrow()
                        .as_ref()
                        .is_some_and(|s| s.pointer_id == e.pointer_id());
                    if !matches {
                        return;
                    }
                    let Some(mut session) = up_session.borrow_mut().take() else {
                        return;
                    };
                    up_drag.set(None);
                    session.update(e.client_x() as f64, e.client_y() as f64);
                    // a press without movement is a click, not a drop
                    if session.delta() == (0.0, 0.0) {
                        return;
                    }
                    let Some(surface) = surface_rect(&container_ref) else {
                        return;
                    };
                    let container = *size_ref.borrow();
                    match resolve_drop(strategy, &ACCEPTS, &session, surface, container) {
                        DropOutcome::Moved { animal_id, position } => {
                            on_move.emit((animal_id, position));
                        }
                        DropOutcome::Cancelled => {
                            clog(&format!("drop of {} outside the aquarium ignored", session.item.id));
                        }
                        DropOutcome::Rejected(kind) => {
                            cwarn(&format!("aquarium does not accept `{}` drops", kind.tag()));
                        }
                    }
                }));

                let cancel_session = session_ref.clone();
                let cancel_drag = drag.clone();
                listeners.push(EventListener::new(&win, "pointercancel", move |_| {
                    cancel_session.borrow_mut().take();
                    cancel_drag.set(None);
                }));
            }
            move || drop(listeners)
        });
    }

    let on_drag_start = {
        let drag = drag.clone();
        let session_ref = session_ref.clone();
        Callback::from(move |session: DragSession| {
            if session_ref.borrow().is_some() {
                return;
            }
            *session_ref.borrow_mut() = Some(session.clone());
            drag.set(Some(session));
        })
    };

    let dragged_id = drag.as_ref().map(|s| s.item.id.clone());

    html! {
        <div
            ref={container_ref.clone()}
            class="aquarium"
            style="position:relative; width:100%; height:100%; overflow:hidden; border-radius:12px; background:linear-gradient(180deg, #1e6fb8 0%, #3fa9d6 60%, #8fd8e8 100%);"
        >
            <Bubbles rise={container_size.height} />
            { for props.projects.iter().map(|project| {
                let animal = project.theme_animal.clone();
                let dragging = dragged_id.as_deref() == Some(animal.id.as_str());
                html! {
                    <DraggableAnimal
                        key={project.id.clone()}
                        animal={animal}
                        accent_color={project.accent_color.clone()}
                        dragging={dragging}
                        on_drag_start={on_drag_start.clone()}
                    />
                }
            }) }
            if let Some(session) = (*drag).clone() {
                <DragGhost
                    at={ghost_position(config.drop_strategy, &session, surface_rect(&container_ref))}
                    session={session}
                />
            }
            <div class="light-rays" style="position:absolute; inset:0; pointer-events:none; opacity:0.3;"></div>
        </div>
    }
}
