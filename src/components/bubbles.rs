use yew::prelude::*;

use crate::state::{BUBBLE_COUNT, generate_bubbles};

#[derive(Properties, PartialEq, Clone)]
pub struct BubblesProps {
    /// Distance each bubble travels upward, in pixels.
    pub rise: f64,
}

#[function_component(Bubbles)]
pub fn bubbles(props: &BubblesProps) -> Html {
    let bubbles = use_memo((), |_| generate_bubbles(BUBBLE_COUNT, js_sys::Math::random));
    html! {
        <div style="position:absolute; inset:0; pointer-events:none; overflow:hidden;">
            { for bubbles.iter().map(|b| {
                let style = format!(
                    "position:absolute; bottom:0; left:{}%; width:{}px; height:{}px; border-radius:50%; background:rgba(255,255,255,0.4); opacity:0; --rise:-{}px; animation:bubble-rise {}s ease-in-out {}s infinite;",
                    b.left_pct, b.size_px, b.size_px, props.rise, b.duration_s, b.delay_s
                );
                html! { <div style={style}></div> }
            }) }
        </div>
    }
}
