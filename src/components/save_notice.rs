use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SaveNoticeProps {
    pub visible: bool,
    /// Changes on every save; restarts the dismiss timer.
    pub generation: u32,
    pub duration_ms: u32,
    pub on_dismiss: Callback<()>,
    #[prop_or(AttrValue::Static("Configuration saved"))]
    pub message: AttrValue,
}

/// Transient confirmation banner; hides itself after `duration_ms`.
#[function_component]
pub fn SaveNotice(props: &SaveNoticeProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration = props.duration_ms;
        use_effect_with((props.visible, props.generation), move |(visible, _)| {
            let timer = visible.then(|| Timeout::new(duration, move || on_dismiss.emit(())));
            move || drop(timer)
        });
    }
    if !props.visible {
        return html! {};
    }
    html! {
        <div role="status" style="position:fixed; bottom:16px; right:16px; background:#22c55e; color:#fff; padding:8px 16px; border-radius:8px; box-shadow:0 4px 12px rgba(0,0,0,0.2); z-index:60; animation:panel-in 0.3s ease-out;">
            { props.message.clone() }
        </div>
    }
}
