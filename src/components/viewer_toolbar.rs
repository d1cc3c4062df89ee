use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerToolbarProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_download: Callback<()>,
    pub on_close: Callback<()>,
    pub zoom_label: NodeRef,
}

#[function_component(ViewerToolbar)]
pub fn viewer_toolbar(props: &ViewerToolbarProps) -> Html {
    let button = |label: &'static str, tooltip: &'static str, cb: &Callback<()>| {
        let cb = cb.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        });
        html! { <button data-tooltip={tooltip} {onclick}>{ label }</button> }
    };
    html! {<div class="image-toolbar">
        { button("+", "Zoom In", &props.on_zoom_in) }
        { button("−", "Zoom Out", &props.on_zoom_out) }
        <span class="zoom-level" ref={props.zoom_label.clone()}></span>
        { button("Reset", "Reset Zoom/Pan", &props.on_reset) }
        { button("⬇", "Download Image", &props.on_download) }
        { button("✕", "Close", &props.on_close) }
    </div>}
}
