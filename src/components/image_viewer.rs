use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{EventTarget, HtmlElement, MouseEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use super::viewer_toolbar::ViewerToolbar;
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::state::minimap::click_fraction;
use crate::state::session::zoom_label;
use crate::state::{Frame, InputEvent, Point, Size, ViewerImage, ViewerSession};

type SharedSession = Rc<RefCell<Option<ViewerSession>>>;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageViewerProps {
    pub image: ViewerImage,
    pub on_close: Callback<()>,
}

fn surface_size(overlay: &HtmlElement) -> Size {
    Size::new(overlay.client_width() as f64, overlay.client_height() as f64)
}

fn render_frame(image: &HtmlElement, viewport: &HtmlElement, label: &HtmlElement, frame: &Frame) {
    label.set_text_content(Some(&zoom_label(frame.scale)));
    let style = image.style();
    let _ = style.set_property("transform", &frame.transform_css);
    let _ = style.set_property("cursor", if frame.dragging { "grabbing" } else { "grab" });
    let style = viewport.style();
    match frame.minimap {
        Some(rect) => {
            let _ = style.set_property("display", "block");
            let _ = style.set_property("left", &format!("{}%", rect.left));
            let _ = style.set_property("top", &format!("{}%", rect.top));
            let _ = style.set_property("width", &format!("{}%", rect.width));
            let _ = style.set_property("height", &format!("{}%", rect.height));
        }
        None => {
            let _ = style.set_property("display", "none");
        }
    }
}

/// Routes one DOM event into the session; a closed or missing session ignores it.
fn feed(session: &SharedSession, event: InputEvent) {
    if let Some(s) = session.borrow_mut().as_mut() {
        s.handle(&event);
    }
}

fn bind_input(
    session: &SharedSession,
    overlay: &HtmlElement,
    image: &HtmlElement,
    minimap: &HtmlElement,
) -> Result<Vec<Listener>> {
    let overlay_target: &EventTarget = overlay;
    let image_target: &EventTarget = image;
    let mut listeners = Vec::new();

    let s = session.clone();
    listeners.push(Listener::active(overlay_target, "wheel", move |e: WheelEvent| {
        e.prevent_default();
        feed(&s, InputEvent::Wheel { delta_y: e.delta_y() });
    })?);

    let s = session.clone();
    listeners.push(Listener::active(image_target, "mousedown", move |e: MouseEvent| {
        e.prevent_default();
        feed(&s, InputEvent::PointerDown(Point::new(e.client_x() as f64, e.client_y() as f64)));
    })?);
    let s = session.clone();
    listeners.push(Listener::new(image_target, "mousemove", move |e: MouseEvent| {
        feed(&s, InputEvent::PointerMove(Point::new(e.client_x() as f64, e.client_y() as f64)));
    })?);
    let s = session.clone();
    listeners.push(Listener::new(image_target, "mouseup", move |_: MouseEvent| {
        feed(&s, InputEvent::PointerUp);
    })?);
    let s = session.clone();
    listeners.push(Listener::new(image_target, "mouseleave", move |_: MouseEvent| {
        feed(&s, InputEvent::PointerLeave);
    })?);
    let s = session.clone();
    listeners.push(Listener::active(image_target, "dblclick", move |e: MouseEvent| {
        e.prevent_default();
        feed(&s, InputEvent::DoubleActivate);
    })?);

    let s = session.clone();
    listeners.push(Listener::new(image_target, "touchstart", move |e: TouchEvent| {
        feed(&s, InputEvent::TouchStart(dom::contacts(&e.touches())));
    })?);
    let s = session.clone();
    listeners.push(Listener::active(image_target, "touchmove", move |e: TouchEvent| {
        e.prevent_default();
        feed(&s, InputEvent::TouchMove(dom::contacts(&e.touches())));
    })?);
    for kind in ["touchend", "touchcancel"] {
        let s = session.clone();
        listeners.push(Listener::new(image_target, kind, move |e: TouchEvent| {
            feed(&s, InputEvent::TouchEnd(dom::contacts(&e.touches())));
        })?);
    }

    let s = session.clone();
    let minimap_el = minimap.clone();
    listeners.push(Listener::new(minimap, "mousedown", move |e: MouseEvent| {
        e.stop_propagation();
        let rect = minimap_el.get_bounding_client_rect();
        let fraction = click_fraction(
            Point::new(e.client_x() as f64, e.client_y() as f64),
            Point::new(rect.left(), rect.top()),
            rect.width(),
            rect.height(),
        );
        if let (Some(fraction), Some(session)) = (fraction, s.borrow_mut().as_mut()) {
            session.minimap_click(fraction);
        }
    })?);

    if let Some(window) = web_sys::window() {
        let s = session.clone();
        let overlay_el = overlay.clone();
        listeners.push(Listener::new(&window, "resize", move |_: web_sys::Event| {
            if let Some(session) = s.borrow_mut().as_mut() {
                session.resize(surface_size(&overlay_el));
            }
        })?);
    }
    Ok(listeners)
}

#[function_component(ImageViewer)]
pub fn image_viewer(props: &ImageViewerProps) -> Html {
    let overlay_ref = use_node_ref();
    let image_ref = use_node_ref();
    let minimap_ref = use_node_ref();
    let viewport_ref = use_node_ref();
    let zoom_ref = use_node_ref();
    let session: SharedSession = use_mut_ref(|| None);

    {
        let overlay_ref = overlay_ref.clone();
        let image_ref = image_ref.clone();
        let minimap_ref = minimap_ref.clone();
        let viewport_ref = viewport_ref.clone();
        let zoom_ref = zoom_ref.clone();
        let session = session.clone();
        let viewer_image = props.image.clone();
        use_effect_with(viewer_image, move |viewer_image| {
            let mut listeners = Vec::new();
            if let (Some(overlay), Some(image), Some(minimap), Some(viewport), Some(label)) = (
                overlay_ref.cast::<HtmlElement>(),
                image_ref.cast::<HtmlElement>(),
                minimap_ref.cast::<HtmlElement>(),
                viewport_ref.cast::<HtmlElement>(),
                zoom_ref.cast::<HtmlElement>(),
            ) {
                let mut opened = ViewerSession::open(viewer_image.clone(), surface_size(&overlay));
                let image_el = image.clone();
                opened.subscribe(move |frame| render_frame(&image_el, &viewport, &label, frame));
                log::debug!("viewer opened for {}", viewer_image.src);
                *session.borrow_mut() = Some(opened);
                match bind_input(&session, &overlay, &image, &minimap) {
                    Ok(bound) => listeners = bound,
                    Err(e) => log::error!("viewer input unavailable: {}", e),
                }
            }
            move || {
                drop(listeners);
                if let Some(mut s) = session.borrow_mut().take().filter(ViewerSession::is_open) {
                    s.close();
                    log::debug!("viewer closed for {}", s.image().src);
                }
            }
        });
    }

    let command = |f: fn(&mut ViewerSession)| {
        let session = session.clone();
        Callback::from(move |_: ()| {
            if let Some(s) = session.borrow_mut().as_mut() {
                f(s);
            }
        })
    };
    let on_download = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let guard = session.borrow();
            if let Some((src, name)) = guard.as_ref().and_then(|s| s.download()) {
                if let Err(e) = dom::save_file(src, name) {
                    log::error!("download failed: {}", e);
                }
            }
        })
    };

    let image = &props.image;
    html! {<div class="image-lightbox" ref={overlay_ref}>
        <ViewerToolbar
            on_zoom_in={command(ViewerSession::zoom_in)}
            on_zoom_out={command(ViewerSession::zoom_out)}
            on_reset={command(ViewerSession::reset)}
            {on_download}
            zoom_label={zoom_ref}
            on_close={props.on_close.clone()}
        />
        <img class="zoomed-image" ref={image_ref} src={image.src.clone()} alt={image.alt.clone()} draggable="false" />
        <div class="image-minimap" ref={minimap_ref}>
            <img src={image.src.clone()} alt="" draggable="false" />
            <div class="image-minimap-viewport" ref={viewport_ref}></div>
        </div>
    </div>}
}
