use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, HtmlImageElement, MouseEvent};
use yew::prelude::*;

use super::image_viewer::ImageViewer;
use super::toc::{TableOfContents, TocEntry};
use crate::config::{self, COPY_RESET_MS};
use crate::dom::{self, Listener};
use crate::model::{ViewerAction, ViewerStack};
use crate::state::ViewerImage;
use crate::{bindings, fetch, util};

#[derive(Clone, Debug, PartialEq)]
enum Document {
    Loading,
    Ready(String),
    Failed,
}

#[derive(Properties, PartialEq, Clone)]
pub struct PostViewProps {
    pub slug: String,
}

fn highlight_code(content: &Element) {
    for block in dom::query_all(content, "pre code") {
        bindings::highlight_element(&block);
    }
}

/// Gives every h2/h3 a slug id plus a self-link, and returns the entries for the contents list.
fn decorate_headings(content: &Element) -> Vec<TocEntry> {
    let document = content.owner_document();
    let mut entries = Vec::new();
    for heading in dom::query_all(content, "h2, h3") {
        let text = heading.text_content().unwrap_or_default();
        let id = util::slugify(&text);
        heading.set_id(&id);
        let level = if heading.tag_name().eq_ignore_ascii_case("h2") { 2 } else { 3 };
        if let Some(anchor) = document.as_ref().and_then(|d| d.create_element("a").ok()) {
            let _ = anchor.set_attribute("href", &format!("#{}", id));
            anchor.set_class_name("anchor-link");
            anchor.set_inner_html("🔗");
            let _ = heading.append_child(&anchor);
        }
        entries.push(TocEntry { id, text, level });
    }
    entries
}

fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise: js_sys::Promise = window.navigator().clipboard().write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("clipboard write rejected: {:?}", e);
        }
    });
}

fn add_copy_buttons(content: &Element) -> Vec<Listener> {
    let Some(document) = content.owner_document() else {
        return Vec::new();
    };
    let mut listeners = Vec::new();
    for pre in dom::query_all(content, "pre") {
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        button.set_class_name("copy-btn");
        button.set_text_content(Some("Copy"));
        if pre.append_child(&button).is_err() {
            continue;
        }
        let Ok(pre) = pre.dyn_into::<HtmlElement>() else {
            continue;
        };
        let label = button.clone();
        let bound = Listener::new(&button, "click", move |_: MouseEvent| {
            copy_to_clipboard(pre.inner_text());
            label.set_text_content(Some("Copied"));
            let label = label.clone();
            Timeout::new(COPY_RESET_MS, move || label.set_text_content(Some("Copy"))).forget();
        });
        match bound {
            Ok(l) => listeners.push(l),
            Err(e) => log::error!("copy button: {}", e),
        }
    }
    listeners
}

fn bind_images(content: &Element, viewers: &UseReducerHandle<ViewerStack>) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for img in dom::query_all(content, "img") {
        let Ok(img) = img.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let _ = img.style().set_property("cursor", "zoom-in");
        let viewers = viewers.clone();
        let source = img.clone();
        let bound = Listener::new(&img, "click", move |_: MouseEvent| {
            viewers.dispatch(ViewerAction::Open(ViewerImage {
                src: source.src(),
                alt: source.alt(),
                natural_width: source.natural_width() as f64,
                natural_height: source.natural_height() as f64,
            }));
        });
        match bound {
            Ok(l) => listeners.push(l),
            Err(e) => log::error!("image viewer binding: {}", e),
        }
    }
    listeners
}

#[function_component(PostView)]
pub fn post_view(props: &PostViewProps) -> Html {
    let document = use_state(|| Document::Loading);
    let toc = use_state(Vec::<TocEntry>::new);
    let viewers = use_reducer(ViewerStack::default);
    let content_ref = use_node_ref();

    {
        let document = document.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            document.set(Document::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch::fetch_text(&config::post_path(&slug)).await {
                    Ok(text) => {
                        let markup = bindings::markdown_to_html(&util::expand_callouts(&text));
                        document.set(Document::Ready(markup));
                    }
                    Err(e) => {
                        log::error!("post {}: {}", slug, e);
                        document.set(Document::Failed);
                    }
                }
            });
            || ()
        });
    }

    {
        let content_ref = content_ref.clone();
        let toc = toc.clone();
        let viewers = viewers.clone();
        use_effect_with((*document).clone(), move |doc| {
            let mut listeners = Vec::new();
            if let Some(content) = content_ref.cast::<Element>() {
                match doc {
                    Document::Ready(markup) => {
                        content.set_inner_html(markup);
                        highlight_code(&content);
                        toc.set(decorate_headings(&content));
                        listeners.extend(add_copy_buttons(&content));
                        listeners.extend(bind_images(&content, &viewers));
                    }
                    Document::Loading | Document::Failed => {
                        content.set_inner_html("");
                        toc.set(Vec::new());
                    }
                }
            }
            move || drop(listeners)
        });
    }

    let status = match *document {
        Document::Loading => html! { <p class="post-status">{"Loading…"}</p> },
        Document::Failed => html! { <p class="post-status">{"Failed to load document."}</p> },
        Document::Ready(_) => html! {},
    };

    html! {<div class="post-layout">
        <TableOfContents entries={(*toc).clone()} />
        <article class="post">
            <a class="back-link" href="./">{"← Library"}</a>
            { status }
            <div id="post-content" ref={content_ref}></div>
        </article>
        { for viewers.open.iter().map(|(id, image)| {
            let on_close = {
                let viewers = viewers.clone();
                let id = *id;
                Callback::from(move |_| viewers.dispatch(ViewerAction::Close(id)))
            };
            html! { <ImageViewer key={*id} image={image.clone()} {on_close} /> }
        }) }
    </div>}
}
