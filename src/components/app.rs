use super::{index_view::IndexView, post_view::PostView, theme_toggle::ThemeToggle};
use crate::config;
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Index,
    Post(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| match config::requested_slug() {
        Some(slug) => View::Post(slug),
        None => View::Index,
    });

    let content = match &*view {
        View::Index => html! { <IndexView /> },
        View::Post(slug) => html! { <PostView slug={slug.clone()} /> },
    };

    html! {<>
        <header id="top-bar">
            <a class="site-title" href="./">{"Library"}</a>
            <ThemeToggle />
        </header>
        <main>{ content }</main>
    </>}
}
