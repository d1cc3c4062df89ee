use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::POSTS_INDEX_PATH;
use crate::fetch;
use crate::model::{self, IndexAction, IndexState, Post};

#[derive(Properties, PartialEq, Clone)]
struct PostItemProps {
    post: Post,
}

#[function_component(PostItem)]
fn post_item(props: &PostItemProps) -> Html {
    let post = &props.post;
    html! {<div class="post-item">
        <h3><a href={post.href()}>{ post.title.clone() }</a></h3>
        <div class="post-meta">{ post.meta_line() }</div>
        <p>{ post.summary.clone() }</p>
    </div>}
}

#[function_component(IndexView)]
pub fn index_view() -> Html {
    let index = use_reducer(IndexState::default);

    {
        let index = index.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch::fetch_posts(POSTS_INDEX_PATH).await {
                    Ok(posts) => {
                        log::debug!("loaded {} posts", posts.len());
                        index.dispatch(IndexAction::Loaded(posts));
                    }
                    Err(e) => log::error!("{}", e),
                }
            });
            || ()
        });
    }

    let on_search = {
        let index = index.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            index.dispatch(IndexAction::SetQuery(input.value()));
        })
    };

    let filters = model::categories(&index.posts).into_iter().map(|category| {
        let active = category == index.category;
        let label = category.label().to_string();
        let onclick = {
            let index = index.clone();
            Callback::from(move |_: MouseEvent| index.dispatch(IndexAction::SetCategory(category.clone())))
        };
        html! { <button class={classes!(active.then_some("active"))} {onclick}>{ label }</button> }
    });

    let visible = index.visible();
    let list = if index.loaded && visible.is_empty() {
        html! { <p class="no-results">{"No posts match."}</p> }
    } else {
        html! {<>{ for visible.into_iter().map(|post| html! { <PostItem key={post.slug.clone()} post={post.clone()} /> }) }</>}
    };

    html! {<section class="library">
        <input id="search" type="search" placeholder="Search posts…" value={index.query.clone()} oninput={on_search} />
        <div class="category-filters">{ for filters }</div>
        <div id="posts-list">{ list }</div>
    </section>}
}
