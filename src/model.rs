// Post index data and the filtering behind the library page.

use serde::Deserialize;
use std::rc::Rc;
use yew::Reducible;

use crate::state::ViewerImage;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Lower-cased text the search box matches against.
    fn haystack(&self) -> String {
        format!("{}{}{}", self.title, self.summary, self.tags.join(" ")).to_lowercase()
    }

    pub fn meta_line(&self) -> String {
        format!("{} · {} · {}", self.date, self.category, self.tags.join(", "))
    }

    pub fn href(&self) -> String {
        format!("?{}={}", crate::config::POST_QUERY_PARAM, self.slug)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => post.category == *name,
        }
    }
}

pub fn filter_posts<'a>(posts: &'a [Post], category: &CategoryFilter, query: &str) -> Vec<&'a Post> {
    let query = query.to_lowercase();
    posts
        .iter()
        .filter(|p| category.matches(p) && p.haystack().contains(&query))
        .collect()
}

/// `All` followed by each category in first-seen order.
pub fn categories(posts: &[Post]) -> Vec<CategoryFilter> {
    let mut out = vec![CategoryFilter::All];
    for post in posts {
        let named = CategoryFilter::Named(post.category.clone());
        if !out.contains(&named) {
            out.push(named);
        }
    }
    out
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexState {
    pub posts: Vec<Post>,
    pub category: CategoryFilter,
    pub query: String,
    pub loaded: bool,
}

pub enum IndexAction {
    Loaded(Vec<Post>),
    SetCategory(CategoryFilter),
    SetQuery(String),
}

impl IndexState {
    pub fn visible(&self) -> Vec<&Post> {
        filter_posts(&self.posts, &self.category, &self.query)
    }
}

impl Reducible for IndexState {
    type Action = IndexAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            IndexAction::Loaded(posts) => {
                new.posts = posts;
                new.loaded = true;
            }
            IndexAction::SetCategory(c) => new.category = c,
            IndexAction::SetQuery(q) => new.query = q,
        }
        Rc::new(new)
    }
}

/// Open image viewers on the post page; each click opens another, each closes on its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerStack {
    pub open: Vec<(u32, ViewerImage)>,
    next_id: u32,
}

pub enum ViewerAction {
    Open(ViewerImage),
    Close(u32),
}

impl Reducible for ViewerStack {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ViewerAction::Open(image) => {
                new.open.push((new.next_id, image));
                new.next_id = new.next_id.wrapping_add(1);
            }
            ViewerAction::Close(id) => new.open.retain(|(open_id, _)| *open_id != id),
        }
        Rc::new(new)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Button face: the mode a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark Mode",
            Theme::Dark => "Switch to Light Mode",
        }
    }
}
