// Site paths and persisted settings keys.

pub const POSTS_INDEX_PATH: &str = "data/posts.json";
pub const POSTS_DIR: &str = "posts";
pub const POST_QUERY_PARAM: &str = "post";

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

pub const COPY_RESET_MS: u32 = 1500;

pub fn post_path(slug: &str) -> String {
    format!("{}/{}.md", POSTS_DIR, slug)
}

/// `?post=<slug>` from the current location, if any.
pub fn requested_slug() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(POST_QUERY_PARAM).filter(|s| !s.is_empty())
}

pub fn load_theme() -> crate::model::Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    crate::model::Theme::from_stored(stored.as_deref())
}

pub fn store_theme(theme: crate::model::Theme) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            let _ = store.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}
