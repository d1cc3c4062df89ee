use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{LibraryError, Result};
use crate::model::Post;

async fn fetch_ok(path: &str) -> Result<Response> {
    let window = web_sys::window().ok_or(LibraryError::MissingWindow)?;
    let resp: Response = JsFuture::from(window.fetch_with_str(path)).await?.dyn_into()?;
    if !resp.ok() {
        return Err(LibraryError::Fetch {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    Ok(resp)
}

pub async fn fetch_text(path: &str) -> Result<String> {
    let resp = fetch_ok(path).await?;
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| LibraryError::Js(format!("{} did not return text", path)))
}

pub async fn fetch_posts(path: &str) -> Result<Vec<Post>> {
    let raw = fetch_text(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
