use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to fetch {path} (status {status})")]
    Fetch { path: String, status: u16 },
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid post index: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no global window")]
    MissingWindow,
}

impl From<JsValue> for LibraryError {
    fn from(value: JsValue) -> Self {
        LibraryError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
