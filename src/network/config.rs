use crate::models::{ActionKind, ItemRef};

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build from the `API_BASE_URL` compile-time variable.  Without it the
    /// config stays empty and every endpoint is a same-origin relative path,
    /// which is what the listings pages normally want.
    pub fn from_env() -> Self {
        match option_env!("API_BASE_URL") {
            Some(url) => Self::from_url(url),
            None => Self::default(),
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/listings/{kind}/{id}/{action}/`, prefixed with the base URL.
    pub fn action_url(&self, item: ItemRef, action: ActionKind) -> String {
        format!(
            "{}/listings/{}/{}/{}/",
            self.base_url,
            item.kind.as_str(),
            item.id,
            action.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn relative_urls_by_default() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.action_url(ItemRef::tour(4), ActionKind::Like), "/listings/tour/4/like/");
        assert_eq!(
            cfg.action_url(ItemRef::event(9), ActionKind::Bookmark),
            "/listings/event/9/bookmark/"
        );
    }

    #[wasm_bindgen_test]
    fn base_url_is_normalised() {
        let cfg = ApiConfig::from_url(" https://travel.example/ ");
        assert_eq!(cfg.base_url(), "https://travel.example");
        assert_eq!(
            cfg.action_url(ItemRef::event(2), ActionKind::Book),
            "https://travel.example/listings/event/2/book/"
        );
        assert_eq!(
            cfg.action_url(ItemRef::tour(2), ActionKind::Comment),
            "https://travel.example/listings/tour/2/comment/"
        );
    }
}
