use std::sync::Arc;

use pinhole_core::Shortener;

use crate::config::BaseUrl;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    base_url: BaseUrl,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, public_base_url: BaseUrl) -> Self {
        Self {
            shortener,
            base_url: public_base_url,
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}
