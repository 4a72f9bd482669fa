use returnurl_core::TokenCache;
use returnurl_service::ReturnUrlService;

pub struct AppState<C> {
    pub service: ReturnUrlService<C>,
}

impl<C: TokenCache> AppState<C> {
    pub fn new(service: ReturnUrlService<C>) -> Self {
        Self { service }
    }
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}
