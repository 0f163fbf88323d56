use std::sync::Arc;
use pantry_catalog::ProductFeed;
use pantry_core::ExpenseService;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub expenses: ExpenseService,
    pub catalog: Arc<dyn ProductFeed>,
    pub auth: AuthConfig,
    pub page_size: usize,
}
