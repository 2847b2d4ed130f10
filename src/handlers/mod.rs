pub mod search;
pub mod system;

use std::sync::Arc;

use crate::proxy::SearchProxy;

/// Shared application state handed to every handler.
///
/// The proxy client is wired in once at startup and reused across requests;
/// handlers never look it up through a global.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<dyn SearchProxy>,
}
