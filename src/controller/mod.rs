pub mod http_handlers;
pub mod round;

pub use round::{FinishError, delete_round, finish_round, save_completed};

use std::sync::{Arc, Mutex};

use crate::catalog::CourseCatalog;
use crate::session::RoundSession;
use crate::storage::RoundStore;

/// Everything the handlers share. Wrapped in `web::Data` by the server.
pub struct AppState {
    pub catalog: Arc<CourseCatalog>,
    pub store: Arc<dyn RoundStore>,
    pub session: Mutex<RoundSession>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<CourseCatalog>, store: Arc<dyn RoundStore>) -> Self {
        Self {
            catalog,
            store,
            session: Mutex::new(RoundSession::new()),
        }
    }
}
