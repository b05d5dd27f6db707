pub mod accounts;
pub mod common;
pub mod health;

use crate::db::DbPool;
use crate::services::AccountService;
use std::sync::Arc;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppServices {
    pub accounts: Arc<AccountService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            accounts: Arc::new(AccountService::new(db_pool)),
        }
    }
}
