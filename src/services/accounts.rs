use crate::{
    db,
    entities::{account, journal_entry_line, Account, AccountModel, JournalEntryLine},
    errors::{ServiceError, ACCOUNT_IN_USE_MESSAGE},
    handlers::common::PageRequest,
    models::account::AccountDraft,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Largest offset or limit handed to the store; SQL backends bind them as signed 64-bit.
const MAX_SQL_BOUND: u64 = i64::MAX as u64;

/// One page of accounts and the total row count it was cut from
#[derive(Debug, Clone)]
pub struct AccountPage {
    pub accounts: Vec<AccountModel>,
    pub total: u64,
}

/// Store-facing operations for the chart of accounts
#[derive(Clone)]
pub struct AccountService {
    db: Arc<DatabaseConnection>,
}

impl AccountService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists accounts newest first. Count and page are read in one transaction.
    #[instrument(skip(self))]
    pub async fn list_accounts(&self, page: PageRequest) -> Result<AccountPage, ServiceError> {
        let offset = page.offset().min(MAX_SQL_BOUND);
        let limit = page.limit.min(MAX_SQL_BOUND);

        db::transaction(&self.db, move |txn| {
            Box::pin(async move {
                let total = Account::find().count(txn).await?;
                let accounts = Account::find()
                    .order_by_desc(account::Column::CreatedAt)
                    .order_by_desc(account::Column::Id)
                    .offset(offset)
                    .limit(limit)
                    .all(txn)
                    .await?;
                Ok(AccountPage { accounts, total })
            })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_account(&self, id: Uuid) -> Result<AccountModel, ServiceError> {
        Account::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(ServiceError::account_not_found)
    }

    #[instrument(skip(self))]
    pub async fn create_account(&self, draft: AccountDraft) -> Result<AccountModel, ServiceError> {
        let now = Utc::now();
        let account = account::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            account_type: Set(draft.account_type),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let account = account.insert(&*self.db).await?;
        info!(account_id = %account.id, "Created account");
        Ok(account)
    }

    /// Replaces name and type of an existing account
    #[instrument(skip(self))]
    pub async fn update_account(
        &self,
        id: Uuid,
        draft: AccountDraft,
    ) -> Result<AccountModel, ServiceError> {
        let existing = self.get_account(id).await?;
        let mut active: account::ActiveModel = existing.into();
        active.name = Set(draft.name);
        active.account_type = Set(draft.account_type);
        active.updated_at = Set(Utc::now());

        match active.update(&*self.db).await {
            Ok(account) => {
                info!(account_id = %account.id, "Updated account");
                Ok(account)
            }
            // Row vanished between the read and the write
            Err(DbErr::RecordNotUpdated) => Err(ServiceError::account_not_found()),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes an account unless journal entry lines still reference it.
    ///
    /// The existence check, the reference count and the delete share one
    /// transaction with the account row locked where the backend supports it.
    /// The foreign key on `journal_entry_lines.account_id` backs the check up.
    #[instrument(skip(self))]
    pub async fn delete_account(&self, id: Uuid) -> Result<(), ServiceError> {
        db::transaction(&self.db, move |txn| {
            Box::pin(async move {
                Account::find_by_id(id)
                    .lock_exclusive()
                    .one(txn)
                    .await?
                    .ok_or_else(ServiceError::account_not_found)?;

                let references = JournalEntryLine::find()
                    .filter(journal_entry_line::Column::AccountId.eq(id))
                    .count(txn)
                    .await?;
                if references > 0 {
                    warn!(account_id = %id, references, "Refusing to delete referenced account");
                    return Err(ServiceError::HasDependents(
                        ACCOUNT_IN_USE_MESSAGE.to_string(),
                    ));
                }

                Account::delete_by_id(id).exec(txn).await?;
                Ok(())
            })
        })
        .await?;

        info!(account_id = %id, "Deleted account");
        Ok(())
    }
}
