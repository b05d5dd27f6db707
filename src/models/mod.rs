// Request and response shapes for the HTTP layer
pub mod account;

pub use account::{AccountDraft, AccountInput, AccountListResponse, AccountResponse, FieldErrors};
