// Chart of accounts
pub mod accounts;

pub use accounts::AccountService;
