pub mod account;
pub mod journal_entry_line;

pub use account::{AccountType, Entity as Account, Model as AccountModel};
pub use journal_entry_line::Entity as JournalEntryLine;
