//! Service layer for the ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, existence checks, aggregates, and transfers.

pub mod account;
pub mod expense;
pub mod revenue;
pub mod summary;
pub mod transfer;

pub use account::AccountService;
pub use expense::ExpenseService;
pub use revenue::RevenueService;
pub use summary::{LedgerSummary, SummaryService};
pub use transfer::{TransferResult, TransferService};
