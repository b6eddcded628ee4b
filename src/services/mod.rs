//! Service layer for SettleUp
//!
//! The service layer provides business logic on top of the storage layer:
//! share calculation, validation, balance derivation and settlement.

pub mod balance;
pub mod ledger;
pub mod settlement;
pub mod split;

pub use balance::{MemberBalance, MemberSummary};
pub use ledger::{CreateGroupInput, ExpenseInput, LedgerService, MemberInput};
pub use settlement::{group_settlements, settle, Settlement};
pub use split::{parse_basis_points, ParticipantInput, SplitCalculator};
