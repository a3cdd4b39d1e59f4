#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod settlement_service;
pub mod validation;

pub use error::{SettlementBuildError, SourceError, ValidationError};
pub use model::{ExpenseRecord, SettlementResult, SettlementWarning, TripId};
pub use ports::{ExchangeRateSource, ExpenseSource, MemberDirectory, MemberRosterSource};
pub use settlement_service::SettlementService;
