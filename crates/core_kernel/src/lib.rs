//! Core Kernel - Foundational types for the car insurance system
//!
//! This crate provides the building blocks used across the domain and
//! infrastructure crates:
//! - Money types with precise decimal arithmetic
//! - Temporal types: closed date ranges and an injectable clock
//! - Strongly-typed identifiers
//! - The shared error type for store ports

pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use identifiers::{CarId, ClaimId, PolicyId};
pub use money::{Currency, Money, MoneyError};
pub use ports::{DomainStore, StoreError};
pub use temporal::{Clock, DateRange, FixedClock, SystemClock, TemporalError};
