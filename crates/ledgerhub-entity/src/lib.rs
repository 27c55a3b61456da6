//! # ledgerhub-entity
//!
//! Domain entity models for LedgerHub's authentication and authorization
//! boundary. Every struct in this crate is either a persisted row shape or
//! a transient value object; all derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize` (secret material excepted — see [`auth::StoredSecret`]).

pub mod auth;
pub mod permission;
