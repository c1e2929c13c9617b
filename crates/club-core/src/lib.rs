//! # club-core
//!
//! Core types, enums, and error types for the clubhouse attendance engine.
//!
//! This crate provides the foundational types shared across all clubhouse crates:
//! - Entity structs for the roster, attendance, and session-program domain
//! - Presence and composition-entry enums (with the entry state machine)
//! - Field-level patches for editing attendance records by key
//! - Cross-cutting error types (`CoreError`, `StoreError`)
//! - Response types for batch persistence

pub mod entities;
pub mod enums;
pub mod errors;
pub mod patch;
pub mod responses;
