//! ULS Report - Forensic report collaborator
//!
//! The report generator is an external, opaque request/response service.
//! This crate keeps it behind a narrow seam:
//! - Report payload and context types
//! - ReportBackend trait for the transport
//! - ReportClient: prompt assembly, timeout, payload validation
//! - ReportPanel: last-known display state across failures

pub mod error;
pub mod report;
pub mod client;
pub mod panel;

pub use error::*;
pub use report::*;
pub use client::*;
pub use panel::*;
