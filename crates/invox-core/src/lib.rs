//! Core library for invoice PDF ingestion.
//!
//! This crate provides:
//! - PDF text extraction
//! - Rule-based invoice field extraction (parties, GSTINs, numbers, dates,
//!   totals, line items)
//! - Per-payer PostgreSQL persistence

pub mod db;
pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use db::{InvoiceRecorder, TableIdent, connect};
pub use error::{InvoxError, PdfError, PersistError, Result};
pub use invoice::{InvoiceParser, RuleBasedParser};
pub use models::config::InvoxConfig;
pub use models::invoice::{InvoiceRecord, ItemKind, LineItem, NOT_FOUND};
pub use pdf::{PdfSource, PdfTextExtractor};
