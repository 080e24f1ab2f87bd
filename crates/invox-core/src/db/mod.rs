//! PostgreSQL persistence module.

mod ident;
mod pool;
mod recorder;

pub use ident::TableIdent;
pub use pool::connect;
pub use recorder::InvoiceRecorder;
