//! Invoice recorder: per-payer table creation and row insertion.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, info};

use super::TableIdent;
use crate::error::PersistError;
use crate::models::invoice::{InvoiceRecord, is_missing};

/// Writes extracted invoice records into per-payer tables.
pub struct InvoiceRecorder {
    pool: PgPool,
}

impl InvoiceRecorder {
    /// Create a recorder on an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist one record: derive the payer table, create it if absent,
    /// normalize the date fields, insert one row.
    ///
    /// The DDL and the insert run in a single transaction; any failure rolls
    /// back before a row becomes visible. Re-running with the same record
    /// inserts a second row — duplicate-safe insertion is not provided.
    pub async fn persist(&self, record: &InvoiceRecord) -> Result<(), PersistError> {
        let table = TableIdent::derive(&record.from_address)?;

        let invoice_date = normalize_date("invoice_date", &record.invoice_date)?;
        let po_date = normalize_date("po_date", &record.po_date)?;
        let grand_total = normalize_amount(&record.grand_total)?;
        let items = serde_json::to_value(&record.items)?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(&create_table_sql(&table)).execute(&mut *tx).await?;
        debug!("Ensured table {} exists", table);

        sqlx::query(&insert_sql(&table))
            .bind(&record.from_address)
            .bind(&record.from_gstin)
            .bind(&record.to_address)
            .bind(&record.to_gstin)
            .bind(&record.invoice_number)
            .bind(invoice_date)
            .bind(&record.po_number)
            .bind(po_date)
            .bind(grand_total)
            .bind(items)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Recorded invoice {} into {}", record.invoice_number, table);
        Ok(())
    }
}

/// Normalize a textual date.
///
/// "N/A" means absent; a purely numeric value is a bare year and becomes
/// January 1st of that year; anything else must parse strictly as
/// YYYY-MM-DD or the whole persist aborts.
pub(crate) fn normalize_date(field: &str, value: &str) -> Result<Option<NaiveDate>, PersistError> {
    if is_missing(value) {
        return Ok(None);
    }

    let date_error = || PersistError::DateFormat {
        field: field.to_string(),
        value: value.to_string(),
    };

    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = value.parse().map_err(|_| date_error())?;
        return NaiveDate::from_ymd_opt(year, 1, 1)
            .map(Some)
            .ok_or_else(date_error);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| date_error())
}

/// Normalize the grand total: "N/A" means absent, anything else is decimal
/// text by construction of the extraction pattern.
pub(crate) fn normalize_amount(value: &str) -> Result<Option<Decimal>, PersistError> {
    if is_missing(value) {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| PersistError::Amount(value.to_string()))
}

fn create_table_sql(table: &TableIdent) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id SERIAL PRIMARY KEY,
            from_address TEXT,
            from_gstin VARCHAR(15),
            to_address TEXT,
            to_gstin VARCHAR(15),
            invoice_number VARCHAR(50),
            invoice_date DATE,
            po_number VARCHAR(50),
            po_date DATE,
            grand_total DECIMAL,
            items JSONB
        )"
    )
}

fn insert_sql(table: &TableIdent) -> String {
    format!(
        "INSERT INTO {table} (from_address, from_gstin, to_address, to_gstin,
            invoice_number, invoice_date, po_number, po_date,
            grand_total, items)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_date_absent() {
        assert_eq!(normalize_date("invoice_date", "N/A").unwrap(), None);
    }

    #[test]
    fn test_normalize_date_bare_year() {
        assert_eq!(
            normalize_date("invoice_date", "2023").unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn test_normalize_date_full() {
        assert_eq!(
            normalize_date("invoice_date", "2023-06-10").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 10)
        );
    }

    #[test]
    fn test_normalize_date_rejects_other_shapes() {
        for value in ["06/10/2023", "2023-13-01", "2023-06", "---", ""] {
            let err = normalize_date("po_date", value).unwrap_err();
            assert!(matches!(err, PersistError::DateFormat { .. }), "{value}");
        }
    }

    #[test]
    fn test_normalize_date_reports_field_and_value() {
        match normalize_date("po_date", "06/10/2023") {
            Err(PersistError::DateFormat { field, value }) => {
                assert_eq!(field, "po_date");
                assert_eq!(value, "06/10/2023");
            }
            other => panic!("expected DateFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount("N/A").unwrap(), None);
        assert_eq!(
            normalize_amount("1500.00").unwrap(),
            Some("1500.00".parse().unwrap())
        );
        assert!(matches!(
            normalize_amount("1.2.3"),
            Err(PersistError::Amount(_))
        ));
    }

    #[test]
    fn test_create_table_sql_uses_validated_ident() {
        let table = TableIdent::derive("Acme, Corp.").unwrap();
        let sql = create_table_sql(&table);

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS Acme_Corp"));
        assert!(sql.contains("items JSONB"));
        assert!(sql.contains("invoice_date DATE"));
    }

    #[test]
    fn test_insert_sql_binds_every_data_value() {
        let table = TableIdent::derive("Acme Corp").unwrap();
        let sql = insert_sql(&table);

        assert!(sql.starts_with("INSERT INTO Acme_Corp"));
        for placeholder in 1..=10 {
            assert!(sql.contains(&format!("${placeholder}")), "${placeholder}");
        }
        // Data values never appear inline; only the validated identifier is
        // interpolated.
        assert!(!sql.contains('\''));
        // No conflict clause: re-running the same record adds a second row.
        assert!(!sql.contains("ON CONFLICT"));
    }
}
