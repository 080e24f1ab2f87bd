//! Validated table identifiers derived from payer names.

use std::fmt;

use crate::error::PersistError;
use crate::models::invoice::is_missing;

/// A schema object name derived from a payer name.
///
/// Only ASCII alphanumerics and underscores survive validation, so the value
/// is safe to interpolate into DDL. All row data still goes through bind
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIdent(String);

impl TableIdent {
    /// Derive the identifier from the first line of a payer address.
    ///
    /// Spaces become underscores; commas and periods are dropped. Distinct
    /// payer names can collide after sanitization ("Acme, Corp." and
    /// "Acme Corp" both map to `Acme_Corp`); colliding names share one
    /// logical table.
    pub fn derive(from_address: &str) -> Result<Self, PersistError> {
        let payer = from_address.lines().next().unwrap_or("").trim();
        if payer.is_empty() || is_missing(payer) {
            return Err(PersistError::MissingPayer);
        }

        let ident: String = payer
            .chars()
            .filter_map(|c| match c {
                ' ' => Some('_'),
                ',' | '.' => None,
                c => Some(c),
            })
            .collect();

        let mut chars = ident.chars();
        let head_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PersistError::InvalidIdent(payer.to_string()));
        }

        Ok(Self(ident))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_commas_periods() {
        let ident = TableIdent::derive("Acme, Corp.").unwrap();
        assert_eq!(ident.as_str(), "Acme_Corp");
    }

    #[test]
    fn test_documented_collision() {
        let a = TableIdent::derive("Acme, Corp.").unwrap();
        let b = TableIdent::derive("Acme Corp").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sanitization_is_idempotent() {
        let once = TableIdent::derive("Acme, Corp.").unwrap();
        let twice = TableIdent::derive(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_line_only() {
        let ident = TableIdent::derive("Acme Corp\n12 Industrial Road\nPune").unwrap();
        assert_eq!(ident.as_str(), "Acme_Corp");
    }

    #[test]
    fn test_missing_payer_rejected() {
        assert!(matches!(
            TableIdent::derive("N/A"),
            Err(PersistError::MissingPayer)
        ));
        assert!(matches!(
            TableIdent::derive(""),
            Err(PersistError::MissingPayer)
        ));
        assert!(matches!(
            TableIdent::derive("   \nAcme Corp"),
            Err(PersistError::MissingPayer)
        ));
    }

    #[test]
    fn test_injection_shaped_names_rejected() {
        assert!(matches!(
            TableIdent::derive("acme; DROP TABLE users"),
            Err(PersistError::InvalidIdent(_))
        ));
        assert!(matches!(
            TableIdent::derive("\"acme\""),
            Err(PersistError::InvalidIdent(_))
        ));
        assert!(matches!(
            TableIdent::derive("123 Logistics"),
            Err(PersistError::InvalidIdent(_))
        ));
    }
}
