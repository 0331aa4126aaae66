//! Accepted header synonyms per column role.
//!
//! Matching is case-insensitive on trimmed headers, so every entry here is
//! lowercase. The Polish synonyms mirror the ledger exports this tool grew
//! up around; extend the lists rather than renaming source files.

/// Chart of accounts: account id column.
pub const ACCOUNT_ID_HEADERS: &[&str] = &["account_id", "konto", "id", "accountid", "account id"];

/// Chart of accounts: parent id column.
pub const PARENT_ID_HEADERS: &[&str] = &[
    "parent_id",
    "parent",
    "rodzic",
    "parentid",
    "parent id",
    "nadrzędne",
];

/// Chart of accounts: display name column.
pub const NAME_HEADERS: &[&str] = &["name", "nazwa", "opis"];

/// Cost rows: amount column.
pub const AMOUNT_HEADERS: &[&str] = &["amount", "kwota", "value", "wartosc", "wartość"];

/// Allocation keys: parent id column.
pub const KEY_PARENT_HEADERS: &[&str] = &["parent_id", "konto_nadrzedne", "rodzic", "parentid"];

/// Allocation keys: child id column.
pub const CHILD_ID_HEADERS: &[&str] = &["child_id", "konto_podrzedne", "dziecko", "childid"];

/// Allocation keys: weight column.
pub const WEIGHT_HEADERS: &[&str] = &[
    "weight",
    "udzial",
    "klucz",
    "proporcja",
    "wspolczynnik",
    "udział",
];
