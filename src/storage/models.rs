//! Database models and types.

/// One row of the `issuedNames` table.
///
/// Every column is decoded as a string; the export query casts numeric and
/// datetime columns so the values are written exactly as the store renders them.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct IssuedNameRecord {
    /// Row id
    pub id: String,
    /// Domain name with labels reversed (`com.example.www`)
    #[sqlx(rename = "reversedName")]
    pub reversed_name: String,
    /// Certificate validity start
    #[sqlx(rename = "notBefore")]
    pub not_before: String,
    /// Certificate serial number
    pub serial: String,
}

impl IssuedNameRecord {
    /// Builds a record from its four column values.
    pub fn new(
        id: impl Into<String>,
        reversed_name: impl Into<String>,
        not_before: impl Into<String>,
        serial: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            reversed_name: reversed_name.into(),
            not_before: not_before.into(),
            serial: serial.into(),
        }
    }

    /// Fields in output column order.
    pub fn fields(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.reversed_name.as_str(),
            self.not_before.as_str(),
            self.serial.as_str(),
        ]
    }
}
