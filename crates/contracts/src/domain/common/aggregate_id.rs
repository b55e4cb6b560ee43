/// Trait for typed aggregate identifiers
///
/// Every aggregate gets its own newtype over `Uuid`; string conversion is
/// what crosses the HTTP and database boundaries.
pub trait AggregateId: Sized {
    /// Convert ID to string representation
    fn as_string(&self) -> String;

    /// Parse ID from string representation
    fn from_string(s: &str) -> Result<Self, String>;
}
