use super::EntityMetadata;

/// Trait implemented by every aggregate root in the system
pub trait AggregateRoot {
    /// Aggregate identifier type
    type Id;

    /// ID of this record
    fn id(&self) -> Self::Id;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the database (e.g. "page")
    fn collection_name() -> &'static str;

    /// Element name for the UI (singular, e.g. "Page")
    fn element_name() -> &'static str;

    /// List name for the UI (plural, e.g. "Pages")
    fn list_name() -> &'static str;

    /// Full aggregate name (e.g. "a001_page"), used as the table name
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
