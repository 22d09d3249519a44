use super::AggregateId;

/// Root of an aggregate exposed by the REST API.
///
/// Besides per-record accessors it carries the static metadata the UI
/// needs: the REST collection the aggregate lives under and its display
/// names (singular and plural).
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id: AggregateId;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// ID of the record
    fn id(&self) -> Self::Id;

    /// Human-readable name of the record
    fn description(&self) -> &str;

    // ============================================================================
    // Aggregate class metadata
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection segment (e.g. "cursos")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Curso")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Cursos")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full system name of the aggregate (e.g. "a001_cursos")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Path of the collection relative to the API base URL
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Path of a single record relative to the API base URL
    fn item_path(id: Self::Id) -> String {
        format!("/{}/{}", Self::collection_name(), id.as_string())
    }
}
