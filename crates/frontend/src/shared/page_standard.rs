//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_cursos--list"`)
//!   - `data-page-category` with one of the constants below

use contracts::domain::common::AggregateRoot;

/// List of records with its create/edit/delete actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Free-form page (home, not found).
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_CUSTOM];

/// Page id of an aggregate screen, e.g. `a002_alunos--list`.
pub fn aggregate_page_id<A: AggregateRoot>(category: &str) -> String {
    format!("{}--{}", A::full_name(), category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_student::aggregate::Student;

    #[test]
    fn aggregate_ids_are_valid() {
        let id = aggregate_page_id::<Student>(PAGE_CAT_LIST);
        assert_eq!(id, "a002_alunos--list");
        assert!(is_valid_page_id(&id));
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(!is_valid_page_id("home"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("home--dashboard"));
        assert!(is_valid_page_id("home--custom"));
    }
}
