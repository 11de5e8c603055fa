//! Face collection naming convention.
//!
//! Every school owns exactly one collection in the matching service. The
//! collection identifier is derived from the school name on every request
//! rather than stored anywhere.

use std::fmt;

use serde::Serialize;

/// Suffix appended to a school name to form its collection identifier.
pub const COLLECTION_SUFFIX: &str = "_Collection";

/// Identifier of a school's known-faces collection in the matching service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the collection identifier for a school.
///
/// Convention: `{school_name}_Collection`. The school name is used verbatim,
/// including spaces and case.
///
/// # Examples
///
/// ```
/// use rollcall_core::naming::collection_id;
///
/// assert_eq!(
///     collection_id("Lincoln Elementary").as_str(),
///     "Lincoln Elementary_Collection"
/// );
/// ```
pub fn collection_id(school_name: &str) -> CollectionId {
    let mut id = String::with_capacity(school_name.len() + COLLECTION_SUFFIX.len());
    id.push_str(school_name);
    id.push_str(COLLECTION_SUFFIX);
    CollectionId(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_suffix_verbatim() {
        assert_eq!(
            collection_id("Lincoln Elementary").as_str(),
            "Lincoln Elementary_Collection"
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let first = collection_id("Lincoln Elementary");
        for _ in 0..10 {
            assert_eq!(collection_id("Lincoln Elementary"), first);
        }
    }

    #[test]
    fn preserves_case_and_punctuation() {
        assert_eq!(
            collection_id("St. Mary's HS").to_string(),
            "St. Mary's HS_Collection"
        );
    }

    #[test]
    fn suffix_collision_is_not_special_cased() {
        // "A_Collection" and "A" + suffix produce distinct ids; a school
        // literally named "A_Collection" just gets the suffix twice.
        assert_eq!(collection_id("A_Collection").as_str(), "A_Collection_Collection");
    }
}
