//! Filter expressions: `field::regex|field::regex`
//!
//! Each `field::pattern` token is a predicate; a record is kept only if it
//! satisfies every predicate. Patterns are full-value, case-insensitive
//! regular expressions. Unknown fields, and values a record leaves unset,
//! impose no constraint.

use crate::core::entity::Record;
use crate::core::error::QueryError;
use crate::core::field::FieldAccessor;
use regex::{Regex, RegexBuilder};

const PREDICATE_SEPARATOR: char = '|';
const FIELD_SEPARATOR: &str = "::";

/// One `field::pattern` predicate
#[derive(Debug, Clone)]
pub struct FilterPredicate {
    field: String,
    pattern: Regex,
}

impl FilterPredicate {
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The compiled, anchored pattern
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// Parsed filter expression
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    predicates: Vec<FilterPredicate>,
}

impl FilterSpec {
    /// Parse a raw filter string
    ///
    /// Tokens that do not split into exactly a field and a pattern are
    /// ignored. A pattern that is not a valid regular expression rejects the
    /// whole filter.
    pub fn parse(raw: Option<&str>) -> Result<Self, QueryError> {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };

        let mut predicates = Vec::new();
        for token in raw.split(PREDICATE_SEPARATOR) {
            let Some((field, pattern)) = split_token(token) else {
                continue;
            };

            let pattern = RegexBuilder::new(&format!("^(?:{})$", pattern))
                .case_insensitive(true)
                .build()
                .map_err(|e| QueryError::InvalidFilterToken {
                    token: token.to_string(),
                    message: e.to_string(),
                })?;

            predicates.push(FilterPredicate {
                field: field.to_string(),
                pattern,
            });
        }

        Ok(Self { predicates })
    }

    pub fn predicates(&self) -> &[FilterPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Keep the records that satisfy every predicate, in their original order
    pub fn apply<T: Record>(&self, records: Vec<T>) -> Vec<T> {
        let bound = self.bind::<T>();
        if bound.is_empty() {
            return records;
        }

        records
            .into_iter()
            .filter(|record| bound.iter().all(|(accessor, pattern)| matches(record, *accessor, pattern)))
            .collect()
    }

    /// Resolve predicate fields against `T`'s field table; unknown fields drop out
    fn bind<T: Record>(&self) -> Vec<(FieldAccessor<T>, &Regex)> {
        let table = T::field_table();
        self.predicates
            .iter()
            .filter_map(|p| table.get(&p.field).map(|accessor| (accessor, &p.pattern)))
            .collect()
    }
}

fn matches<T>(record: &T, accessor: FieldAccessor<T>, pattern: &Regex) -> bool {
    match accessor.read(record) {
        Some(value) => pattern.is_match(&value.to_string()),
        None => true,
    }
}

/// Split `field::pattern`, ignoring trailing empty segments
fn split_token(token: &str) -> Option<(&str, &str)> {
    let mut parts: Vec<&str> = token.split(FIELD_SEPARATOR).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    match parts.as_slice() {
        [field, pattern] => Some((*field, *pattern)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Group, Member};

    fn groups() -> Vec<Group> {
        vec![
            Group::new("Eng", "builds things").with_id(1),
            Group::new("Ops", "runs things").with_id(2),
            Group::new("Engagement", "talks to people").with_id(3),
        ]
    }

    fn ids(groups: &[Group]) -> Vec<i64> {
        groups.iter().filter_map(|g| g.id).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        for raw in [None, Some("")] {
            let spec = FilterSpec::parse(raw).unwrap();
            assert!(spec.is_empty());
            assert_eq!(ids(&spec.apply(groups())), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_full_match_case_insensitive() {
        let spec = FilterSpec::parse(Some("name::eng")).unwrap();
        assert_eq!(ids(&spec.apply(groups())), vec![1]);

        let spec = FilterSpec::parse(Some("NAME::ENG.*")).unwrap();
        assert_eq!(ids(&spec.apply(groups())), vec![1, 3]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let spec = FilterSpec::parse(Some("name::eng.*|description::.*people")).unwrap();
        assert_eq!(ids(&spec.apply(groups())), vec![3]);
    }

    #[test]
    fn test_numeric_field_is_stringified() {
        let spec = FilterSpec::parse(Some("id::[12]")).unwrap();
        assert_eq!(ids(&spec.apply(groups())), vec![1, 2]);
    }

    #[test]
    fn test_unknown_field_is_inert() {
        let spec = FilterSpec::parse(Some("color::red|name::ops")).unwrap();
        assert_eq!(spec.predicates().len(), 2);
        assert_eq!(ids(&spec.apply(groups())), vec![2]);

        // description is not a member field
        let members = vec![Member::new("Ada").with_id(1), Member::new("Bob").with_id(2)];
        let spec = FilterSpec::parse(Some("description::nothing")).unwrap();
        assert_eq!(spec.apply(members).len(), 2);
    }

    #[test]
    fn test_unset_value_passes() {
        let spec = FilterSpec::parse(Some("id::5")).unwrap();
        let kept = spec.apply(vec![Group::new("Draft", ""), Group::new("Draft", "").with_id(4)]);
        assert_eq!(kept, vec![Group::new("Draft", "")]);
    }

    #[test]
    fn test_non_ascii_value_matches_itself() {
        let cities = vec![
            Group::new("İzmir", "").with_id(1),
            Group::new("Ankara", "").with_id(2),
            Group::new("ÉCOLE", "").with_id(3),
        ];

        let spec = FilterSpec::parse(Some("name::İzmir")).unwrap();
        assert_eq!(ids(&spec.apply(cities.clone())), vec![1]);

        let spec = FilterSpec::parse(Some("name::école")).unwrap();
        assert_eq!(ids(&spec.apply(cities)), vec![3]);
    }

    #[test]
    fn test_malformed_tokens_are_ignored() {
        let spec = FilterSpec::parse(Some("name|a::b::c|name::|::||name::ops")).unwrap();
        // only "::" splits into ["", ""] -> trimmed away; "name::ops" survives
        assert_eq!(spec.predicates().len(), 1);
        assert_eq!(spec.predicates()[0].field(), "name");
        assert_eq!(ids(&spec.apply(groups())), vec![2]);
    }

    #[test]
    fn test_invalid_regex_rejects_filter() {
        let err = FilterSpec::parse(Some("name::eng|name::(unclosed")).unwrap_err();
        match err {
            QueryError::InvalidFilterToken { token, .. } => assert_eq!(token, "name::(unclosed"),
        }

        // rejected even when the field is unknown for every type
        assert!(FilterSpec::parse(Some("nope::[")).is_err());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let spec = FilterSpec::parse(Some("name::.*g.*")).unwrap();
        let once = spec.apply(groups());
        let twice = spec.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_split_token() {
        assert_eq!(split_token("name::x"), Some(("name", "x")));
        assert_eq!(split_token("name::x::"), Some(("name", "x")));
        assert_eq!(split_token("::x"), Some(("", "x")));
        assert_eq!(split_token("name::"), None);
        assert_eq!(split_token("name"), None);
        assert_eq!(split_token("a::b::c"), None);
    }
}
