//! Field sets: the record attributes a search term is matched against.

use std::fmt;

/// How a field's value is presented to substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A single text value, matched directly.
    Text,
    /// A multi-valued attribute. Its value is stringified (as a JSON array)
    /// before matching, so a term may match across element boundaries.
    List,
}

/// One searchable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchField {
    /// The attribute name as records expose it (e.g. `firstName`).
    pub name: &'static str,
    /// The storage column holding the attribute.
    pub column: &'static str,
    /// Text or multi-valued.
    pub kind: FieldKind,
}

impl SearchField {
    /// Creates a single-valued text field.
    pub const fn text(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            kind: FieldKind::Text,
        }
    }

    /// Creates a multi-valued field.
    pub const fn list(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            kind: FieldKind::List,
        }
    }

    /// Returns true for multi-valued fields.
    pub fn is_list(&self) -> bool {
        self.kind == FieldKind::List
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A fixed, ordered list of searchable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    fields: &'static [SearchField],
}

impl FieldSet {
    /// Creates a field set over a static slice.
    pub const fn new(fields: &'static [SearchField]) -> Self {
        Self { fields }
    }

    /// Returns the fields in order.
    pub fn fields(&self) -> &'static [SearchField] {
        self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the set has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in order.
    pub fn iter(&self) -> std::slice::Iter<'static, SearchField> {
        self.fields.iter()
    }
}

impl IntoIterator for FieldSet {
    type Item = &'static SearchField;
    type IntoIter = std::slice::Iter<'static, SearchField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Fields of an advocate matched by directory searches.
pub const ADVOCATE_FIELDS: FieldSet = FieldSet::new(&[
    SearchField::text("firstName", "first_name"),
    SearchField::text("lastName", "last_name"),
    SearchField::text("city", "city"),
    SearchField::text("degree", "degree"),
    SearchField::list("specialties", "specialties"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advocate_fields_order() {
        let names: Vec<_> = ADVOCATE_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["firstName", "lastName", "city", "degree", "specialties"]
        );
        assert_eq!(ADVOCATE_FIELDS.len(), 5);
    }

    #[test]
    fn test_only_specialties_is_list() {
        let lists: Vec<_> = ADVOCATE_FIELDS
            .iter()
            .filter(|f| f.is_list())
            .map(|f| f.name)
            .collect();
        assert_eq!(lists, vec!["specialties"]);
    }

    #[test]
    fn test_field_display_uses_attribute_name() {
        let city = &ADVOCATE_FIELDS.fields()[2];
        assert_eq!(city.column, "city");
        assert_eq!(city.to_string(), "city");
    }

    #[test]
    fn test_empty_field_set() {
        const NONE: FieldSet = FieldSet::new(&[]);
        assert!(NONE.is_empty());
        assert_eq!(NONE.into_iter().count(), 0);
    }
}
