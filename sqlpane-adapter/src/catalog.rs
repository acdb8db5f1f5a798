//! Catalog metadata tree for the host's browser pane.

/// Tree of database → schema → table → column metadata exposed to the
/// host's browsing UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Top-level items, one per database, in engine order.
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    /// Catalog from top-level items.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

/// One node in the catalog tree.
///
/// Immutable after construction and owned solely by the caller that
/// requested it. `qualified_identifier` is the dot-join of the
/// double-quoted ancestor labels ([`qualify`]) and is unique within its
/// parent's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Fully qualified identifier used for disambiguation.
    pub qualified_identifier: String,
    /// Quoted name as it should be spliced into a query.
    pub query_name: String,
    /// Display label.
    pub label: String,
    /// Short type label (`db`, `s`, a table kind, or a column glyph).
    pub type_label: String,
    /// Child items, in engine order. Empty for leaves.
    pub children: Vec<CatalogItem>,
}

impl CatalogItem {
    /// Leaf node with no children.
    pub fn leaf(
        qualified_identifier: impl Into<String>,
        query_name: impl Into<String>,
        label: impl Into<String>,
        type_label: impl Into<String>,
    ) -> Self {
        Self::with_children(qualified_identifier, query_name, label, type_label, Vec::new())
    }

    /// Node with child items.
    pub fn with_children(
        qualified_identifier: impl Into<String>,
        query_name: impl Into<String>,
        label: impl Into<String>,
        type_label: impl Into<String>,
        children: Vec<CatalogItem>,
    ) -> Self {
        Self {
            qualified_identifier: qualified_identifier.into(),
            query_name: query_name.into(),
            label: label.into(),
            type_label: type_label.into(),
            children,
        }
    }
}

/// Double-quote a single identifier part.
pub fn quote_ident(part: &str) -> String {
    format!("\"{part}\"")
}

/// Dot-join identifier parts, double-quoting each.
pub fn qualify(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| quote_ident(part))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_quoted_and_dot_joined() {
        assert_eq!(quote_ident("people"), "\"people\"");
        assert_eq!(
            qualify(&["datafusion", "public", "people", "id"]),
            "\"datafusion\".\"public\".\"people\".\"id\""
        );
    }

    #[test]
    fn leaf_has_no_children() {
        let item = CatalogItem::leaf("\"a\"", "\"a\"", "a", "##");
        assert!(item.children.is_empty());
        assert_eq!(item.qualified_identifier, "\"a\"");
        assert_eq!(item.type_label, "##");
    }

    #[test]
    fn children_are_kept_in_insertion_order() {
        let children = vec![
            CatalogItem::leaf("\"db\".\"s\".\"t\".\"b\"", "\"b\"", "b", "s"),
            CatalogItem::leaf("\"db\".\"s\".\"t\".\"a\"", "\"a\"", "a", "##"),
        ];
        let table =
            CatalogItem::with_children("\"db\".\"s\".\"t\"", "\"db\".\"s\".\"t\"", "t", "t", children);
        let labels: Vec<&str> = table.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["b", "a"], "engine order is preserved, never sorted");
    }
}
