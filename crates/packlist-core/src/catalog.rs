//! Field catalog and column resolution
//!
//! The packing-list format binds columns two ways: four logical fields are
//! located by fuzzy header-label matching, while three others always sit at
//! fixed positions regardless of the header. Both strategies are composed
//! behind [`ColumnResolver::resolve`] so row reading never needs to know
//! which kind of field it is asking for.

use std::collections::HashMap;

/// Box code is always read from the 2nd column
pub const BOX_CODE_COL: u32 = 2;

/// Component code is always read from the 5th column
pub const COMPONENT_CODE_COL: u32 = 5;

/// Box type is always read from the 7th column
pub const BOX_TYPE_COL: u32 = 7;

/// Every logical field of one packing-list row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sn,
    BoxCode,
    ComponentArabic,
    ComponentEnglish,
    ComponentCode,
    Quantity,
    BoxType,
}

/// The label-bound subset of [`Field`]: fields whose column is discovered
/// by matching header labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LabelField {
    Sn,
    ComponentArabic,
    ComponentEnglish,
    Quantity,
}

impl LabelField {
    /// All label-bound fields, in catalog order
    pub const ALL: [LabelField; 4] = [
        LabelField::Sn,
        LabelField::ComponentArabic,
        LabelField::ComponentEnglish,
        LabelField::Quantity,
    ];
}

/// Candidate header labels per label-bound field, in priority order.
///
/// Matching is case-insensitive substring containment, so short variants
/// like "Qty" also hit "Qty." or "QTY (pcs)". The catalog is the only
/// tunable input to header detection; extend the lists, not the algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldCatalog {
    pub sn: Vec<String>,
    pub component_arabic: Vec<String>,
    pub component_english: Vec<String>,
    pub quantity: Vec<String>,
}

impl FieldCatalog {
    /// Candidate labels for one field, in priority order
    pub fn labels(&self, field: LabelField) -> &[String] {
        match field {
            LabelField::Sn => &self.sn,
            LabelField::ComponentArabic => &self.component_arabic,
            LabelField::ComponentEnglish => &self.component_english,
            LabelField::Quantity => &self.quantity,
        }
    }
}

impl Default for FieldCatalog {
    /// The label variants observed in real packing-list workbooks
    fn default() -> Self {
        fn labels(variants: &[&str]) -> Vec<String> {
            variants.iter().map(|s| s.to_string()).collect()
        }
        Self {
            sn: labels(&["S.N", "sn", "s.n", "serial", "box sn"]),
            component_arabic: labels(&["component in arabic", "arabic", "arabic name"]),
            component_english: labels(&[
                "component in english",
                "component in e",
                "english name",
                "english",
            ]),
            quantity: labels(&["Qut.", "Qu.", "Qty", "Quantity"]),
        }
    }
}

/// Columns resolved from a detected header row (1-based)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    columns: HashMap<LabelField, u32>,
}

impl ColumnMap {
    /// Record the column for a label-bound field
    pub fn insert(&mut self, field: LabelField, col: u32) {
        self.columns.insert(field, col);
    }

    /// Column of a label-bound field, if the header supplied one
    pub fn get(&self, field: LabelField) -> Option<u32> {
        self.columns.get(&field).copied()
    }

    /// Number of resolved fields
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no field resolved
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Composes the two column-resolution strategies: label-mapped fields come
/// from the detected header, fixed-position fields from the format
/// contract (columns 2, 5, 7).
#[derive(Debug, Clone, Copy)]
pub struct ColumnResolver<'a> {
    labels: &'a ColumnMap,
}

impl<'a> ColumnResolver<'a> {
    /// Create a resolver over a detected column map
    pub fn new(labels: &'a ColumnMap) -> Self {
        Self { labels }
    }

    /// 1-based column for a field, or `None` when the header did not
    /// supply one. Fixed-position fields always resolve.
    pub fn resolve(&self, field: Field) -> Option<u32> {
        match field {
            Field::BoxCode => Some(BOX_CODE_COL),
            Field::ComponentCode => Some(COMPONENT_CODE_COL),
            Field::BoxType => Some(BOX_TYPE_COL),
            Field::Sn => self.labels.get(LabelField::Sn),
            Field::ComponentArabic => self.labels.get(LabelField::ComponentArabic),
            Field::ComponentEnglish => self.labels.get(LabelField::ComponentEnglish),
            Field::Quantity => self.labels.get(LabelField::Quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixed_positions_ignore_column_map() {
        let mut map = ColumnMap::default();
        map.insert(LabelField::Sn, 1);
        let resolver = ColumnResolver::new(&map);

        assert_eq!(resolver.resolve(Field::BoxCode), Some(BOX_CODE_COL));
        assert_eq!(resolver.resolve(Field::ComponentCode), Some(COMPONENT_CODE_COL));
        assert_eq!(resolver.resolve(Field::BoxType), Some(BOX_TYPE_COL));
    }

    #[test]
    fn test_label_fields_come_from_map() {
        let mut map = ColumnMap::default();
        map.insert(LabelField::Sn, 1);
        map.insert(LabelField::Quantity, 6);
        let resolver = ColumnResolver::new(&map);

        assert_eq!(resolver.resolve(Field::Sn), Some(1));
        assert_eq!(resolver.resolve(Field::Quantity), Some(6));
        assert_eq!(resolver.resolve(Field::ComponentArabic), None);
    }

    #[test]
    fn test_default_catalog_covers_all_fields() {
        let catalog = FieldCatalog::default();
        for field in LabelField::ALL {
            assert!(!catalog.labels(field).is_empty());
        }
    }
}
