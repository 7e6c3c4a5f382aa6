//! Box grouping
//!
//! Folds the flat row sequence into boxes under the continuation rule: a
//! row supplying BOTH identifiers starts a new box; any other row extends
//! the box opened before it. The fold state is an explicit
//! `Option<BoxGroup>` so the whole pass stays a pure function of its
//! input.

use crate::cell::CellValue;
use crate::extract::RowRecord;

/// Identifier used when items appear before any row supplies both
/// identifiers
pub const UNKNOWN_ID: &str = "(UNKNOWN)";

/// One component entry belonging to a box
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentItem {
    pub component_arabic: String,
    pub component_english: String,
    pub component_code: String,
    /// Raw quantity, type preserved (numbers stay numbers)
    pub quantity: CellValue,
}

impl ComponentItem {
    /// True when every component field is empty
    pub fn is_empty(&self) -> bool {
        self.component_arabic.is_empty()
            && self.component_english.is_empty()
            && self.component_code.is_empty()
            && self.quantity.is_blank()
    }

    fn from_row(row: &RowRecord) -> Self {
        Self {
            component_arabic: row.component_arabic.as_text(),
            component_english: row.component_english.as_text(),
            component_code: row.component_code.as_text(),
            quantity: row.quantity.clone(),
        }
    }
}

/// One shipping box: an identifier pair and its components, in source
/// order. Once returned from [`group_boxes`] a group is never reopened.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub sn: String,
    pub box_code: String,
    /// Last non-empty box type seen among the group's rows
    pub box_type: String,
    pub items: Vec<ComponentItem>,
}

impl BoxGroup {
    fn open(sn: String, box_code: String, box_type: String) -> Self {
        Self {
            sn,
            box_code,
            box_type,
            items: Vec::new(),
        }
    }

    /// Drop items with no component data at all (pre-render filter).
    /// Idempotent and order-preserving.
    pub fn retain_nonempty_items(&mut self) {
        self.items.retain(|item| !item.is_empty());
    }
}

/// Fold extracted rows into box groups.
///
/// Every row lands in exactly one group; arrival order is preserved within
/// and across groups. Rows with a partial identifier (only one of `sn` /
/// `box_code`) are continuations, same as rows with neither.
pub fn group_boxes(rows: &[RowRecord]) -> Vec<BoxGroup> {
    let (mut groups, open) = rows.iter().fold(
        (Vec::new(), None::<BoxGroup>),
        |(mut groups, mut open), row| {
            let sn = nonempty_text(&row.sn);
            let box_code = nonempty_text(&row.box_code);
            let box_type = row.box_type.as_text();

            if let (Some(sn), Some(box_code)) = (sn, box_code) {
                if let Some(done) = open.take() {
                    groups.push(done);
                }
                open = Some(BoxGroup::open(sn, box_code, box_type.clone()));
            }

            let group = open.get_or_insert_with(|| {
                BoxGroup::open(UNKNOWN_ID.to_string(), UNKNOWN_ID.to_string(), box_type.clone())
            });
            group.items.push(ComponentItem::from_row(row));
            if !box_type.is_empty() {
                group.box_type = box_type;
            }

            (groups, open)
        },
    );

    if let Some(done) = open {
        groups.push(done);
    }
    groups
}

/// Trimmed text of a cell, collapsed to `None` when empty
fn nonempty_text(value: &CellValue) -> Option<String> {
    let text = value.as_text();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
