//! Turns free-form user input into a [`NewShoppingListItem`].
//!
//! Every `!` in the input bumps the priority by one and is dropped from the
//! description. Nothing else is touched, whitespace included.

use crate::types::NewShoppingListItem;

/// Character whose count in the raw input becomes the item's priority.
pub const PRIORITY_MARKER: char = '!';

pub fn parse_item(text: &str) -> NewShoppingListItem {
    let mut priority = 0u32;
    let description = text
        .chars()
        .filter(|&c| {
            if c == PRIORITY_MARKER {
                priority = priority.saturating_add(1);
                false
            } else {
                true
            }
        })
        .collect();
    NewShoppingListItem { description, priority }
}
