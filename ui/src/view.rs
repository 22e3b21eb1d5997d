//! Render output of the shopping list.

use std::fmt;

use shopping_core::ShoppingListItem;

pub const HEADING: &str = "Shopping List";

/// What the root component shows: a heading, the rows in display order, and
/// the input field's current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub heading: &'static str,
    pub rows: Vec<ShoppingListItem>,
    pub input: String,
}

impl View {
    /// Sorts a copy of `items` by descending priority. Ties keep server order.
    pub fn new(items: &[ShoppingListItem], input: &str) -> Self {
        let mut rows = items.to_vec();
        rows.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self {
            heading: HEADING,
            rows,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for (n, item) in self.rows.iter().enumerate() {
            writeln!(f, "{:>3}. {} ({})", n + 1, item.description, item.priority)?;
        }
        write!(f, "> {}", self.input)
    }
}
