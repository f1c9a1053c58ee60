//! Cart State
//!
//! Cart lines keyed by catalog id, with quantity bookkeeping and totals.

use reactive_stores::Store;

use crate::models::{CartLine, CatalogItem};

/// Cart contents in insertion order
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    /// One line per distinct catalog id. Mutate through the methods below.
    pub lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`, creating its line on first add.
    /// Quantities saturate at `u32::MAX`.
    pub fn add_to_cart(&mut self, item: &CatalogItem) {
        match self.line_mut(item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::from_item(item)),
        }
    }

    /// Returns false if no line has `id` or the quantity is saturated
    pub fn increment(&mut self, id: u32) -> bool {
        match self.line_mut(id) {
            Some(line) if line.quantity < u32::MAX => {
                line.quantity += 1;
                true
            }
            _ => false,
        }
    }

    /// Never removes the line; quantity stays at 1 at the floor.
    /// Returns whether the quantity changed.
    pub fn decrement(&mut self, id: u32) -> bool {
        match self.line_mut(id) {
            Some(line) if line.can_decrement() => {
                line.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Removes the line regardless of its quantity
    pub fn remove(&mut self, id: u32) -> Option<CartLine> {
        let pos = self.lines.iter().position(|line| line.id == id)?;
        Some(self.lines.remove(pos))
    }

    pub fn line(&self, id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    fn line_mut(&mut self, id: u32) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Sum of price × quantity over all lines
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
