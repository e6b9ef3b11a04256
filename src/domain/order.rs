use super::menu::MenuItem;

/// One line of the in-progress order: a menu item plus how many of it.
///
/// A quantity below 1 is never stored; the cart removes the line instead.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn line_total(&self) -> u64 {
        self.item.price * u64::from(self.quantity)
    }
}

/// Snapshot handed back by checkout for the confirmation screen.
///
/// Nothing durable: no order record exists anywhere once the cart is
/// cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub lines: Vec<OrderLine>,
    pub total: u64,
}
