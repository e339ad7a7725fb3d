//! The in-memory cart for one visit to the menu.
//!
//! A [`Cart`] accumulates drink quantities locally; nothing touches the
//! network until the owning surface submits the finished order. It is never
//! persisted: navigating away from the menu discards it.

use crate::models::{Drink, OrderItem};
use rust_decimal::Decimal;

// ============================================================================
// Cart Line
// ============================================================================

/// One line of the cart: a drink and how many of it.
///
/// A quantity of zero is never observable; removing the last unit deletes
/// the line instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The drink being ordered.
    pub drink: Drink,
    /// Requested quantity, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price x quantity).
    pub fn subtotal(&self) -> Decimal {
        self.drink.price * Decimal::from(self.quantity)
    }
}

// ============================================================================
// Cart
// ============================================================================

/// An in-progress order, keyed by drink id with at most one line per drink.
///
/// Lines keep their insertion order for display purposes; the order carries
/// no further meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `drink`, inserting a new line if needed.
    pub fn add(&mut self, drink: &Drink) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.drink.id == drink.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                drink: drink.clone(),
                quantity: 1,
            });
        }
    }

    /// Removes one unit of the drink with `drink_id`.
    ///
    /// A line at quantity 1 is deleted entirely; removing a drink that is
    /// not in the cart is a no-op.
    pub fn remove(&mut self, drink_id: i64) {
        if let Some(pos) = self.lines.iter().position(|l| l.drink.id == drink_id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Current quantity of a drink, zero if absent.
    pub fn quantity_of(&self, drink_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|l| l.drink.id == drink_id)
            .map_or(0, |l| l.quantity)
    }

    /// The current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total price over all lines. Recomputed on every call so it always
    /// reflects the current lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Builds the `POST /pedidos` payload from the current lines.
    pub fn to_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|l| OrderItem {
                drink_id: l.drink.id,
                quantity: l.quantity,
            })
            .collect()
    }

    /// Drops all lines. Called after a successful submission.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn drink(id: i64, name: &str, price: &str) -> Drink {
        Drink {
            id,
            name: name.to_string(),
            price: price.parse::<Decimal>().unwrap(),
            category: "Bar".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_add_merges_lines_per_drink() {
        let beer = drink(1, "Beer", "2.50");
        let mut cart = Cart::new();

        cart.add(&beer);
        cart.add(&beer);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(1), 2);
    }

    #[test]
    fn test_running_total_scenario() {
        // Beer x2 + Cola x1 = 6.80, then peel the beers off one by one.
        let beer = drink(1, "Beer", "2.50");
        let cola = drink(2, "Cola", "1.80");
        let mut cart = Cart::new();

        cart.add(&beer);
        cart.add(&beer);
        cart.add(&cola);
        assert_eq!(cart.quantity_of(1), 2);
        assert_eq!(cart.quantity_of(2), 1);
        assert_eq!(cart.total(), "6.80".parse::<Decimal>().unwrap());

        cart.remove(1);
        assert_eq!(cart.quantity_of(1), 1);
        assert_eq!(cart.total(), "4.30".parse::<Decimal>().unwrap());

        cart.remove(1);
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total(), "1.80".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_remove_roundtrip_restores_prior_state() {
        let beer = drink(1, "Beer", "2.50");
        let cola = drink(2, "Cola", "1.80");
        let mut cart = Cart::new();
        cart.add(&cola);
        let before = cart.clone();

        cart.add(&beer);
        cart.add(&beer);
        cart.add(&beer);
        cart.remove(1);
        cart.remove(1);
        cart.remove(1);

        assert_eq!(cart, before);

        // One extra remove beyond zero is a no-op.
        cart.remove(1);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_unknown_drink_is_noop() {
        let mut cart = Cart::new();
        cart.remove(99);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_to_items_matches_lines() {
        let beer = drink(1, "Beer", "2.50");
        let cola = drink(2, "Cola", "1.80");
        let mut cart = Cart::new();
        cart.add(&beer);
        cart.add(&cola);
        cart.add(&beer);

        let items = cart.to_items();
        assert_eq!(
            items,
            vec![
                OrderItem { drink_id: 1, quantity: 2 },
                OrderItem { drink_id: 2, quantity: 1 },
            ]
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let beer = drink(1, "Beer", "2.50");
        let cola = drink(2, "Cola", "1.80");
        let wine = drink(3, "Wine", "3.00");
        let mut cart = Cart::new();
        cart.add(&cola);
        cart.add(&wine);
        cart.add(&beer);
        cart.add(&cola);

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.drink.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
