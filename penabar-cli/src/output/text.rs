//! Text output formatting with colors.

use chrono::Local;
use penabar_core::{Cart, Drink, Order, Statistics, User};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ========================================================================
    // Profile
    // ========================================================================

    /// Formats the logged-in profile: name, role, balance.
    pub fn format_profile(&self, user: &User) -> String {
        let balance = self.format_balance(user.balance);
        format!(
            "{}  {}\nSaldo: {}",
            self.bold(&user.name),
            self.dim(&format!("({})", user.role)),
            balance
        )
    }

    fn format_balance(&self, balance: Decimal) -> String {
        let text = format!("{balance} €");
        if balance.is_sign_negative() {
            self.red(&text)
        } else {
            self.green(&text)
        }
    }

    // ========================================================================
    // Menu & Cart
    // ========================================================================

    /// Formats the menu grouped by category, one numbered line per drink.
    pub fn format_menu(&self, drinks: &[Drink]) -> String {
        let mut by_category: BTreeMap<&str, Vec<&Drink>> = BTreeMap::new();
        for drink in drinks {
            by_category.entry(&drink.category).or_default().push(drink);
        }

        let mut lines = Vec::new();
        for (category, drinks) in by_category {
            lines.push(self.bold(&category.to_uppercase()));
            for drink in drinks {
                lines.push(format!(
                    "  {:>4}  {:<24} {:>8}",
                    self.dim(&format!("#{}", drink.id)),
                    drink.name,
                    format!("{} €", drink.price)
                ));
            }
            lines.push(String::new());
        }
        lines.pop();
        lines.join("\n")
    }

    /// Formats the cart with a running total, for the pre-submit summary.
    pub fn format_cart(&self, cart: &Cart) -> String {
        let mut lines = Vec::new();
        for line in cart.lines() {
            lines.push(format!(
                "  {:>2} x {:<24} {:>8}",
                line.quantity,
                line.drink.name,
                format!("{} €", line.subtotal())
            ));
        }
        lines.push(format!(
            "  {:<29} {:>8}",
            self.bold("Total"),
            self.bold(&format!("{} €", cart.total()))
        ));
        lines.join("\n")
    }

    // ========================================================================
    // Pending Orders
    // ========================================================================

    /// Formats the pending-order queue, one block per order.
    pub fn format_pending(&self, orders: &[Order]) -> String {
        if orders.is_empty() {
            return self.dim("No pending orders").to_string();
        }

        let mut blocks = Vec::new();
        for order in orders {
            let when = order
                .created_at
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string();
            let mut lines = vec![format!(
                "{}  {}  {}",
                self.bold(&format!("#{}", order.id)),
                order.customer.name,
                self.dim(&when)
            )];
            for line in &order.lines {
                lines.push(format!("    {} x {}", line.quantity, line.drink.name));
            }
            blocks.push(lines.join("\n"));
        }
        blocks.join("\n")
    }

    // ========================================================================
    // Admin Tables
    // ========================================================================

    /// Formats the full catalog, inactive drinks included.
    pub fn format_catalog(&self, drinks: &[Drink]) -> String {
        let mut lines = vec![format!(
            "{:>4}  {:<24} {:>8}  {:<12} {}",
            "ID", "Name", "Price", "Category", "Status"
        )];
        lines.push("─".repeat(60));
        for drink in drinks {
            let status = if drink.active {
                self.green("active")
            } else {
                self.dim("inactive")
            };
            lines.push(format!(
                "{:>4}  {:<24} {:>8}  {:<12} {}",
                drink.id,
                drink.name,
                format!("{} €", drink.price),
                drink.category,
                status
            ));
        }
        lines.join("\n")
    }

    /// Formats the member list with roles and balances.
    pub fn format_users(&self, users: &[User]) -> String {
        let mut lines = vec![format!(
            "{:>4}  {:<20} {:<12} {:>10}",
            "ID", "Name", "Role", "Saldo"
        )];
        lines.push("─".repeat(50));
        for user in users {
            lines.push(format!(
                "{:>4}  {:<20} {:<12} {:>10}",
                user.id,
                user.name,
                user.role.to_string(),
                self.format_balance(user.balance)
            ));
        }
        lines.join("\n")
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Formats the ranking plus one tab block per member.
    pub fn format_statistics(&self, stats: &Statistics) -> String {
        if stats.is_empty() {
            return self.dim("No sales recorded yet").to_string();
        }

        let mut lines = Vec::new();

        lines.push(self.bold("TOP DRINKS"));
        for (rank, entry) in stats.ranking.iter().enumerate() {
            lines.push(format!(
                "  {:>2}. {:<24} {:>5} sold",
                rank + 1,
                entry.name,
                entry.units_sold
            ));
        }

        if !stats.tabs.is_empty() {
            lines.push(String::new());
            lines.push(self.bold("TABS"));
            for tab in &stats.tabs {
                lines.push(format!(
                    "  {}  {}",
                    self.cyan(&tab.name),
                    self.bold(&format!("{} €", tab.total_spent))
                ));
                for (drink, quantity) in &tab.drinks {
                    lines.push(format!("      {quantity} x {drink}"));
                }
            }
        }

        lines.join("\n")
    }

    // ========================================================================
    // Color Helpers
    // ========================================================================

    fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    fn red(&self, s: &str) -> String {
        self.paint(RED, s)
    }

    fn cyan(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_colors {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
