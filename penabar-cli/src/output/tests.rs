//! Formatter tests.

use super::{DrinkOutput, JsonFormatter, ProfileOutput, StatisticsOutput, TextFormatter};
use penabar_core::{Cart, CustomerTab, Drink, DrinkRanking, Role, Statistics, User};
use rust_decimal::Decimal;

fn drink(id: i64, name: &str, price: &str, category: &str) -> Drink {
    Drink {
        id,
        name: name.to_string(),
        price: price.parse::<Decimal>().unwrap(),
        category: category.to_string(),
        active: true,
    }
}

#[test]
fn test_menu_groups_by_category() {
    let formatter = TextFormatter::new(false);
    let drinks = vec![
        drink(1, "Caña", "1.80", "cervezas"),
        drink(2, "Cola", "2.50", "refrescos"),
        drink(3, "Doble", "2.50", "cervezas"),
    ];

    let output = formatter.format_menu(&drinks);

    let cervezas = output.find("CERVEZAS").unwrap();
    let refrescos = output.find("REFRESCOS").unwrap();
    assert!(cervezas < refrescos);
    assert!(output.contains("Caña"));
    assert!(output.contains("2.50 €"));
}

#[test]
fn test_no_color_output_has_no_ansi_escapes() {
    let formatter = TextFormatter::new(false);
    let user = User {
        id: 1,
        name: "Maite".to_string(),
        role: Role::Admin,
        balance: "-3.20".parse::<Decimal>().unwrap(),
    };

    let output = formatter.format_profile(&user);

    assert!(!output.contains('\x1b'));
    assert!(output.contains("Maite"));
    assert!(output.contains("-3.20 €"));
}

#[test]
fn test_colored_output_resets() {
    let formatter = TextFormatter::new(true);
    let user = User {
        id: 1,
        name: "Maite".to_string(),
        role: Role::Cliente,
        balance: Decimal::ZERO,
    };

    let output = formatter.format_profile(&user);
    assert!(output.contains("\x1b[0m"));
}

#[test]
fn test_cart_summary_shows_total() {
    let formatter = TextFormatter::new(false);
    let mut cart = Cart::new();
    let beer = drink(1, "Caña", "1.80", "cervezas");
    cart.add(&beer);
    cart.add(&beer);

    let output = formatter.format_cart(&cart);
    assert!(output.contains("2 x Caña"));
    assert!(output.contains("3.60 €"));
}

#[test]
fn test_empty_statistics_message() {
    let formatter = TextFormatter::new(false);
    let output = formatter.format_statistics(&Statistics::default());
    assert!(output.contains("No sales"));
}

#[test]
fn test_statistics_lists_ranking_and_tabs() {
    let formatter = TextFormatter::new(false);
    let stats = Statistics {
        ranking: vec![DrinkRanking {
            name: "Caña".to_string(),
            units_sold: 40,
        }],
        tabs: vec![CustomerTab {
            id: 1,
            name: "Maite".to_string(),
            total_spent: "12.60".parse::<Decimal>().unwrap(),
            drinks: [("Caña".to_string(), 7)].into_iter().collect(),
        }],
    };

    let output = formatter.format_statistics(&stats);
    assert!(output.contains("1. Caña"));
    assert!(output.contains("40 sold"));
    assert!(output.contains("12.60 €"));
    assert!(output.contains("7 x Caña"));

    let json = JsonFormatter::new(false)
        .format(&StatisticsOutput::from(&stats))
        .unwrap();
    assert!(json.contains("\"unitsSold\":40"));
    assert!(json.contains("\"totalSpent\":\"12.60\""));
}

#[test]
fn test_json_profile_uses_camel_case() {
    let user = User {
        id: 7,
        name: "Jon".to_string(),
        role: Role::Superadmin,
        balance: "1.00".parse::<Decimal>().unwrap(),
    };

    let json = JsonFormatter::new(false)
        .format(&ProfileOutput::from(&user))
        .unwrap();

    assert!(json.contains("\"role\":\"superadmin\""));
    assert!(json.contains("\"balance\":\"1.00\""));
}

#[test]
fn test_json_pretty_is_multiline() {
    let output = DrinkOutput::from(&drink(1, "Caña", "1.80", "cervezas"));
    let json = JsonFormatter::new(true).format(&output).unwrap();
    assert!(json.contains('\n'));
}
