//! Serde tests for core types against captured backend payloads.
//!
//! The fixtures here mirror what the backend actually sends: Spanish field
//! names and decimal amounts as strings.

use rust_decimal::Decimal;
use serde_json::json;

use crate::{Drink, Order, Role, Statistics, User};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// ============================================================================
// User / Role
// ============================================================================

#[test]
fn test_user_deserializes_from_wire_shape() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "name": "Maite",
        "role": "cliente",
        "saldo": "-12.50"
    }))
    .unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Cliente);
    assert_eq!(user.balance, dec("-12.50"));
    assert!(!user.is_staff());
}

#[test]
fn test_user_roundtrip_preserves_balance() {
    let user = User {
        id: 1,
        name: "Jon".to_string(),
        role: Role::Admin,
        balance: dec("3.20"),
    };

    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_role_rejects_unknown_value() {
    let result: Result<Role, _> = serde_json::from_str(r#""barman""#);
    assert!(result.is_err());
}

// ============================================================================
// Drink
// ============================================================================

#[test]
fn test_drink_deserializes_price_from_string_or_number() {
    // Some backend versions send precio as a string, others as a number.
    let as_string: Drink = serde_json::from_value(json!({
        "id": 1, "nombre": "Caña", "precio": "1.50", "categoria": "Cervezas"
    }))
    .unwrap();
    let as_number: Drink = serde_json::from_value(json!({
        "id": 1, "nombre": "Caña", "precio": 1.50, "categoria": "Cervezas"
    }))
    .unwrap();

    assert_eq!(as_string.price, dec("1.50"));
    assert_eq!(as_number.price, dec("1.5"));
}

#[test]
fn test_drink_active_defaults_to_true() {
    // The public /bebidas listing omits is_active.
    let drink: Drink = serde_json::from_value(json!({
        "id": 2, "nombre": "Mosto", "precio": "1.20", "categoria": "Refrescos"
    }))
    .unwrap();
    assert!(drink.active);
}

// ============================================================================
// Pending orders
// ============================================================================

#[test]
fn test_pending_order_deserializes_nested_lines() {
    let order: Order = serde_json::from_value(json!({
        "id": 42,
        "user": { "name": "Maite" },
        "created_at": "2024-08-17T21:32:00Z",
        "detalles": [
            { "cantidad": 2, "bebida": { "id": 1, "nombre": "Caña" } },
            { "cantidad": 1, "bebida": { "id": 5, "nombre": "Kalimotxo" } }
        ]
    }))
    .unwrap();

    assert_eq!(order.id, 42);
    assert_eq!(order.customer.name, "Maite");
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[0].quantity, 2);
    assert_eq!(order.lines[1].drink.name, "Kalimotxo");
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_statistics_deserializes_dashboard_payload() {
    let stats: Statistics = serde_json::from_value(json!({
        "resumen": [
            { "nombre": "Caña", "total_vendido": 31 },
            { "nombre": "Kalimotxo", "total_vendido": 12 }
        ],
        "historial": [
            {
                "id": 7,
                "nombre": "Maite",
                "total_gastado": "18.40",
                "bebidas": { "Caña": 9, "Kalimotxo": 2 }
            }
        ]
    }))
    .unwrap();

    assert!(!stats.is_empty());
    assert_eq!(stats.ranking[0].units_sold, 31);
    assert_eq!(stats.tabs[0].total_spent, dec("18.40"));
    assert_eq!(stats.tabs[0].drinks["Caña"], 9);
}

#[test]
fn test_statistics_tolerates_missing_sections() {
    let stats: Statistics = serde_json::from_value(json!({})).unwrap();
    assert!(stats.is_empty());
}
