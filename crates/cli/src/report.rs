//! Plain-text rendering of orders and catalogs.

use std::fmt::Write;

use item_packer_core::{Order, Pack};
use serde_json::json;

/// Renders calculated orders, followed by the retained history if given.
pub fn render_calculation(
    orders: &[Order],
    history: Option<&[Order]>,
    as_json: bool,
) -> serde_json::Result<String> {
    if as_json {
        let output = match history {
            Some(history) => json!({ "orders": orders, "history": history }),
            None => json!(orders),
        };
        return serde_json::to_string_pretty(&output);
    }

    let mut out = orders
        .iter()
        .map(render_order)
        .collect::<Vec<_>>()
        .join("\n\n");
    if let Some(history) = history {
        let _ = write!(out, "\n\n{}", render_history(history));
    }
    Ok(out)
}

/// Renders an order as a short breakdown table.
pub fn render_order(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Order for {} items", order.requested_items);
    for line in &order.lines {
        let _ = writeln!(
            out,
            "  {:>6} x {:<8} = {}",
            line.quantity,
            line.pack.amount,
            line.items()
        );
    }
    let summary = order.summary();
    let fit = if order.is_exact() {
        "exact fit".to_string()
    } else {
        format!("{} overpacked", summary.overpacked_items)
    };
    let _ = write!(
        out,
        "Total: {} items, {} packs in {} lines ({})",
        summary.total_items, summary.packs, summary.lines, fit
    );
    out
}

/// Renders the retained order history, oldest first.
pub fn render_history(orders: &[Order]) -> String {
    let mut out = format!("History ({} orders):", orders.len());
    for order in orders {
        let summary = order.summary();
        let _ = write!(
            out,
            "\n  {:>8} requested -> {:>8} shipped ({} overpacked)",
            summary.requested_items, summary.total_items, summary.overpacked_items
        );
    }
    out
}

/// Renders the catalog, one pack size per line.
pub fn render_packs(packs: &[Pack]) -> String {
    if packs.is_empty() {
        return "No packs configured".to_string();
    }
    let mut out = String::from("Available packs:");
    for pack in packs {
        let _ = write!(out, "\n  - {}", pack.amount);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_packer_core::calculate_order;

    #[test]
    fn test_render_order() {
        let packs = [Pack { amount: 1000 }, Pack { amount: 250 }];
        let order = calculate_order(1001, &packs).unwrap();

        let text = render_order(&order);
        assert!(text.starts_with("Order for 1001 items"));
        assert!(text.contains("1 x 1000"));
        assert!(text.ends_with("Total: 1250 items, 2 packs in 2 lines (249 overpacked)"));
    }

    #[test]
    fn test_render_exact_order() {
        let packs = [Pack { amount: 500 }, Pack { amount: 250 }];
        let order = calculate_order(1750, &packs).unwrap();

        let text = render_order(&order);
        assert!(text.ends_with("Total: 1750 items, 4 packs in 2 lines (exact fit)"));
    }

    #[test]
    fn test_render_history() {
        let packs = [Pack { amount: 250 }];
        let orders = vec![
            calculate_order(100, &packs).unwrap(),
            calculate_order(500, &packs).unwrap(),
        ];

        let text = render_history(&orders);
        assert!(text.starts_with("History (2 orders):"));
        assert!(text.contains("100 requested ->      250 shipped (150 overpacked)"));
        assert!(text.contains("500 requested ->      500 shipped (0 overpacked)"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_calculation_keeps_orders_evicted_from_history() {
        let packs = [Pack { amount: 250 }];
        let orders = vec![
            calculate_order(100, &packs).unwrap(),
            calculate_order(500, &packs).unwrap(),
        ];
        let history = &orders[1..];

        let text = render_calculation(&orders, Some(history), false).unwrap();
        assert!(text.contains("Order for 100 items"));
        assert!(text.contains("Order for 500 items"));
        assert!(text.ends_with(&render_history(history)));

        let json: serde_json::Value =
            serde_json::from_str(&render_calculation(&orders, Some(history), true).unwrap())
                .unwrap();
        assert_eq!(json["orders"].as_array().unwrap().len(), 2);
        assert_eq!(json["history"].as_array().unwrap().len(), 1);
        assert_eq!(json["history"][0]["requestedItems"], 500);
    }

    #[test]
    fn test_calculation_without_history() {
        let packs = [Pack { amount: 250 }];
        let orders = vec![calculate_order(100, &packs).unwrap()];

        let text = render_calculation(&orders, None, false).unwrap();
        assert!(!text.contains("History"));

        let json: serde_json::Value =
            serde_json::from_str(&render_calculation(&orders, None, true).unwrap()).unwrap();
        assert!(json.is_array());
    }

    #[test]
    fn test_render_packs() {
        assert_eq!(render_packs(&[]), "No packs configured");
        let text = render_packs(&[Pack { amount: 500 }, Pack { amount: 250 }]);
        assert_eq!(text, "Available packs:\n  - 500\n  - 250");
    }
}
