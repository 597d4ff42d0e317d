//! Order table with selectable rows and a live-tracking marker.

use std::fmt::Write as _;

use super::PLACEHOLDER;
use crate::net::types::Order;

#[cfg(test)]
#[path = "order_list_test.rs"]
mod order_list_test;

pub const EMPTY_TEXT: &str = "No orders yet.";
const LIVE_MARKER: &str = "● live";

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRow {
    pub id: String,
    pub status: &'static str,
    pub priority: String,
    pub distance: String,
    pub eta: String,
    pub selected: bool,
}

/// Borrowed inputs for one render of the order table.
pub struct OrderListView<'a> {
    pub orders: &'a [Order],
    pub selected: Option<&'a str>,
    pub live_tracking: bool,
}

impl<'a> OrderListView<'a> {
    #[must_use]
    pub fn new(orders: &'a [Order], selected: Option<&'a str>, live_tracking: bool) -> Self {
        Self { orders, selected, live_tracking }
    }

    /// Rows in server order.
    #[must_use]
    pub fn rows(&self) -> Vec<OrderRow> {
        self.orders
            .iter()
            .map(|order| OrderRow {
                id: order.id.clone(),
                status: order.status.label(),
                priority: order.priority.map_or_else(|| PLACEHOLDER.to_owned(), |p| p.to_string()),
                distance: order
                    .distance_km
                    .map_or_else(|| PLACEHOLDER.to_owned(), |km| format!("{km:.1}")),
                eta: order
                    .estimated_arrival_minutes
                    .map_or_else(|| PLACEHOLDER.to_owned(), |min| format!("{min:.1} min")),
                selected: self.selected == Some(order.id.as_str()),
            })
            .collect()
    }

    /// Invoke `on_select` with the id of the row at `index`.
    /// Returns `false` if there is no such row.
    pub fn select_row(&self, index: usize, mut on_select: impl FnMut(&str)) -> bool {
        match self.orders.get(index) {
            Some(order) => {
                on_select(&order.id);
                true
            }
            None => false,
        }
    }

    /// Render the table as fixed-width text.
    #[must_use]
    pub fn render(&self) -> String {
        if self.orders.is_empty() {
            return EMPTY_TEXT.to_owned();
        }

        let rows = self.rows();
        let id_width = rows.iter().map(|r| r.id.chars().count()).max().unwrap_or(0).max("Order ID".len());
        let distance_header =
            if self.live_tracking { format!("Distance (km) {LIVE_MARKER}") } else { "Distance (km)".to_owned() };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "    {:<3} {:<id_width$}  {:<10}  {:>8}  {:<20}  {}",
            "#", "Order ID", "Status", "Priority", distance_header, "ETA (min)"
        );
        for (i, row) in rows.iter().enumerate() {
            let marker = if row.selected { " >" } else { "  " };
            let _ = writeln!(
                out,
                "{marker}  {:<3} {:<id_width$}  {:<10}  {:>8}  {:<20}  {}",
                i + 1,
                row.id,
                row.status,
                row.priority,
                row.distance,
                row.eta
            );
        }
        out
    }
}

/// The live marker shows when auto-refresh is on and any order has an ETA.
#[must_use]
pub fn live_tracking(auto_refresh: bool, orders: &[Order]) -> bool {
    auto_refresh && orders.iter().any(|o| o.estimated_arrival_minutes.is_some())
}
