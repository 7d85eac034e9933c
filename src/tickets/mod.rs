//! Ticket orders: quantities per ticket type, totals, and the emailed
//! confirmation.
use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Error, Result, bail};

use crate::relay::{EmailRelay, RelayMessage, reference_id};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum TicketType {
    Adult,
    Student,
    Senior,
    Member,
}

impl TicketType {
    pub const ALL: [TicketType; 4] = [
        TicketType::Adult,
        TicketType::Student,
        TicketType::Senior,
        TicketType::Member,
    ];

    /// Unit price in cents
    pub fn price_cents(&self) -> u64 {
        match self {
            TicketType::Adult => 1650,
            TicketType::Student => 1450,
            TicketType::Senior => 1450,
            TicketType::Member => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Adult => "Adult",
            TicketType::Student => "Student",
            TicketType::Senior => "Senior (65+)",
            TicketType::Member => "Member",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `1650` -> `$16.50`
pub fn format_usd(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketOrder {
    quantities: BTreeMap<TicketType, u32>,
    pub name: String,
    pub email: String,
}

impl TicketOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, ticket: TicketType) -> u32 {
        self.quantities.get(&ticket).copied().unwrap_or(0)
    }

    /// Add `delta` tickets, never going below zero
    pub fn adjust(&mut self, ticket: TicketType, delta: i64) {
        let current = i64::from(self.quantity(ticket));
        let next = (current + delta).clamp(0, i64::from(u32::MAX));
        self.set_quantity(ticket, next as u32);
    }

    pub fn set_quantity(&mut self, ticket: TicketType, quantity: u32) {
        if quantity == 0 {
            self.quantities.remove(&ticket);
        } else {
            self.quantities.insert(ticket, quantity);
        }
    }

    pub fn total_cents(&self) -> u64 {
        self.quantities
            .iter()
            .map(|(ticket, qty)| ticket.price_cents() * u64::from(*qty))
            .sum()
    }

    /// Ready to move on to contact details
    pub fn has_tickets(&self) -> bool {
        self.quantities.values().any(|qty| *qty > 0)
    }

    pub fn can_submit(&self) -> bool {
        self.has_tickets() && !self.name.trim().is_empty() && self.email.contains('@')
    }

    /// `Adult x2, Member x1` for every ticket type with a quantity
    pub fn summary_line(&self) -> String {
        self.quantities
            .iter()
            .map(|(ticket, qty)| format!("{} x{}", ticket.label(), qty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn confirmation(&self, order_id: &str) -> RelayMessage {
        RelayMessage::new(
            &format!("Your High Museum Tickets: {}", order_id),
            &format!("Hello, {}! Here is your order: {}", self.name, order_id),
        )
        .field("Name", &self.name)
        .field("Order ID", order_id)
        .field("Tickets", &self.summary_line())
        .field("Total Amount", &format_usd(self.total_cents()))
    }
}

/// Email the order confirmation and return the order ID
pub async fn submit_order(relay: &EmailRelay, order: &TicketOrder) -> Result<String, Error> {
    if !order.can_submit() {
        bail!("Order needs at least one ticket, a name and a valid email");
    }
    let order_id = reference_id("HMA");
    relay
        .send(&order.email, &order.confirmation(&order_id))
        .await
        .inspect_err(|e| tracing::error!("Email Error: {}", e))?;
    tracing::info!("Ticket order {} confirmed", order_id);
    Ok(order_id)
}
