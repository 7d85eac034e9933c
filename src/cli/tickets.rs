use anyhow::{Result, bail};

use crate::core::AppConfig;
use crate::relay::EmailRelay;
use crate::tickets::{TicketOrder, TicketType, format_usd, submit_order};

#[derive(clap::Args)]
pub struct TicketsArgs {
    #[arg(long, default_value_t = 0)]
    adult: u32,
    #[arg(long, default_value_t = 0)]
    student: u32,
    #[arg(long, default_value_t = 0)]
    senior: u32,
    #[arg(long, default_value_t = 0)]
    member: u32,
    /// Name on the order
    #[arg(long)]
    name: String,
    /// Where the confirmation is sent
    #[arg(long)]
    email: String,
}

pub async fn run(config: &AppConfig, args: TicketsArgs) -> Result<()> {
    let mut order = TicketOrder::new();
    order.set_quantity(TicketType::Adult, args.adult);
    order.set_quantity(TicketType::Student, args.student);
    order.set_quantity(TicketType::Senior, args.senior);
    order.set_quantity(TicketType::Member, args.member);
    order.name = args.name;
    order.email = args.email;

    if !order.has_tickets() {
        bail!("Select at least one ticket");
    }
    for ticket in TicketType::ALL {
        let qty = order.quantity(ticket);
        if qty > 0 {
            println!(
                "{:<14} x{:<3} {}",
                ticket.label(),
                qty,
                format_usd(ticket.price_cents() * u64::from(qty))
            );
        }
    }
    println!("{:<19} {}", "Total", format_usd(order.total_cents()));

    let relay = EmailRelay::new(&config.email_relay_url);
    match submit_order(&relay, &order).await {
        Ok(order_id) => {
            println!("Order {} confirmed, a confirmation was sent to {}", order_id, order.email);
            Ok(())
        }
        Err(e) => {
            tracing::debug!("{:?}", e);
            bail!("Failed to send confirmation. Please check your internet connection.")
        }
    }
}
