//! Terminal rendering for holdings, summary and allocation breakdown

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::portfolio::types::{Allocation, Holding, PortfolioSummary, PriceSource, ValuedHolding};

/// Format an amount in the portfolio currency, e.g. 1234.5 -> "$1234.50"
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a signed percentage, e.g. 12.3456 -> "+12.35%"
pub fn format_percent(percent: f64) -> String {
    let sign = if percent >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, percent)
}

fn colorize_signed(text: String, value: f64) -> String {
    if value >= 0.0 {
        format!("{}", text.bright_green())
    } else {
        format!("{}", text.bright_red())
    }
}

/// Print the raw holdings list (no quote data)
pub fn display_holdings(holdings: &[Holding]) {
    if holdings.is_empty() {
        println!("{}", "No holdings yet. Add one with 'stockfolio add'.".bright_black());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Ticker", "Quantity", "Purchase Price", "Purchase Date"]);

    for h in holdings {
        table.add_row(vec![
            Cell::new(&h.id),
            Cell::new(&h.ticker),
            Cell::new(format!("{}", h.quantity)),
            Cell::new(format_currency(h.purchase_price)),
            Cell::new(h.purchase_date.format("%Y-%m-%d").to_string()),
        ]);
    }

    println!("{table}");
}

/// Print the valued holdings table
///
/// Fallback-priced rows are marked with '*' so a failed quote fetch does
/// not read as a position that broke even.
pub fn display_valued_holdings(holdings: &[ValuedHolding]) {
    if holdings.is_empty() {
        println!("{}", "No holdings yet. Add one with 'stockfolio add'.".bright_black());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "ID", "Ticker", "Quantity", "Current", "Value", "Cost", "P&L", "P&L %",
        ]);

    for v in holdings {
        let price_cell = match v.price_source {
            PriceSource::Live => format_currency(v.current_price),
            PriceSource::PurchaseFallback => format!("{} *", format_currency(v.current_price)),
        };

        table.add_row(vec![
            Cell::new(&v.holding.id),
            Cell::new(&v.holding.ticker),
            Cell::new(format!("{}", v.holding.quantity)),
            Cell::new(price_cell),
            Cell::new(format_currency(v.current_value)),
            Cell::new(format_currency(v.cost_basis)),
            Cell::new(colorize_signed(format_currency(v.pnl), v.pnl)),
            Cell::new(colorize_signed(format_percent(v.pnl_percent), v.pnl_percent)),
        ]);
    }

    println!("{table}");

    if holdings
        .iter()
        .any(|v| v.price_source == PriceSource::PurchaseFallback)
    {
        println!(
            "{}",
            "* quote unavailable, showing purchase price".bright_black()
        );
    }
}

/// Print the portfolio summary block
pub fn display_summary(summary: &PortfolioSummary) {
    println!();
    println!("{}", "Portfolio Summary".bright_yellow().bold());
    println!(
        "  {} {}",
        "Total Value:".bright_black(),
        format_currency(summary.total_value).bright_white()
    );
    println!(
        "  {} {}",
        "Total Cost:".bright_black(),
        format_currency(summary.total_cost)
    );
    println!(
        "  {} {} ({})",
        "Total P&L:".bright_black(),
        colorize_signed(format_currency(summary.total_pnl), summary.total_pnl),
        colorize_signed(format_percent(summary.total_pnl_percent), summary.total_pnl_percent)
    );

    if let Some(best) = &summary.best_performer {
        println!(
            "  {} {} ({})",
            "Best:".bright_black(),
            best.holding.ticker.bright_cyan(),
            colorize_signed(format_percent(best.pnl_percent), best.pnl_percent)
        );
    }
    if let Some(worst) = &summary.worst_performer {
        println!(
            "  {} {} ({})",
            "Worst:".bright_black(),
            worst.holding.ticker.bright_cyan(),
            colorize_signed(format_percent(worst.pnl_percent), worst.pnl_percent)
        );
    }
}

/// Print the allocation breakdown as percentage bars
pub fn display_allocations(allocations: &[Allocation]) {
    if allocations.is_empty() {
        return;
    }

    println!();
    println!("{}", "Allocation".bright_yellow().bold());
    for a in allocations {
        // One bar segment per 2% of the portfolio
        let bar = "█".repeat((a.percentage / 2.0).round() as usize);
        println!(
            "  {:<8} {:>7} {} {}",
            a.ticker.bright_cyan(),
            format!("{:.1}%", a.percentage),
            bar.bright_blue(),
            format_currency(a.value).bright_black()
        );
    }
}
