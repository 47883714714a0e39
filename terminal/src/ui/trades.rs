//! Trade tables and the journal page.

use crate::app::journal::{JournalState, TradeFilter};
use comfy_table::presets::UTF8_FULL;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{Cell, CellAlignment, Color, Table};
use shared::utils::{format_date, format_optional_pnl, format_price, short_id};
use shared::{Trade, TradeStatus};

pub const EMPTY_MESSAGE: &str = "No trades yet.";

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn pnl_cell(pnl: Option<f64>) -> Cell {
    let cell = Cell::new(format_optional_pnl(pnl)).set_alignment(CellAlignment::Right);
    match pnl {
        Some(value) if value > 0.0 => cell.fg(Color::Green),
        Some(value) if value < 0.0 => cell.fg(Color::Red),
        _ => cell,
    }
}

fn status_cell(trade: &Trade) -> Cell {
    match trade.display_status() {
        TradeStatus::Open => Cell::new("OPEN").fg(Color::Yellow),
        TradeStatus::Closed => Cell::new("CLOSED"),
    }
}

fn money_cell(value: Option<f64>) -> Cell {
    Cell::new(value.map(format_price).unwrap_or_else(|| "-".to_string()))
        .set_alignment(CellAlignment::Right)
}

/// Table of trades. The owner column appears when any row carries owner details (admin listings).
pub fn trade_table(trades: &[Trade]) -> Table {
    let show_owner = trades.iter().any(|trade| trade.owner.is_some());

    let mut header = vec!["ID", "Symbol", "Side", "Qty", "Entry", "Opened", "Exit", "Closed", "P&L", "Status"];
    if show_owner {
        header.insert(1, "Trader");
    }

    let mut table = base_table();
    table.set_header(header);

    for trade in trades {
        let mut row = vec![
            Cell::new(short_id(&trade.id)),
            Cell::new(&trade.symbol),
            Cell::new(trade.side),
            Cell::new(trade.quantity).set_alignment(CellAlignment::Right),
            money_cell(Some(trade.entry_price)),
            Cell::new(format_date(&trade.entry_date)),
            money_cell(trade.exit_price),
            Cell::new(
                trade
                    .exit_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| "-".to_string()),
            ),
            pnl_cell(trade.pnl),
            status_cell(trade),
        ];
        if show_owner {
            let owner = trade
                .owner
                .as_ref()
                .map(|owner| owner.username.as_str())
                .unwrap_or("-");
            row.insert(1, Cell::new(owner));
        }
        table.add_row(row);
    }

    table
}

pub fn render_trade_table(trades: &[Trade]) -> String {
    if trades.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    trade_table(trades).to_string()
}

/// Every field of one trade.
pub fn render_trade_detail(trade: &Trade) -> String {
    let mut table = base_table();
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec![Cell::new("ID"), Cell::new(&trade.id)]);
    if let Some(owner) = &trade.owner {
        table.add_row(vec![
            Cell::new("Trader"),
            Cell::new(format!("{} <{}>", owner.username, owner.email)),
        ]);
    }
    table.add_row(vec![Cell::new("Symbol"), Cell::new(&trade.symbol)]);
    table.add_row(vec![Cell::new("Side"), Cell::new(trade.side)]);
    table.add_row(vec![Cell::new("Quantity"), Cell::new(trade.quantity)]);
    table.add_row(vec![Cell::new("Entry price"), money_cell(Some(trade.entry_price))]);
    table.add_row(vec![Cell::new("Entry date"), Cell::new(&trade.entry_date)]);
    table.add_row(vec![Cell::new("Exit price"), money_cell(trade.exit_price)]);
    table.add_row(vec![
        Cell::new("Exit date"),
        Cell::new(trade.exit_date.as_deref().unwrap_or("-")),
    ]);
    table.add_row(vec![Cell::new("P&L"), pnl_cell(trade.pnl)]);
    table.add_row(vec![Cell::new("Status"), status_cell(trade)]);

    table.to_string()
}

fn filter_label(filter: TradeFilter) -> &'static str {
    match filter {
        TradeFilter::All => "all trades",
        TradeFilter::Open => "open positions",
    }
}

/// Journal page: header line, table (or placeholder) and pager.
pub fn render_journal(state: &JournalState) -> String {
    if let Some(error) = &state.error {
        return error.clone();
    }

    let mut out = format!(
        "Trade Journal: {} ({} total)\n",
        filter_label(state.filter),
        state.total
    );
    out.push_str(&render_trade_table(&state.trades));
    out.push('\n');

    out.push_str(&format!("Page {} of {}", state.page, state.page_count()));
    if state.has_previous_page() {
        out.push_str(&format!("  | previous: --page {}", state.page - 1));
    }
    if state.has_next_page() {
        out.push_str(&format!("  | next: --page {}", state.page + 1));
    }

    if let Some(error) = &state.action_error {
        out.push_str(&format!("\nError: {}", error));
    }
    out
}
