//! Dashboard rendering: role-shaped stat block, cumulative P&L chart and the trade list.
//!
//! The trader/admin branch is taken once, on the [`DashboardSummary`] variant.

use super::trades::render_trade_table;
use crate::app::dashboard::{DashboardState, LoadStatus};
use comfy_table::presets::UTF8_FULL;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{Cell, Table};
use shared::utils::{format_date, format_percent, format_pnl};
use shared::{AdminSummary, ChartPoint, DashboardSummary, TraderSummary, UserPerformance};

const CHART_WIDTH: usize = 30;

fn stat_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

fn performer(user: Option<&UserPerformance>) -> String {
    user.map(|user| format!("{} ({})", user.username, format_pnl(user.total_pnl)))
        .unwrap_or_else(|| "-".to_string())
}

pub fn render_trader_summary(summary: &TraderSummary) -> String {
    let best_asset = summary
        .best_asset
        .as_ref()
        .map(|asset| format!("{} ({})", asset.symbol, format_pnl(asset.total_pnl)))
        .unwrap_or_else(|| "-".to_string());

    stat_table(vec![
        ("Net realized P&L", format_pnl(summary.net_realized_pnl)),
        ("Win rate", format_percent(summary.win_rate)),
        ("Profit factor", format!("{:.2}", summary.profit_factor)),
        ("Closed trades", summary.total_closed_trades.to_string()),
        ("Active positions", summary.active_positions.to_string()),
        ("Average win", format_pnl(summary.avg_win)),
        ("Average loss", format_pnl(summary.avg_loss)),
        ("Best asset", best_asset),
    ])
    .to_string()
}

pub fn render_admin_summary(summary: &AdminSummary) -> String {
    stat_table(vec![
        ("Users", summary.total_users.to_string()),
        ("Total trades", summary.total_trades.to_string()),
        ("Active positions", summary.active_positions.to_string()),
        ("Platform P&L", format_pnl(summary.total_platform_pnl)),
        ("Top gainer", performer(summary.top_gainer.as_ref())),
        ("Top loser", performer(summary.top_loser.as_ref())),
    ])
    .to_string()
}

pub fn render_summary(summary: &DashboardSummary) -> String {
    match summary {
        DashboardSummary::Admin(admin) => render_admin_summary(admin),
        DashboardSummary::Trader(trader) => render_trader_summary(trader),
    }
}

/// Horizontal bar per point, scaled to the largest absolute cumulative value.
pub fn render_chart(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return "No closed trades yet.".to_string();
    }

    let max = points
        .iter()
        .map(|point| point.cumulative_pnl.abs())
        .fold(0.0_f64, f64::max);

    points
        .iter()
        .map(|point| {
            let len = if max > 0.0 {
                ((point.cumulative_pnl.abs() / max) * CHART_WIDTH as f64).round() as usize
            } else {
                0
            };
            let bar = if point.cumulative_pnl < 0.0 { "-" } else { "#" }.repeat(len);
            format!(
                "{}  {:>12}  {}",
                format_date(&point.date),
                format_pnl(point.cumulative_pnl),
                bar
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_dashboard(state: &DashboardState) -> String {
    match &state.status {
        LoadStatus::Loading => return "Loading...".to_string(),
        LoadStatus::Error(message) => return message.clone(),
        LoadStatus::Ready => {}
    }

    let mut sections = Vec::new();

    if let Some(user) = &state.user {
        sections.push(format!("Welcome back, {} ({})", user.username, user.role));
    }

    if let Some(summary) = &state.summary {
        let title = if state.is_admin {
            "Platform Overview"
        } else {
            "Performance"
        };
        sections.push(format!("{}\n{}", title, render_summary(summary)));
    }

    sections.push(format!("Cumulative P&L\n{}", render_chart(&state.chart)));

    let list_title = if state.is_admin {
        "Top Trades"
    } else {
        "Recent Trades"
    };
    sections.push(format!("{}\n{}", list_title, render_trade_table(&state.trades)));

    if let Some(error) = &state.action_error {
        sections.push(format!("Error: {}", error));
    }

    sections.join("\n\n")
}
