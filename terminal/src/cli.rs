//! # Command Line Interface
//!
//! `journal` subcommands. Each one navigates through the route guards first, drives the matching
//! controller and renders its state. Session events raised along the way are applied afterwards;
//! a rejected credential adds a "log in again" notice to the output.

use crate::app::{App, AppEvent, Screen, TradeFilter};
use crate::core::error::Result;
use crate::ui;
use crate::utils::validation::normalize_timestamp;
use clap::{Args, Parser, Subcommand};
use shared::{CloseTrade, CreateTrade, TradeSide, UpdateTrade};

pub const NOT_LOGGED_IN: &str = "Not logged in. Run `journal login` first.";
pub const ALREADY_LOGGED_IN: &str = "Already logged in. Run `journal logout` first.";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again with `journal login`.";

/// Command-line client for the trading journal.
#[derive(Debug, Parser)]
#[command(name = "journal", author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the journal API (overrides JOURNAL_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account and log in.
    Register {
        /// Display name (at least 3 characters)
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "JOURNAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "JOURNAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// Summary, cumulative P&L and top/recent trades.
    Dashboard,
    /// Browse and edit journal entries.
    #[command(subcommand)]
    Trades(TradeCommand),
}

#[derive(Debug, Subcommand)]
pub enum TradeCommand {
    /// One page of the journal.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Only open positions
        #[arg(long)]
        open: bool,
    },
    /// Every field of one trade.
    Show { id: String },
    /// Record a new position.
    Add(AddArgs),
    /// Change fields of an existing trade.
    Edit(EditArgs),
    /// Close an open position. The server computes the P&L.
    Close {
        id: String,
        #[arg(long)]
        exit_price: f64,
        /// Defaults to now (server time)
        #[arg(long)]
        exit_date: Option<String>,
    },
    /// Remove a trade.
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Ticker symbol (e.g. "AAPL")
    #[arg(long)]
    pub symbol: String,
    /// LONG or SHORT
    #[arg(long)]
    pub side: TradeSide,
    #[arg(long)]
    pub quantity: f64,
    #[arg(long)]
    pub entry_price: f64,
    /// YYYY-MM-DD or YYYY-MM-DDTHH:MM; defaults to now (server time)
    #[arg(long)]
    pub entry_date: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub symbol: Option<String>,
    #[arg(long)]
    pub side: Option<TradeSide>,
    #[arg(long)]
    pub quantity: Option<f64>,
    #[arg(long)]
    pub entry_price: Option<f64>,
    #[arg(long)]
    pub entry_date: Option<String>,
    #[arg(long)]
    pub exit_price: Option<f64>,
    #[arg(long)]
    pub exit_date: Option<String>,
}

/// Text to print and whether the command succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

fn normalize_optional(date: Option<String>) -> Result<Option<String>> {
    date.map(|date| normalize_timestamp(&date)).transpose()
}

/// Run `command`, then apply pending session events.
pub async fn execute(app: &mut App, command: Command) -> Result<CommandOutput> {
    let mut output = run(app, command).await?;

    if app.process_events().contains(&AppEvent::SessionExpired) {
        output.text = if output.text.is_empty() {
            SESSION_EXPIRED.to_string()
        } else {
            format!("{}\n{}", output.text, SESSION_EXPIRED)
        };
        output.success = false;
    }

    Ok(output)
}

async fn run(app: &mut App, command: Command) -> Result<CommandOutput> {
    match command {
        Command::Register {
            username,
            email,
            password,
        } => {
            if app.show(Screen::Register) != Screen::Register {
                return Ok(CommandOutput::failed(ALREADY_LOGGED_IN));
            }
            if app.session().register(&username, &email, &password).await {
                Ok(CommandOutput::ok(format!(
                    "Account created. Logged in as {}.",
                    username.trim()
                )))
            } else {
                Ok(session_error(app))
            }
        }
        Command::Login { email, password } => {
            if app.show(Screen::Login) != Screen::Login {
                return Ok(CommandOutput::failed(ALREADY_LOGGED_IN));
            }
            if app.session().login(&email, &password).await {
                Ok(CommandOutput::ok(format!("Logged in as {}.", email.trim())))
            } else {
                Ok(session_error(app))
            }
        }
        Command::Logout => {
            if !app.is_authenticated() {
                return Ok(CommandOutput::ok("Not logged in."));
            }
            app.session().logout()?;
            Ok(CommandOutput::ok("Logged out."))
        }
        Command::Whoami => {
            if app.show(Screen::Dashboard) != Screen::Dashboard {
                return Ok(CommandOutput::failed(NOT_LOGGED_IN));
            }
            match app.session().bootstrap().await {
                Some(user) => Ok(CommandOutput::ok(ui::render_profile(&user))),
                None => Ok(CommandOutput::failed("Could not load your profile.")),
            }
        }
        Command::Dashboard => {
            if app.show(Screen::Dashboard) != Screen::Dashboard {
                return Ok(CommandOutput::failed(NOT_LOGGED_IN));
            }
            let loaded = app.dashboard().load().await;
            let text = ui::render_dashboard(&app.dashboard().state());
            Ok(CommandOutput {
                text,
                success: loaded,
            })
        }
        Command::Trades(command) => {
            if app.show(Screen::Journal) != Screen::Journal {
                return Ok(CommandOutput::failed(NOT_LOGGED_IN));
            }
            run_trades(app, command).await
        }
    }
}

fn session_error(app: &App) -> CommandOutput {
    let message = app
        .session()
        .state()
        .error
        .unwrap_or_else(|| "Authentication failed.".to_string());
    CommandOutput::failed(message)
}

async fn run_trades(app: &App, command: TradeCommand) -> Result<CommandOutput> {
    let journal = app.journal();

    match command {
        TradeCommand::List { page, open } => {
            let filter = if open {
                TradeFilter::Open
            } else {
                TradeFilter::All
            };
            if !journal.set_filter(filter).await {
                return Ok(CommandOutput::failed(ui::render_journal(&journal.state())));
            }
            if page != 1 && !journal.go_to_page(page).await {
                let state = journal.state();
                if state.error.is_none() {
                    return Ok(CommandOutput::failed(format!(
                        "Page {} does not exist ({} pages).",
                        page,
                        state.page_count()
                    )));
                }
                return Ok(CommandOutput::failed(ui::render_journal(&state)));
            }
            Ok(CommandOutput::ok(ui::render_journal(&journal.state())))
        }
        TradeCommand::Show { id } => match app.api().get_trade(&id).await {
            Ok(trade) => Ok(CommandOutput::ok(ui::render_trade_detail(&trade))),
            Err(err) => Ok(CommandOutput::failed(err.user_message("Failed to load trade."))),
        },
        TradeCommand::Add(args) => {
            let trade = CreateTrade {
                symbol: args.symbol.trim().to_uppercase(),
                side: args.side,
                quantity: args.quantity,
                entry_price: args.entry_price,
                entry_date: normalize_optional(args.entry_date)?,
            };
            let created = journal.create_trade(trade).await;
            Ok(mutation_output(app, created, "Trade recorded."))
        }
        TradeCommand::Edit(args) => {
            let changes = UpdateTrade {
                symbol: args.symbol.map(|symbol| symbol.trim().to_uppercase()),
                side: args.side,
                quantity: args.quantity,
                entry_price: args.entry_price,
                entry_date: normalize_optional(args.entry_date)?,
                exit_price: args.exit_price,
                exit_date: normalize_optional(args.exit_date)?,
            };
            let updated = journal.update_trade(args.id, changes).await;
            Ok(mutation_output(app, updated, "Trade updated."))
        }
        TradeCommand::Close {
            id,
            exit_price,
            exit_date,
        } => {
            let close = CloseTrade {
                exit_price,
                exit_date: normalize_optional(exit_date)?,
            };
            if !journal.close_trade(id.clone(), close).await {
                return Ok(mutation_output(app, false, ""));
            }
            // The P&L is computed remotely; show the trade as the server now has it
            match app.api().get_trade(&id).await {
                Ok(trade) => Ok(CommandOutput::ok(format!(
                    "Trade closed.\n{}",
                    ui::render_trade_detail(&trade)
                ))),
                Err(err) => Ok(CommandOutput::ok(format!(
                    "Trade closed. ({})",
                    err.user_message("Could not reload the trade.")
                ))),
            }
        }
        TradeCommand::Delete { id } => {
            let deleted = journal.delete_trade(id).await;
            Ok(mutation_output(app, deleted, "Trade deleted."))
        }
    }
}

fn mutation_output(app: &App, success: bool, message: &str) -> CommandOutput {
    let state = app.journal().state();
    if success {
        return CommandOutput::ok(format!("{}\n{}", message, ui::render_journal(&state)));
    }
    let error = state
        .action_error
        .unwrap_or_else(|| "Request failed.".to_string());
    CommandOutput::failed(format!("Error: {}", error))
}
