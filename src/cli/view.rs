//! Read-only screens: dashboard, accounts, transactions, cards, invoices

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::Args;

use super::console::Console;
use super::Context;
use crate::catalog::{self, CardDeck};
use crate::display::{
    format_account_details, format_account_list, format_card_list, format_card_settings,
    format_cashflow, format_currency, format_invoice_details, format_invoice_list,
    format_total_balance, format_transaction_details, format_transaction_list,
};
use crate::error::{VennError, VennResult};
use crate::models::{CardControl, InvoiceStatus, SpendingLimit};
use crate::nav::Route;

const RECENT_LIMIT: usize = 5;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Handle `venn dashboard`
pub fn handle_dashboard<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
) -> VennResult<()> {
    let session = ctx.require_session(Route::Dashboard)?;
    let cashflow = catalog::cashflow();

    console.say(format!("Good day, {}", session.first_name))?;
    console.print(format_total_balance(catalog::total_balance()))?;
    console.say("")?;
    console.say("Recent activity")?;
    console.print(format_transaction_list(
        catalog::recent_transactions(RECENT_LIMIT),
        today(),
    ))?;
    console.say("")?;
    console.say("Cashflow")?;
    console.print(format_cashflow(cashflow))?;
    console.say(format!(
        "Six-month totals: {} in, {} out",
        format_currency(cashflow.series_income(), "USD"),
        format_currency(cashflow.series_expenses(), "USD")
    ))
}

/// Handle `venn accounts [ID]`
pub fn handle_accounts<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
    account: Option<String>,
) -> VennResult<()> {
    ctx.require_session(Route::Accounts)?;

    match account {
        Some(id) => console.print(format_account_details(catalog::find_account(&id)?)),
        None => {
            console.print(format_account_list(catalog::accounts()))?;
            console.print(format_total_balance(catalog::total_balance()))
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct TransactionArgs {
    /// Transaction ID to show in full
    pub transaction: Option<String>,
    /// Only show transfer activity
    #[arg(short, long)]
    pub transfers: bool,
    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `venn transactions`
pub fn handle_transactions<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
    args: TransactionArgs,
) -> VennResult<()> {
    if let Some(id) = args.transaction {
        ctx.require_session(Route::TransactionDetail)?;
        return console.print(format_transaction_details(catalog::find_transaction(&id)?));
    }

    if args.transfers {
        ctx.require_session(Route::Transfers)?;
        console.print(format_transaction_list(
            catalog::transfer_activity().take(args.limit),
            today(),
        ))
    } else {
        ctx.require_session(Route::Accounts)?;
        console.print(format_transaction_list(
            catalog::recent_transactions(args.limit),
            today(),
        ))
    }
}

#[derive(Args, Debug, Default)]
pub struct CardArgs {
    /// Card to make active
    #[arg(short, long)]
    pub select: Option<String>,
    /// Toggle the frozen state of a card (not saved)
    #[arg(short, long)]
    pub freeze: Option<String>,
    /// Remove a card from the list (not saved)
    #[arg(short, long)]
    pub remove: Option<String>,
}

/// Handle `venn cards`
///
/// Edits apply to a working copy for this invocation only.
pub fn handle_cards<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
    args: CardArgs,
) -> VennResult<()> {
    ctx.require_session(Route::Cards)?;
    let mut deck = CardDeck::from_catalog();

    if let Some(id) = &args.select {
        deck.select(id)?;
    }
    if let Some(id) = &args.freeze {
        let frozen = deck.toggle_freeze(id)?;
        let state = if frozen { "frozen" } else { "unfrozen" };
        console.say(format!("Card {} {}", id, state))?;
    }
    if let Some(id) = &args.remove {
        let removed = deck.remove(id)?;
        console.say(format!("Removed {}", removed.name))?;
    }

    console.print(format_card_list(deck.cards(), deck.active().map(|c| c.id)))
}

#[derive(Args, Debug, Default)]
pub struct CardSettingsArgs {
    /// Control to switch on (online-payments, international, contactless, atm,
    /// auto-lock, transaction-notifications, security-alerts, monthly-statements)
    #[arg(short, long)]
    pub enable: Vec<String>,
    /// Control to switch off
    #[arg(short, long)]
    pub disable: Vec<String>,
    /// Daily spending limit in whole units
    #[arg(long)]
    pub daily_limit: Option<String>,
    /// Monthly spending limit in whole units
    #[arg(long)]
    pub monthly_limit: Option<String>,
}

fn parse_control(s: &str) -> VennResult<CardControl> {
    CardControl::parse(s).ok_or_else(|| {
        let valid: Vec<&str> = CardControl::ALL.iter().map(|c| c.id()).collect();
        VennError::Validation(format!(
            "Unknown card control: '{}'. Valid controls: {}",
            s,
            valid.join(", ")
        ))
    })
}

/// Handle `venn card-settings`
///
/// Changes apply to a working copy of the active card for this invocation
/// only. Every switched control raises a notice.
pub fn handle_card_settings<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
    args: CardSettingsArgs,
) -> VennResult<()> {
    ctx.require_session(Route::CardSettings)?;
    let mut deck = CardDeck::from_catalog();

    let changes = args
        .enable
        .iter()
        .map(|c| (c, true))
        .chain(args.disable.iter().map(|c| (c, false)));
    for (name, enabled) in changes {
        let control = parse_control(name)?;
        deck.set_control(control, enabled, &ctx.notices);
        if let Some(notice) = ctx.notices.current() {
            console.say(notice.render())?;
        }
    }

    for (limit, input) in [
        (SpendingLimit::Daily, &args.daily_limit),
        (SpendingLimit::Monthly, &args.monthly_limit),
    ] {
        if let Some(input) = input {
            deck.set_limit(limit, input);
        }
    }

    let card = deck.active().ok_or_else(|| VennError::card_not_found("active"))?;
    console.print(format_card_settings(card, deck.settings()))
}

#[derive(Args, Debug, Default)]
pub struct InvoiceArgs {
    /// Invoice number or ID to show in full
    pub invoice: Option<String>,
    /// Filter by status (paid, unpaid, overdue)
    #[arg(short, long)]
    pub status: Option<String>,
}

/// Handle `venn invoices`
pub fn handle_invoices<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
    args: InvoiceArgs,
) -> VennResult<()> {
    ctx.require_session(Route::Invoices)?;

    if let Some(key) = args.invoice {
        let invoice = catalog::invoices()
            .iter()
            .find(|i| i.id == key || i.number.eq_ignore_ascii_case(&key))
            .ok_or_else(|| VennError::NotFound {
                entity_type: "Invoice",
                identifier: key.clone(),
            })?;
        return console.print(format_invoice_details(invoice));
    }

    let status = match args.status {
        Some(s) => Some(InvoiceStatus::parse(&s).ok_or_else(|| {
            VennError::Validation(format!(
                "Invalid invoice status: '{}'. Valid statuses: paid, unpaid, overdue",
                s
            ))
        })?),
        None => None,
    };
    console.print(format_invoice_list(catalog::invoices_with_status(status)))
}
