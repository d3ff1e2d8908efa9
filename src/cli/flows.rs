//! Interactive wizard commands
//!
//! Each command walks its flow one prompt at a time. Typing `back` steps back
//! (or leaves from the first step), an answer the step rejects re-prompts, and
//! running out of input abandons the flow.

use std::io::{BufRead, Write};
use std::sync::Arc;

use super::console::{is_back, Console};
use super::Context;
use crate::catalog;
use crate::display::format_currency;
use crate::error::VennResult;
use crate::nav::Route;
use crate::notice::Severity;
use crate::wizard::flows::add::{self, AddStep, DepositSummary};
use crate::wizard::flows::convert::{self, ConversionQuote, ConvertStep};
use crate::wizard::flows::create_card::{self, CardRequest, CardStep, CREATED_MESSAGE};
use crate::wizard::flows::send::{self, SendStep, TransferSummary, NOTE};
use crate::wizard::flows::AMOUNT;
use crate::wizard::{DelaySettler, Receipt, StepId, Transition, Wizard};

/// How an interactive flow ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed(Receipt),
    Abandoned,
}

enum Answer {
    Value(String),
    Back,
    Ended,
}

fn ask<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> VennResult<Answer> {
    Ok(match console.prompt(prompt)? {
        Some(answer) if is_back(&answer) => Answer::Back,
        Some(answer) => Answer::Value(answer),
        None => Answer::Ended,
    })
}

fn leave<S: StepId>(wizard: &Wizard<S>) -> FlowOutcome {
    wizard.dispose();
    FlowOutcome::Abandoned
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Handle `venn send`
pub async fn handle_send<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
) -> VennResult<FlowOutcome> {
    ctx.require_session(Route::SendMoney)?;
    let wizard = send::start(Arc::new(DelaySettler::new(ctx.settings.settle_delay())));

    loop {
        match wizard.current_step() {
            SendStep::Recipient => {
                console.say("Choose a recipient:")?;
                for b in catalog::beneficiaries() {
                    console.say(format!("  {}  {:<16} {}", b.id, b.name, b.bank_line()))?;
                }
                match ask(console, "Recipient: ")? {
                    Answer::Value(choice) => {
                        if wizard.select_option(&choice).is_ignored() {
                            console.say(format!("Unknown recipient '{}'", choice))?;
                        }
                    }
                    Answer::Back | Answer::Ended => return Ok(leave(&wizard)),
                }
            }

            SendStep::Amount => {
                match ask(console, "Amount: ")? {
                    Answer::Value(amount) => wizard.set_field(AMOUNT, amount),
                    Answer::Back => {
                        wizard.back();
                        continue;
                    }
                    Answer::Ended => return Ok(leave(&wizard)),
                };
                if !wizard.can_advance() {
                    console.say("Enter an amount above zero")?;
                    continue;
                }
                match ask(console, "Note (optional): ")? {
                    Answer::Value(note) => {
                        wizard.set_field(NOTE, note);
                    }
                    Answer::Back => {
                        wizard.back();
                        continue;
                    }
                    Answer::Ended => {}
                }
                wizard.advance();
            }

            SendStep::Confirm => {
                let summary = TransferSummary::from_fields(&wizard.fields())?;
                console.say(format!(
                    "Send {} to {} ({})",
                    format_currency(summary.amount, summary.from.currency),
                    summary.beneficiary.name,
                    summary.beneficiary.bank_line()
                ))?;
                console.say(format!("  From: {}", summary.from.short_label()))?;
                console.say(format!(
                    "  Fee:  {}",
                    format_currency(summary.fee, summary.from.currency)
                ))?;
                if let Some(note) = &summary.note {
                    console.say(format!("  Note: {}", note))?;
                }

                match ask(console, "Send now? [y/n]: ")? {
                    Answer::Value(answer) if is_yes(&answer) => {
                        if wizard.commit() == Transition::SettlementStarted {
                            console.say("Sending...")?;
                            wizard.wait_for_settlement().await;
                        }
                    }
                    Answer::Back => {
                        wizard.back();
                    }
                    _ => return Ok(leave(&wizard)),
                }
            }

            SendStep::Success => {
                let Some(receipt) = wizard.finish() else {
                    return Ok(FlowOutcome::Abandoned);
                };
                let summary = TransferSummary::from_fields(&receipt.fields)?;
                console.say(ctx.notify(
                    &format!(
                        "Sent {} to {}",
                        format_currency(summary.total(), summary.from.currency),
                        summary.beneficiary.name
                    ),
                    Severity::Success,
                ))?;
                return Ok(FlowOutcome::Completed(receipt));
            }
        }
    }
}

/// Handle `venn add-money`
pub async fn handle_add_money<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
) -> VennResult<FlowOutcome> {
    ctx.require_session(Route::AddMoney)?;
    let wizard = add::start(Arc::new(DelaySettler::new(ctx.settings.settle_delay())));
    let methods = catalog::funding_methods();

    loop {
        match wizard.current_step() {
            AddStep::Method => {
                console.say("How would you like to add money?")?;
                for (i, m) in methods.iter().enumerate() {
                    console.say(format!(
                        "  {}  {:<19} {} ({})",
                        i + 1,
                        m.label,
                        m.description,
                        m.eta
                    ))?;
                }
                match ask(console, "Method: ")? {
                    Answer::Value(choice) => {
                        // Accept the list number as well as the method ID
                        let id = choice
                            .parse::<usize>()
                            .ok()
                            .and_then(|n| n.checked_sub(1))
                            .and_then(|i| methods.get(i))
                            .map_or(choice.as_str(), |m| m.id);
                        if wizard.select_option(id).is_ignored() {
                            console.say(format!("Unknown method '{}'", choice))?;
                        }
                    }
                    Answer::Back | Answer::Ended => return Ok(leave(&wizard)),
                }
            }

            AddStep::Amount => {
                let account = catalog::primary_account();
                console.say(format!("Deposit to {}", account.short_label()))?;
                match ask(console, "Amount: ")? {
                    Answer::Value(amount) => {
                        wizard.set_field(AMOUNT, amount);
                        if wizard.commit() == Transition::SettlementStarted {
                            console.say("Processing deposit...")?;
                            wizard.wait_for_settlement().await;
                        }
                    }
                    Answer::Back => {
                        wizard.back();
                    }
                    Answer::Ended => return Ok(leave(&wizard)),
                }
            }

            AddStep::Success => {
                let Some(receipt) = wizard.finish() else {
                    return Ok(FlowOutcome::Abandoned);
                };
                let summary = DepositSummary::from_fields(&receipt.fields)?;
                console.say(ctx.notify(
                    &format!(
                        "Added {} to {} via {} ({})",
                        format_currency(summary.amount, summary.account.currency),
                        summary.account.name,
                        summary.method.label,
                        summary.method.eta
                    ),
                    Severity::Success,
                ))?;
                return Ok(FlowOutcome::Completed(receipt));
            }
        }
    }
}

/// Handle `venn convert`
pub async fn handle_convert<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
) -> VennResult<FlowOutcome> {
    ctx.require_session(Route::ConvertMoney)?;
    let wizard = convert::start(Arc::new(DelaySettler::new(ctx.settings.settle_delay())));

    loop {
        match wizard.current_step() {
            ConvertStep::Amount => {
                let from = wizard.field(convert::FROM).unwrap_or_default();
                let to = wizard.field(convert::TO).unwrap_or_default();
                console.say(format!("Convert {} to {}", from, to))?;

                match ask(console, "Amount (or 'swap'): ")? {
                    Answer::Value(answer) if answer.eq_ignore_ascii_case("swap") => {
                        convert::swap(&wizard);
                    }
                    Answer::Value(amount) => {
                        wizard.set_field(AMOUNT, amount);
                        if !wizard.can_advance() {
                            continue;
                        }
                        let quote = ConversionQuote::from_fields(&wizard.fields())?;
                        console.say(format!(
                            "{}  ->  {}   ({})",
                            format_currency(quote.amount, quote.from.code),
                            format_currency(quote.converted, quote.to.code),
                            quote.rate_line()
                        ))?;
                        if wizard.commit() == Transition::SettlementStarted {
                            console.say("Converting...")?;
                            wizard.wait_for_settlement().await;
                        }
                    }
                    Answer::Back | Answer::Ended => return Ok(leave(&wizard)),
                }
            }

            ConvertStep::Success => {
                let Some(receipt) = wizard.finish() else {
                    return Ok(FlowOutcome::Abandoned);
                };
                let quote = ConversionQuote::from_fields(&receipt.fields)?;
                console.say(ctx.notify(
                    &format!(
                        "Converted {} to {}",
                        format_currency(quote.amount, quote.from.code),
                        format_currency(quote.converted, quote.to.code)
                    ),
                    Severity::Success,
                ))?;
                return Ok(FlowOutcome::Completed(receipt));
            }
        }
    }
}

/// Handle `venn create-card`
pub async fn handle_create_card<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
) -> VennResult<FlowOutcome> {
    ctx.require_session(Route::CreateCard)?;
    let wizard =
        create_card::start(Arc::new(DelaySettler::new(ctx.settings.card_issue_delay())));

    loop {
        match wizard.current_step() {
            CardStep::Details => {
                match ask(console, "Card name: ")? {
                    Answer::Value(name) => wizard.set_field(create_card::NAME, name),
                    Answer::Back | Answer::Ended => return Ok(leave(&wizard)),
                };
                match ask(console, "Network [visa/mastercard]: ")? {
                    Answer::Value(network) if !network.is_empty() => {
                        wizard.set_field(create_card::NETWORK, network.to_lowercase());
                    }
                    Answer::Back => return Ok(leave(&wizard)),
                    _ => {}
                }

                match create_card::submit(&wizard, &ctx.notices) {
                    Transition::SettlementStarted => {
                        console.say("Issuing card...")?;
                        wizard.wait_for_settlement().await;
                    }
                    _ => match ctx.notices.current() {
                        Some(notice) => console.say(notice.render())?,
                        None => console.say("Choose visa or mastercard")?,
                    },
                }
            }

            CardStep::Success => {
                let Some(receipt) = wizard.finish() else {
                    return Ok(FlowOutcome::Abandoned);
                };
                console.say(ctx.notify(CREATED_MESSAGE, Severity::Success))?;
                if let Some(request) = CardRequest::from_fields(&receipt.fields) {
                    console.say(format!("  {} ({})", request.name, request.network))?;
                }
                return Ok(FlowOutcome::Completed(receipt));
            }
        }
    }
}
