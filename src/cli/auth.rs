//! Sign-in, sign-up and profile commands

use std::io::{BufRead, Write};

use clap::Args;
use tracing::warn;

use super::console::{prompt_secret, Console};
use super::Context;
use crate::error::VennResult;
use crate::nav::Route;
use crate::notice::Severity;
use crate::session::{validate_credentials, ProfilePatch, Session};

/// Profile fields to change
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
}

impl From<ProfileArgs> for ProfilePatch {
    fn from(args: ProfileArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
            company: args.company,
        }
    }
}

fn answer_or_prompt<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    given: Option<String>,
    prompt: &str,
) -> VennResult<String> {
    match given {
        Some(value) => Ok(value),
        None => console.prompt_required(prompt),
    }
}

fn secret_or_prompt(given: Option<String>) -> VennResult<String> {
    match given {
        Some(secret) => Ok(secret),
        None => prompt_secret("Password: "),
    }
}

fn format_profile(session: &Session) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}  ({})\n",
        session.display_name(),
        session.avatar_initials
    ));
    output.push_str(&format!("  Email:    {}\n", session.email));
    if let Some(phone) = &session.phone {
        output.push_str(&format!("  Phone:    {}\n", phone));
    }
    if let Some(company) = &session.company {
        output.push_str(&format!("  Company:  {}\n", company));
    }
    output.push_str(&format!("  User ID:  {}\n", session.user_id));
    output
}

/// Handle `venn login`
pub async fn handle_login<R: BufRead, W: Write>(
    ctx: &mut Context,
    console: &mut Console<R, W>,
    email: Option<String>,
    password: Option<String>,
) -> VennResult<()> {
    if let Some(session) = ctx.session.current().filter(|_| ctx.already_signed_in()) {
        console.say(format!("Already signed in as {}", session.display_name()))?;
        return Ok(());
    }

    let email = answer_or_prompt(console, email, "Email: ")?;
    let password = secret_or_prompt(password)?;
    validate_credentials(&email, &password)?;

    if let Err(e) = ctx.session.login(&email, &password).await {
        warn!(error = %e, "Signed in without persisting the session");
        console.say(ctx.notify("Signed in, but the session could not be saved", Severity::Info))?;
    }

    if let Some(session) = ctx.session.current() {
        console.say(format!("Welcome back, {}!", session.first_name))?;
    }
    Ok(())
}

/// Handle `venn signup`
pub async fn handle_signup<R: BufRead, W: Write>(
    ctx: &mut Context,
    console: &mut Console<R, W>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> VennResult<()> {
    if ctx.already_signed_in() {
        console.say("Already signed in; run `venn logout` first")?;
        return Ok(());
    }

    let first_name = answer_or_prompt(console, first_name, "First name: ")?;
    let last_name = answer_or_prompt(console, last_name, "Last name: ")?;
    let email = answer_or_prompt(console, email, "Email: ")?;
    let password = secret_or_prompt(password)?;

    validate_credentials(&first_name, &last_name)?;
    validate_credentials(&email, &password)?;

    if let Err(e) = ctx
        .session
        .signup(&first_name, &last_name, &email, &password)
        .await
    {
        warn!(error = %e, "Signed up without persisting the session");
        console.say(ctx.notify("Account created, but the session could not be saved", Severity::Info))?;
    }

    if let Some(session) = ctx.session.current() {
        console.say(format!("Welcome to Venn, {}!", session.first_name))?;
    }
    Ok(())
}

/// Handle `venn logout`
pub fn handle_logout<R: BufRead, W: Write>(
    ctx: &mut Context,
    console: &mut Console<R, W>,
) -> VennResult<()> {
    if !ctx.session.is_authenticated() {
        console.say("Not signed in")?;
        return Ok(());
    }

    if let Err(e) = ctx.session.logout() {
        warn!(error = %e, "Signed out, but the stored session could not be removed");
    }
    console.say("Signed out")?;
    Ok(())
}

/// Handle `venn whoami`
pub fn handle_whoami<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
) -> VennResult<()> {
    match ctx.session.current() {
        Some(session) => console.print(format_profile(session)),
        None => console.say("Not signed in"),
    }
}

/// Handle `venn profile`
pub fn handle_profile<R: BufRead, W: Write>(
    ctx: &mut Context,
    console: &mut Console<R, W>,
    args: ProfileArgs,
) -> VennResult<()> {
    ctx.require_session(Route::Settings)?;

    let patch = ProfilePatch::from(args);
    if !patch.is_empty() {
        ctx.session.update_profile(patch)?;
        console.say(ctx.notify("Profile updated", Severity::Success))?;
    }

    if let Some(session) = ctx.session.current() {
        console.print(format_profile(session))?;
    }
    Ok(())
}
