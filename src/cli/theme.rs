//! Theme command

use std::io::{BufRead, Write};

use super::console::Console;
use super::Context;
use crate::error::VennResult;
use crate::theme::ThemeMode;

/// Handle `venn theme [MODE]`
///
/// With a mode, persists it. Always reports the mode and what it resolves to.
pub fn handle_theme<R: BufRead, W: Write>(
    ctx: &mut Context,
    console: &mut Console<R, W>,
    mode: Option<String>,
) -> VennResult<()> {
    if let Some(mode) = mode {
        let mode: ThemeMode = mode.parse()?;
        ctx.theme.set_mode(mode)?;
    }

    console.say(format!(
        "Theme: {} (resolves to {})",
        ctx.theme.mode(),
        ctx.theme.resolve(ctx.host_scheme)
    ))
}
