use anyhow::Result;
use clap::{Parser, Subcommand};

use venn_cli::cli::{
    self, CardArgs, CardSettingsArgs, Console, Context, InvoiceArgs, ProfileArgs,
    TransactionArgs,
};
use venn_cli::config::{Settings, VennPaths};
use venn_cli::theme::HostScheme;

#[derive(Parser)]
#[command(
    name = "venn",
    author = "Venn Contributors",
    version,
    about = "Multi-currency business banking from the terminal",
    long_about = "Venn is a multi-currency business banking client. Sign in, review \
                  balances and activity, and move money between accounts, \
                  beneficiaries and currencies."
)]
struct Cli {
    /// Color scheme reported by the host (light or dark); anything else counts as unknown
    #[arg(long, global = true, env = "VENN_HOST_SCHEME")]
    host_scheme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in
    Login {
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(short, long, env = "VENN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Signup {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long, env = "VENN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show who is signed in
    Whoami,

    /// Show or update the signed-in profile
    Profile(ProfileArgs),

    /// Show or set the theme (light, dark or system)
    Theme {
        mode: Option<String>,
    },

    /// Balances, recent activity and cashflow
    #[command(alias = "home")]
    Dashboard,

    /// List accounts or show one
    Accounts {
        /// Account ID
        account: Option<String>,
    },

    /// List transactions or show one
    #[command(alias = "txn")]
    Transactions(TransactionArgs),

    /// List cards
    Cards(CardArgs),

    /// Show or change controls and limits on the active card
    CardSettings(CardSettingsArgs),

    /// List invoices or show one
    Invoices(InvoiceArgs),

    /// Send money to a beneficiary
    Send,

    /// Add money to an account
    AddMoney,

    /// Convert between currencies
    Convert,

    /// Create a virtual card
    CreateCard,

    /// Show current configuration and paths
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings and logging
    let paths = VennPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    venn_cli::logging::init(&paths)?;

    let host_scheme = cli
        .host_scheme
        .as_deref()
        .map(HostScheme::parse)
        .unwrap_or_default();

    let mut ctx = Context::open(paths, settings, host_scheme);
    let mut console = Console::stdio();

    match cli.command {
        Some(Commands::Login { email, password }) => {
            cli::handle_login(&mut ctx, &mut console, email, password).await?;
        }
        Some(Commands::Signup {
            first_name,
            last_name,
            email,
            password,
        }) => {
            cli::handle_signup(&mut ctx, &mut console, first_name, last_name, email, password)
                .await?;
        }
        Some(Commands::Logout) => cli::handle_logout(&mut ctx, &mut console)?,
        Some(Commands::Whoami) => cli::handle_whoami(&ctx, &mut console)?,
        Some(Commands::Profile(args)) => cli::handle_profile(&mut ctx, &mut console, args)?,
        Some(Commands::Theme { mode }) => cli::handle_theme(&mut ctx, &mut console, mode)?,
        Some(Commands::Dashboard) => cli::handle_dashboard(&ctx, &mut console)?,
        Some(Commands::Accounts { account }) => {
            cli::handle_accounts(&ctx, &mut console, account)?
        }
        Some(Commands::Transactions(args)) => {
            cli::handle_transactions(&ctx, &mut console, args)?
        }
        Some(Commands::Cards(args)) => cli::handle_cards(&ctx, &mut console, args)?,
        Some(Commands::CardSettings(args)) => {
            cli::handle_card_settings(&ctx, &mut console, args)?
        }
        Some(Commands::Invoices(args)) => cli::handle_invoices(&ctx, &mut console, args)?,
        Some(Commands::Send) => {
            cli::handle_send(&ctx, &mut console).await?;
        }
        Some(Commands::AddMoney) => {
            cli::handle_add_money(&ctx, &mut console).await?;
        }
        Some(Commands::Convert) => {
            cli::handle_convert(&ctx, &mut console).await?;
        }
        Some(Commands::CreateCard) => {
            cli::handle_create_card(&ctx, &mut console).await?;
        }
        Some(Commands::Config) => {
            println!("Venn Configuration");
            println!("==================");
            println!("Base directory: {}", ctx.paths.base_dir().display());
            println!("Store file:     {}", ctx.paths.store_file().display());
            println!("Log directory:  {}", ctx.paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Login delay:       {} ms", ctx.settings.login_delay_ms);
            println!("  Settlement delay:  {} ms", ctx.settings.settle_delay_ms);
            println!("  Card issue delay:  {} ms", ctx.settings.card_issue_delay_ms);
            println!("  Notice duration:   {} ms", ctx.settings.notice_duration_ms);
            println!("  Default currency:  {}", ctx.settings.default_currency);
            println!("  Theme:             {}", ctx.theme.mode());
        }
        None => {
            println!("Venn - multi-currency business banking");
            println!();
            println!("Run 'venn --help' for usage information.");
            println!("Run 'venn login' to get started.");
        }
    }

    Ok(())
}
