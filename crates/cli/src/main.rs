//! Coffee Shop CLI - drive the storefront core from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! cs-cli catalog list --category latte --search oat
//!
//! # Produce and read back a navigation parameter
//! cs-cli codec encode 1
//! cs-cli codec decode '%7B%22id%22...'
//!
//! # Price an order
//! cs-cli order quote 1 --size Large --quantity 2 --pickup
//!
//! # Manage the persisted session
//! cs-cli session sign-in -e a@a.com -p secret
//! cs-cli session show
//! cs-cli session sign-out
//! ```
//!
//! # Environment Variables
//!
//! - `COFFEE_SHOP_DATA_DIR` - Root of the secure storage directory
//! - `COFFEE_SHOP_SESSION_KEY` - Storage slot for the signed-in user
//! - `COFFEE_SHOP_DELIVERY_FEE` - Flat fee for delivered orders
//! - `SENTRY_DSN` - Sentry DSN (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::{ExposeSecret, SecretString};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coffee_shop_core::CupSize;
use coffee_shop_storefront::catalog::Category;
use coffee_shop_storefront::config::StorefrontConfig;
use coffee_shop_storefront::error::{self, AppError};
use coffee_shop_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "cs-cli")]
#[command(author, version, about = "Coffee Shop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Encode and decode navigation parameters
    Codec {
        #[command(subcommand)]
        action: CodecAction,
    },
    /// Price orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage the persisted session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Category tab (`all`, `cappuccino`, `latte`, `americano`)
        #[arg(short, long, default_value = "all")]
        category: Category,

        /// Match name or description
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
enum CodecAction {
    /// Encode a catalog product as a navigation parameter
    Encode {
        /// Product id
        id: String,
    },
    /// Decode a navigation parameter
    Decode {
        /// Encoded parameter text
        text: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Show subtotal, delivery fee and total for a product
    Quote {
        /// Product id
        id: String,

        /// Cup size (S, M, L or Small, Medium, Large)
        #[arg(short, long, default_value = "Medium", value_parser = parse_size)]
        size: CupSize,

        /// Number of cups
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Pick up instead of delivery
        #[arg(long)]
        pickup: bool,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Show the persisted user
    Show,
    /// Sign in with email and password
    SignIn {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account
    SignUp {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Forget the persisted user
    SignOut,
}

#[allow(clippy::unnecessary_wraps)]
fn parse_size(value: &str) -> Result<CupSize, String> {
    Ok(CupSize::from(value))
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry.dsn.as_ref()?;

    let guard = sentry::init((
        dsn.expose_secret(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry
                .environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry.sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Warnings and errors become Sentry events; lower levels become breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!(error = %e, "Invalid configuration");
            commands::report(&AppError::from(e).user_message());
            std::process::exit(2);
        }
    };

    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "coffee_shop_storefront=info,coffee_shop_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if let Err(e) = run(cli, config).await {
        tracing::error!(error = %e, "Command failed");
        commands::report(&e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> error::Result<()> {
    let state = AppState::with_file_storage(config).await?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category, search } => {
                commands::catalog::list(&state, category, search.as_deref());
            }
        },
        Commands::Codec { action } => match action {
            CodecAction::Encode { id } => commands::codec::encode(&state, &id)?,
            CodecAction::Decode { text } => commands::codec::decode(&text)?,
        },
        Commands::Order { action } => match action {
            OrderAction::Quote {
                id,
                size,
                quantity,
                pickup,
            } => commands::order::quote(&state, &id, size, quantity, pickup)?,
        },
        Commands::Session { action } => match action {
            SessionAction::Show => commands::session::show(&state).await,
            SessionAction::SignIn { email, password } => {
                let password = SecretString::from(password);
                commands::session::sign_in(&state, &email, &password).await?;
            }
            SessionAction::SignUp {
                name,
                email,
                password,
            } => {
                let password = SecretString::from(password);
                commands::session::sign_up(&state, &name, &email, &password).await?;
            }
            SessionAction::SignOut => commands::session::sign_out(&state).await,
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_size_accepts_full_and_short_names() {
        assert_eq!(parse_size("Large").unwrap(), CupSize::Large);
        assert_eq!(parse_size("small").unwrap(), CupSize::Small);
        assert_eq!(parse_size("M").unwrap(), CupSize::Medium);
        assert_eq!(parse_size("Venti").unwrap(), CupSize::Other("Venti".to_string()));
    }

    #[test]
    fn test_quote_parses_large_size() {
        let cli = Cli::try_parse_from(["cs-cli", "order", "quote", "1", "--size", "Large"]).unwrap();
        let Commands::Order {
            action: OrderAction::Quote { size, quantity, .. },
        } = cli.command
        else {
            panic!("expected order quote");
        };
        assert_eq!(size, CupSize::Large);
        assert_eq!(quantity, 1);
    }

    #[test]
    fn test_default_size_is_medium() {
        let cli = Cli::try_parse_from(["cs-cli", "order", "quote", "1"]).unwrap();
        let Commands::Order {
            action: OrderAction::Quote { size, .. },
        } = cli.command
        else {
            panic!("expected order quote");
        };
        assert_eq!(size, CupSize::Medium);
    }
}
