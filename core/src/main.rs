//! Storefront CLI - inspect and edit a stored config document
//!
//! # Commands
//!
//! ```bash
//! storefront init                          # Write the default config
//! storefront show                          # Print the stored config
//! storefront products                      # Catalog with link coverage
//! storefront resolve Melonity "7 Days" crypto
//! storefront hash-password <password>      # Salted credential string
//! storefront check-login admin admin
//! storefront set-credentials owner <password>
//! storefront requests list|complete|remove
//! storefront reviews
//! storefront reset                         # Delete the stored config
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use storefront::{
    admin, authenticate, available_categories, durations_for, hash_password, recent_reviews,
    resolve_link, reviews_for, simple_hash, Credential, PaymentCategory, RequestStatus, ReviewSummary, Settings,
    PRODUCTS,
};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Inspect and edit the storefront config document", long_about = None)]
struct Cli {
    /// Directory holding storefront_config.json
    #[arg(long, global = true, env = "STOREFRONT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config
    Init {
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },

    /// Print the stored config (defaults if none)
    Show {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List products, durations and configured payment links
    Products,

    /// Resolve the purchase link for a product, duration and category
    Resolve {
        product: String,
        duration: String,
        /// crypto, fiat, fiat-world or fiat-region
        category: PaymentCategory,
    },

    /// Print a credential string for the adminAuth.password field
    HashPassword {
        password: String,

        /// Legacy rolling hash instead of salted PBKDF2
        #[arg(long)]
        legacy: bool,
    },

    /// Check a username/password against the stored admin credential
    CheckLogin { username: String, password: String },

    /// Replace the admin username and password
    SetCredentials { username: String, password: String },

    /// Manage config requests
    Requests {
        #[command(subcommand)]
        action: RequestAction,
    },

    /// List reviews, newest first
    Reviews {
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only reviews of this product
        #[arg(short, long)]
        product: Option<String>,
    },

    /// Delete the stored config
    Reset,
}

#[derive(Subcommand)]
enum RequestAction {
    /// List all requests
    List {
        /// Only pending requests
        #[arg(long)]
        pending: bool,
    },

    /// Mark a request completed
    Complete { id: i64 },

    /// Delete a request
    Remove { id: i64 },
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.data_dir);
    log::debug!("Data directory: {}", settings.data_dir.display());

    let result = match cli.command {
        Commands::Init { force } => cmd_init(&settings, force),
        Commands::Show { output } => cmd_show(&settings, output.as_deref()),
        Commands::Products => cmd_products(&settings),
        Commands::Resolve {
            product,
            duration,
            category,
        } => cmd_resolve(&settings, &product, &duration, category),
        Commands::HashPassword { password, legacy } => cmd_hash_password(&password, legacy),
        Commands::CheckLogin { username, password } => cmd_check_login(&settings, &username, &password),
        Commands::SetCredentials { username, password } => {
            cmd_set_credentials(&settings, &username, &password)
        }
        Commands::Requests { action } => cmd_requests(&settings, action),
        Commands::Reviews { limit, product } => cmd_reviews(&settings, limit, product.as_deref()),
        Commands::Reset => cmd_reset(&settings),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_init(settings: &Settings, force: bool) -> CmdResult {
    let store = settings.config_store();
    let path = store.backend().path_for(storefront::STORAGE_KEY);

    if path.exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
    }

    store.try_save(&storefront::default_config())?;
    eprintln!("✅ Default config written to {}", path.display());
    Ok(())
}

fn cmd_show(settings: &Settings, output: Option<&Path>) -> CmdResult {
    let config = settings.config_store().load();
    let json = serde_json::to_string_pretty(&config)?;
    write_output(&json, output)
}

fn cmd_products(settings: &Settings) -> CmdResult {
    let config = settings.config_store().load();

    for product in PRODUCTS {
        println!("📦 {}", product);
        for duration in durations_for(product) {
            let links: Vec<String> = available_categories(&config.overrides, product, duration)
                .into_iter()
                .map(|category| {
                    let mark = if resolve_link(&config.overrides, product, duration, category).is_some() {
                        "✔"
                    } else {
                        "✘"
                    };
                    format!("{} {}", mark, category)
                })
                .collect();
            println!("   {:<14} {}", duration, links.join("  "));
        }
    }
    Ok(())
}

fn cmd_resolve(settings: &Settings, product: &str, duration: &str, category: PaymentCategory) -> CmdResult {
    let config = settings.config_store().load();

    match resolve_link(&config.overrides, product, duration, category) {
        Some(url) => {
            println!("{}", url);
            Ok(())
        }
        None => Err(format!(
            "No {} link configured for {} / {}",
            category, product, duration
        )
        .into()),
    }
}

fn cmd_hash_password(password: &str, legacy: bool) -> CmdResult {
    if legacy {
        eprintln!("⚠️  Legacy hashes are trivially reversible");
        println!("{}", simple_hash(password));
    } else {
        println!("{}", hash_password(password));
    }
    Ok(())
}

fn cmd_check_login(settings: &Settings, username: &str, password: &str) -> CmdResult {
    let config = settings.config_store().load();

    if authenticate(&config.admin_auth, username, password) {
        eprintln!("✅ Credentials accepted");
        if Credential::parse(&config.admin_auth.password).is_ok_and(|c| c.is_legacy()) {
            eprintln!("⚠️  Stored credential uses the legacy hash; run set-credentials to upgrade it");
        }
        Ok(())
    } else {
        Err("Invalid credentials".into())
    }
}

fn cmd_set_credentials(settings: &Settings, username: &str, password: &str) -> CmdResult {
    let store = settings.config_store();
    let next = admin::change_credentials(&store.load(), username, password)?;
    store.try_save(&next)?;
    eprintln!("🔑 Admin credentials updated for '{}'", next.admin_auth.username);
    Ok(())
}

fn cmd_requests(settings: &Settings, action: RequestAction) -> CmdResult {
    let store = settings.config_store();
    let config = store.load();

    match action {
        RequestAction::List { pending } => {
            let requests: Vec<_> = config
                .requests
                .iter()
                .filter(|r| !pending || r.status == RequestStatus::Pending)
                .collect();

            if requests.is_empty() {
                eprintln!("📋 No requests.");
                return Ok(());
            }

            eprintln!("📋 Requests ({}):\n", requests.len());
            for r in requests {
                println!("  {} [{}] {}", r.id, r.status.as_str(), r.product);
                println!("     Discord: {}", r.discord);
                println!("     Order:   {}", r.order_id);
            }
        }

        RequestAction::Complete { id } => {
            let next = admin::set_request_status(&config, id, RequestStatus::Completed)?;
            store.try_save(&next)?;
            eprintln!("✅ Request {} completed", id);
        }

        RequestAction::Remove { id } => {
            let next = admin::remove_request(&config, id)?;
            store.try_save(&next)?;
            eprintln!("🗑️  Request {} removed", id);
        }
    }

    Ok(())
}

fn cmd_reviews(settings: &Settings, limit: usize, product: Option<&str>) -> CmdResult {
    let mut config = settings.config_store().load();
    if let Some(product) = product {
        let matching = reviews_for(&config, product).cloned().collect();
        config.reviews = matching;
    }
    let summary = ReviewSummary::from_reviews(&config.reviews);

    eprintln!(
        "⭐ {} reviews, average {}\n",
        summary.count,
        summary.display_average()
    );
    for review in recent_reviews(&config, limit) {
        println!(
            "  {} {} on {} ({})",
            "★".repeat(usize::from(review.rating)),
            review.name,
            review.product,
            review.created_at
        );
        println!("     {}", review.comment);
    }
    Ok(())
}

fn cmd_reset(settings: &Settings) -> CmdResult {
    settings.config_store().reset()?;
    eprintln!("🧹 Stored config removed; defaults apply on next load");
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> CmdResult {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
