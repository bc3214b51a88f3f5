//! jobforsa CLI entry point.
//!
//! Wires configuration, gateways and the session file into a [`Store`], runs
//! one subcommand and drives its effects to completion.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use jobforsa::domain::validation::{validate_login, validate_profile, validate_register};
use jobforsa::domain::{
    Application, ApplicationStatus, FavoriteOffer, JobOffer, JobSearchParams, LoginRequest,
    RecordId, RegisterRequest, UpdateProfileRequest, UserResponse,
};
use jobforsa::infra::api::Gateways;
use jobforsa::infra::app_config::load_config;
use jobforsa::infra::session::FileSessionStorage;
use jobforsa::store::{
    AppState, ApplicationsAction, AuthAction, FavoritesAction, Route, Store, selectors,
};

#[derive(Parser, Debug)]
#[command(name = "jobforsa")]
#[command(version)]
#[command(about = "Search USAJobs listings and track your applications", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search job listings
    Search {
        #[arg(short, long)]
        keyword: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Update name and e-mail of the signed-in user
    Profile {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },

    /// Manage saved offers
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },

    /// Manage tracked applications
    Applications {
        #[command(subcommand)]
        action: ApplicationsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesCommand {
    List,
    Add {
        offer_id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    Remove {
        id: RecordId,
    },
}

#[derive(Subcommand, Debug)]
enum ApplicationsCommand {
    List {
        /// Only show applications in this status
        #[arg(long)]
        status: Option<ApplicationStatus>,
    },
    /// Start tracking an offer as PENDING
    Track {
        offer_id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        url: Option<String>,
    },
    Status {
        id: RecordId,
        status: ApplicationStatus,
    },
    Notes {
        id: RecordId,
        text: String,
    },
    Remove {
        id: RecordId,
    },
    /// Count applications per status
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config();
    config.validate().context("Invalid configuration")?;
    let gateways = Gateways::from_config(&config).context("Failed to build API clients")?;
    let session = Arc::new(FileSessionStorage::new(config.session_path()));

    let mut store = Store::new(gateways.clone(), session);
    store.resume_session();

    match args.command {
        Commands::Search {
            keyword,
            location,
            page,
            per_page,
        } => {
            let params = JobSearchParams {
                keyword,
                location,
                page,
                results_per_page: per_page,
            };
            let result = gateways.jobs.search_jobs(&params).await?;
            println!(
                "{} jobs found (page {}, {} per page)",
                result.total_count,
                params.page(),
                params.results_per_page()
            );
            for job in &result.jobs {
                print_offer(job);
            }
        }
        Commands::Login { email, password } => {
            let credentials = LoginRequest { email, password };
            validate_login(&credentials)?;
            store.dispatch(AuthAction::Login(credentials).into());
            store.run_until_idle().await;
            let user = signed_in_user(&store)?;
            println!("Signed in as {}", user.display_name());
        }
        Commands::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            if store.navigate(Route::Register) != Route::Register {
                bail!("Already signed in; log out first");
            }
            let request = RegisterRequest {
                first_name,
                last_name,
                email,
                password,
            };
            validate_register(&request)?;
            store.dispatch(AuthAction::Register(request).into());
            store.run_until_idle().await;
            let user = signed_in_user(&store)?;
            println!("Welcome, {} (id {})", user.display_name(), user.id);
        }
        Commands::Logout => {
            store.dispatch(AuthAction::Logout.into());
            store.run_until_idle().await;
            println!("Signed out");
        }
        Commands::Whoami => match store.select(|s| selectors::current_user(s).cloned()) {
            Some(user) => println!("{} <{}> (id {})", user.display_name(), user.email, user.id),
            None => println!("Not signed in"),
        },
        Commands::Profile {
            first_name,
            last_name,
            email,
        } => {
            let user = require(&mut store, Route::Profile)?;
            let changes = UpdateProfileRequest {
                first_name,
                last_name,
                email,
            };
            validate_profile(&changes)?;
            store.dispatch(
                AuthAction::UpdateProfile {
                    user_id: user.id,
                    changes,
                }
                .into(),
            );
            store.run_until_idle().await;
            if let Some(error) = store.select(|s| selectors::auth_error(s).map(str::to_owned)) {
                bail!(error);
            }
            println!("Profile updated");
        }
        Commands::Favorites { action } => favorites(&mut store, action).await?,
        Commands::Applications { action } => applications(&mut store, action).await?,
    }

    Ok(())
}

async fn favorites(store: &mut Store, command: FavoritesCommand) -> Result<()> {
    let user = require(store, Route::Favorites)?;
    store.dispatch(FavoritesAction::Load { user_id: user.id }.into());
    settle(store, selectors::favorites_error).await?;

    match command {
        FavoritesCommand::List => {
            let favorites = store.select(|s| selectors::favorites(s).to_vec());
            if favorites.is_empty() {
                println!("No favorites yet");
            }
            for favorite in favorites {
                println!(
                    "#{}  {}  {}  {}  [{}]",
                    favorite.id.unwrap_or_default(),
                    favorite.title,
                    favorite.company,
                    favorite.location,
                    favorite.offer_id
                );
            }
        }
        FavoritesCommand::Add {
            offer_id,
            title,
            company,
            location,
        } => {
            if store.select(|s| selectors::is_favorite(s, &offer_id)) {
                println!("Offer {offer_id} is already a favorite");
                return Ok(());
            }
            let offer = cli_offer(offer_id, title, company, location, None);
            store.dispatch(
                FavoritesAction::Add {
                    favorite: FavoriteOffer::from_offer(user.id, &offer),
                }
                .into(),
            );
            settle(store, selectors::favorites_error).await?;
            println!("Saved {}", offer.title);
        }
        FavoritesCommand::Remove { id } => {
            store.dispatch(FavoritesAction::Remove { id }.into());
            settle(store, selectors::favorites_error).await?;
            println!("Removed favorite #{id}");
        }
    }
    Ok(())
}

async fn applications(store: &mut Store, command: ApplicationsCommand) -> Result<()> {
    let user = require(store, Route::Applications)?;
    store.dispatch(ApplicationsAction::Load { user_id: user.id }.into());
    settle(store, selectors::applications_error).await?;

    match command {
        ApplicationsCommand::List { status } => {
            let listed: Vec<Application> = store.select(|s| match status {
                Some(status) => selectors::applications_by_status(s, status)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => selectors::applications(s).to_vec(),
            });
            if listed.is_empty() {
                println!("No applications");
            }
            let now = chrono::Utc::now();
            for application in listed {
                let age = application
                    .days_since_added(now)
                    .map(|d| format!("{d}d"))
                    .unwrap_or_else(|| "?".into());
                println!(
                    "#{}  {:<9}  {}  {}  ({age})",
                    application.id.unwrap_or_default(),
                    application.status,
                    application.title,
                    application.company
                );
                if !application.notes.is_empty() {
                    println!("      {}", application.notes);
                }
            }
        }
        ApplicationsCommand::Track {
            offer_id,
            title,
            company,
            location,
            url,
        } => {
            if store.select(|s| selectors::is_tracked(s, &offer_id)) {
                println!("Offer {offer_id} is already tracked");
                return Ok(());
            }
            let offer = cli_offer(offer_id, title, company, location, url);
            let application = Application::track(user.id, &offer, chrono::Utc::now());
            store.dispatch(ApplicationsAction::Add { application }.into());
            settle(store, selectors::applications_error).await?;
            println!("Tracking {}", offer.title);
        }
        ApplicationsCommand::Status { id, status } => {
            ensure_application(store, id)?;
            store.dispatch(ApplicationsAction::UpdateStatus { id, status }.into());
            settle(store, selectors::applications_error).await?;
            println!("#{id} is now {status}");
        }
        ApplicationsCommand::Notes { id, text } => {
            ensure_application(store, id)?;
            store.dispatch(ApplicationsAction::UpdateNotes { id, notes: text }.into());
            settle(store, selectors::applications_error).await?;
            println!("Notes saved for #{id}");
        }
        ApplicationsCommand::Remove { id } => {
            store.dispatch(ApplicationsAction::Remove { id }.into());
            settle(store, selectors::applications_error).await?;
            println!("Removed application #{id}");
        }
        ApplicationsCommand::Stats => {
            let total = store.select(selectors::applications_count);
            println!("{total} applications");
            for (status, count) in store.select(selectors::status_counts) {
                println!("  {status:<9} {count}");
            }
        }
    }
    Ok(())
}

/// Applies the route guard for `route` and returns the signed-in user.
fn require(store: &mut Store, route: Route) -> Result<UserResponse> {
    if store.navigate(route) != route {
        bail!("Sign in first: jobforsa login --email <EMAIL> --password <PASSWORD>");
    }
    signed_in_user(store)
}

fn signed_in_user(store: &Store) -> Result<UserResponse> {
    if let Some(error) = store.select(|s| selectors::auth_error(s).map(str::to_owned)) {
        bail!(error);
    }
    store
        .select(|s| selectors::current_user(s).cloned())
        .context("Not signed in")
}

/// Runs pending effects and turns a slice error into a command failure.
async fn settle(store: &mut Store, error: fn(&AppState) -> Option<&str>) -> Result<()> {
    store.run_until_idle().await;
    match store.select(|s| error(s).map(str::to_owned)) {
        Some(message) => bail!(message),
        None => Ok(()),
    }
}

fn ensure_application(store: &Store, id: RecordId) -> Result<()> {
    if store.select(|s| selectors::application_by_id(s, id).is_none()) {
        bail!("No application #{id}");
    }
    Ok(())
}

fn cli_offer(
    id: String,
    title: String,
    company: String,
    location: String,
    url: Option<String>,
) -> JobOffer {
    JobOffer {
        id,
        title,
        company,
        location,
        date: String::new(),
        description: String::new(),
        salary: None,
        url,
    }
}

fn print_offer(job: &JobOffer) {
    println!("[{}] {}  {}", job.company_initial(), job.title, job.id);
    println!("    {} | {}", job.company, job.location);
    if let Some(salary) = &job.salary {
        println!("    {salary}");
    }
    if !job.date.is_empty() {
        println!("    posted {}", job.date);
    }
    if let Some(url) = job.url.as_deref().filter(|u| !u.is_empty()) {
        println!("    {url}");
    }
}
