use std::{env, sync::Arc};

use admin_dashboard::DashboardScreen;
use admin_gyms::GymList;
use dotenv::dotenv;
use eyre::Context;
use log::info;
use session::{MemoryStore, Session};

mod store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    if let Err(err) = dotenv() {
        info!("Failed to load .env file: {}", err);
    }
    pretty_env_logger::init();
    color_eyre::install()?;

    let base_url = env::var("ADMIN_API_URL").context("Failed to get ADMIN_API_URL from env")?;
    let session = match env::var("ADMIN_SESSION_FILE") {
        Ok(path) => Session::hydrate(Arc::new(store::FileStore::new(path))),
        Err(_) => Session::hydrate(Arc::new(MemoryStore::default())),
    };
    let api = api::Api::new(base_url, session.clone());

    if !session.signed_in() {
        let email = env::var("ADMIN_EMAIL").context("Failed to get ADMIN_EMAIL from env")?;
        let password =
            env::var("ADMIN_PASSWORD").context("Failed to get ADMIN_PASSWORD from env")?;
        info!("signing in as {email}");
        let user = api
            .auth
            .login(&email, &password)
            .await
            .context("Failed to sign in")?;
        info!("signed in as {} ({:?})", user.display_name, user.role);
    } else if let Some(profile) = session.profile() {
        info!("restored session for {}", profile.email);
    }

    let screen = DashboardScreen::new(Arc::new(api.clone()));
    let stats = screen.stats().await.context("Failed to load dashboard")?;
    info!(
        "{} gyms ({} active), {} trainers ({} active), {} tags",
        stats.summary.total_gyms,
        stats.summary.active_gyms,
        stats.summary.total_trainers,
        stats.summary.active_trainers,
        stats.summary.total_tags,
    );

    let mut gyms = GymList::new(Arc::new(api));
    gyms.refresh().await.context("Failed to list gyms")?;
    info!(
        "gyms page {} of {} ({} total):",
        gyms.page(),
        gyms.total_pages(),
        gyms.total()
    );
    for gym in gyms.items() {
        info!("  {} {}", gym.id, gym.name.th);
    }

    Ok(())
}
