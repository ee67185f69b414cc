mod config;
mod mail;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let site = config::SiteConfig::from_env().expect("invalid site config");

    // Contact mailer is non-fatal: the site still serves pages without it.
    let contact = match config::MailConfig::from_env() {
        Ok(mail) => {
            tracing::info!(to = %mail.addresses.to, "contact mailer initialized");
            Some(state::ContactDesk {
                mailer: Arc::new(mail::ResendMailer::new(&mail.api_key)),
                addresses: mail.addresses,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact mailer not configured, contact form disabled");
            None
        }
    };

    let port = site.port;
    tracing::info!(site_dir = %site.site_dir.display(), "serving static site");
    let state = state::AppState::new(contact, site.site_dir);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "brokersite listening");
    axum::serve(listener, app).await.expect("server failed");
}
