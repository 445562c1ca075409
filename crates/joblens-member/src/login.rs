//! Login-or-resume for the authenticated session.
//!
//! A persisted cookie snapshot is tried first: restore it, land on the
//! feed and probe for an element only authenticated pages carry. A
//! missing or rejected snapshot is not an error, it just means a fresh
//! login, which re-persists the cookie set on success.

use crate::credentials::Credentials;
use crate::error::Result;
use crate::selectors::{FEED_URL, LOGIN_URL, PASSWORD_FIELD, SEARCH_BOX, USERNAME_FIELD};
use joblens_browser::{humanize, BrowserActions, CookieJar, CookieStoreError};
use std::time::Duration;

/// Bounded wait for the landing probe after a cookie restore.
const LANDING_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
/// Interval between landing probes.
const LANDING_PROBE_INTERVAL: Duration = Duration::from_millis(500);

/// How an authenticated session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The persisted cookie snapshot was accepted.
    Resumed,
    /// A fresh login ran and its cookie set was persisted.
    FreshLogin,
}

/// Establishes an authenticated session, preferring the persisted
/// cookie snapshot over a fresh login.
///
/// # Errors
/// Propagates driver failures. An absent, unreadable or rejected
/// snapshot is handled here and never surfaces as an error.
pub async fn login_or_resume<S>(
    session: &mut S,
    jar: &CookieJar,
    credentials: &Credentials,
) -> Result<AuthOutcome>
where
    S: BrowserActions + Send + ?Sized,
{
    match jar.load() {
        Ok(snapshot) => {
            tracing::info!(
                "Restoring {} persisted cookies from {}",
                snapshot.cookies.len(),
                jar.path().display()
            );
            session.navigate(FEED_URL).await?;
            session.import_cookies(&snapshot.cookies).await?;
            session.navigate(FEED_URL).await?;

            if landing_element_present(session).await? {
                tracing::info!("Persisted session accepted");
                return Ok(AuthOutcome::Resumed);
            }

            tracing::warn!("Persisted session rejected, logging in fresh");
            session.clear_cookies().await?;
        }
        Err(CookieStoreError::NotFound { .. }) => {
            tracing::debug!("No cookie snapshot at {}", jar.path().display());
        }
        Err(err) => {
            tracing::warn!("Cookie snapshot unreadable ({}), logging in fresh", err);
        }
    }

    fresh_login(session, jar, credentials).await?;
    Ok(AuthOutcome::FreshLogin)
}

/// Probes for the landing element with a bounded wait.
///
/// Only authenticated pages render the global search box, so its
/// presence proves the restored cookies were accepted. Absence within
/// the window is `Ok(false)`, never an error.
async fn landing_element_present<S>(session: &mut S) -> Result<bool>
where
    S: BrowserActions + Send + ?Sized,
{
    let deadline = tokio::time::Instant::now() + LANDING_PROBE_TIMEOUT;
    loop {
        if session.exists(SEARCH_BOX).await? {
            return Ok(true);
        }
        if tokio::time::Instant::now() >= deadline {
            return Ok(false);
        }
        tokio::time::sleep(LANDING_PROBE_INTERVAL).await;
    }
}

/// Runs the login form and persists the resulting cookie set,
/// overwriting any prior snapshot.
async fn fresh_login<S>(session: &mut S, jar: &CookieJar, credentials: &Credentials) -> Result<()>
where
    S: BrowserActions + Send + ?Sized,
{
    tracing::info!("Performing fresh login");
    session.navigate(LOGIN_URL).await?;

    session
        .type_into(USERNAME_FIELD, credentials.username())
        .await?;
    humanize::move_chains(session, 1, 3, 1, 3).await?;
    session
        .type_into(PASSWORD_FIELD, credentials.password())
        .await?;

    humanize::pause(2.0, 6.0).await;
    session.press_enter(PASSWORD_FIELD).await?;
    humanize::pause(3.0, 4.0).await;

    let cookies = session.export_cookies().await?;
    jar.save(&cookies)?;
    tracing::info!(
        "Login complete, {} cookies persisted to {}",
        cookies.len(),
        jar.path().display()
    );
    Ok(())
}
