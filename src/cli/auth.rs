//! Auth command - log in, log out, and check credentials

use crate::cli::style::{Stylize, check};
use acmoj::auth::{AuthSource, TOKEN_ENV_VAR, TokenStore};
use acmoj::config::Config;
use acmoj::error::{Error, Result};
use acmoj::judge::{AcmojClient, JudgeService};
use anstream::{eprintln, println};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Password};
use std::io::IsTerminal;

/// Auth subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Store a new token
    Login,
    /// Remove the stored token
    Logout,
    /// Show the current credentials
    Status,
}

/// Run an auth subcommand
pub async fn run_auth(config: &Config, action: AuthAction) -> Result<()> {
    let tokens = TokenStore::from_config(config);
    match action {
        AuthAction::Login => run_auth_login(config, &tokens).await,
        AuthAction::Logout => run_auth_logout(&tokens),
        AuthAction::Status => run_auth_status(config, &tokens).await,
    }
}

/// Prompt for a token, verify it, and store it
pub async fn run_auth_login(config: &Config, tokens: &TokenStore) -> Result<()> {
    println!(
        "Create a personal access token at {}",
        format!("{}/settings", config.web_base.as_str().trim_end_matches('/')).accent()
    );

    let token = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Access token")
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;
    let token = token.trim().to_string();

    let client = AcmojClient::new(Some(token.clone()), config.clone());
    let profile = client
        .get_profile()
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

    tokens.save(&token)?;
    println!("{} Logged in as {}", check(), profile.username.emphasis());

    if tokens.has_env_override() {
        eprintln!(
            "{}: {TOKEN_ENV_VAR} is set and takes priority over the stored token",
            "warning".warn()
        );
    }
    Ok(())
}

fn run_auth_logout(tokens: &TokenStore) -> Result<()> {
    if tokens.clear()? {
        println!("{} Logged out", check());
    } else {
        println!("{}", "No stored credentials".muted());
    }
    Ok(())
}

async fn run_auth_status(config: &Config, tokens: &TokenStore) -> Result<()> {
    let Some(auth) = tokens.load()? else {
        println!("Not logged in");
        println!("{}", "Run: acmoj auth login".muted());
        return Ok(());
    };

    let client = AcmojClient::new(Some(auth.token), config.clone());
    let profile = client
        .get_profile()
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

    let source = match auth.source {
        AuthSource::EnvVar => TOKEN_ENV_VAR.to_string(),
        AuthSource::File => config.credentials_path().display().to_string(),
    };

    println!("Authenticated as: {}", profile.username.accent());
    if let Some(name) = profile.friendly_name {
        println!("Name: {name}");
    }
    println!("Token source: {}", source.muted());
    println!("API: {}", config.api_base.as_str().muted());
    Ok(())
}

/// Tell the user they are logged out and offer to log in
pub async fn offer_login(config: &Config, tokens: &TokenStore) -> Result<()> {
    eprintln!("{}: {}", "warning".warn(), Error::NotAuthenticated);

    if !std::io::stdin().is_terminal() {
        eprintln!("{}", "Run: acmoj auth login".hint());
        return Ok(());
    }

    let login = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Log in now?")
        .default(true)
        .interact_opt()
        .map_err(|e| Error::Prompt(e.to_string()))?;

    if login == Some(true) {
        run_auth_login(config, tokens).await?;
    }
    Ok(())
}
