//! Session management.

use secrecy::SecretString;

use coffee_shop_storefront::error::Result;
use coffee_shop_storefront::state::AppState;

/// Print the persisted user, if any.
#[allow(clippy::print_stdout)]
pub async fn show(state: &AppState) {
    match state.session().load().await {
        Some(credential) => println!(
            "{} <{}> ({})",
            credential.name, credential.email, credential.id
        ),
        None => println!("Not signed in"),
    }
}

/// Sign in and persist the resulting credential.
///
/// # Errors
///
/// Returns `AppError::Auth` if the input is rejected.
#[allow(clippy::print_stdout)]
pub async fn sign_in(
    state: &AppState,
    email: &str,
    password: &SecretString,
) -> Result<()> {
    let credential = state.auth().sign_in(email, password).await?;
    println!("Signed in as {}", credential.name);
    Ok(())
}

/// Create an account and persist the resulting credential.
///
/// # Errors
///
/// Returns `AppError::Auth` if the input is rejected.
#[allow(clippy::print_stdout)]
pub async fn sign_up(
    state: &AppState,
    name: &str,
    email: &str,
    password: &SecretString,
) -> Result<()> {
    let credential = state.auth().sign_up(name, email, password).await?;
    println!("Welcome, {}", credential.name);
    Ok(())
}

/// Forget the persisted credential.
#[allow(clippy::print_stdout)]
pub async fn sign_out(state: &AppState) {
    state.auth().sign_out().await;
    println!("Signed out");
}
