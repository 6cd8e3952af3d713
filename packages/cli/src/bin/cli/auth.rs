// ABOUTME: CLI commands for signing in and out
// ABOUTME: Credentials are checked by the login page and the session is kept in the cookie file

use colored::*;
use coursemgr_auth::{LoginForm, LoginPage};
use inquire::{Password, Text};

use super::{App, CommandResult};

pub async fn login_command(app: &App, email: Option<String>) -> CommandResult {
    let email = match email {
        Some(email) => email,
        None => Text::new("Email:").prompt()?,
    };
    let password = Password::new("Password:")
        .without_confirmation()
        .prompt()?;

    let mut ctx = app.auth_context().await;
    let page = LoginPage::new(app.client.clone(), app.prompter.clone());
    let user = page
        .submit(&mut ctx, &LoginForm::new(email, password))
        .await?;

    println!(
        "{} Signed in as {} ({})",
        "🔐".green(),
        user.full_name().bold(),
        user.email.dimmed()
    );
    Ok(())
}

pub async fn logout_command(app: &App) -> CommandResult {
    let mut ctx = app.auth_context().await;
    if !ctx.is_signed_in() {
        println!("{}", "Not signed in".yellow());
        return Ok(());
    }

    ctx.logout().await?;
    println!("{}", "🔓 Signed out".green());
    Ok(())
}
