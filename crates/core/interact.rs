use dialoguer::{theme::ColorfulTheme, Confirm};
use eyre::{eyre, Result, WrapErr};

/// Asks a yes/no question, an aborted prompt counts as no.
pub fn user_confirm(prompt: &str) -> Result<bool> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact_opt()
        .wrap_err_with(|| eyre!("User confirmation cancelled"))?;

    Ok(answer.unwrap_or(false))
}
