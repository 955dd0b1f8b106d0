use anyhow::Result;

use crate::api::types::UserType;

pub fn email_or_prompt(email: Option<String>) -> Result<String> {
    if let Some(email) = email {
        return Ok(email);
    }

    dialoguer::Input::<String>::new()
        .with_prompt("Email")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.contains('@') {
                Ok(())
            } else {
                Err("Please enter a valid email address")
            }
        })
        .interact_text()
        .map_err(Into::into)
}

pub fn password_or_prompt(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let mut prompt = dialoguer::Password::new();
    prompt.with_prompt("Password");

    if confirm {
        prompt.with_confirmation("Confirm password", "Passwords do not match");
    }

    prompt.interact().map_err(Into::into)
}

pub fn user_type_or_prompt(user_type: Option<UserType>) -> Result<UserType> {
    if let Some(user_type) = user_type {
        return Ok(user_type);
    }

    let choices = [UserType::Freelancer, UserType::Company];

    let idx = dialoguer::Select::new()
        .with_prompt("Register as")
        .items(&choices)
        .default(0)
        .interact()?;

    Ok(choices[idx])
}
