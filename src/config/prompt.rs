// Terminal credentials collection. Only the binary uses this; the pipeline
// itself never touches the terminal.

use crate::core::{Credentials, CredentialsProvider};
use crate::utils::error::{Result, VanMoofError};
use dialoguer::{Input, Password};

/// Asks on the terminal for whichever credential was not given up front.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompt {
    username: Option<String>,
    password: Option<String>,
}

impl TerminalPrompt {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }
}

fn prompt_error(e: impl std::fmt::Display) -> VanMoofError {
    VanMoofError::PromptError {
        message: e.to_string(),
    }
}

impl CredentialsProvider for TerminalPrompt {
    fn credentials(&self) -> Result<Credentials> {
        let username = match self.username.as_deref().filter(|u| !u.is_empty()) {
            Some(username) => username.to_string(),
            None => Input::<String>::new()
                .with_prompt("Please enter your username")
                .interact_text()
                .map_err(prompt_error)?,
        };

        // `Password` hides input in terminal.
        let password = match self.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => password.to_string(),
            None => Password::new()
                .with_prompt("Please enter your password")
                .interact()
                .map_err(prompt_error)?,
        };

        Ok(Credentials::new(username, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_credentials_are_used_without_prompting() {
        let prompt = TerminalPrompt::new(Some("rider".into()), Some("secret".into()));

        let credentials = prompt.credentials().unwrap();

        assert_eq!(credentials.username, "rider");
        assert_eq!(credentials.password, "secret");
    }
}
