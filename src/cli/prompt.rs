//! Terminal prompts backed by dialoguer

use acmoj::directive::parse_numeric_id;
use acmoj::error::{Error, Result};
use acmoj::workflow::Prompter;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// Prompter that asks on the terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    /// Prompter using dialoguer's colorful theme
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

impl Prompter for DialoguerPrompter {
    fn input_problem_id(&self, initial: Option<u64>) -> Result<Option<String>> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt("Problem ID (empty to cancel)")
            .allow_empty(true)
            .validate_with(|value: &String| -> std::result::Result<(), &str> {
                if value.trim().is_empty() || parse_numeric_id(value).is_some() {
                    Ok(())
                } else {
                    Err("enter a positive number")
                }
            });
        if let Some(id) = initial {
            input = input.with_initial_text(id.to_string());
        }

        let value = input.interact_text().map_err(prompt_error)?;
        let value = value.trim();
        Ok((!value.is_empty()).then(|| value.to_string()))
    }

    fn select_language(
        &self,
        problem_id: u64,
        languages: &[String],
        suggested: Option<usize>,
    ) -> Result<Option<usize>> {
        Select::with_theme(&self.theme)
            .with_prompt(format!("Language for problem {problem_id}"))
            .items(languages)
            .default(suggested.unwrap_or(0))
            .interact_opt()
            .map_err(prompt_error)
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .map_err(prompt_error)?;
        Ok(answer == Some(true))
    }
}
