//! Problem command - show a problem's accepted languages

use crate::cli::style::{Stylize, bullet};
use acmoj::error::Result;
use acmoj::judge::JudgeService;
use anstream::println;

/// Run the problem command
pub async fn run_problem(judge: &dyn JudgeService, problem_id: u64) -> Result<()> {
    let details = judge.get_problem_details(problem_id).await?;

    let title = details.title.as_deref().unwrap_or("(untitled)");
    println!("{} {}", format!("Problem {}:", details.id).emphasis(), title);
    println!();

    match details.languages_accepted.as_deref() {
        Some(langs) if !langs.is_empty() => {
            println!("Accepted languages:");
            for lang in langs {
                println!("  {} {}", bullet(), lang.accent());
            }
        }
        _ => println!("{}", "No accepted languages listed".muted()),
    }
    Ok(())
}
