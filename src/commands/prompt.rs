use owo_colors::OwoColorize;

use crate::analysis::prompt::render_prompt;
use crate::error::Result;

/// Print the prompt the backend sends to the model for a ticket
pub fn cmd_prompt(subject: &str, description: &str, output_json: bool) -> Result<()> {
    let prompt = render_prompt(subject, description);

    if output_json {
        println!("{}", serde_json::to_string_pretty(&prompt)?);
        return Ok(());
    }

    println!("{}", "## System".bold());
    println!("{}", prompt.system);
    println!();
    println!("{}", "## User".bold());
    println!("{}", prompt.user);
    Ok(())
}
