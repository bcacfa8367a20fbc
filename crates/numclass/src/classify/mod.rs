use std::time::Duration;

use colored::Colorize;

use crate::facts::{FactClient, DEFAULT_TIMEOUT_SECS, NUMBERS_API_BASE};
use crate::prelude::{println, *};
use crate::server::ClassifyResponse;
use numclass_core::classify::classify;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ClassifyOptions {
    /// Number to classify
    #[clap(env = "NUMCLASS_NUMBER", allow_hyphen_values = true)]
    pub number: i64,

    /// Base URL of the numeric trivia service
    #[arg(long, env = "NUMCLASS_FACT_API_BASE", default_value = NUMBERS_API_BASE)]
    pub fact_api_base: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Trivia upstream: {}", options.fact_api_base);
        println!();
    }

    let facts = FactClient::new(
        options.fact_api_base.clone(),
        Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    )?;

    let classification = classify(options.number);
    let fun_fact = facts.fun_fact(options.number).await;
    let response = ClassifyResponse::from_parts(classification, fun_fact);

    if options.json {
        output_json(&response)?;
    } else {
        output_formatted(&response);
    }

    Ok(())
}

fn output_json(response: &ClassifyResponse) -> Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
    println!("{json}");
    Ok(())
}

fn output_formatted(response: &ClassifyResponse) {
    let mut table = new_table();

    table.add_row(prettytable::row![
        "Number".green(),
        response.number.to_string().bright_white().bold()
    ]);
    table.add_row(prettytable::row![
        "Prime".green(),
        yes_no(response.is_prime)
    ]);
    table.add_row(prettytable::row![
        "Perfect".green(),
        yes_no(response.is_perfect)
    ]);
    table.add_row(prettytable::row![
        "Properties".green(),
        response.properties.join(", ").bright_yellow()
    ]);
    table.add_row(prettytable::row![
        "Digit sum".green(),
        response.digit_sum.to_string().bright_magenta()
    ]);

    println!("{table}");
    println!("{} {}", "Fun fact:".cyan().bold(), response.fun_fact);
}

fn yes_no(value: bool) -> colored::ColoredString {
    if value {
        "yes".bright_green()
    } else {
        "no".bright_black()
    }
}
