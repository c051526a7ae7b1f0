use anyhow::Result;
use colored::*;
use is_terminal::IsTerminal;
use rememberizer::mcp::{register_rememberizer_tools, ToolRegistry};
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Every exposed tool, sorted by name
pub fn collect_tool_infos() -> Vec<ToolInfo> {
    let mut registry = ToolRegistry::new();
    register_rememberizer_tools(&mut registry);

    registry
        .list_tool_names()
        .into_iter()
        .filter_map(|name| {
            registry.get_tool(&name).map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().trim().to_string(),
                input_schema: tool.schema(),
            })
        })
        .collect()
}

pub fn run_tools_command(format: OutputFormat) -> Result<()> {
    let tool_infos = collect_tool_infos();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tool_infos)?);
        }
        OutputFormat::Table => display_table(&tool_infos),
    }

    Ok(())
}

/// First paragraph of a description, shortened for a table cell
fn summary(description: &str) -> String {
    let first = description.split("\n\n").next().unwrap_or("").replace('\n', " ");
    if first.chars().count() > 80 {
        format!("{}...", first.chars().take(77).collect::<String>())
    } else {
        first
    }
}

fn display_table(tool_infos: &[ToolInfo]) {
    let rows: Vec<ToolRow> = tool_infos
        .iter()
        .map(|info| ToolRow {
            name: info.name.clone(),
            description: summary(&info.description),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    println!("{table}");

    if io::stdout().is_terminal() {
        println!();
        println!(
            "  Use {} to see input schemas",
            "--format json".cyan()
        );
    }
}
