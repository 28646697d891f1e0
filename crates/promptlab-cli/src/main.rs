//! PromptLab CLI - Exercise the prompt playground from the terminal
//!
//! Talks to a running promptlab-server over its HTTP API.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{CreateTemplateRequest, PromptLabClient};
use config::Config;

#[derive(Parser)]
#[command(name = "plab")]
#[command(about = "PromptLab CLI - prompt playground client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check Ollama reachability through the server
    Status,

    /// List available model names
    Models,

    /// Generate a completion
    Generate {
        /// Prompt text
        prompt: String,
        /// Model to use (falls back to the configured default)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Prompt template operations
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Show prompt history
    History,

    /// Show or update configuration
    Config {
        /// Set the server base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Set the default model for generate
        #[arg(long)]
        default_model: Option<String>,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List all templates
    List,
    /// Show a template in full
    Show {
        /// Template id
        id: i64,
    },
    /// Add a new template
    Add {
        /// Template title
        #[arg(long)]
        title: String,
        /// Short description
        #[arg(long)]
        description: String,
        /// Template content (use [PLACEHOLDERS] for parameters)
        #[arg(long)]
        content: String,
        /// Classification tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status => cmd_status().await,
        Commands::Models => cmd_models().await,
        Commands::Generate { prompt, model } => cmd_generate(prompt, model).await,
        Commands::Template { action } => cmd_template(action).await,
        Commands::History => cmd_history().await,
        Commands::Config {
            base_url,
            default_model,
        } => cmd_config(base_url, default_model),
    }
}

fn client() -> Result<(Config, PromptLabClient)> {
    let config = Config::load()?;
    let client = PromptLabClient::new(&config.base_url);
    Ok((config, client))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_status() -> Result<()> {
    let (_, client) = client()?;

    let status = client.ollama_status().await?;
    if status.connected {
        println!("{} Ollama is reachable", "✓".green());
    } else {
        println!("{} Ollama is not reachable", "✗".red());
        if let Some(message) = status.message {
            println!("  {}", message.dimmed());
        }
    }

    Ok(())
}

async fn cmd_models() -> Result<()> {
    let (_, client) = client()?;

    let models = client.models().await?;
    println!("{}", "Models:".bold());
    for model in models {
        println!("  {}", model.cyan());
    }

    Ok(())
}

async fn cmd_generate(prompt: String, model: Option<String>) -> Result<()> {
    let (config, client) = client()?;

    let model = match model.or(config.default_model) {
        Some(m) => m,
        None => bail!(
            "No model given. Pass --model or set one with 'plab config --default-model <MODEL>'."
        ),
    };

    println!("{} {}", "Model:".dimmed(), model.cyan());
    let result = client.generate(&model, &prompt).await?;

    println!("\n{}", result.response);
    println!(
        "\n{}",
        format!("({} ms)", result.processing_time).dimmed()
    );

    Ok(())
}

async fn cmd_template(action: TemplateAction) -> Result<()> {
    let (_, client) = client()?;

    match action {
        TemplateAction::List => {
            let templates = client.list_templates().await?;

            if templates.is_empty() {
                println!("No templates found.");
                return Ok(());
            }

            println!("{}", "Templates:".bold());
            for template in templates {
                println!(
                    "  {} {} {} [{}]",
                    template.id.to_string().dimmed(),
                    template.title.cyan().bold(),
                    template.description.dimmed(),
                    template.tags.join(", ")
                );
            }
        }

        TemplateAction::Show { id } => {
            let template = client.get_template(id).await?;

            println!("{}", template.title.cyan().bold());
            println!("{}", template.description.dimmed());
            println!("Tags: {}", template.tags.join(", "));
            println!("Created: {}", template.created_at.dimmed());
            println!("\n{}", template.content);
        }

        TemplateAction::Add {
            title,
            description,
            content,
            tags,
        } => {
            let template = client
                .create_template(&CreateTemplateRequest {
                    title,
                    description,
                    content,
                    tags,
                })
                .await?;

            println!(
                "{} Template '{}' created (id {})",
                "✓".green(),
                template.title,
                template.id
            );
        }
    }

    Ok(())
}

async fn cmd_history() -> Result<()> {
    let (_, client) = client()?;

    let history = client.history().await?;

    if history.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    println!("{}", "History:".bold());
    for entry in history {
        let timing = entry
            .metadata
            .as_ref()
            .and_then(|m| m.get("processing_time"))
            .and_then(|t| t.as_u64())
            .map(|t| format!(" ({t} ms)"))
            .unwrap_or_default();

        println!(
            "  {} {}{}",
            entry.id.to_string().dimmed(),
            entry.model.cyan(),
            timing.dimmed()
        );
        println!("    {} {}", ">".dimmed(), truncate(&entry.prompt, 70));
        println!("    {} {}", "<".dimmed(), truncate(&entry.response, 70));
    }

    Ok(())
}

fn cmd_config(base_url: Option<String>, default_model: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let changed = base_url.is_some() || default_model.is_some();
    if let Some(url) = base_url {
        config.base_url = url;
    }
    if let Some(model) = default_model {
        config.default_model = Some(model);
    }
    if changed {
        config.save()?;
        println!("{} Config saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration:".bold());
    println!("  base_url: {}", config.base_url.cyan());
    println!(
        "  default_model: {}",
        config.default_model.as_deref().unwrap_or("-").cyan()
    );

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{cut}…")
}
