use clap::{Parser, Subcommand};
use portion::host::{ConsoleHost, EditEvent, MemoryHost, PageModel, PromptReply};
use portion::host::{page_from_recipe, PageEntry, RecipePage};
use portion::metadata::Metadata;
use portion::recipe;
use portion::scale::{ScaleController, ScaleError};

#[derive(Parser)]
#[command(name = "portion")]
#[command(about = "Recipe quantity scaling and formatting tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a recipe as JSON
    Export {
        /// Recipe TOML file
        #[arg(default_value = "recipes/pancakes.toml")]
        recipe: String,

        /// Metadata catalog directory
        #[arg(short, long)]
        metadata: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List all quantities in a recipe, formatted for display
    List {
        /// Recipe TOML file
        #[arg(default_value = "recipes/pancakes.toml")]
        recipe: String,

        /// Metadata catalog directory
        #[arg(short, long)]
        metadata: Option<String>,
    },

    /// Rescale a recipe by editing one quantity
    Scale {
        /// Recipe TOML file
        #[arg(default_value = "recipes/pancakes.toml")]
        recipe: String,

        /// Quantity to edit, addressed as "group/ingredient"
        #[arg(short, long)]
        ingredient: String,

        /// Replacement quantity text; prompts on the console when omitted
        #[arg(short, long)]
        to: Option<String>,

        /// Metadata catalog directory
        #[arg(short, long)]
        metadata: Option<String>,
    },

    /// Convert a value between units using the metadata tables
    Convert {
        value: f64,
        from: String,
        to: String,

        /// Metadata catalog directory
        #[arg(short, long)]
        metadata: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            recipe,
            metadata,
            output,
        } => export_recipe(&recipe, metadata.as_deref(), output.as_deref()),
        Commands::List { recipe, metadata } => list_recipe(&recipe, metadata.as_deref()),
        Commands::Scale {
            recipe,
            ingredient,
            to,
            metadata,
        } => scale_recipe(&recipe, &ingredient, to.as_deref(), metadata.as_deref()),
        Commands::Convert {
            value,
            from,
            to,
            metadata,
        } => convert_value(value, &from, &to, &metadata),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_metadata(dir: Option<&str>) -> Result<Metadata, Box<dyn std::error::Error>> {
    match dir {
        Some(dir) => Metadata::load_from_dir(dir),
        None => Ok(Metadata::empty()),
    }
}

fn export_recipe(
    path: &str,
    metadata_dir: Option<&str>,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = load_metadata(metadata_dir)?;
    let (recipe, validation) = recipe::load_recipe_from_file(path, &metadata)?;

    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    let json = serde_json::to_string_pretty(&recipe)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Recipe exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn list_recipe(path: &str, metadata_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = load_metadata(metadata_dir)?;
    let (recipe, validation) = recipe::load_recipe_from_file(path, &metadata)?;

    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    let built = page_from_recipe(&recipe, &metadata);
    let mut host = MemoryHost::new(built.page);
    let mut controller = ScaleController::new();
    controller.initialize(&mut host);

    println!("Recipe: {}", recipe.name);
    print_quantities(host.page(), &built.entries);

    Ok(())
}

fn scale_recipe(
    path: &str,
    ingredient: &str,
    to: Option<&str>,
    metadata_dir: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = load_metadata(metadata_dir)?;
    let (recipe, validation) = recipe::load_recipe_from_file(path, &metadata)?;

    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    let built = page_from_recipe(&recipe, &metadata);

    let target = built.find(ingredient).ok_or_else(|| {
        format!(
            "Quantity '{}' not found. Available: {}",
            ingredient,
            built.locations().join(", ")
        )
    })?;

    let RecipePage { page, entries } = built;

    let mut controller = ScaleController::new();

    let outcome = match to {
        Some(reply) => {
            let mut host = MemoryHost::new(page);
            controller.initialize(&mut host);
            host.queue_reply(PromptReply::Text(reply.to_string()));
            let event = EditEvent {
                target: host.page().amount_element(target),
            };
            let outcome = controller.handle_edit(&mut host, &event);
            report_edit(outcome, host.page(), &entries, &recipe.name)
        }
        None => {
            let mut host = ConsoleHost::new(page);
            controller.initialize(&mut host);
            let event = EditEvent {
                target: host.page().amount_element(target),
            };
            let outcome = controller.handle_edit(&mut host, &event);
            report_edit(outcome, host.page(), &entries, &recipe.name)
        }
    };

    outcome
}

fn report_edit(
    outcome: Result<(), ScaleError>,
    page: &PageModel,
    entries: &[PageEntry],
    recipe_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match outcome {
        Ok(()) => {
            println!("Recipe: {}", recipe_name);
            print_quantities(page, entries);
            Ok(())
        }
        Err(ScaleError::UserCancelled) => {
            eprintln!("Edit cancelled; nothing changed.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_quantities(page: &PageModel, entries: &[PageEntry]) {
    println!("\nQuantities ({}):", entries.len());
    for entry in entries {
        let mut parts = vec![page.text(entry.id)];
        for label in page.label_texts(entry.id) {
            if !label.is_empty() {
                parts.push(label);
            }
        }
        println!("  - {}  [{}]", parts.join(" "), entry.location);
    }
}

fn convert_value(
    value: f64,
    from: &str,
    to: &str,
    metadata_dir: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = Metadata::load_from_dir(metadata_dir)?;

    let converted = if metadata.mass_units().is_known(from) {
        metadata.mass_units().convert(value, from, to)?
    } else {
        metadata.volume_units().convert(value, from, to)?
    };

    println!("{} {} = {} {}", value, from, converted, to);

    Ok(())
}
