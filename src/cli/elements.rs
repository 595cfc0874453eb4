//! Elements command implementation.

use super::{CliError, ElementsFormat};
use periodic_recall::{Element, GameConfig, PERIODIC_TABLE};

/// Execute the elements command.
///
/// # Errors
///
/// Returns an error if the configured target pool is invalid.
pub(crate) fn execute(config: &GameConfig, format: ElementsFormat, targets: bool) -> Result<(), CliError> {
    let elements: Vec<&'static Element> = if targets {
        config.rules.resolve_pool()?
    } else {
        PERIODIC_TABLE.iter().collect()
    };

    match format {
        ElementsFormat::Text => {
            println!("{:>3}  {:<3} {:<14} {:<7} {:<22} {:<7} description", "#", "sym", "name", "pos", "category", "color");
            for element in &elements {
                println!(
                    "{:>3}  {:<3} {:<14} {:<7} {:<22} {} {}",
                    element.atomic_number,
                    element.symbol,
                    element.name,
                    element.position.to_string(),
                    element.category.tag(),
                    element.color,
                    element.description
                );
                if targets {
                    let origins: Vec<String> = element.origins().iter().map(ToString::to_string).collect();
                    println!("       origin: {}", origins.join(", "));
                    println!("       {} {}", element.name, element.extended_description());
                }
            }
        }
        ElementsFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&elements)?);
        }
    }

    Ok(())
}
