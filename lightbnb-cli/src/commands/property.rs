//! Property listing management

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::models::NewProperty;
use lightbnb_db::Database;

use super::print_json;

#[derive(Parser, Debug)]
pub struct PropertyArgs {
    #[command(subcommand)]
    pub command: PropertyCommands,
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommands {
    /// Add a property from a JSON file (cost_per_night in cents)
    Add {
        /// Path to the property JSON
        #[arg(value_name = "FILE", value_parser = parse_property_file)]
        property: NewProperty,
    },
}

/// Load and validate a property definition from disk.
pub fn load_property(path: &Path) -> Result<NewProperty> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let property: NewProperty = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid property JSON in {}", path.display()))?;
    property.validate()?;
    Ok(property)
}

/// clap value parser: the file is read and validated once, at parse time.
fn parse_property_file(path: &str) -> std::result::Result<NewProperty, String> {
    load_property(Path::new(path)).map_err(|e| format!("{:#}", e))
}

pub async fn run_property(args: PropertyArgs, db: &Database) -> Result<()> {
    match args.command {
        PropertyCommands::Add { property } => {
            let created = db
                .properties()
                .add(property)
                .await
                .context("Failed to add property")?;
            print_json(&created)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_valid_property_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"owner_id": 1, "title": "Habit mix", "cost_per_night": 46058,
                "country": "Canada", "street": "651 Nami Road", "city": "Bohbatev",
                "province": "Alberta", "post_code": "83680"}}"#
        )
        .unwrap();

        let property = load_property(file.path()).unwrap();
        assert_eq!(property.title, "Habit mix");
        assert!(property.active);
    }

    #[test]
    fn rejects_invalid_property_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"owner_id": 0, "title": "x", "cost_per_night": 1,
                "country": "c", "street": "s", "city": "c", "province": "p", "post_code": "1"}}"#
        )
        .unwrap();

        assert!(load_property(file.path()).is_err());
    }

    #[test]
    fn add_carries_the_parsed_property() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"owner_id": 3, "title": "Port side", "cost_per_night": 5080,
                "country": "Canada", "street": "1 Dock St", "city": "Halifax",
                "province": "Nova Scotia", "post_code": "B3H"}}"#
        )
        .unwrap();

        let args = PropertyArgs::try_parse_from([
            "property",
            "add",
            file.path().to_str().unwrap(),
        ])
        .unwrap();
        let PropertyCommands::Add { property } = args.command;
        assert_eq!(property.owner_id, 3);
        assert_eq!(property.cost_per_night, 5080);
    }

    #[test]
    fn add_reports_missing_file_at_parse_time() {
        let err = PropertyArgs::try_parse_from(["property", "add", "/nonexistent/listing.json"])
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
