//! Filtered property search

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{build_property_search, Database, Limit, SearchCriteria};

use super::print_json;

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Only properties owned by this user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// City name or part of one
    #[arg(long)]
    pub city: Option<String>,

    /// Minimum price per night
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price per night
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum review rating (0-5)
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum properties to return
    #[arg(long, short = 'n', default_value_t = Limit::default())]
    pub limit: Limit,

    /// Print the query and its parameters instead of running it
    #[arg(long)]
    pub explain: bool,
}

impl SearchArgs {
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            owner_id: self.owner_id,
            city: self.city.clone().filter(|c| !c.trim().is_empty()),
            min_price_per_night: self.min_price,
            max_price_per_night: self.max_price,
            min_rating: self.min_rating,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.criteria().validate()?;
        Ok(())
    }
}

/// Render the query plan as JSON without touching the database.
pub fn explain(args: &SearchArgs) -> Result<String> {
    let plan = build_property_search(&args.criteria(), args.limit);
    serde_json::to_string_pretty(&plan).context("Failed to serialize query plan")
}

pub async fn run_search(args: SearchArgs, db: &Database) -> Result<()> {
    let listings = db
        .properties()
        .search(&args.criteria(), args.limit)
        .await
        .context("Property search failed")?;

    print_json(&listings)
}
