//! Guest reservation listing

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{Database, Limit};

use super::print_json;

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    pub guest_id: i32,

    /// Maximum reservations to return
    #[arg(long, short = 'n', default_value_t = Limit::default())]
    pub limit: Limit,
}

pub async fn run_reservations(args: ReservationsArgs, db: &Database) -> Result<()> {
    let reservations = db
        .reservations()
        .list_for_guest(args.guest_id, args.limit)
        .await
        .context("Failed to list reservations")?;

    print_json(&reservations)
}
