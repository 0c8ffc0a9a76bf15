//! Small walkthrough of a board: two items, a couple of status changes,
//! then the board summary and the first item's history.
//!
//! Built with the `demo` feature: `cargo run --features demo`.
//! Set `RUST_LOG=debug` to see every change as it is applied.

use anyhow::{Context, Result};
use boardr_core::{Board, BoardItem, SortField, SortOrder};
use chrono::Days;
use mockable::{Clock, DefaultClock};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    // A global subscriber may already be installed; keep that one
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let clock = DefaultClock;
    let today = clock.local().date_naive();
    let in_days = |days: u64| {
        today
            .checked_add_days(Days::new(days))
            .context("due date out of range")
    };

    let mut item = BoardItem::new("Registration doesn't work", in_days(2)?, &clock);
    item.advance_status(&clock);
    let another = BoardItem::new("Encrypt user data", in_days(10)?, &clock);

    let mut board = Board::default();
    let first = board.add_item(item);
    board.add_item(another);

    board.advance_all(&clock);

    // Rejected change: the title is too short and stays as it was
    if let Err(err) = board.get_item_mut(first)?.set_title("Bug", &clock) {
        tracing::info!(%err, "Title change rejected");
    }

    println!("{}", board.view_info());
    println!();
    println!("By due date, latest first:");
    for item in board.sorted_items(SortField::DueDate, SortOrder::Descending) {
        println!("{}", item);
    }
    println!();
    println!("History of{}:", board.get_item(first)?.view_info());
    println!("{}", board.get_item(first)?.view_history());

    Ok(())
}
