//! Interactive menu loop.
//!
//! The store is owned by the caller and lent to each action handler. Domain
//! errors are shown to the user and the loop carries on; storage and terminal
//! failures end the session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;

use shoestock_core::DomainError;
use shoestock_infra::{LoadReport, RecordRepository, RepositoryError, Store, StoreError};
use shoestock_inventory::{NewShoe, parse_count};

use crate::console::Console;
use crate::menu::{MenuOption, render_menu};
use crate::render;

const INVALID_SELECTION: &str = "You have entered an incorrect value.";

#[derive(Debug, Error)]
pub enum SessionError {
    /// Recovered at the loop boundary.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),

    #[error("terminal I/O failed")]
    Terminal(#[from] io::Error),
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(e) => SessionError::Domain(e),
            StoreError::Repository(e) => SessionError::Storage(e),
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Units added when the restock prompt is left blank.
    pub default_restock: u64,
}

/// Tell the user what happened while loading.
pub fn report_load<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    report: &LoadReport,
    path: &Path,
) -> io::Result<()> {
    if report.source_missing {
        console.say(format!(
            "No inventory file found at {}; starting with an empty inventory.",
            path.display()
        ))?;
    }
    for issue in &report.issues {
        console.say(render::skipped_line(issue))?;
    }
    Ok(())
}

/// Run until the user picks Exit or input ends.
pub fn run<S, R, W>(
    store: &mut Store<S>,
    console: &mut Console<R, W>,
    config: SessionConfig,
) -> Result<(), SessionError>
where
    S: RecordRepository,
    R: BufRead,
    W: Write,
{
    loop {
        console.say(render_menu())?;
        let Some(option) = await_selection(console)? else {
            break;
        };
        tracing::debug!(?option, "menu selection");

        let outcome = dispatch(option, store, console, config);
        let flow = match outcome {
            Ok(flow) => flow,
            Err(SessionError::Domain(err)) => {
                tracing::debug!(error = %err, "action rejected");
                console.say(format!("Error: {err}"))?;
                Flow::Continue
            }
            Err(fatal) => return Err(fatal),
        };
        if flow == Flow::Exit {
            break;
        }
    }
    console.say("Goodbye.")?;
    Ok(())
}

/// Re-prompt until a valid option is entered. `None` at end of input.
fn await_selection<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<MenuOption>> {
    loop {
        let Some(raw) = console.prompt("\nEnter the option number you would like to perform: ")?
        else {
            return Ok(None);
        };
        match MenuOption::from_selection(&raw) {
            Some(option) => return Ok(Some(option)),
            None => console.say(INVALID_SELECTION)?,
        }
    }
}

fn dispatch<S, R, W>(
    option: MenuOption,
    store: &mut Store<S>,
    console: &mut Console<R, W>,
    config: SessionConfig,
) -> Result<Flow, SessionError>
where
    S: RecordRepository,
    R: BufRead,
    W: Write,
{
    match option {
        MenuOption::ViewAll => view_all(store, console),
        MenuOption::AddShoe => add_shoe(store, console),
        MenuOption::Restock => restock_lowest(store, console, config),
        MenuOption::ValuePerItem => value_per_item(store, console),
        MenuOption::Search => search(store, console),
        MenuOption::HighestQuantity => highest_quantity(store, console),
        MenuOption::Exit => Ok(Flow::Exit),
    }
}

fn view_all<S, R, W>(store: &Store<S>, console: &mut Console<R, W>) -> Result<Flow, SessionError>
where
    S: RecordRepository,
    R: BufRead,
    W: Write,
{
    if store.list().is_empty() {
        console.say("The inventory is empty.")?;
    } else {
        console.say(render::records_table(store.list()))?;
    }
    Ok(Flow::Continue)
}

fn add_shoe<S, R, W>(store: &mut Store<S>, console: &mut Console<R, W>) -> Result<Flow, SessionError>
where
    S: RecordRepository,
    R: BufRead,
    W: Write,
{
    let Some(country) = console.prompt("\nPlease input the country: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(code) = console.prompt("\nPlease input the unique shoe code: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(product) = console.prompt("\nPlease input the product name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(cost) = console.prompt("\nPlease input the cost: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(quantity) = console.prompt("\nPlease input the quantity: ")? else {
        return Ok(Flow::Exit);
    };

    let record = store.add(&NewShoe {
        country,
        code,
        product,
        cost,
        quantity,
    })?;
    console.say(format!("Added shoe {}.", record.code()))?;
    console.say(render::card(&record))?;
    Ok(Flow::Continue)
}

fn restock_lowest<S, R, W>(
    store: &mut Store<S>,
    console: &mut Console<R, W>,
    config: SessionConfig,
) -> Result<Flow, SessionError>
where
    S: RecordRepository,
    R: BufRead,
    W: Write,
{
    let lowest = store.find_lowest_quantity()?;
    let code = lowest.code().clone();
    console.say("Shoe with lowest quantity:")?;
    console.say(render::card(lowest))?;

    let label = format!(
        "How many units would you like to add? [default {}]: ",
        config.default_restock
    );
    let Some(raw) = console.prompt(&label)? else {
        return Ok(Flow::Exit);
    };
    let amount = if raw.trim().is_empty() {
        config.default_restock
    } else {
        parse_count("amount", &raw)?
    };

    let record = store.restock(&code, amount)?;
    console.say(format!("The new quantity is now {}.", record.quantity()))?;
    Ok(Flow::Continue)
}

fn value_per_item<S, R, W>(
    store: &Store<S>,
    console: &mut Console<R, W>,
) -> Result<Flow, SessionError>
where
    S: RecordRepository,
    R: BufRead,
    W: Write,
{
    if store.list().is_empty() {
        console.say("The inventory is empty.")?;
        return Ok(Flow::Continue);
    }
    console.say(render::values_table(store.value_per_item()))?;
    console.say(render::valuation_summary(&store.valuation()))?;
    Ok(Flow::Continue)
}

fn search<S, R, W>(store: &Store<S>, console: &mut Console<R, W>) -> Result<Flow, SessionError>
where
    S: RecordRepository,
    R: BufRead,
    W: Write,
{
    let Some(code) = console.prompt("Enter the shoe code you want to search: ")? else {
        return Ok(Flow::Exit);
    };
    let record = store.find_by_code(&code)?;
    console.say(render::card(record))?;
    Ok(Flow::Continue)
}

fn highest_quantity<S, R, W>(
    store: &Store<S>,
    console: &mut Console<R, W>,
) -> Result<Flow, SessionError>
where
    S: RecordRepository,
    R: BufRead,
    W: Write,
{
    let highest = store.find_highest_quantity()?;
    console.say("Shoe with highest quantity for sale:")?;
    console.say(render::card(highest))?;
    Ok(Flow::Continue)
}
