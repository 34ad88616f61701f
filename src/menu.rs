//! Menu Controller
//!
//! Reads one menu choice per iteration, dispatches to a catalog
//! operation, renders its rows, and loops until the exit choice. Input
//! and output streams are injected so the whole controller runs against
//! scripted input in tests, and the store is reached through the
//! `CatalogStore` trait for the same reason. Store failures propagate out
//! of `run`; the controller never terminates the process itself.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalog::CatalogStore;
use crate::core::{CastqError, Result};
use crate::results_grid::{self, TableWidths};

const MAIN_MENU: &str = "What would you want to do?
    1) Display all actors
    2) Search by name
    3) Search by category
    0) Exit program
";
const FIRST_NAME_PROMPT: &str = "What is the first name of the actor you're looking for?";
const LAST_NAME_PROMPT: &str = "What is the last name of the actor you're looking for?";
const CATEGORY_PROMPT: &str = "Which number category do you want to look through?";
const INVALID_OPTION: &str = "That is not a valid menu option, please try again.";
const INVALID_CATEGORY: &str = "That is not a valid category number, please try again.";
const FAREWELL: &str = "EXITING PROGRAM...";

/// Controller states. `AwaitingNameInput` and `AwaitingCategoryInput`
/// gather the extra input their operation needs before returning to
/// `MainMenu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    AwaitingNameInput,
    AwaitingCategoryInput,
    Exit,
}

/// A parsed main-menu choice.
#[derive(Debug, PartialEq, Eq)]
pub enum Choice {
    DisplayAllActors,
    SearchByName,
    SearchByCategory,
    Exit,
    Invalid,
}

/// Dispatches on the first character of the trimmed input line. An empty
/// line is an invalid choice, not a fault.
pub fn parse_choice(input: &str) -> Choice {
    match input.trim().chars().next() {
        Some('1') => Choice::DisplayAllActors,
        Some('2') => Choice::SearchByName,
        Some('3') => Choice::SearchByCategory,
        Some('0') => Choice::Exit,
        _ => Choice::Invalid,
    }
}

pub struct Menu<R, W, S> {
    input: R,
    output: W,
    store: S,
    widths: TableWidths,
    state: MenuState,
}

impl<R: BufRead, W: Write, S: CatalogStore> Menu<R, W, S> {
    pub fn new(input: R, output: W, store: S, widths: TableWidths) -> Self {
        Menu {
            input,
            output,
            store,
            widths,
            state: MenuState::MainMenu,
        }
    }

    /// Runs the menu loop until the exit choice, end of input, or a fatal
    /// store error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.state {
                MenuState::MainMenu => self.main_menu()?,
                MenuState::AwaitingNameInput => self.search_by_name()?,
                MenuState::AwaitingCategoryInput => self.browse_category()?,
                MenuState::Exit => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    return Ok(());
                }
            }
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", MAIN_MENU)?;
        let Some(line) = self.read_line()? else {
            self.state = MenuState::Exit;
            return Ok(());
        };
        let choice = parse_choice(&line);
        debug!(?choice, "menu dispatch");
        match choice {
            Choice::DisplayAllActors => {
                let actors = self.store.list_actors()?;
                write!(self.output, "{}", results_grid::actor_table(&actors, &self.widths))?;
            }
            Choice::SearchByName => self.state = MenuState::AwaitingNameInput,
            Choice::SearchByCategory => {
                let categories = self.store.list_categories()?;
                write!(
                    self.output,
                    "{}",
                    results_grid::category_table(&categories, &self.widths)
                )?;
                self.state = MenuState::AwaitingCategoryInput;
            }
            Choice::Exit => self.state = MenuState::Exit,
            Choice::Invalid => writeln!(self.output, "{}", INVALID_OPTION)?,
        }
        Ok(())
    }

    fn search_by_name(&mut self) -> Result<()> {
        self.state = MenuState::MainMenu;
        writeln!(self.output, "{}", FIRST_NAME_PROMPT)?;
        let Some(first_name) = self.read_line()? else {
            self.state = MenuState::Exit;
            return Ok(());
        };
        writeln!(self.output, "{}", LAST_NAME_PROMPT)?;
        let Some(last_name) = self.read_line()? else {
            self.state = MenuState::Exit;
            return Ok(());
        };
        let actors = self.store.search_by_name(&first_name, &last_name)?;
        write!(self.output, "{}", results_grid::actor_table(&actors, &self.widths))?;
        Ok(())
    }

    /// The category listing has already been rendered; prompt for a
    /// category number until one parses, then show its actors.
    fn browse_category(&mut self) -> Result<()> {
        self.state = MenuState::MainMenu;
        loop {
            writeln!(self.output, "{}", CATEGORY_PROMPT)?;
            let Some(line) = self.read_line()? else {
                self.state = MenuState::Exit;
                return Ok(());
            };
            match line.parse::<u16>() {
                Ok(category_id) => {
                    let actors = self.store.actors_in_category(category_id)?;
                    write!(self.output, "{}", results_grid::actor_table(&actors, &self.widths))?;
                    return Ok(());
                }
                Err(_) => writeln!(self.output, "{}", INVALID_CATEGORY)?,
            }
        }
    }

    /// Reads one trimmed line; `None` means end of input, which every
    /// caller treats as the exit choice.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let bytes = self
            .input
            .read_line(&mut buf)
            .map_err(|e| CastqError::Input(format!("failed to read input: {}", e)))?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
