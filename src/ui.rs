// UI layer: the two text menus, a spinner while a request is in flight and
// printing of the result. Answers come from `dialoguer` on a terminal and
// from plain line reads otherwise, so the tool can be scripted through a
// pipe.

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::Transport;
use crate::config::StorefrontConfig;
use crate::decode::Report;
use crate::dispatch::{self, InvalidSelection, ProductChoice, Selection, TopChoice};
use crate::error::FetchError;

pub const TOP_MENU: &[&str] = &["Products", "Specific product"];
pub const PRODUCT_MENU: &[&str] = &["Availability", "Product data"];

/// Source of menu answers.
pub trait Prompt {
    /// Show `items` as a numbered menu and return the raw answer.
    fn ask(&mut self, items: &[&str]) -> Result<String>;
}

fn print_menu(items: &[&str]) {
    println!("Select what you want to retrieve:");
    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item);
    }
}

/// Answers typed on the controlling terminal, or read line by line from
/// stdin when it is not a terminal.
pub struct Console;

impl Prompt for Console {
    fn ask(&mut self, items: &[&str]) -> Result<String> {
        print_menu(items);
        if io::stdin().is_terminal() {
            let answer: String = Input::new().with_prompt(">").allow_empty(true).interact_text()?;
            Ok(answer)
        } else {
            LineReader(io::stdin().lock()).read()
        }
    }
}

/// Answers taken from any line-oriented reader.
pub struct LineReader<R>(pub R);

impl<R: BufRead> LineReader<R> {
    // Bytes that are not UTF-8 still make an answer; it just matches no
    // menu item.
    fn read(&mut self) -> Result<String> {
        let mut line = Vec::new();
        self.0.read_until(b'\n', &mut line)?;
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

impl<R: BufRead> Prompt for LineReader<R> {
    fn ask(&mut self, _items: &[&str]) -> Result<String> {
        self.read()
    }
}

/// Walk the two menus. Only reaches the product menu on "2".
pub fn choose(prompt: &mut dyn Prompt) -> Result<std::result::Result<Selection, InvalidSelection>> {
    let top = match TopChoice::parse(&prompt.ask(TOP_MENU)?) {
        Ok(top) => top,
        Err(invalid) => return Ok(Err(invalid)),
    };
    Ok(match top {
        TopChoice::Catalog => Ok(Selection::Catalog),
        TopChoice::Product => ProductChoice::parse(&prompt.ask(PRODUCT_MENU)?).map(Selection::from),
    })
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// A response was decoded (maybe only partially) and rendered.
    Rendered(Report),
    /// Nothing was requested.
    InvalidSelection(InvalidSelection),
    /// A request could not be completed.
    Failed(FetchError),
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Rendered(_) | Outcome::InvalidSelection(_) => ExitCode::SUCCESS,
            Outcome::Failed(_) => ExitCode::FAILURE,
        }
    }
}

/// Ask for a selection and run it.
pub fn main_menu<T: Transport + ?Sized>(api: &T, config: &StorefrontConfig, prompt: &mut dyn Prompt) -> Result<Outcome> {
    let selection = match choose(prompt)? {
        Ok(selection) => selection,
        Err(invalid) => return Ok(Outcome::InvalidSelection(invalid)),
    };

    // indicatif draws on stderr and hides itself when that is not a terminal.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Fetching...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = dispatch::run(api, config, selection);
    spinner.finish_and_clear();

    Ok(match result {
        Ok(report) => Outcome::Rendered(report),
        Err(err) => Outcome::Failed(err),
    })
}

/// Report on stdout, everything else on stderr.
pub fn print_outcome(outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Rendered(report) => {
            if let Some(diagnostic) = &report.diagnostic {
                eprintln!("{diagnostic}");
            }
            println!("{}", report.render()?);
        }
        Outcome::InvalidSelection(invalid) => println!("{invalid}"),
        Outcome::Failed(err) => println!("{err}"),
    }
    Ok(())
}
