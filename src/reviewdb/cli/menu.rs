//! The interactive menu.
//!
//! Reads one line per answer. Invalid answers re-prompt; end of input at any
//! prompt leaves the menu as if Exit had been chosen. Numeric answers are
//! read from their leading digits, so `1abc` picks option 1.

use super::commands::{handle_search, AppContext};
use super::print::{print_messages, print_reviews};
use colored::Colorize;
use reviewdb::api::CmdMessage;
use reviewdb::error::Result;
use reviewdb::model::{is_single_word, validate_rating};
use reviewdb::store::line::parse_leading_int;
use reviewdb::store::read_lossy_line;
use std::io::{self, BufRead, Write};

enum Choice {
    ViewAll,
    Search,
    Add,
    Exit,
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with(ctx, &mut input)
}

fn run_with<R: BufRead>(ctx: &mut AppContext, input: &mut R) -> Result<()> {
    loop {
        print_menu()?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        let choice = match parse_choice(&line) {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                println!("Invalid choice. Please choose 1-4.");
                continue;
            }
            Err(()) => {
                println!("Invalid input. Please enter a number.");
                continue;
            }
        };

        let keep_going = match choice {
            Choice::ViewAll => {
                let result = ctx.api.list_all()?;
                print_reviews(&result.listed_reviews);
                print_messages(&result.messages);
                true
            }
            Choice::Search => search(ctx, input)?,
            Choice::Add => add(ctx, input)?,
            Choice::Exit => {
                println!("Exiting program. Goodbye!");
                false
            }
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn print_menu() -> Result<()> {
    println!();
    println!("{}", "Welcome to the TikTok Review Database".bold());
    println!("1. View All Reviews");
    println!("2. Search for a Trend/Influencer");
    println!("3. Add a New Review");
    println!("4. Exit");
    prompt("Enter your choice: ")
}

fn search<R: BufRead>(ctx: &AppContext, input: &mut R) -> Result<bool> {
    if ctx.api.records().is_empty() {
        print_messages(&[CmdMessage::info("No reviews available to search.")]);
        return Ok(true);
    }

    prompt("Enter trend/influencer name to search: ")?;
    let Some(name) = read_line(input)? else {
        return Ok(false);
    };
    handle_search(ctx, name)?;
    Ok(true)
}

fn add<R: BufRead>(ctx: &mut AppContext, input: &mut R) -> Result<bool> {
    if ctx.api.records().is_full() {
        print_messages(&[CmdMessage::warning(
            "Cannot add more reviews. Maximum reached.",
        )]);
        return Ok(true);
    }

    prompt("Enter trend/influencer name: ")?;
    let subject = loop {
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        if !line.trim().is_empty() {
            break line;
        }
        prompt("Trend name cannot be empty. Please enter a name: ")?;
    };

    prompt("Enter rating (1-10): ")?;
    let rating = loop {
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        if let Some(rating) = parse_rating(&line) {
            break rating;
        }
        prompt("Invalid rating. Please enter a number between 1 and 10: ")?;
    };

    prompt("Enter reviewer name (one word is best): ")?;
    let reviewer = loop {
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        let name = line.trim();
        if is_single_word(name) {
            break name.to_string();
        }
        prompt("Reviewer name must be a single word. Please try again: ")?;
    };

    match ctx.api.add(subject, rating, reviewer) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => {
            log::warn!("Append failed: {}", e);
            print_messages(&[CmdMessage::error(format!(
                "Error: Could not save review: {}",
                e
            ))]);
        }
    }
    Ok(true)
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

/// Next line without its terminator, or `None` at end of input.
/// Bytes that are not UTF-8 are replaced, never rejected.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    Ok(read_lossy_line(input)?)
}

/// `Err` when the answer is not a number, `Ok(None)` when it is out of range.
fn parse_choice(line: &str) -> std::result::Result<Option<Choice>, ()> {
    let number = parse_leading_int(line).ok_or(())?;
    Ok(match number {
        1 => Some(Choice::ViewAll),
        2 => Some(Choice::Search),
        3 => Some(Choice::Add),
        4 => Some(Choice::Exit),
        _ => None,
    })
}

fn parse_rating(line: &str) -> Option<i32> {
    parse_leading_int(line).and_then(|rating| validate_rating(rating).ok())
}
