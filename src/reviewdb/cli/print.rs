use colored::Colorize;
use reviewdb::api::{CmdMessage, MessageLevel};
use reviewdb::error::Result;
use reviewdb::model::Review;
use unicode_width::UnicodeWidthStr;

const SUBJECT_WIDTH: usize = 25;
const RATING_WIDTH: usize = 10;
const REVIEWER_WIDTH: usize = 15;
const RULE_WIDTH: usize = 50;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Prints reviews as a fixed-width table. Prints nothing for an empty slice;
/// the command's messages cover that case.
pub(super) fn print_reviews(reviews: &[Review]) {
    if reviews.is_empty() {
        return;
    }
    println!("{}", format_row("TikTok Trend", "Rating", "Reviewer").bold());
    println!("{}", "-".repeat(RULE_WIDTH));
    for review in reviews {
        println!(
            "{}",
            format_row(&review.subject, &review.rating.to_string(), &review.reviewer)
        );
    }
}

pub(super) fn print_matches(reviews: &[Review]) {
    if reviews.is_empty() {
        return;
    }
    println!("{}", "Match(es) found:".green());
    for review in reviews {
        println!("{}", format_match(review));
    }
}

pub(super) fn print_json(reviews: &[Review]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reviews)?);
    Ok(())
}

fn format_row(subject: &str, rating: &str, reviewer: &str) -> String {
    format!(
        "{}{}{}",
        pad_to_width(subject, SUBJECT_WIDTH),
        pad_to_width(rating, RATING_WIDTH),
        pad_to_width(reviewer, REVIEWER_WIDTH)
    )
}

fn format_match(review: &Review) -> String {
    format!(
        "Trend: {}, Rating: {}, Reviewed by: {}",
        review.subject, review.rating, review.reviewer
    )
}

/// Left-aligns `s` in a column of `width` display cells. Longer text is not cut.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_line_up_in_columns() {
        let row = format_row("Renegade", "6", "eve");
        assert_eq!(row.len(), SUBJECT_WIDTH + RATING_WIDTH + REVIEWER_WIDTH);
        assert!(row.starts_with("Renegade "));
        assert_eq!(&row[SUBJECT_WIDTH..SUBJECT_WIDTH + 1], "6");
    }

    #[test]
    fn long_text_overflows_instead_of_truncating() {
        let long = "A Very Long Trend Name That Keeps Going";
        assert_eq!(pad_to_width(long, SUBJECT_WIDTH), long);
    }

    #[test]
    fn padding_counts_display_width() {
        // Each of these takes two terminal cells.
        let padded = pad_to_width("舞蹈", 6);
        assert_eq!(padded, "舞蹈  ");
    }

    #[test]
    fn match_line_format() {
        let review = Review::new("Dance Challenge", 8, "bob");
        assert_eq!(
            format_match(&review),
            "Trend: Dance Challenge, Rating: 8, Reviewed by: bob"
        );
    }
}
