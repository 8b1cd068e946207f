use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reviewdb", bin_name = "reviewdb", version)]
#[command(about = "Keep a small database of TikTok trend and influencer reviews", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Review file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all reviews in the order they were added
    #[command(alias = "ls")]
    List {
        /// Print reviews as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find reviews of a trend or influencer (whole name, any case)
    Search {
        /// Name to look up; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Add a review and save it
    #[command(alias = "n")]
    Add {
        /// Trend or influencer name
        subject: String,

        /// Rating from 1 to 10
        rating: i32,

        /// Reviewer name (one word)
        reviewer: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["reviewdb"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn parses_add_with_multi_word_subject() {
        let cli =
            Cli::try_parse_from(["reviewdb", "add", "Ice Bucket Challenge", "9", "alice"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                subject,
                rating,
                reviewer,
            }) => {
                assert_eq!(subject, "Ice Bucket Challenge");
                assert_eq!(rating, 9);
                assert_eq!(reviewer, "alice");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_rating() {
        assert!(Cli::try_parse_from(["reviewdb", "add", "Trend", "abc", "bob"]).is_err());
    }

    #[test]
    fn search_collects_words_and_global_file() {
        let cli = Cli::try_parse_from(["reviewdb", "search", "dance", "challenge", "--file", "x.txt"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.txt")));
        match cli.command {
            Some(Commands::Search { name }) => assert_eq!(name, ["dance", "challenge"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
