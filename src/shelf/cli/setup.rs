use clap::{Args, Parser, Subcommand};
use shelf::api::StatusFilter;
use shelf::model::BookStatus;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "Keep track of a small book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use (overrides shelf.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log file to append to (overrides shelf.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        isbn: String,
    },

    /// Issue a book by ISBN
    #[command(alias = "i")]
    Issue { isbn: String },

    /// Return a book by ISBN
    #[command(alias = "r")]
    Return { isbn: String },

    /// List books
    #[command(alias = "ls")]
    List(ListArgs),

    /// Search books by title
    #[command(alias = "s")]
    Search {
        /// Words of the title to look for
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Look up a book by exact ISBN
    Find { isbn: String },

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only books on the shelf
    #[arg(long, conflicts_with = "issued")]
    pub available: bool,

    /// Only books that are out
    #[arg(long)]
    pub issued: bool,
}

impl ListArgs {
    pub fn filter(&self) -> StatusFilter {
        match (self.available, self.issued) {
            (true, _) => StatusFilter::Only(BookStatus::Available),
            (_, true) => StatusFilter::Only(BookStatus::Issued),
            _ => StatusFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["shelf"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from(["shelf", "add", "Dune", "Frank Herbert", "1"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                author,
                isbn,
            }) => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
                assert_eq!(isbn, "1");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["shelf", "ls", "--catalog", "books.json", "--no-log"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("books.json")));
        assert!(cli.no_log);
    }

    #[test]
    fn list_filters_conflict() {
        assert!(Cli::try_parse_from(["shelf", "list", "--available", "--issued"]).is_err());

        let cli = Cli::try_parse_from(["shelf", "list", "--issued"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.filter(), StatusFilter::Only(BookStatus::Issued))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn search_takes_several_words() {
        let cli = Cli::try_parse_from(["shelf", "search", "war", "and"]).unwrap();
        match cli.command {
            Some(Commands::Search { term }) => assert_eq!(term, ["war", "and"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
