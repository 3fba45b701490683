use clap::{ArgAction, Args, Parser, Subcommand};
use roster::validation::Field;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Contact book with a validated form and local storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Directory holding the record store
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill the contact form and save a new entry
    #[command(alias = "new", display_order = 1)]
    Add(FieldArgs),

    /// Show saved entries
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Edit an entry, changing only the fields given
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Row number (as shown by list) or record id
        selector: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete an entry after typing "delete" to confirm
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Row number (as shown by list) or record id
        selector: String,

        /// Confirmation text; prompted for when omitted
        #[arg(long, value_name = "TEXT")]
        confirm: Option<String>,
    },

    /// List countries, a country's states, or a state's cities
    #[command(display_order = 10)]
    Locations {
        country: Option<String>,
        state: Option<String>,
    },

    /// Check a single field value
    #[command(display_order = 11)]
    Validate { field: String, value: String },

    /// Show the current weather for a town
    #[command(display_order = 12)]
    Weather { town: String },

    /// Show the effective configuration
    #[command(display_order = 20)]
    Config,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    pub dob: Option<String>,

    /// Derived from --dob when omitted
    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub zip: Option<String>,

    #[arg(long)]
    pub town: Option<String>,
}

impl FieldArgs {
    /// The given fields, parents before children so cascading selects accept them.
    pub fn provided(&self) -> Vec<(Field, &str)> {
        [
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Email, &self.email),
            (Field::Dob, &self.dob),
            (Field::Age, &self.age),
            (Field::Country, &self.country),
            (Field::State, &self.state),
            (Field::City, &self.city),
            (Field::Zip, &self.zip),
            (Field::Town, &self.town),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("roster").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_list() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv", "list"]).verbose, 2);
        assert_eq!(parse(&["list"]).verbose, 0);
    }

    #[test]
    fn add_collects_fields_in_cascade_order() {
        let cli = parse(&[
            "add", "--city", "Pune", "--state", "Maharashtra", "--country", "India", "--name", "Ann",
        ]);
        let Some(Commands::Add(fields)) = cli.command else {
            panic!("expected add");
        };
        let order: Vec<_> = fields.provided().into_iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::Name, Field::Country, Field::State, Field::City]);
    }

    #[test]
    fn edit_takes_a_selector_and_overrides() {
        let cli = parse(&["edit", "2", "--zip", "54321", "--data-dir", "/tmp/x"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        let Some(Commands::Edit { selector, fields }) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(selector, "2");
        assert_eq!(fields.provided(), vec![(Field::Zip, "54321")]);
    }

    #[test]
    fn delete_alias_and_confirm_flag() {
        let cli = parse(&["rm", "1", "--confirm", "DELETE"]);
        let Some(Commands::Delete { selector, confirm }) = cli.command else {
            panic!("expected delete");
        };
        assert_eq!(selector, "1");
        assert_eq!(confirm.as_deref(), Some("DELETE"));
    }

    #[test]
    fn locations_takes_up_to_two_levels() {
        let cli = parse(&["locations", "USA", "California"]);
        let Some(Commands::Locations { country, state }) = cli.command else {
            panic!("expected locations");
        };
        assert_eq!(country.as_deref(), Some("USA"));
        assert_eq!(state.as_deref(), Some("California"));
    }
}
