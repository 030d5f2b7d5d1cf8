use anyhow::Result;
use clap::{ArgAction, Parser};
use log::debug;

pub mod charset;
pub mod error;
pub mod generator;

pub use charset::{CharacterClass, CharacterSet};
pub use error::GenerateError;
pub use generator::{generate, GenerationConfig, Password, PasswordGenerator};

/// pwdgen: generate a password with at least one
/// letter, one digit, and one punctuation character
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {
    /// minimum password length
    #[clap(long, alias = "min_length", default_value_t = 10)]
    min_length: usize,

    /// maximum password length.
    /// the length is drawn at random
    /// between min and max
    #[clap(long, alias = "max_length", default_value_t = 76)]
    max_length: usize,

    /// characters to leave out
    /// of the password
    ///
    /// -e 'lI1O0'
    #[clap(short, long, allow_hyphen_values = true)]
    exclude: Option<String>,

    /// never repeat a character
    /// (pass false to allow repeats)
    #[clap(long, default_value_t = true, action = ArgAction::Set)]
    unique: bool,

    /// excluded characters can't stand in
    /// for the mandatory letter, digit, or
    /// punctuation character either
    #[clap(long)]
    strict: bool,

    /// silent mode
    #[clap(long)]
    pub silent: bool,

    /// debug
    #[clap(long)]
    pub debug: bool,
}

impl From<&Args> for GenerationConfig {
    fn from(args: &Args) -> Self {
        let config = GenerationConfig::new(args.min_length, args.max_length)
            .unique(args.unique)
            .strict_exclusions(args.strict);
        match &args.exclude {
            Some(chars) => config.excluding(chars),
            None => config,
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let config = GenerationConfig::from(&args);
    debug!("{:?}", config);
    let password = generate(&config)?;
    println!("Password: {password}");
    Ok(())
}
