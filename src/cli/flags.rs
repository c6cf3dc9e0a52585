use clap::Parser;

use crate::pass::{CharacterClass, ClassSet};

/// Longest password client mode will build.
pub const MAX_LENGTH: u64 = 4096;

/// Generate passwords from selected character sets.
///
/// Run without arguments to open the interactive widget.
#[derive(Parser, Debug, Default)]
#[command(name = "passgauge", author, version, about)]
pub struct CliFlags {
    /// Characters per password, 1-4096 (raised to the number of selected sets)
    #[arg(short, long, env = "PASSGAUGE_LENGTH", value_parser = clap::value_parser!(u64).range(1..=MAX_LENGTH))]
    pub length: Option<u64>,

    /// How many passwords to generate
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub number: Option<u64>,

    /// Include uppercase letters (A-Z)
    #[arg(short = 'A', long)]
    pub upper: bool,

    /// Include lowercase letters (a-z)
    #[arg(short = 'a', long)]
    pub lower: bool,

    /// Include digits (0-9)
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short, long)]
    pub symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short, long)]
    pub board: bool,

    /// Suppress all output except passwords
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Selected sets. No selection means every set.
    pub fn classes(&self) -> ClassSet {
        let picked: ClassSet = [
            (self.upper, CharacterClass::Uppercase),
            (self.lower, CharacterClass::Lowercase),
            (self.digits, CharacterClass::Digit),
            (self.symbols, CharacterClass::Symbol),
        ]
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
        .collect();

        if picked.is_empty() {
            ClassSet::all()
        } else {
            picked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passgauge").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_class_flags_selects_all() {
        assert_eq!(parse(&["-l", "12"]).classes(), ClassSet::all());
    }

    #[test]
    fn class_flags_restrict_selection() {
        let flags = parse(&["-a", "-d"]);
        let classes = flags.classes();
        assert_eq!(classes.len(), 2);
        assert!(classes.contains(CharacterClass::Lowercase));
        assert!(classes.contains(CharacterClass::Digit));
    }

    #[test]
    fn long_flags() {
        let flags = parse(&["--length", "16", "--number", "3", "--upper", "--symbols", "--board"]);
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert!(flags.board);
        assert_eq!(flags.classes().len(), 2);
    }

    #[test]
    fn zero_length_rejected() {
        assert!(CliFlags::try_parse_from(["passgauge", "-l", "0"]).is_err());
        assert!(CliFlags::try_parse_from(["passgauge", "-n", "0"]).is_err());
    }

    #[test]
    fn length_above_limit_rejected() {
        assert_eq!(parse(&["-l", "4096"]).length, Some(MAX_LENGTH));
        assert!(CliFlags::try_parse_from(["passgauge", "-l", "4097"]).is_err());
        assert!(CliFlags::try_parse_from(["passgauge", "-l", "10000000000"]).is_err());
        assert!(CliFlags::try_parse_from(["passgauge", "-l", "18446744073709551615"]).is_err());
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(CliFlags::try_parse_from(["passgauge", "--hex"]).is_err());
    }
}
