//! Property-based tests for sanitizing and command validation.

use lc_ir::Command;
use lc_parse::{parse_command, sanitize, tokenize};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Sanitizing and parsing never panic, whatever the input.
    #[test]
    fn parse_never_panics(input in ".{0,80}") {
        let line = sanitize(&input);
        let _ = parse_command(&line, &|_: &str| true);
    }

    /// Sanitized lines contain only lowercase letters, digits and spaces.
    #[test]
    fn sanitize_output_alphabet(input in ".{0,80}") {
        let line = sanitize(&input);
        prop_assert!(line
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b' '));
    }

    /// Sanitizing is idempotent.
    #[test]
    fn sanitize_is_idempotent(input in ".{0,80}") {
        let once = sanitize(&input);
        prop_assert_eq!(sanitize(&once), once.clone());
    }

    /// Accepted commands always have a legal word count.
    #[test]
    fn accepted_commands_have_one_to_three_words(input in "[a-z0-9 ]{0,40}") {
        if parse_command(&input, &|_: &str| true).is_ok() {
            let count = tokenize(&input).len();
            prop_assert!((1..=3).contains(&count));
        }
    }

    /// An all-digit first word is never accepted as an assignment target.
    #[test]
    fn literal_targets_rejected(n in any::<u32>(), rhs in "[a-z][a-z0-9]{0,6}") {
        let line = format!("{n} add {rhs}");
        prop_assert!(parse_command(&line, &|_: &str| true).is_err());
    }

    /// Any register-shaped target with a valid operator is accepted.
    #[test]
    fn register_targets_accepted(
        target in "[a-z][a-z0-9]{0,6}",
        op in prop::sample::select(vec!["add", "subtract", "multiply"]),
        rhs in "[a-z0-9]{1,6}",
    ) {
        let line = format!("{target} {op} {rhs}");
        let accepted = matches!(
            parse_command(&line, &|_: &str| false),
            Ok(Command::Assign { .. })
        );
        prop_assert!(accepted);
    }
}
