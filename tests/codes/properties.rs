//! Property-based tests for the formatting-code transformer.
//!
//! These verify the structural guarantees that must hold for any input:
//!
//! 1. Emitted markup is always balanced, even for pathological toggle
//!    sequences.
//! 2. Control codes never survive into the output.
//! 3. Plain characters pass through untouched.

use chatmark::extensions::codes::convert_codes;
use proptest::prelude::*;

const CONTROL_CODES: [char; 4] = ['\u{02}', '\u{1D}', '\u{1F}', '\u{0F}'];

/// Buffer text over the control codes plus plain characters that are not
/// themselves Markdown delimiters, so every delimiter in the output is
/// attributable to the transformer.
fn buffer_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('\u{02}'),
            Just('\u{1D}'),
            Just('\u{1F}'),
            Just('\u{0F}'),
            proptest::char::range('a', 'z'),
            Just(' '),
            Just('\n'),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn transform(source: &str) -> String {
    let lines: Vec<String> = source.split('\n').map(str::to_string).collect();
    convert_codes(&lines).join("\n")
}

proptest! {
    #[test]
    fn output_markup_is_balanced(source in buffer_text()) {
        let output = transform(&source);

        // Open and close tokens are textually identical, so balanced
        // means an even number of delimiter emissions. Bold is two
        // underscores per emission, hence the modulus of four.
        prop_assert_eq!(output.matches('*').count() % 2, 0);
        prop_assert_eq!(output.matches('~').count() % 2, 0);
        prop_assert_eq!(output.matches('_').count() % 4, 0);
    }

    #[test]
    fn control_codes_never_survive(source in buffer_text()) {
        let output = transform(&source);

        for code in CONTROL_CODES {
            prop_assert!(!output.contains(code));
        }
    }

    #[test]
    fn plain_characters_pass_through(source in buffer_text()) {
        let output = transform(&source);

        let plain: String = source
            .chars()
            .filter(|c| !CONTROL_CODES.contains(c))
            .collect();
        let output_plain: String = output
            .chars()
            .filter(|c| !matches!(c, '*' | '_' | '~'))
            .collect();

        prop_assert_eq!(output_plain, plain);
    }

    #[test]
    fn transform_is_idempotent_on_its_own_output(source in buffer_text()) {
        let once = transform(&source);
        let twice = transform(&once);

        prop_assert_eq!(once, twice);
    }
}
