//! Property-based tests for menu-choice parsing, wildcard wrapping, and
//! grid alignment.

use proptest::prelude::*;

use castq::core::db::query::like_pattern;
use castq::menu::{parse_choice, Choice};
use castq::results_grid::ResultsGrid;

proptest! {
    #[test]
    fn parse_choice_never_panics(input in ".*") {
        let _ = parse_choice(&input);
    }

    #[test]
    fn parse_choice_keys_on_first_trimmed_character(input in "[ \t]{0,3}[0-9][a-z )]{0,8}") {
        let expected = match input.trim().chars().next().unwrap() {
            '1' => Choice::DisplayAllActors,
            '2' => Choice::SearchByName,
            '3' => Choice::SearchByCategory,
            '0' => Choice::Exit,
            _ => Choice::Invalid,
        };
        prop_assert_eq!(parse_choice(&input), expected);
    }

    #[test]
    fn non_menu_leading_characters_are_invalid(input in "[a-zA-Z4-9][a-z0-9]{0,8}") {
        prop_assert_eq!(parse_choice(&input), Choice::Invalid);
    }

    #[test]
    fn like_pattern_wraps_and_preserves_fragment(fragment in "[A-Za-z]{0,12}") {
        let pattern = like_pattern(&fragment);
        prop_assert!(pattern.starts_with('%'));
        prop_assert!(pattern.ends_with('%'));
        prop_assert_eq!(&pattern[1..pattern.len() - 1], fragment.as_str());
    }

    #[test]
    fn grid_lines_share_one_length_when_cells_fit(
        rows in prop::collection::vec(prop::collection::vec("[a-z]{0,6}", 3), 1..6)
    ) {
        let mut grid = ResultsGrid::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![8, 8, 8],
        );
        for row in rows {
            grid.add_row(row);
        }

        let rendered = grid.render();
        // | + three cells of 8 + a | after each
        for line in rendered.lines() {
            prop_assert_eq!(line.len(), 1 + 3 * 9);
        }
    }
}
