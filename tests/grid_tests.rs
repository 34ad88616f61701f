use castq::catalog::{Actor, Category};
use castq::results_grid::{actor_table, category_table, ResultsGrid, TableWidths};

fn narrow_widths() -> TableWidths {
    TableWidths {
        actor_id: 8,
        first_name: 10,
        last_name: 10,
        category_id: 11,
        category_name: 8,
    }
}

#[test]
fn test_actor_table_exact_layout() {
    let actors = vec![
        Actor {
            actor_id: 2,
            first_name: "NICK".to_string(),
            last_name: "WAHLBERG".to_string(),
        },
        Actor {
            actor_id: 10,
            first_name: "CHRISTIAN".to_string(),
            last_name: "GABLE".to_string(),
        },
    ];

    let rendered = actor_table(&actors, &narrow_widths());
    let expected = "\
Your matches are:

|Actor ID|First Name|Last Name |
|2       |NICK      |WAHLBERG  |
|10      |CHRISTIAN |GABLE     |
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_category_table_exact_layout() {
    let categories = vec![
        Category {
            category_id: 1,
            name: "Action".to_string(),
        },
        Category {
            category_id: 2,
            name: "Animation".to_string(),
        },
    ];

    let rendered = category_table(&categories, &narrow_widths());
    let expected = "\
|Category ID|Category|
|1          |Action  |
|2          |Animation|
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_default_widths_match_observed_output() {
    let actors = vec![Actor {
        actor_id: 1,
        first_name: "PENELOPE".to_string(),
        last_name: "GUINESS".to_string(),
    }];

    let rendered = actor_table(&actors, &TableWidths::default());
    for line in rendered.lines().skip(2) {
        // | + 8 + | + 45 + | + 45 + |
        assert_eq!(line.len(), 102);
    }

    let categories = vec![Category {
        category_id: 5,
        name: "Comedy".to_string(),
    }];
    for line in category_table(&categories, &TableWidths::default()).lines() {
        // | + 11 + | + 25 + |
        assert_eq!(line.len(), 39);
    }
}

#[test]
fn test_empty_actor_set_renders_no_matches() {
    assert_eq!(
        actor_table(&[], &TableWidths::default()),
        "Could not find any matches.\n"
    );
}

#[test]
fn test_empty_category_listing_keeps_header() {
    let rendered = category_table(&[], &narrow_widths());
    assert_eq!(rendered, "|Category ID|Category|\n");
}

#[test]
fn test_grid_preserves_row_order() {
    let mut grid = ResultsGrid::new(vec!["N".to_string()], vec![3]);
    grid.add_row(vec!["b".to_string()]);
    grid.add_row(vec!["a".to_string()]);
    let rendered = grid.render();
    let b_pos = rendered.find("|b").unwrap();
    let a_pos = rendered.find("|a").unwrap();
    assert!(b_pos < a_pos);
}
