//! Natural join and left outer join of two tables.

use crate::{
    schema::JoinSchema,
    table::{Row, Table},
};

/// Whether `left` and `right` agree on every shared attribute.
///
/// With no shared attributes every pair matches.
fn rows_match(schema: &JoinSchema, left: &Row, right: &Row) -> bool {
    schema
        .shared()
        .iter()
        .all(|attribute| left[attribute.left] == right[attribute.right])
}

/// Left row extended with the right row's appended-attribute fields, in
/// appended order.
fn joined_row(schema: &JoinSchema, left: &Row, right: &Row) -> Row {
    let mut row = left.clone();
    row.extend(
        schema
            .appended()
            .iter()
            .map(|attribute| right[attribute.right].clone()),
    );
    row
}

/// Natural join: one output row per pair of rows agreeing on every
/// shared attribute.
///
/// Left rows without a partner produce no output. A left row with
/// several matching right rows produces one output row per match, with
/// no deduplication. With no shared attributes at all, every pair
/// matches and the result degenerates to the cartesian product
/// restricted to the output header.
pub fn natural_join(left: &Table, right: &Table, schema: &JoinSchema) -> Vec<Row> {
    let mut result = Vec::new();

    for left_row in left.rows() {
        for right_row in right.rows() {
            if rows_match(schema, left_row, right_row) {
                result.push(joined_row(schema, left_row, right_row));
            }
        }
    }

    log::debug!("natural join yielded {} rows", result.len());

    result
}

/// Left outer join: natural join, plus one dangling row per left row
/// without any join partner.
///
/// A dangling row consists of the left row followed by `placeholder`
/// once per appended attribute, so every output row has the width of
/// the output header. Matches are collected in a single pass over the
/// right table per left row; a left row never produces both a dangling
/// row and a matched row, and a left row with zero matches produces
/// exactly one dangling row.
///
/// A data field lexically equal to `placeholder` cannot be told apart
/// from a dangling marker in the output; callers should pick a token
/// that does not occur in their data.
pub fn left_outer_join(
    left: &Table,
    right: &Table,
    schema: &JoinSchema,
    placeholder: &str,
) -> Vec<Row> {
    let mut result = Vec::new();
    let mut dangling = 0usize;

    for left_row in left.rows() {
        let mut matched = false;
        for right_row in right.rows() {
            if rows_match(schema, left_row, right_row) {
                result.push(joined_row(schema, left_row, right_row));
                matched = true;
            }
        }

        if !matched {
            let mut row = left_row.clone();
            row.extend(schema.appended().iter().map(|_| placeholder.to_owned()));
            result.push(row);
            dangling += 1;
        }
    }

    log::debug!(
        "left outer join yielded {} rows ({dangling} dangling)",
        result.len()
    );

    result
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::{left_outer_join, natural_join};
    use crate::{
        operations::{cartesian_product, DANGLING_PLACEHOLDER},
        schema::JoinSchema,
        table::{Row, Table},
    };

    fn table(attributes: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            attributes.iter().map(|name| (*name).to_owned()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|field| (*field).to_owned()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|field| (*field).to_owned()).collect()
    }

    #[test]
    fn natural_join_on_shared_attribute() {
        let left = table(&["id", "name"], &[&["1", "alice"], &["2", "bob"]]);
        let right = table(&["id", "age"], &[&["1", "30"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        assert_eq!(
            natural_join(&left, &right, &schema),
            vec![row(&["1", "alice", "30"])]
        );
    }

    #[test]
    fn natural_join_keeps_every_match() {
        let left = table(&["id", "name"], &[&["1", "alice"]]);
        let right = table(&["id", "age"], &[&["1", "30"], &["1", "31"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        assert_eq!(
            natural_join(&left, &right, &schema),
            vec![row(&["1", "alice", "30"]), row(&["1", "alice", "31"])]
        );
    }

    #[test]
    fn natural_join_without_shared_attributes_degenerates() {
        let left = table(&["a"], &[&["1"], &["2"]]);
        let right = table(&["b"], &[&["x"], &["y"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        // with disjoint headers the output header is a's + b's attributes,
        // so the result must equal the cartesian product row for row
        assert_eq!(
            natural_join(&left, &right, &schema),
            cartesian_product(&left, &right)
        );
    }

    #[test]
    fn natural_join_output_fields_come_from_the_inputs() {
        let left = table(&["id", "name"], &[&["1", "alice"], &["2", "bob"]]);
        let right = table(&["id", "age"], &[&["1", "30"], &["2", "35"], &["3", "40"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        for output_row in natural_join(&left, &right, &schema) {
            // the left projection is a left row, no fabricated values
            let projection = &output_row[..left.arity()];
            assert!(left.rows().iter().any(|left_row| left_row == projection));

            // the appended fields come from a single right row
            let appended = &output_row[left.arity()..];
            assert!(right.rows().iter().any(|right_row| {
                schema
                    .appended()
                    .iter()
                    .zip(appended)
                    .all(|(attribute, field)| &right_row[attribute.right] == field)
            }));
        }
    }

    #[test]
    fn outer_join_covers_every_left_row() {
        let left = table(&["id", "name"], &[&["1", "alice"], &["2", "bob"]]);
        let right = table(&["id", "age"], &[&["1", "30"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        assert_eq!(
            left_outer_join(&left, &right, &schema, DANGLING_PLACEHOLDER),
            vec![row(&["1", "alice", "30"]), row(&["2", "bob", "NONE"])]
        );
    }

    #[test]
    fn outer_join_emits_one_dangling_row_despite_many_candidates() {
        // every right row fails to match, but "3" must dangle only once
        let left = table(&["id", "name"], &[&["3", "carol"]]);
        let right = table(&["id", "age"], &[&["1", "30"], &["2", "35"], &["4", "40"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        assert_eq!(
            left_outer_join(&left, &right, &schema, DANGLING_PLACEHOLDER),
            vec![row(&["3", "carol", "NONE"])]
        );
    }

    #[test]
    fn outer_join_never_mixes_matched_and_dangling() {
        // the match sits last in the right table, after two misses
        let left = table(&["id", "name"], &[&["1", "alice"]]);
        let right = table(&["id", "age"], &[&["2", "35"], &["3", "40"], &["1", "30"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        assert_eq!(
            left_outer_join(&left, &right, &schema, DANGLING_PLACEHOLDER),
            vec![row(&["1", "alice", "30"])]
        );
    }

    #[test]
    fn outer_join_pads_one_placeholder_per_appended_attribute() {
        let left = table(&["id", "name"], &[&["2", "bob"]]);
        let right = table(&["id", "age", "city"], &[&["1", "30", "rome"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        assert_eq!(
            left_outer_join(&left, &right, &schema, DANGLING_PLACEHOLDER),
            vec![row(&["2", "bob", "NONE", "NONE"])]
        );
    }

    #[test]
    fn outer_join_with_custom_placeholder() {
        let left = table(&["id"], &[&["2"]]);
        let right = table(&["id", "age"], &[&["1", "30"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        assert_eq!(
            left_outer_join(&left, &right, &schema, "-"),
            vec![row(&["2", "-"])]
        );
    }

    #[test]
    fn outer_join_matches_like_natural_join_for_matched_rows() {
        let left = table(&["id", "name"], &[&["1", "alice"]]);
        let right = table(&["id", "age"], &[&["1", "30"], &["1", "31"]]);
        let schema = JoinSchema::reconcile(&left, &right);

        assert_eq!(
            left_outer_join(&left, &right, &schema, DANGLING_PLACEHOLDER),
            natural_join(&left, &right, &schema)
        );
    }

    #[quickcheck]
    fn outer_join_coverage(left_rows: u8, right_rows: u8) -> bool {
        // left keys count up, right keys are the multiples of three;
        // coverage must hold no matter how the keys overlap
        let left = Table::new(
            vec!["id".to_owned(), "name".to_owned()],
            (0..usize::from(left_rows))
                .map(|i| vec![i.to_string(), format!("n{i}")])
                .collect(),
        )
        .unwrap();
        let right = Table::new(
            vec!["id".to_owned(), "age".to_owned()],
            (0..usize::from(right_rows))
                .map(|i| vec![(i * 3).to_string(), format!("a{i}")])
                .collect(),
        )
        .unwrap();
        let schema = JoinSchema::reconcile(&left, &right);

        let result = left_outer_join(&left, &right, &schema, DANGLING_PLACEHOLDER);

        left.rows().iter().all(|left_row| {
            result
                .iter()
                .any(|output_row| &output_row[..left.arity()] == left_row.as_slice())
        })
    }
}
