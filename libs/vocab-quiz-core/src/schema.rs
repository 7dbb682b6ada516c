//! Source/target column resolution for a list's schema.

use crate::types::Column;

/// Pick the column whose values are shown as prompts.
///
/// Order: the preferred name if the list still has it, then the primary
/// column, then the first column. Lists with fewer than two columns have
/// nothing to ask for and resolve to `None`.
pub fn resolve_source<'a>(columns: &'a [Column], preferred: Option<&str>) -> Option<&'a Column> {
    if columns.len() < 2 {
        return None;
    }

    preferred
        .and_then(|name| columns.iter().find(|c| c.name == name))
        .or_else(|| columns.iter().find(|c| c.is_primary))
        .or_else(|| columns.first())
}

/// Every column except the source, in defined order.
pub fn target_columns<'a>(columns: &'a [Column], source: &Column) -> Vec<&'a Column> {
    columns.iter().filter(|c| c.id != source.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn columns() -> Vec<Column> {
        vec![
            Column::new(2, "English"),
            Column::primary(1, "Term"),
            Column::new(3, "French"),
        ]
    }

    #[test]
    fn preferred_name_wins() {
        let cols = columns();
        let source = resolve_source(&cols, Some("French")).unwrap();
        assert_eq!(source.id, 3);
    }

    #[test]
    fn missing_preferred_name_falls_back_to_primary() {
        let cols = columns();
        let source = resolve_source(&cols, Some("Spanish")).unwrap();
        assert_eq!(source.name, "Term");
    }

    #[test]
    fn primary_is_found_regardless_of_order() {
        let mut cols = columns();
        for _ in 0..cols.len() {
            cols.rotate_left(1);
            assert_eq!(resolve_source(&cols, None).unwrap().id, 1);
        }
        cols.reverse();
        assert_eq!(resolve_source(&cols, None).unwrap().id, 1);
    }

    #[test]
    fn first_column_without_primary() {
        let cols = vec![Column::new(7, "German"), Column::new(8, "Italian")];
        assert_eq!(resolve_source(&cols, None).unwrap().id, 7);
    }

    #[test]
    fn single_column_has_no_source() {
        let cols = vec![Column::primary(1, "Term")];
        assert!(resolve_source(&cols, None).is_none());
        assert!(resolve_source(&[], Some("Term")).is_none());
    }

    #[test]
    fn targets_exclude_source() {
        let cols = columns();
        let source = resolve_source(&cols, None).unwrap();
        let names: Vec<&str> = target_columns(&cols, source)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["English", "French"]);
    }
}
