//! Quadratic in-place sorts over the live collection.
//!
//! All three take a key-extraction function and sort ascending by it.
//! Descending order is produced by sorting ascending and reversing the whole
//! slice, so records with equal keys come out in the reverse of their
//! ascending order.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{SortAlgorithm, SortDirection, SortKey, Student};

/// Shift-based insertion sort. Stable; linear on already sorted input.
pub fn insertion_sort<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    for i in 1..items.len() {
        let current = key(&items[i]);
        let mut j = i;
        while j > 0 && key(&items[j - 1]) > current {
            j -= 1;
        }
        items[j..=i].rotate_right(1);
    }
}

/// Selection sort. Swaps the minimum into place, so equal keys may move
/// past each other.
pub fn selection_sort<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let n = items.len();
    for i in 0..n {
        let mut min = i;
        for j in (i + 1)..n {
            if key(&items[j]) < key(&items[min]) {
                min = j;
            }
        }
        items.swap(i, min);
    }
}

/// Bubble sort. Always runs every pass.
pub fn bubble_sort<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let n = items.len();
    for i in 0..n {
        for j in 0..n.saturating_sub(i + 1) {
            if key(&items[j]) > key(&items[j + 1]) {
                items.swap(j, j + 1);
            }
        }
    }
}

pub fn sort<T, K, F>(items: &mut [T], algorithm: SortAlgorithm, key: F, direction: SortDirection)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    match algorithm {
        SortAlgorithm::Insertion => insertion_sort(items, key),
        SortAlgorithm::Selection => selection_sort(items, key),
        SortAlgorithm::Bubble => bubble_sort(items, key),
    }
    if direction == SortDirection::Descending {
        items.reverse();
    }
}

pub fn run(
    records: &mut [Student],
    by: SortKey,
    algorithm: SortAlgorithm,
    direction: SortDirection,
) -> CmdResult {
    log::debug!(
        "{} sort of {} records by {:?}, {:?}",
        algorithm,
        records.len(),
        by,
        direction
    );
    sort(records, algorithm, |s| by.extract(s), direction);

    let mut result = CmdResult::default().with_listed_records(records.to_vec());
    result.add_message(CmdMessage::info(format!(
        "Sorted {} records ({} sort)",
        records.len(),
        algorithm
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALGORITHMS: [SortAlgorithm; 3] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Bubble,
    ];

    fn named(names: &[&str]) -> Vec<Student> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Student::new(format!("{:012}", i), *n, "CS", "A"))
            .collect()
    }

    fn names(records: &[Student]) -> Vec<&str> {
        records.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn name_sort_folds_case() {
        for algorithm in ALGORITHMS {
            let mut records = named(&["Zed", "amy"]);
            run(
                &mut records,
                SortKey::Name,
                algorithm,
                SortDirection::Ascending,
            );
            assert_eq!(names(&records), vec!["amy", "Zed"], "{}", algorithm);
        }
    }

    #[test]
    fn every_algorithm_matches_std_sort_on_integers() {
        let input = vec![5, 3, 9, 1, 1, 8, 0, 7, 2, 6, 4, 3];
        let mut expected = input.clone();
        expected.sort();

        for algorithm in ALGORITHMS {
            let mut items = input.clone();
            sort(&mut items, algorithm, |x| *x, SortDirection::Ascending);
            assert_eq!(items, expected, "{}", algorithm);
        }
    }

    #[test]
    fn descending_is_reverse_of_ascending_for_unique_keys() {
        let base = named(&["Dewi", "andi", "Citra", "bayu", "Eka"]);
        for algorithm in ALGORITHMS {
            let mut asc = base.clone();
            sort(&mut asc, algorithm, |s| SortKey::Name.extract(s), SortDirection::Ascending);
            let mut desc = base.clone();
            sort(&mut desc, algorithm, |s| SortKey::Name.extract(s), SortDirection::Descending);

            asc.reverse();
            assert_eq!(asc, desc, "{}", algorithm);
            assert_eq!(names(&desc), vec!["Eka", "Dewi", "Citra", "bayu", "andi"]);
        }
    }

    #[test]
    fn descending_reverses_tie_order() {
        // Two records share the key "amy"; insertion sort keeps them in input
        // order ascending, so descending flips them.
        let mut records = named(&["amy", "Bob", "Amy"]);
        sort(
            &mut records,
            SortAlgorithm::Insertion,
            |s| SortKey::Name.extract(s),
            SortDirection::Descending,
        );
        assert_eq!(names(&records), vec!["Bob", "Amy", "amy"]);
    }

    #[test]
    fn insertion_sort_is_stable() {
        let mut records = named(&["b", "a", "B", "A"]);
        insertion_sort(&mut records, |s| SortKey::Name.extract(s));
        assert_eq!(names(&records), vec!["a", "A", "b", "B"]);
    }

    #[test]
    fn sorts_by_identifier_lexicographically() {
        let mut records = vec![
            Student::new("300000000000", "C", "", ""),
            Student::new("100000000000", "A", "", ""),
            Student::new("200000000000", "B", "", ""),
        ];
        bubble_sort(&mut records, |s| s.identifier().to_string());
        assert_eq!(names(&records), vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_and_single_are_untouched() {
        for algorithm in ALGORITHMS {
            let mut empty: Vec<Student> = Vec::new();
            sort(&mut empty, algorithm, |s| s.name().to_string(), SortDirection::Descending);
            assert!(empty.is_empty());

            let mut one = named(&["Solo"]);
            sort(&mut one, algorithm, |s| s.name().to_string(), SortDirection::Descending);
            assert_eq!(names(&one), vec!["Solo"]);
        }
    }

    #[test]
    fn run_lists_sorted_records() {
        let mut records = named(&["Zed", "amy", "Bob"]);
        let result = run(
            &mut records,
            SortKey::Name,
            SortAlgorithm::Selection,
            SortDirection::Descending,
        );
        assert_eq!(names(&result.listed_records), vec!["Zed", "Bob", "amy"]);
        assert_eq!(result.listed_records, records);
    }
}
