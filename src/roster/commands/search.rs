use crate::commands::{CmdMessage, CmdResult};
use crate::model::Student;
use std::cmp::Ordering;

use super::sort::insertion_sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMethod {
    #[default]
    Linear,
    Binary,
}

/// First record with `identifier`, in current collection order.
pub fn linear_search<'a>(records: &'a [Student], identifier: &str) -> Option<&'a Student> {
    records.iter().find(|s| s.identifier() == identifier)
}

/// Midpoint-halving search by identifier.
///
/// `records` must already be sorted ascending by identifier. On unsorted input
/// the result is unspecified (it may miss a present record) but never panics.
pub fn binary_search<'a>(records: &'a [Student], identifier: &str) -> Option<&'a Student> {
    let mut low = 0;
    let mut high = records.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match records[mid].identifier().cmp(identifier) {
            Ordering::Equal => return Some(&records[mid]),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Put the collection in identifier order, as binary search requires.
pub fn sort_for_binary_search(records: &mut [Student]) {
    insertion_sort(records, |s| s.identifier().to_string());
}

/// Binary search re-sorts `records` by identifier first; the new order stays.
pub fn run(records: &mut [Student], identifier: &str, method: SearchMethod) -> CmdResult {
    match method {
        SearchMethod::Linear => report(linear_search(records, identifier), identifier),
        SearchMethod::Binary => {
            sort_for_binary_search(records);
            report(binary_search(records, identifier), identifier)
        }
    }
}

pub fn report(found: Option<&Student>, identifier: &str) -> CmdResult {
    let mut result = CmdResult::default();
    match found {
        Some(student) => result.listed_records.push(student.clone()),
        None => result.add_message(CmdMessage::info(format!(
            "No record with NPM {}",
            identifier
        ))),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<Student> {
        list.iter()
            .map(|id| Student::new(*id, format!("Name {}", &id[..1]), "CS", "A"))
            .collect()
    }

    #[test]
    fn both_searches_are_empty_on_empty_input() {
        assert!(linear_search(&[], "123456789012").is_none());
        assert!(binary_search(&[], "123456789012").is_none());
    }

    #[test]
    fn linear_returns_first_match() {
        let records = vec![
            Student::new("111111111111", "First", "", ""),
            Student::new("111111111111", "Second", "", ""),
        ];
        assert_eq!(
            linear_search(&records, "111111111111").unwrap().name(),
            "First"
        );
    }

    #[test]
    fn binary_agrees_with_linear_on_sorted_unique_ids() {
        let mut records = ids(&[
            "500000000000",
            "100000000000",
            "900000000000",
            "300000000000",
            "700000000000",
            "200000000000",
        ]);
        sort_for_binary_search(&mut records);

        for s in records.clone() {
            assert_eq!(
                binary_search(&records, s.identifier()),
                linear_search(&records, s.identifier())
            );
        }
        assert!(binary_search(&records, "400000000000").is_none());
        assert!(binary_search(&records, "000000000000").is_none());
        assert!(binary_search(&records, "999999999999").is_none());
    }

    #[test]
    fn binary_on_unsorted_input_does_not_panic() {
        let records = ids(&["900000000000", "100000000000", "500000000000"]);
        // May or may not find it; the precondition is the caller's job
        let _ = binary_search(&records, "100000000000");
    }

    #[test]
    fn binary_run_sorts_collection_first() {
        let mut records = ids(&["900000000000", "100000000000", "500000000000"]);
        let result = run(&mut records, "100000000000", SearchMethod::Binary);

        assert_eq!(result.listed_records.len(), 1);
        let order: Vec<_> = records.iter().map(|s| s.identifier()).collect();
        assert_eq!(order, vec!["100000000000", "500000000000", "900000000000"]);
    }

    #[test]
    fn linear_run_leaves_order_alone() {
        let mut records = ids(&["900000000000", "100000000000"]);
        let result = run(&mut records, "100000000000", SearchMethod::Linear);
        assert_eq!(result.listed_records[0].identifier(), "100000000000");
        assert_eq!(records[0].identifier(), "900000000000");
    }

    #[test]
    fn miss_reports_info_message() {
        let mut records = ids(&["100000000000"]);
        let result = run(&mut records, "200000000000", SearchMethod::Binary);
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
