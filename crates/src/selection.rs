//! Copy-on-write edits of a caller-owned selection list.
//!
//! Every function takes the caller's snapshot by reference and returns a new
//! list; the snapshot is never touched.

use crate::candidate::Candidate;
use crate::filter::contains_name;

/// Returns the list with `item` appended, or `None` when its name is already
/// selected.
pub fn with_added(selection: &[Candidate], item: &Candidate) -> Option<Vec<Candidate>> {
    if contains_name(selection, &item.name) {
        return None;
    }
    let mut next = Vec::with_capacity(selection.len() + 1);
    next.extend_from_slice(selection);
    next.push(item.clone());
    Some(next)
}

/// Returns the list without the entry at `index`.
///
/// Panics when `index` is out of range; callers only pass indices of rendered
/// chips or the last entry.
pub fn without_index(selection: &[Candidate], index: usize) -> Vec<Candidate> {
    assert!(
        index < selection.len(),
        "remove index {index} out of range for selection of length {}",
        selection.len()
    );
    selection
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, c)| c.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> Vec<Candidate> {
        names.iter().map(|n| Candidate::new(*n)).collect()
    }

    fn names(v: &[Candidate]) -> Vec<&str> {
        v.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_with_added_appends_at_tail() {
        let before = list(&["A"]);
        let after = with_added(&before, &Candidate::new("B")).unwrap();
        assert_eq!(names(&after), vec!["A", "B"]);
        assert_eq!(names(&before), vec!["A"]);
    }

    #[test]
    fn test_with_added_refuses_duplicate_name() {
        let before = list(&["A", "B"]);
        let mut dup = Candidate::new("B");
        dup.extra.insert("other".to_string(), serde_json::Value::Bool(true));
        assert!(with_added(&before, &dup).is_none());
    }

    #[test]
    fn test_sequence_of_adds_stays_unique() {
        let mut sel: Vec<Candidate> = vec![];
        for n in ["A", "B", "A", "C", "B", "C", "A"] {
            if let Some(next) = with_added(&sel, &Candidate::new(n)) {
                sel = next;
            }
        }
        assert_eq!(names(&sel), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_without_index_shifts_left() {
        let before = list(&["A", "B", "C", "D"]);
        for i in 0..before.len() {
            let after = without_index(&before, i);
            assert_eq!(after.len(), before.len() - 1);
            let mut expect = names(&before);
            expect.remove(i);
            assert_eq!(names(&after), expect);
        }
        assert_eq!(before.len(), 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_without_index_out_of_range_panics() {
        let _ = without_index(&list(&["A"]), 1);
    }
}
