use std::collections::HashSet;
use std::hash::Hash;

/// Add/remove plan between two association snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation<T> {
    pub to_add: Vec<T>,
    pub to_remove: Vec<T>,
    pub unchanged: Vec<T>,
}

// Hand-written so the empty plan exists for any T, not just T: Default.
impl<T> Default for Reconciliation<T> {
    fn default() -> Self {
        Reconciliation {
            to_add: Vec::new(),
            to_remove: Vec::new(),
            unchanged: Vec::new(),
        }
    }
}

impl<T> Reconciliation<T> {
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Set difference by identity between the association list captured at load
/// time and the complete current list. Pure function of the two snapshots:
/// however many times the user toggled a selection in between, the plan only
/// reflects the net change. Duplicate identities within a snapshot are
/// collapsed to their first occurrence.
pub fn reconcile<T, K, F>(original: &[T], complete: &[T], key: F) -> Reconciliation<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let original_keys: HashSet<K> = original.iter().map(&key).collect();
    let complete_keys: HashSet<K> = complete.iter().map(&key).collect();

    let mut plan = Reconciliation::default();
    let mut seen = HashSet::new();
    for item in complete {
        if !seen.insert(key(item)) {
            continue;
        }
        if original_keys.contains(&key(item)) {
            plan.unchanged.push(item.clone());
        } else {
            plan.to_add.push(item.clone());
        }
    }
    let mut seen = HashSet::new();
    for item in original {
        if !seen.insert(key(item)) {
            continue;
        }
        if !complete_keys.contains(&key(item)) {
            plan.to_remove.push(item.clone());
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_and_remove() {
        // original [A, B], user adds C and removes B
        let plan = reconcile(&keys(&["A", "B"]), &keys(&["A", "C"]), |s| s.clone());
        assert_eq!(plan.to_add, keys(&["C"]));
        assert_eq!(plan.to_remove, keys(&["B"]));
        assert_eq!(plan.unchanged, keys(&["A"]));
    }

    #[test]
    fn test_partition_property() {
        let original = keys(&["A", "B", "C"]);
        let complete = keys(&["B", "D"]);
        let plan = reconcile(&original, &complete, |s| s.clone());

        // no key is both added and removed
        for added in &plan.to_add {
            assert!(!plan.to_remove.contains(added));
        }
        // every key from either snapshot is accounted for exactly once
        let mut all: Vec<String> = plan
            .to_add
            .iter()
            .chain(plan.to_remove.iter())
            .chain(plan.unchanged.iter())
            .cloned()
            .collect();
        all.sort();
        let mut expected: Vec<String> = original.into_iter().chain(complete).collect();
        expected.sort();
        expected.dedup();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_idempotent() {
        let original = keys(&["A", "B"]);
        let complete = keys(&["B", "C"]);
        let first = reconcile(&original, &complete, |s| s.clone());
        let second = reconcile(&original, &complete, |s| s.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicates_collapse() {
        let plan = reconcile(&keys(&["A", "A"]), &keys(&["A", "B", "B"]), |s| s.clone());
        assert_eq!(plan.to_add, keys(&["B"]));
        assert!(plan.to_remove.is_empty());
        assert_eq!(plan.unchanged, keys(&["A"]));
    }

    #[test]
    fn test_works_without_default_items() {
        // domain rows carry no Default; the empty plan must not require one
        #[derive(Debug, Clone, PartialEq)]
        struct Row(&'static str);

        let plan = reconcile(&[Row("A")], &[Row("B")], |r| r.0);
        assert_eq!(plan.to_add, vec![Row("B")]);
        assert_eq!(plan.to_remove, vec![Row("A")]);
    }

    #[test]
    fn test_empty_snapshots() {
        let plan = reconcile(&keys(&[]), &keys(&[]), |s| s.clone());
        assert!(plan.is_noop());
        assert!(plan.unchanged.is_empty());
    }
}
