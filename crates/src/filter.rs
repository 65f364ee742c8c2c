use crate::candidate::Candidate;

/// Candidates whose name contains `query` (case-insensitive), in universe
/// order. An empty query keeps the whole universe.
pub fn filter_candidates<'a>(universe: &'a [Candidate], query: &str) -> Vec<&'a Candidate> {
    if query.is_empty() {
        return universe.iter().collect();
    }
    let q = query.to_lowercase();
    universe
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&q))
        .collect()
}

// Identity check used for duplicate suppression and the "already selected" flag.
pub fn contains_name(list: &[Candidate], name: &str) -> bool {
    list.iter().any(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Vec<Candidate> {
        ["Ethereum", "Solana", "Polygon", "Arbitrum One"]
            .iter()
            .map(|n| Candidate::new(*n))
            .collect()
    }

    fn names(v: &[&Candidate]) -> Vec<String> {
        v.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_universe_in_order() {
        let u = universe();
        let out = filter_candidates(&u, "");
        assert_eq!(out.len(), u.len());
        for (a, b) in out.iter().zip(u.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_case_insensitive_substring() {
        let u = universe();
        assert_eq!(names(&filter_candidates(&u, "sol")), vec!["Solana"]);
        assert_eq!(names(&filter_candidates(&u, "SOL")), vec!["Solana"]);
        assert_eq!(names(&filter_candidates(&u, "um")), vec!["Ethereum", "Arbitrum One"]);
        assert_eq!(names(&filter_candidates(&u, "m o")), vec!["Arbitrum One"]);
    }

    #[test]
    fn test_no_match_is_empty_and_idempotent() {
        let u = universe();
        assert!(filter_candidates(&u, "zzz").is_empty());
        assert_eq!(
            names(&filter_candidates(&u, "o")),
            names(&filter_candidates(&u, "o"))
        );
        assert!(filter_candidates(&[], "o").is_empty());
        assert!(filter_candidates(&[], "").is_empty());
    }

    #[test]
    fn test_contains_name() {
        let u = universe();
        assert!(contains_name(&u, "Solana"));
        assert!(!contains_name(&u, "solana"));
        assert!(!contains_name(&[], "Solana"));
    }
}
