//! Multi-phase fuzzy name matching over the item catalog.
//!
//! Slug decoding is lossy, so slug resolution cannot be an exact key lookup.
//! The matcher runs up to three phases over the decoded search string, each
//! a more permissive scoring policy than the last:
//!
//! 1. Grade-constrained: only items whose `(+N)` grade equals the search
//!    grade, compared by gradeless name.
//! 2. Exact: the first item whose full normalized name equals the search.
//! 3. Heuristic: every item, scored by grade proximity plus a tiered name
//!    comparison.
//!
//! An earlier phase with a positive score wins outright. Within a phase the
//! strictly highest score wins and ties fall to the earliest catalog
//! position, which keeps resolution deterministic for a fixed catalog.

use itemdex_core::grade::{extract_grade, strip_grade};
use itemdex_core::RawItem;

/// Which phase produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Grade-exact candidates compared by gradeless name
    Grade,
    /// Full normalized name equality
    Exact,
    /// Global grade-proximity and name heuristic
    Heuristic,
}

/// Result of matching a search name against the catalog.
#[derive(Debug, Clone)]
pub struct NameMatch<'a> {
    pub item: &'a RawItem,
    /// Position of the winning item in catalog order
    pub index: usize,
    pub score: u32,
    pub phase: MatchPhase,
}

/// Find the single best catalog entry for an approximate, lossily-decoded
/// search name. Returns `None` when no phase yields a positive score.
pub fn best_match<'a>(search_name: &str, catalog: &'a [RawItem]) -> Option<NameMatch<'a>> {
    let search = search_name.trim().to_lowercase();

    match_by_grade(&search, catalog)
        .or_else(|| match_exact(&search, catalog))
        .or_else(|| match_heuristic(&search, catalog))
}

/// Phase 1: score only items whose grade equals the search grade exactly,
/// comparing gradeless names.
fn match_by_grade<'a>(search: &str, catalog: &'a [RawItem]) -> Option<NameMatch<'a>> {
    let search_grade = extract_grade(search)?;
    let search_gradeless = gradeless(search);

    let mut best: Option<NameMatch<'a>> = None;
    for (index, item) in catalog.iter().enumerate() {
        if extract_grade(&item.name) != Some(search_grade) {
            continue;
        }
        let item_gradeless = gradeless(&item.name);
        let score = if item_gradeless == search_gradeless {
            100
        } else if item_gradeless.contains(&search_gradeless) {
            80
        } else if search_gradeless.contains(&item_gradeless) {
            60
        } else {
            shared_token_count(&search_gradeless, &item_gradeless) * 15
        };
        if score > best.as_ref().map_or(0, |b| b.score) {
            best = Some(NameMatch {
                item,
                index,
                score,
                phase: MatchPhase::Grade,
            });
        }
    }
    best
}

/// Phase 2: the first item whose full normalized name equals the search.
fn match_exact<'a>(search: &str, catalog: &'a [RawItem]) -> Option<NameMatch<'a>> {
    catalog.iter().enumerate().find_map(|(index, item)| {
        (item.name.trim().to_lowercase() == search).then(|| NameMatch {
            item,
            index,
            score: 100,
            phase: MatchPhase::Exact,
        })
    })
}

/// Phase 3: score every item by grade proximity plus a tiered name bonus.
fn match_heuristic<'a>(search: &str, catalog: &'a [RawItem]) -> Option<NameMatch<'a>> {
    let search_grade = extract_grade(search);
    let search_gradeless = gradeless(search);
    let search_token_count = search_gradeless.split_whitespace().count() as u32;

    let mut best: Option<NameMatch<'a>> = None;
    for (index, item) in catalog.iter().enumerate() {
        let mut score = grade_proximity_bonus(search_grade, extract_grade(&item.name));

        if item.name.trim().to_lowercase() == search {
            score += 100;
        } else {
            let item_gradeless = gradeless(&item.name);
            score += if item_gradeless == search_gradeless {
                80
            } else if item_gradeless.contains(&search_gradeless) {
                60
            } else if search_gradeless.contains(&item_gradeless) {
                40
            } else {
                let shared = shared_token_count(&search_gradeless, &item_gradeless);
                if shared > 0 {
                    // +15 when shared tokens cover at least 70% of the search
                    let coverage_bonus = if 10 * shared >= 7 * search_token_count {
                        15
                    } else {
                        0
                    };
                    shared * 10 + coverage_bonus
                } else {
                    0
                }
            };
        }

        if score > best.as_ref().map_or(0, |b| b.score) {
            best = Some(NameMatch {
                item,
                index,
                score,
                phase: MatchPhase::Heuristic,
            });
        }
    }
    best
}

/// Grade proximity bonus: 50 for an exact grade match, decaying by 8 per
/// level of difference, gone past a difference of 5. Zero when either side
/// has no grade.
fn grade_proximity_bonus(search: Option<u32>, item: Option<u32>) -> u32 {
    let (Some(search), Some(item)) = (search, item) else {
        return 0;
    };
    if search == item {
        return 50;
    }
    let diff = search.abs_diff(item);
    if diff <= 5 { 40u32.saturating_sub(8 * diff) } else { 0 }
}

/// Lowercased, trimmed name with every `(+N)` marker removed.
fn gradeless(name: &str) -> String {
    strip_grade(&name.to_lowercase()).trim().to_string()
}

/// Number of whitespace-separated search tokens that also occur in the
/// candidate. A token repeated in the search string counts once per
/// occurrence; candidate-side duplicates do not.
fn shared_token_count(search: &str, candidate: &str) -> u32 {
    let candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();
    search
        .split_whitespace()
        .filter(|token| candidate_tokens.contains(token))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemdex_core::features::Features;

    fn item(id: u32, name: &str) -> RawItem {
        RawItem {
            id,
            name: name.to_string(),
            class: None,
            category: None,
            features: Features::default(),
            description: None,
            images: Vec::new(),
        }
    }

    fn make_test_catalog() -> Vec<RawItem> {
        vec![
            item(1, "Bone Crasher (+3)"),
            item(2, "Bone Crasher (+7)"),
            item(3, "Hepa's Bone Crasher (+7)"),
            item(4, "Wooden Shield"),
            item(5, "Glave (+5)"),
        ]
    }

    #[test]
    fn test_grade_phase_exact_gradeless_name() {
        let catalog = make_test_catalog();
        let found = best_match("bone crasher (+7)", &catalog).unwrap();
        assert_eq!(found.item.id, 2);
        assert_eq!(found.phase, MatchPhase::Grade);
        assert_eq!(found.score, 100);
    }

    #[test]
    fn test_grade_phase_containment() {
        let catalog = make_test_catalog();
        // "hepas" is lost to slug encoding, but "bone crasher" is contained
        // in exactly one grade-7 candidate more specific than itself
        let found = best_match("crasher (+7)", &catalog).unwrap();
        assert_eq!(found.phase, MatchPhase::Grade);
        // "bone crasher" contains "crasher": item 2 scores 80 first
        assert_eq!(found.item.id, 2);
    }

    #[test]
    fn test_grade_phase_tie_breaks_to_catalog_order() {
        let catalog = vec![
            item(10, "Iron Mace (+9)"),
            item(11, "Iron Mace (+9)"),
        ];
        let found = best_match("iron mace (+9)", &catalog).unwrap();
        assert_eq!(found.item.id, 10);
        assert_eq!(found.index, 0);
    }

    #[test]
    fn test_exact_phase_without_grade() {
        let catalog = make_test_catalog();
        let found = best_match("  Wooden Shield ", &catalog).unwrap();
        assert_eq!(found.item.id, 4);
        assert_eq!(found.phase, MatchPhase::Exact);
    }

    #[test]
    fn test_exact_match_beats_partial_overlap() {
        // An exact full-name match must win even when another item shares
        // more tokens with the search
        let catalog = vec![
            item(1, "Shield of the Bone Crasher Legion"),
            item(2, "Bone Crasher"),
        ];
        let found = best_match("bone crasher", &catalog).unwrap();
        assert_eq!(found.item.id, 2);
        assert_eq!(found.phase, MatchPhase::Exact);
    }

    #[test]
    fn test_heuristic_grade_proximity() {
        // No grade-9 item exists; the nearer grade must win when the name
        // bonuses are equal: diff 2 scores 24, diff 3 scores 16
        let catalog = vec![item(1, "Bone Crasher (+7)"), item(2, "Bone Crasher (+12)")];
        let found = best_match("bone crasher (+9)", &catalog).unwrap();
        assert_eq!(found.item.id, 1);
        assert_eq!(found.phase, MatchPhase::Heuristic);
        assert_eq!(found.score, 24 + 80);
    }

    #[test]
    fn test_heuristic_token_overlap() {
        let catalog = vec![item(1, "Crystal Dagger of Flames"), item(2, "Opal Ring")];
        let found = best_match("flames dagger", &catalog).unwrap();
        assert_eq!(found.item.id, 1);
        assert_eq!(found.phase, MatchPhase::Heuristic);
        // 2 shared tokens at 10 each, plus full-coverage bonus
        assert_eq!(found.score, 35);
    }

    #[test]
    fn test_heuristic_coverage_bonus_threshold() {
        // 2 of 3 search tokens shared: coverage 0.66, below the 0.7 cutoff
        let catalog = vec![item(1, "Crystal Dagger of Flames")];
        let found = best_match("flames dagger rune", &catalog).unwrap();
        assert_eq!(found.score, 20);
    }

    #[test]
    fn test_duplicate_search_tokens_count_per_occurrence() {
        let catalog = vec![item(1, "Bone Ring")];
        let found = best_match("bone bone amulet", &catalog).unwrap();
        // "bone" appears twice in the search and is counted twice
        assert_eq!(found.score, 20);
    }

    #[test]
    fn test_no_positive_score_is_none() {
        let catalog = make_test_catalog();
        assert!(best_match("completely unrelated", &catalog).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(best_match("anything", &[]).is_none());
    }

    #[test]
    fn test_grade_phase_falls_through_when_no_grade_items() {
        // Search has a grade but no item carries it; phase 3 still finds
        // the nearest-grade item by name
        let catalog = vec![item(1, "Glave (+5)")];
        let found = best_match("glave (+6)", &catalog).unwrap();
        assert_eq!(found.phase, MatchPhase::Heuristic);
        // grade diff 1 scores 32, gradeless names equal scores 80
        assert_eq!(found.score, 112);
    }

    #[test]
    fn test_determinism() {
        let catalog = make_test_catalog();
        let first = best_match("bone crasher (+7)", &catalog).unwrap().item.id;
        for _ in 0..10 {
            assert_eq!(best_match("bone crasher (+7)", &catalog).unwrap().item.id, first);
        }
    }
}
