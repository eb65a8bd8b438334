use std::collections::HashSet;

use crate::models::{AvailableIngredients, Recipe};

/// Default cap on search-tree nodes visited by [`find_exact_cover`]
pub const DEFAULT_NODE_LIMIT: usize = 1_000_000;

/// Outcome of an exact cover search
#[derive(Debug, Clone, PartialEq)]
pub enum CoverOutcome<'a> {
    /// Recipes, in catalog order, whose ingredients together equal the available set
    Found(Vec<&'a Recipe>),
    /// No subset of the catalog covers the available set exactly
    NotFound,
    /// The node limit was hit before the search finished
    LimitReached { visited: usize },
}

impl<'a> CoverOutcome<'a> {
    pub fn into_recipes(self) -> Option<Vec<&'a Recipe>> {
        match self {
            CoverOutcome::Found(recipes) => Some(recipes),
            _ => None,
        }
    }
}

/// One pending decision point in the search tree
struct Frame<'a> {
    index: usize,
    used: HashSet<&'a str>,
    chosen: Vec<usize>,
}

/// Finds recipes whose combined ingredients are exactly `available`
///
/// Walks the catalog in order, deciding skip or include for each recipe and
/// always trying skip first, so the result is the first cover reached in
/// that order. A recipe needing anything outside `available` is never
/// included. An empty combination is not a cover.
///
/// Worst case is exponential in the catalog size; `node_limit` bounds the
/// number of decision points visited.
pub fn find_exact_cover<'a>(
    available: &AvailableIngredients,
    recipes: &'a [Recipe],
    node_limit: Option<usize>,
) -> CoverOutcome<'a> {
    let ingredient_sets: Vec<HashSet<&'a str>> =
        recipes.iter().map(Recipe::ingredient_set).collect();
    let includable: Vec<bool> = ingredient_sets
        .iter()
        .map(|set| set.iter().all(|ingredient| available.contains(ingredient)))
        .collect();

    // reach[i]: everything recipes i.. could still contribute
    let mut reach: Vec<HashSet<&'a str>> = vec![HashSet::new(); recipes.len() + 1];
    for index in (0..recipes.len()).rev() {
        let mut next = reach[index + 1].clone();
        if includable[index] {
            next.extend(ingredient_sets[index].iter().copied());
        }
        reach[index] = next;
    }

    let mut stack = vec![Frame {
        index: 0,
        used: HashSet::new(),
        chosen: Vec::new(),
    }];
    let mut visited = 0usize;

    while let Some(frame) = stack.pop() {
        visited += 1;
        if node_limit.is_some_and(|limit| visited > limit) {
            return CoverOutcome::LimitReached { visited: visited - 1 };
        }

        if frame.index == recipes.len() {
            if !frame.chosen.is_empty() && available.equals_set(&frame.used) {
                return CoverOutcome::Found(
                    frame.chosen.iter().map(|&i| &recipes[i]).collect(),
                );
            }
            continue;
        }

        let reachable = available
            .iter()
            .all(|ingredient| frame.used.contains(ingredient) || reach[frame.index].contains(ingredient));
        if !reachable {
            continue;
        }

        // Pushed before skip so that skip is explored first
        if includable[frame.index] {
            let mut used = frame.used.clone();
            used.extend(ingredient_sets[frame.index].iter().copied());
            let mut chosen = frame.chosen.clone();
            chosen.push(frame.index);
            stack.push(Frame {
                index: frame.index + 1,
                used,
                chosen,
            });
        }

        stack.push(Frame {
            index: frame.index + 1,
            used: frame.used,
            chosen: frame.chosen,
        });
    }

    CoverOutcome::NotFound
}
