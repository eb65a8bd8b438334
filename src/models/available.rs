use std::collections::HashSet;

/// Ingredients the caller has on hand
///
/// Duplicates collapse, first-seen order is kept for deterministic iteration.
/// Names are compared exactly as spelled, no case folding or trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableIngredients {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl AvailableIngredients {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut available = Self::default();
        for ingredient in ingredients {
            let ingredient = ingredient.into();
            if available.lookup.insert(ingredient.clone()) {
                available.ordered.push(ingredient);
            }
        }
        available
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.lookup.contains(ingredient)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterates in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// True when `ingredients` holds exactly the available names
    pub fn equals_set(&self, ingredients: &HashSet<&str>) -> bool {
        ingredients.len() == self.lookup.len()
            && ingredients.iter().all(|i| self.lookup.contains(*i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse_in_first_seen_order() {
        let available = AvailableIngredients::new(["egg", "milk", "egg", "flour"]);
        assert_eq!(available.len(), 3);
        assert_eq!(available.iter().collect::<Vec<_>>(), vec!["egg", "milk", "flour"]);
    }

    #[test]
    fn test_exact_spelling() {
        let available = AvailableIngredients::new(["Egg"]);
        assert!(available.contains("Egg"));
        assert!(!available.contains("egg"));
    }

    #[test]
    fn test_equals_set() {
        let available = AvailableIngredients::new(["x", "y"]);
        assert!(available.equals_set(&HashSet::from(["y", "x"])));
        assert!(!available.equals_set(&HashSet::from(["x"])));
        assert!(!available.equals_set(&HashSet::from(["x", "y", "z"])));
    }
}
