// ABOUTME: Ingredient category table mapping category names to ingredient keywords
// ABOUTME: Built-in default table plus validated construction from JSON overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient categories are coarse groups of keywords (`dairy_products`,
//! `meat_products`, ...) used to include or exclude recipes wholesale. The
//! table is plain data so it can be inspected and tested on its own.

use nutrimate_core::errors::AppError;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category whose keywords drive the vegan keyword screen
pub const DAIRY_CATEGORY: &str = "dairy_products";

/// Built-in categories, in presentation order
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "meat_products",
        &[
            "chicken", "beef", "pork", "lamb", "bacon", "sausage", "fish", "seafood", "shrimp",
            "turkey", "ham", "veal", "duck", "goat", "crab", "lobster", "tuna", "salmon",
            "anchovy", "prosciutto", "salami", "chorizo",
        ],
    ),
    (
        DAIRY_CATEGORY,
        &[
            "milk", "cheese", "cream", "butter", "yogurt", "whey", "ricotta", "mozzarella",
            "parmesan", "cheddar", "buttermilk", "sour cream", "mascarpone", "ghee",
            "half and half", "heavy cream",
        ],
    ),
    (
        "gluten_products",
        &[
            "wheat", "flour", "pasta", "bread", "barley", "rye", "couscous", "semolina", "farro",
            "breadcrumbs", "noodles", "spaghetti", "macaroni", "crackers",
        ],
    ),
    (
        "eggs",
        &["egg", "eggs", "egg white", "egg yolk", "egg whites", "egg yolks"],
    ),
    (
        "seafood",
        &[
            "fish", "shrimp", "crab", "lobster", "clam", "mussel", "oyster", "scallop", "squid",
            "octopus",
        ],
    ),
    (
        "nuts_seeds",
        &[
            "almond", "walnut", "pecan", "cashew", "pistachio", "peanut", "sesame", "pine nut",
            "chia", "flaxseed",
        ],
    ),
    (
        "vegetables",
        &[
            "onion", "garlic", "tomato", "carrot", "celery", "pepper", "lettuce", "spinach",
            "broccoli", "cauliflower",
        ],
    ),
    (
        "fruits",
        &[
            "apple", "banana", "orange", "lemon", "lime", "berry", "strawberry", "blueberry",
            "raspberry", "grape",
        ],
    ),
    (
        "grains",
        &[
            "rice", "quinoa", "oat", "corn", "millet", "buckwheat", "amaranth", "wild rice",
        ],
    ),
    (
        "legumes",
        &["bean", "lentil", "chickpea", "pea", "soybean", "tofu", "tempeh"],
    ),
    (
        "herbs_spices",
        &[
            "basil", "oregano", "thyme", "rosemary", "cumin", "coriander", "paprika", "cinnamon",
            "nutmeg", "ginger",
        ],
    ),
    (
        "sweeteners",
        &[
            "sugar", "honey", "maple syrup", "agave", "stevia", "molasses", "corn syrup",
        ],
    ),
    (
        "oils",
        &[
            "olive oil", "vegetable oil", "coconut oil", "sesame oil", "canola oil",
            "sunflower oil",
        ],
    ),
    (
        "alcoholic",
        &[
            "wine", "beer", "vodka", "rum", "whiskey", "brandy", "sherry", "cognac",
        ],
    ),
];

/// Errors raised while building a [`CategoryTable`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryTableError {
    /// A category had a blank name
    #[error("Category names must not be empty")]
    EmptyName,

    /// The same category name appeared twice
    #[error("Duplicate ingredient category: {0}")]
    DuplicateCategory(String),

    /// The table lacks the dairy category the vegan screen relies on
    #[error("Category table must define '{DAIRY_CATEGORY}'")]
    MissingDairyCategory,

    /// JSON input was not an object of string arrays
    #[error("Invalid category table: {0}")]
    Parse(String),
}

impl From<CategoryTableError> for AppError {
    fn from(error: CategoryTableError) -> Self {
        Self::config_invalid(error.to_string())
    }
}

/// A named set of lowercase ingredient keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientCategory {
    name: String,
    keywords: Vec<String>,
}

impl IngredientCategory {
    /// Category name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase keywords, in declaration order
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Immutable mapping from category name to ingredient keywords
///
/// Invariants upheld by every constructor: names are unique and non-empty,
/// keywords are trimmed, lowercase and non-empty, and [`DAIRY_CATEGORY`] is
/// present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<IngredientCategory>,
    dairy_index: usize,
}

impl Default for CategoryTable {
    fn default() -> Self {
        let categories: Vec<IngredientCategory> = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, keywords)| IngredientCategory {
                name: (*name).to_owned(),
                keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
            })
            .collect();
        let dairy_index = categories
            .iter()
            .position(|c| c.name == DAIRY_CATEGORY)
            .unwrap_or_default();
        Self {
            categories,
            dairy_index,
        }
    }
}

impl CategoryTable {
    /// Build a table from `(name, keywords)` pairs, keeping their order
    ///
    /// # Errors
    ///
    /// Returns an error if a name is blank or repeated, or if the dairy
    /// category is missing
    pub fn new<N, K, I>(categories: I) -> Result<Self, CategoryTableError>
    where
        N: AsRef<str>,
        K: AsRef<str>,
        I: IntoIterator<Item = (N, Vec<K>)>,
    {
        let mut built: Vec<IngredientCategory> = Vec::new();
        for (name, keywords) in categories {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(CategoryTableError::EmptyName);
            }
            if built.iter().any(|c| c.name == name) {
                return Err(CategoryTableError::DuplicateCategory(name.to_owned()));
            }
            let keywords = keywords
                .iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            built.push(IngredientCategory {
                name: name.to_owned(),
                keywords,
            });
        }

        let dairy_index = built
            .iter()
            .position(|c| c.name == DAIRY_CATEGORY)
            .ok_or(CategoryTableError::MissingDairyCategory)?;

        Ok(Self {
            categories: built,
            dairy_index,
        })
    }

    /// Parse a table from a JSON object of `"category": ["keyword", ...]`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the table fails validation
    pub fn from_json_str(json: &str) -> Result<Self, CategoryTableError> {
        let CategoryPairs(pairs) =
            serde_json::from_str(json).map_err(|e| CategoryTableError::Parse(e.to_string()))?;
        Self::new(pairs)
    }

    /// Look up a category by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IngredientCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Whether a category of this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Keywords of the dairy category
    #[must_use]
    pub fn dairy_keywords(&self) -> &[String] {
        &self.categories[self.dairy_index].keywords
    }

    /// Category names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Iterate over categories in table order
    pub fn iter(&self) -> impl Iterator<Item = &IngredientCategory> {
        self.categories.iter()
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the table has no categories (never true for a validated table)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Object entries in document order, repeated keys included
struct CategoryPairs(Vec<(String, Vec<String>)>);

struct CategoryPairsVisitor;

impl<'de> Visitor<'de> for CategoryPairsVisitor {
    type Value = CategoryPairs;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object of category name to keyword list")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or_default());
        while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
            pairs.push(entry);
        }
        Ok(CategoryPairs(pairs))
    }
}

impl<'de> Deserialize<'de> for CategoryPairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoryPairsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order_and_contents() {
        let table = CategoryTable::default();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "meat_products");
        assert_eq!(names[1], DAIRY_CATEGORY);
        assert_eq!(names[13], "alcoholic");

        assert!(table.dairy_keywords().iter().any(|k| k == "milk"));
        assert!(table.dairy_keywords().iter().any(|k| k == "half and half"));
    }

    #[test]
    fn test_default_keywords_are_lowercase() {
        let table = CategoryTable::default();
        for category in table.iter() {
            for keyword in category.keywords() {
                assert_eq!(keyword, &keyword.to_lowercase());
                assert!(!keyword.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_new_normalizes_keywords() {
        let table = CategoryTable::new(vec![
            ("dairy_products", vec!["  Milk ", "", "CHEESE"]),
            ("snacks", vec!["Chips"]),
        ])
        .unwrap();
        assert_eq!(table.dairy_keywords(), ["milk", "cheese"]);
        assert_eq!(table.get("snacks").unwrap().keywords(), ["chips"]);
    }

    #[test]
    fn test_new_rejects_invalid_tables() {
        assert_eq!(
            CategoryTable::new(vec![("snacks", vec!["chips"])]).unwrap_err(),
            CategoryTableError::MissingDairyCategory
        );
        assert_eq!(
            CategoryTable::new(vec![
                ("dairy_products", vec!["milk"]),
                ("dairy_products", vec!["cheese"]),
            ])
            .unwrap_err(),
            CategoryTableError::DuplicateCategory("dairy_products".to_owned())
        );
        assert_eq!(
            CategoryTable::new(vec![("dairy_products", vec!["milk"]), (" ", vec!["x"])])
                .unwrap_err(),
            CategoryTableError::EmptyName
        );
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"{"zucchini_dishes": ["zucchini"], "dairy_products": ["milk"], "apples": ["apple"]}"#;
        let table = CategoryTable::from_json_str(json).unwrap();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, ["zucchini_dishes", "dairy_products", "apples"]);
    }

    #[test]
    fn test_from_json_rejects_wrong_shapes() {
        assert!(matches!(
            CategoryTable::from_json_str("[1, 2]"),
            Err(CategoryTableError::Parse(_))
        ));
        assert!(matches!(
            CategoryTable::from_json_str(r#"{"dairy_products": "milk"}"#),
            Err(CategoryTableError::Parse(_))
        ));
        assert!(matches!(
            CategoryTable::from_json_str(r#"{"dairy_products": ["milk", 3]}"#),
            Err(CategoryTableError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_repeated_category() {
        let json = r#"{"dairy_products": ["milk"], "snacks": ["chips"], "dairy_products": ["cheese"]}"#;
        assert_eq!(
            CategoryTable::from_json_str(json).unwrap_err(),
            CategoryTableError::DuplicateCategory(DAIRY_CATEGORY.to_owned())
        );
    }
}
