//! Catalog ingredients and the in-progress burger builder.

use serde::{Deserialize, Serialize};

use crate::ident::InstanceId;

/// Ingredient kind as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Bun,
    Sauce,
    Main,
}

/// A purchasable catalog item. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IngredientKind,
    pub proteins: u32,
    pub fat: u32,
    pub carbohydrates: u32,
    pub calories: u32,
    pub price: u32,
    pub image: String,
    pub image_mobile: String,
    pub image_large: String,
}

/// One placement of a catalog ingredient in the builder.
///
/// `instance` disambiguates two placements of the same catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderItem {
    pub instance: InstanceId,
    #[serde(flatten)]
    pub ingredient: Ingredient,
}

/// The in-progress, not-yet-submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BurgerBuilder {
    /// At most one bun; adding another replaces it.
    pub bun: Option<Ingredient>,
    /// Non-bun placements in insertion order. Order is user-controlled.
    pub fillings: Vec<BuilderItem>,
}

impl BurgerBuilder {
    /// Total price: the bun counts twice (top and bottom), fillings once.
    pub fn total_price(&self) -> u32 {
        let bun = self.bun.as_ref().map(|b| b.price * 2).unwrap_or(0);
        bun + self
            .fillings
            .iter()
            .map(|item| item.ingredient.price)
            .sum::<u32>()
    }

    /// Whether the builder can be submitted as an order.
    pub fn is_submittable(&self) -> bool {
        self.bun.is_some() && !self.fillings.is_empty()
    }

    /// Catalog id list for submission: the bun id appears first and last.
    ///
    /// Returns `None` unless the builder is submittable.
    pub fn submission_ids(&self) -> Option<Vec<String>> {
        if !self.is_submittable() {
            return None;
        }
        let bun = self.bun.as_ref()?;
        let mut ids = Vec::with_capacity(self.fillings.len() + 2);
        ids.push(bun.id.clone());
        ids.extend(self.fillings.iter().map(|item| item.ingredient.id.clone()));
        ids.push(bun.id.clone());
        Some(ids)
    }

    /// Index of the filling with the given instance id.
    pub(crate) fn position(&self, instance: InstanceId) -> Option<usize> {
        self.fillings
            .iter()
            .position(|item| item.instance == instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: &str, kind: IngredientKind, price: u32) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: format!("Ingredient {id}"),
            kind,
            proteins: 10,
            fat: 10,
            carbohydrates: 10,
            calories: 100,
            price,
            image: String::new(),
            image_mobile: String::new(),
            image_large: String::new(),
        }
    }

    fn item(id: &str, price: u32) -> BuilderItem {
        BuilderItem {
            instance: InstanceId::generate(),
            ingredient: ingredient(id, IngredientKind::Main, price),
        }
    }

    #[test]
    fn test_total_price_counts_bun_twice() {
        let builder = BurgerBuilder {
            bun: Some(ingredient("bun", IngredientKind::Bun, 100)),
            fillings: vec![item("a", 30), item("b", 20)],
        };
        assert_eq!(builder.total_price(), 250);
    }

    #[test]
    fn test_total_price_without_bun() {
        let builder = BurgerBuilder {
            bun: None,
            fillings: vec![item("a", 30)],
        };
        assert_eq!(builder.total_price(), 30);
    }

    #[test]
    fn test_submission_ids_wrap_with_bun() {
        let builder = BurgerBuilder {
            bun: Some(ingredient("bun", IngredientKind::Bun, 100)),
            fillings: vec![item("a", 30), item("b", 20)],
        };
        assert_eq!(
            builder.submission_ids().unwrap(),
            vec!["bun", "a", "b", "bun"]
        );
    }

    #[test]
    fn test_submission_requires_bun_and_fillings() {
        let no_bun = BurgerBuilder {
            bun: None,
            fillings: vec![item("a", 30)],
        };
        assert!(no_bun.submission_ids().is_none());

        let no_fillings = BurgerBuilder {
            bun: Some(ingredient("bun", IngredientKind::Bun, 100)),
            fillings: Vec::new(),
        };
        assert!(no_fillings.submission_ids().is_none());
    }
}
