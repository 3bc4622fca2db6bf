//! The matching predicate and the order-preserving filtered view
//!
//! One canonical predicate: every active constraint must hold (pure AND
//! across dimensions). `search` is the only constraint with internal OR --
//! it matches when any of product name, description, first-category name, or
//! first-subcategory name contains the normalized query.

use crate::catalog::Product;
use crate::query::QueryState;
use crate::text::normalize;

/// Does `product` satisfy every active constraint in `query`?
pub fn is_match(product: &Product, query: &QueryState) -> bool {
    let primary = product.primary_category();

    if let Some(search) = &query.search {
        let needle = normalize(search);
        let name = normalize(&product.name);
        let description = normalize(&product.details.description);
        let category = normalize(&primary.name);
        let subcategory = primary
            .subcategories
            .first()
            .map(|s| normalize(&s.name))
            .unwrap_or_default();

        if !name.contains(&needle)
            && !description.contains(&needle)
            && !category.contains(&needle)
            && !subcategory.contains(&needle)
        {
            return false;
        }
    }

    if let Some(category) = &query.category {
        if normalize(&primary.name) != normalize(category) {
            return false;
        }
    }

    if let Some(subcategory) = &query.subcategory {
        // A product whose first category has no subcategories never matches.
        let wanted = normalize(subcategory);
        if !primary
            .subcategories
            .iter()
            .any(|s| normalize(&s.name) == wanted)
        {
            return false;
        }
    }

    if let Some(id) = &query.id {
        // Non-numeric id values never match.
        match id.trim().parse::<u64>() {
            Ok(id) if id == product.id => {}
            _ => return false,
        }
    }

    if let Some(name) = &query.name {
        if !normalize(&product.name).contains(&normalize(name)) {
            return false;
        }
    }

    true
}

/// The ordered subsequence of `products` matching all active constraints.
pub fn filter_products<'a>(products: &'a [Product], query: &QueryState) -> Vec<&'a Product> {
    products.iter().filter(|p| is_match(p, query)).collect()
}
