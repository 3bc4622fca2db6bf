//! Catalog data model
//!
//! The category taxonomy and product collections are static: loaded once at
//! controller initialization and never mutated. There is no backing store or
//! fetch layer; [`builtin_catalog`] holds the vendor's current listing.

use serde::{Deserialize, Serialize};

/// A subcategory, nested under exactly one category.
///
/// Names are unique within a category but not globally (e.g. "Ceremonial
/// Uniforms" appears under both Military and Police).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    pub name: String,
}

impl SubCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A top-level sidebar category with its ordered subcategory list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub subcategories: Vec<SubCategory>,
}

/// A category reference embedded in a product.
///
/// Products carry an ordered, non-empty list of these; the matching predicate
/// consults only the first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub name: String,
    pub subcategories: Vec<SubCategory>,
}

/// Free-form product details shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub description: String,
    pub url: String,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique positive integer id.
    pub id: u64,
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Non-empty; only `categories[0]` participates in filtering.
    pub categories: Vec<ProductCategory>,
    pub details: ProductDetails,
}

impl Product {
    /// The first (and filtering-relevant) category reference.
    pub fn primary_category(&self) -> &ProductCategory {
        &self.categories[0]
    }
}

/// The immutable catalog: taxonomy plus product list, loaded once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Catalog {
    /// The first `n` products in source order (sidebar "latest products").
    pub fn latest(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }
}

fn category(id: u32, name: &str, subcategories: &[&str]) -> Category {
    Category {
        id,
        name: name.to_string(),
        subcategories: subcategories.iter().map(|s| SubCategory::new(*s)).collect(),
    }
}

fn product(
    id: u64,
    name: &str,
    image: &str,
    category: &str,
    subcategory: &str,
    description: &str,
    url: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        image: image.to_string(),
        categories: vec![ProductCategory {
            name: category.to_string(),
            subcategories: vec![SubCategory::new(subcategory)],
        }],
        details: ProductDetails {
            description: description.to_string(),
            url: url.to_string(),
        },
    }
}

/// The vendor's built-in catalog.
pub fn builtin_catalog() -> Catalog {
    let categories = vec![
        category(
            1,
            "Military",
            &[
                "Uniforms",
                "Tactical Uniforms",
                "Military Beret, Cap & Hat",
                "Ceremonial Uniforms",
                "Military Boots",
                "Bulletproof vest / Equipment",
                "Military Bags",
                "Protective Knee Cap",
            ],
        ),
        category(
            2,
            "Police",
            &[
                "Police Uniforms",
                "Police Boots",
                "Ceremonial Uniforms",
                "Bulletproof vest / Equipment",
                "Reflective Clothing",
                "Protective Knee Cap",
            ],
        ),
        category(3, "School Uniform", &["High School", "College", "Polo T-shirts"]),
        category(
            4,
            "Private Security",
            &[
                "Security Officer Uniforms",
                "Sequence Tactical Jacket",
                "Reflective Clothing",
            ],
        ),
        category(
            5,
            "Tactical Wear/Gear",
            &["Tactical Glasses", "Tactitcal Gloves", "Tacitcal Belts"],
        ),
        category(
            6,
            "Workwear",
            &[
                "Work clothing",
                "Chef Clothing",
                "Hotel Uniforms",
                "Aviation Uniforms",
                "Workwear Shirts",
            ],
        ),
    ];

    let products = vec![
        product(
            1,
            "ACU Camo Military Uniforms",
            "https://www.corhunter-garment.com/uploads/202337095/small/acu-military-uniform7366b4a7-b5f9-4a14-bc6d-3b09569c915d.jpg",
            "Military Combat Uniform",
            "ACU uniform",
            "Customization: Min. Order: 500 Sets. Material: 65% Polyester 35% Cotton. Feature: Ripstop.",
            "/product/acu-camo-military-uniforms",
        ),
        product(
            2,
            "BDU Military Uniform",
            "https://www.corhunter-garment.com/uploads/202237095/small/bdu-military-uniform58106687049.jpg",
            "Military Combat Uniform",
            "BDU uniform",
            "65% polyester and 35% cotton, plaid camouflage, light, durable, breathable, protective",
            "/product/bdu-military-uniform",
        ),
        product(
            3,
            "Frog Suit G2 Military Dress Uniforms",
            "https://www.corhunter-garment.com/uploads/202237095/small/frog-suit-g2-military-dress-uniforms21056765128.jpg",
            "Military Combat Uniform",
            "Frog Suit",
            "Customization: Min. Order: 1000 Sets. Material: 65% Polyester 35% Cotton. Feature: Anti-Static.",
            "/product/frog-suit-g2-military-dress-uniforms",
        ),
        product(
            4,
            "ACU Camouflage Combat Uniforms",
            "https://www.corhunter-garment.com/uploads/202337095/small/acu-camouflage-combat-uniforms-tc65-35-fabric78a70e99-1fdf-42ea-b456-15c85fdb6521.jpg",
            "Military Combat Uniform",
            "ACU uniform",
            "Customization: Min. Order: 1000 Sets. Material: 65% Polyester 35% Cotton. Feature: Breathable.",
            "/product/acu-camouflage-combat-uniforms",
        ),
        product(
            5,
            "ACU Digital Ocean Camouflage Uniforms",
            "https://www.corhunter-garment.com/uploads/202337095/small/acu-digital-ocean-camouflage-uniforms6ac2c9a1-81f8-4273-b6c2-e1e3d8727d54.jpg",
            "Military Combat Uniform",
            "ACU uniform",
            "Customization: Min. Order: 1000 Sets. Material: 65% Polyester 35% Cotton. Feature: Breathability.",
            "/product/acu-digital-ocean-camouflage-uniforms",
        ),
        // The vendor listing carries no category for this entry; the empty
        // name means it fails every non-empty category constraint.
        product(
            6,
            "Custom Black Python Camouflage ACU Uniform",
            "https://www.corhunter-garment.com/uploads/202337095/small/custom-black-python-camouflage-acu-uniform88317719-8e1b-407d-8286-d5038cdcb922.jpg",
            "",
            "ACU uniform",
            "Customization: Min. Order: 1000 Sets. Material: 65% Polyester 35% Cotton. Feature: Durable.",
            "/product/custom-black-python-camouflage-acu-uniform",
        ),
        product(
            7,
            "In Stock ACU Uniform Digital Jungle Camouflage",
            "https://www.corhunter-garment.com/uploads/202337095/small/in-stock-acu-uniform-digital-jungle272109db-3d8f-4bdd-adf5-38da06afd89c.jpg",
            "Military Combat Uniform",
            "ACU uniform",
            "Customization: Min. Order: 1000 Sets. Material: 65% Polyester 35% Cotton. Feature: Waterproof.",
            "/product/in-stock-acu-uniform-digital-jungle",
        ),
        product(
            8,
            "G3 Outdoor Training Frog Suit Physical Fitness Uniform",
            "https://www.corhunter-garment.com/uploads/37095/small/g3-outdoor-training-frog-suit-physicalfb262.jpg",
            "Military Combat Uniform",
            "Frog Suit",
            "Camouflage tactical frog suit, made of elastic fabric, breathable and skin-friendly, soft and comfortable.",
            "/product/g3-outdoor-training-frog-suit-physical",
        ),
        product(
            9,
            "Python Pattern Camouflage Long-sleeved Soldier Outdoor Frog Uniform",
            "https://www.corhunter-garment.com/uploads/37095/small/desert-python-pattern-camouflage-long-sleeved5c8de.jpg",
            "Military Combat Uniform",
            "Frog Suit",
            "Camouflage tactical frog suit, made of elastic fabric, breathable and skin-friendly, soft and comfortable.",
            "/product/desert-python-pattern-camouflage-long-sleeved",
        ),
    ];

    Catalog {
        categories,
        products,
    }
}
