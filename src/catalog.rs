//! Product listings.
//!
//! Two small catalogues: a storefront that grows with numbered products, and
//! a hardware list that grows with randomly priced items.

use rand::Rng;

#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    /// In dollars.
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// One row of a rendered listing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProductRow {
    pub name: String,
    pub description: String,
    pub price_label: String,
}

/// `49.9` -> `$49.90`
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's starting products.
    pub fn storefront() -> Self {
        Self::new(vec![
            Product::new(
                "Mechanical keyboard",
                "Compact keyboard with a good response.",
                49.99,
            ),
            Product::new("Wireless mouse", "Ergonomic mouse for everyday use.", 19.90),
            Product::new("Headphones", "Comfortable headphones with balanced sound.", 29.50),
        ])
    }

    /// The hardware list's starting products.
    pub fn hardware() -> Self {
        Self::new(vec![
            Product::new("i9 processor", "16 cores, 5.2GHz", 599.99),
            Product::new("Graphics card", "RTX 4080 16GB VRAM", 1199.00),
            Product::new("RAM", "32GB DDR5 6000MHz", 150.50),
        ])
    }

    /// Appends `Product N`, where `N` is the new length of the listing.
    pub fn add_next(&mut self) -> &Product {
        let n = self.products.len() + 1;
        tracing::debug!("adding generated product {n}");

        self.push(Product::new(
            format!("Product {n}"),
            "Dynamically added product.",
            15.0 + n as f64 * 2.0,
        ))
    }

    /// Appends an item with a random price in `[0, 100)`.
    pub fn add_random<R: Rng>(&mut self, rng: &mut R) -> &Product {
        let price = rng.gen_range(0.0..100.0);
        tracing::debug!("adding random item at {price}");

        self.push(Product::new("New item", "Automatic description", price))
    }

    fn push(&mut self, product: Product) -> &Product {
        self.products.push(product);
        &self.products[self.products.len() - 1]
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Renders every product, in order.
    pub fn rows(&self) -> Vec<ProductRow> {
        self.products
            .iter()
            .map(|p| ProductRow {
                name: p.name.clone(),
                description: p.description.clone(),
                price_label: format_price(p.price),
            })
            .collect()
    }
}
