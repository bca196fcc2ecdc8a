use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product record as stored in the data file
///
/// Accepts the legacy Portuguese field names when loading so that data files
/// written by the first version of the shop keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(alias = "nome")]
    pub name: String,
    /// Written as a JSON number; read from either a number or a string
    #[serde(
        alias = "preco",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub price: Decimal,
    #[serde(default, alias = "descricao")]
    pub description: String,
    /// Image URL or path relative to the static directory
    #[serde(default, alias = "imagem")]
    pub image: String,
}

/// Payload for creating (POST) or replacing (PUT) a product
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl NewProduct {
    /// Turn the payload into a stored record with the given id
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            image: self.image,
        }
    }
}

/// Partial update (PATCH): only submitted fields are merged
///
/// Any `id` in the request body is ignored; the record keeps its own.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ProductPatch {
    /// Shallow merge of the submitted fields over `product`
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
    }
}

impl From<NewProduct> for ProductPatch {
    fn from(new: NewProduct) -> Self {
        Self {
            name: Some(new.name),
            price: Some(new.price),
            description: Some(new.description),
            image: Some(new.image),
        }
    }
}
