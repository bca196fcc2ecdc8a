use serde::Deserialize;

use crate::constants::{SORT_BY_NAME, SORT_BY_NAME_LEGACY};
use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product, ProductPatch};

/// Listing options: `?search=<text>&sort=name`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ProductQuery {
    /// Search term, ignoring an empty `search=`
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    pub fn sorts_by_name(&self) -> bool {
        matches!(
            self.sort.as_deref(),
            Some(SORT_BY_NAME) | Some(SORT_BY_NAME_LEGACY)
        )
    }

    /// Case-insensitive substring match on name or description
    pub fn matches(&self, product: &Product) -> bool {
        let Some(term) = self.search_term() else {
            return true;
        };
        let term = term.to_lowercase();

        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
    }

    /// Filter, then optionally sort alphabetically by name
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut products: Vec<Product> =
            products.into_iter().filter(|p| self.matches(p)).collect();

        if self.sorts_by_name() {
            products.sort_by_cached_key(|p| p.name.to_lowercase());
        }

        products
    }
}

impl Store {
    pub async fn list_products(&self, query: &ProductQuery) -> Vec<Product> {
        if let Some(term) = query.search_term() {
            tracing::debug!("Searching products for {:?}", term);
        }

        let doc = self.load().await;
        query.apply(doc.products)
    }

    pub async fn get_product(&self, id: u64) -> Result<Product> {
        self.load()
            .await
            .products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(AppError::ProductNotFound)
    }

    /// Append a product with the next free id
    pub async fn create_product(&self, new: NewProduct) -> Result<Product> {
        let product = self
            .update(|doc| {
                let product = new.into_product(doc.next_product_id()?);
                doc.products.push(product.clone());
                Ok(product)
            })
            .await?;

        tracing::info!("Product {} created: {}", product.id, product.name);
        Ok(product)
    }

    /// Merge the submitted fields over the stored product, keeping its id
    pub async fn update_product(&self, id: u64, patch: ProductPatch) -> Result<Product> {
        let product = self
            .update(|doc| {
                let product = doc
                    .products
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or(AppError::ProductNotFound)?;
                patch.apply(product);
                product.id = id;
                Ok(product.clone())
            })
            .await?;

        tracing::info!("Product {} updated", id);
        Ok(product)
    }

    /// Replace every field of the stored product, keeping its id
    pub async fn replace_product(&self, id: u64, new: NewProduct) -> Result<Product> {
        let product = self
            .update(|doc| {
                let slot = doc
                    .products
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or(AppError::ProductNotFound)?;
                *slot = new.into_product(id);
                Ok(slot.clone())
            })
            .await?;

        tracing::info!("Product {} replaced", id);
        Ok(product)
    }

    pub async fn delete_product(&self, id: u64) -> Result<()> {
        self.update(|doc| {
            if !doc.products.iter().any(|p| p.id == id) {
                return Err(AppError::ProductNotFound);
            }
            doc.products.retain(|p| p.id != id);
            Ok(())
        })
        .await?;

        tracing::info!("Product {} deleted", id);
        Ok(())
    }
}
