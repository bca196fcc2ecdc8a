use serde::{Deserialize, Serialize};

use crate::constants::ERR_IDS_EXHAUSTED;
use crate::error::{AppError, Result};
use crate::models::{Product, User};

/// The whole data file: two ordered lists, rewritten in full on every mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, alias = "produtos")]
    pub products: Vec<Product>,
    #[serde(default, alias = "usuarios")]
    pub users: Vec<User>,
}

impl Document {
    pub fn next_product_id(&self) -> Result<u64> {
        next_id(self.products.iter().map(|p| p.id))
    }

    pub fn next_user_id(&self) -> Result<u64> {
        next_id(self.users.iter().map(|u| u.id))
    }
}

/// Next identifier: max existing + 1, starting at 1
pub fn next_id(ids: impl IntoIterator<Item = u64>) -> Result<u64> {
    match ids.into_iter().max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| AppError::Io(std::io::Error::other(ERR_IDS_EXHAUSTED))),
    }
}
