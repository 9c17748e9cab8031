//! Brand records.

use chrono::Utc;
use finclvr_core::{Brand, NewBrand};

use crate::{MemStore, StoreError};

impl MemStore {
    #[must_use]
    pub fn get_brand(&self, id: i64) -> Option<Brand> {
        self.tables.read().brands.get(&id).cloned()
    }

    /// All brands owned by `user_id`, oldest first. Empty when the user has none.
    #[must_use]
    pub fn get_brands_by_user_id(&self, user_id: i64) -> Vec<Brand> {
        self.tables
            .read()
            .brands
            .values()
            .filter(|brand| brand.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Insert a brand. The owning user is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdExhausted`] if no brand id is left.
    pub fn create_brand(&self, new: NewBrand) -> Result<Brand, StoreError> {
        let mut tables = self.tables.write();
        let id = tables.brand_ids.advance()?;
        let brand = Brand {
            id,
            user_id: new.user_id,
            name: new.name,
            niche: new.niche,
            tone: new.tone,
            color_preferences: new.color_preferences,
            audience_description: new.audience_description,
            created_at: Utc::now(),
        };
        tables.brands.insert(id, brand.clone());
        Ok(brand)
    }
}
