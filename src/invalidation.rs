use std::collections::HashSet;

/// A cached server-derived view held by a client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    CategoryList,
    Category(String),
    ProductList,
    Product(String),
    /// Wildcard over every `Product(_)` detail view; used when a
    /// mutation can touch products the client never listed (cascades).
    AllProductDetails,
}

impl CacheKey {
    /// Whether a stale marker on `self` also covers `other`.
    pub fn covers(&self, other: &CacheKey) -> bool {
        match (self, other) {
            (CacheKey::AllProductDetails, CacheKey::Product(_)) => true,
            _ => self == other,
        }
    }
}

/// A completed mutation, described by the inputs the client already
/// knows. `RenameCategory.new_name` is `None` when the rename request
/// carried no name change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateCategory { name: String },
    RenameCategory { old_name: String, new_name: Option<String> },
    DeleteCategory { name: String },
    CreateProduct { id: String },
    UpdateProduct { id: String },
    DeleteProduct { id: String },
    BulkDeleteProducts { ids: Vec<String> },
    BulkRecategorizeProducts { ids: Vec<String> },
}

/// Which cached views must be refetched before being trusted again
/// after `mutation` succeeded.
pub fn stale_keys(mutation: &Mutation) -> HashSet<CacheKey> {
    let mut keys = HashSet::new();
    match mutation {
        Mutation::CreateCategory { .. } => {
            keys.insert(CacheKey::CategoryList);
        }
        Mutation::RenameCategory { old_name, new_name } => {
            keys.insert(CacheKey::CategoryList);
            keys.insert(CacheKey::Category(old_name.clone()));
            if let Some(new_name) = new_name {
                keys.insert(CacheKey::Category(new_name.clone()));
            }
            // Any product may reference the renamed category.
            keys.insert(CacheKey::ProductList);
            keys.insert(CacheKey::AllProductDetails);
        }
        Mutation::DeleteCategory { name } => {
            keys.insert(CacheKey::CategoryList);
            keys.insert(CacheKey::Category(name.clone()));
            // The delete cascades to products.
            keys.insert(CacheKey::ProductList);
            keys.insert(CacheKey::AllProductDetails);
        }
        Mutation::CreateProduct { id }
        | Mutation::UpdateProduct { id }
        | Mutation::DeleteProduct { id } => {
            keys.insert(CacheKey::ProductList);
            keys.insert(CacheKey::Product(id.clone()));
        }
        Mutation::BulkDeleteProducts { ids }
        | Mutation::BulkRecategorizeProducts { ids } => {
            keys.insert(CacheKey::ProductList);
            for id in ids {
                keys.insert(CacheKey::Product(id.clone()));
            }
        }
    }
    keys
}
