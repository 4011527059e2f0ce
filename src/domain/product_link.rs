use serde::{Deserialize, Serialize};

/// Record attached to a product through one of the link tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum ProductLinkTarget {
    /// Associate allowed to perform the product.
    Associate(i32),
    /// Location where the product may be booked.
    Location(i32),
    /// Photo illustrating the product.
    Photo(i32),
}

/// Payload required to attach a record to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewProductLink {
    pub product_id: i32,
    pub target: ProductLinkTarget,
}

impl NewProductLink {
    pub fn associate(product_id: i32, associate_id: i32) -> Self {
        Self {
            product_id,
            target: ProductLinkTarget::Associate(associate_id),
        }
    }

    pub fn location(product_id: i32, location_id: i32) -> Self {
        Self {
            product_id,
            target: ProductLinkTarget::Location(location_id),
        }
    }

    pub fn photo(product_id: i32, photo_id: i32) -> Self {
        Self {
            product_id,
            target: ProductLinkTarget::Photo(photo_id),
        }
    }
}
