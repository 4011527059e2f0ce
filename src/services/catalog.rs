use serde::Deserialize;
use validator::Validate;

use crate::domain::associate::Associate;
use crate::domain::location::Location;
use crate::domain::photo::Photo;
use crate::domain::product::{Product, ProductListQuery};
use crate::domain::product_link::{NewProductLink, ProductLinkTarget};
use crate::forms::catalog::{
    AddAssociateForm, AddLocationForm, AddPhotoForm, AddProductForm, LinkProductForm,
};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    AssociateReader, AssociateWriter, BusinessReader, LocationReader, LocationWriter, PhotoReader,
    PhotoWriter, ProductLinkWriter, ProductReader, ProductWriter,
};
use crate::services::businesses::get_business;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Substring matched against the description.
    pub search: Option<String>,
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
}

/// Kind of record attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Associate,
    Location,
    Photo,
}

impl LinkKind {
    fn target(self, id: i32) -> ProductLinkTarget {
        match self {
            Self::Associate => ProductLinkTarget::Associate(id),
            Self::Location => ProductLinkTarget::Location(id),
            Self::Photo => ProductLinkTarget::Photo(id),
        }
    }
}

/// Fetch a product of `business_id` or fail with `NotFound`.
pub fn get_product<R>(repo: &R, business_id: i32, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id, business_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Fetch an associate of `business_id` or fail with `NotFound`.
pub fn get_associate<R>(repo: &R, business_id: i32, associate_id: i32) -> ServiceResult<Associate>
where
    R: AssociateReader + ?Sized,
{
    repo.get_associate_by_id(associate_id, business_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_associates<R>(repo: &R, business_id: i32) -> ServiceResult<Vec<Associate>>
where
    R: BusinessReader + AssociateReader + ?Sized,
{
    get_business(repo, business_id)?;
    repo.list_associates(business_id)
        .map_err(ServiceError::from)
}

pub fn create_associate<R>(
    repo: &R,
    business_id: i32,
    form: AddAssociateForm,
) -> ServiceResult<Associate>
where
    R: BusinessReader + AssociateWriter + ?Sized,
{
    get_business(repo, business_id)?;
    let new_associate = form
        .into_new_associate(business_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_associate(&new_associate)
        .map_err(ServiceError::from)
}

pub fn list_locations<R>(repo: &R, business_id: i32) -> ServiceResult<Vec<Location>>
where
    R: BusinessReader + LocationReader + ?Sized,
{
    get_business(repo, business_id)?;
    repo.list_locations(business_id).map_err(ServiceError::from)
}

pub fn create_location<R>(
    repo: &R,
    business_id: i32,
    form: AddLocationForm,
) -> ServiceResult<Location>
where
    R: BusinessReader + LocationWriter + ?Sized,
{
    get_business(repo, business_id)?;
    let new_location = form
        .into_new_location(business_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_location(&new_location)
        .map_err(ServiceError::from)
}

/// Loads one page of the business's products.
pub fn load_products<R>(
    repo: &R,
    business_id: i32,
    query: ProductsQuery,
) -> ServiceResult<Paginated<Product>>
where
    R: BusinessReader + ProductReader + ?Sized,
{
    get_business(repo, business_id)?;

    let page = query.page.unwrap_or(1).max(1);
    let mut list_query =
        ProductListQuery::new(business_id).paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
    {
        list_query = list_query.search(term);
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(items, page, total_pages))
}

pub fn create_product<R>(repo: &R, business_id: i32, form: AddProductForm) -> ServiceResult<Product>
where
    R: BusinessReader + ProductWriter + ?Sized,
{
    get_business(repo, business_id)?;
    let new_product = form
        .into_new_product(business_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product)
        .map_err(ServiceError::from)
}

pub fn create_photo<R>(repo: &R, business_id: i32, form: AddPhotoForm) -> ServiceResult<Photo>
where
    R: BusinessReader + PhotoWriter + ?Sized,
{
    get_business(repo, business_id)?;
    let new_photo = form
        .into_new_photo(business_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_photo(&new_photo).map_err(ServiceError::from)
}

/// Attach an associate, location or photo of the same business to a product.
pub fn link_product<R>(
    repo: &R,
    business_id: i32,
    product_id: i32,
    kind: LinkKind,
    form: LinkProductForm,
) -> ServiceResult<()>
where
    R: ProductReader + ProductLinkWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    get_product(repo, business_id, product_id)?;

    let link = NewProductLink {
        product_id,
        target: kind.target(form.id),
    };
    repo.link_product(&link).map_err(ServiceError::from)
}

/// Locations where the product may be booked.
pub fn list_product_locations<R>(
    repo: &R,
    business_id: i32,
    product_id: i32,
) -> ServiceResult<Vec<Location>>
where
    R: ProductReader + LocationReader + ?Sized,
{
    get_product(repo, business_id, product_id)?;
    repo.list_locations_for_product(product_id, business_id)
        .map_err(ServiceError::from)
}

pub fn list_product_photos<R>(
    repo: &R,
    business_id: i32,
    product_id: i32,
) -> ServiceResult<Vec<Photo>>
where
    R: ProductReader + PhotoReader + ?Sized,
{
    get_product(repo, business_id, product_id)?;
    repo.list_photos_for_product(product_id, business_id)
        .map_err(ServiceError::from)
}
