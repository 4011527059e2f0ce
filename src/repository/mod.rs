use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::{
    appointment::{Appointment, NewAppointment},
    assistant::{Assistant, NewAssistant},
    associate::{Associate, NewAssociate},
    business::{Business, NewBusiness},
    location::{Location, NewLocation},
    photo::{NewPhoto, Photo},
    product::{NewProduct, Product, ProductListQuery},
    product_link::NewProductLink,
    schedule::{NewSchedule, Schedule, ScheduleListQuery},
};

pub mod appointment;
pub mod assistant;
pub mod associate;
pub mod business;
pub mod errors;
pub mod location;
pub mod photo;
pub mod product;
pub mod product_link;
pub mod schedule;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over business records.
pub trait BusinessReader {
    fn get_business_by_id(&self, id: i32) -> RepositoryResult<Option<Business>>;
    fn list_businesses(&self) -> RepositoryResult<Vec<Business>>;
}

/// Write operations over business records.
pub trait BusinessWriter {
    fn create_business(&self, new_business: &NewBusiness) -> RepositoryResult<Business>;
}

/// Read-only operations over assistant configurations.
pub trait AssistantReader {
    fn get_assistant_by_external_id(&self, external_id: &str)
    -> RepositoryResult<Option<Assistant>>;
    fn list_assistants(&self, business_id: i32) -> RepositoryResult<Vec<Assistant>>;
}

/// Write operations over assistant configurations.
pub trait AssistantWriter {
    fn create_assistant(&self, new_assistant: &NewAssistant) -> RepositoryResult<Assistant>;
}

/// Read-only operations over associates.
pub trait AssociateReader {
    fn get_associate_by_id(&self, id: i32, business_id: i32)
    -> RepositoryResult<Option<Associate>>;
    fn list_associates(&self, business_id: i32) -> RepositoryResult<Vec<Associate>>;
}

/// Write operations over associates.
pub trait AssociateWriter {
    fn create_associate(&self, new_associate: &NewAssociate) -> RepositoryResult<Associate>;
}

/// Read-only operations over locations.
pub trait LocationReader {
    fn get_location_by_id(&self, id: i32, business_id: i32) -> RepositoryResult<Option<Location>>;
    fn list_locations(&self, business_id: i32) -> RepositoryResult<Vec<Location>>;
    fn list_locations_for_product(
        &self,
        product_id: i32,
        business_id: i32,
    ) -> RepositoryResult<Vec<Location>>;
}

/// Write operations over locations.
pub trait LocationWriter {
    fn create_location(&self, new_location: &NewLocation) -> RepositoryResult<Location>;
}

/// Read-only operations over products.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32, business_id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over products.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
}

/// Read-only operations over photos.
pub trait PhotoReader {
    fn list_photos_for_product(
        &self,
        product_id: i32,
        business_id: i32,
    ) -> RepositoryResult<Vec<Photo>>;
}

/// Write operations over photos.
pub trait PhotoWriter {
    fn create_photo(&self, new_photo: &NewPhoto) -> RepositoryResult<Photo>;
}

/// Lookups through the product link tables.
pub trait ProductLinkReader {
    fn list_associate_ids_for_product(&self, product_id: i32) -> RepositoryResult<Vec<i32>>;
    fn list_location_ids_for_product(&self, product_id: i32) -> RepositoryResult<Vec<i32>>;
}

/// Inserts into the product link tables.
pub trait ProductLinkWriter {
    /// Attach a record of the product's business to the product.
    ///
    /// Linking an already linked pair fails with `RepositoryError::Conflict`.
    fn link_product(&self, link: &NewProductLink) -> RepositoryResult<()>;
}

/// Read-only operations over schedule rules.
pub trait ScheduleReader {
    fn get_schedule_by_id(&self, id: i32) -> RepositoryResult<Option<Schedule>>;
    fn list_schedules(&self, query: ScheduleListQuery) -> RepositoryResult<Vec<Schedule>>;
    /// Distinct `(associate_id, location_id)` pairs that share at least one rule.
    fn list_serviced_pairs(
        &self,
        associate_ids: &[i32],
        location_ids: &[i32],
    ) -> RepositoryResult<Vec<(i32, i32)>>;
}

/// Write operations over schedule rules.
pub trait ScheduleWriter {
    fn create_schedule(&self, new_schedule: &NewSchedule) -> RepositoryResult<Schedule>;
    /// Insert every rule or none of them.
    fn create_schedules(&self, new_schedules: &[NewSchedule]) -> RepositoryResult<usize>;
    /// End `schedule_id` the day before `replacement` takes effect and insert it.
    fn supersede_schedule(
        &self,
        schedule_id: i32,
        replacement: &NewSchedule,
    ) -> RepositoryResult<Schedule>;
}

/// Read-only operations over booked appointments.
pub trait AppointmentReader {
    fn list_appointments(
        &self,
        associate_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<Appointment>>;
}

/// Write operations over booked appointments.
pub trait AppointmentWriter {
    fn create_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment>;
}
