//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use tempfile::TempDir;

use studio_booking::db::{DbPool, establish_connection_pool, run_pending_migrations};
use studio_booking::domain::associate::NewAssociate;
use studio_booking::domain::business::NewBusiness;
use studio_booking::domain::location::NewLocation;
use studio_booking::domain::product::NewProduct;
use studio_booking::repository::{
    AssociateWriter, BusinessWriter, DieselRepository, LocationWriter, ProductWriter,
};

/// Temporary migrated database used in integration tests.
///
/// The pool is declared first so its connections close before the directory
/// is removed.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("temporary path is UTF-8");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_pending_migrations(&pool).expect("Migrations failed");

        TestDb { pool, path, dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Identifiers of a minimal studio: one business with an associate working in
/// New York, a location and a 30 minute product.
pub struct Studio {
    pub business_id: i32,
    pub associate_id: i32,
    pub location_id: i32,
    pub product_id: i32,
}

pub fn seed_studio(repo: &DieselRepository, name: &str) -> Studio {
    let business = repo
        .create_business(&NewBusiness::new(name, "google", format!("{name}-calendar")))
        .expect("create business");
    let associate = repo
        .create_associate(
            &NewAssociate::new(business.id, format!("anna@{name}"), "America/New_York")
                .expect("valid timezone"),
        )
        .expect("create associate");
    let location = repo
        .create_location(&NewLocation::new(business.id, "Main studio"))
        .expect("create location");
    let product = repo
        .create_product(&NewProduct::new(business.id, 30, "Mini session"))
        .expect("create product");

    Studio {
        business_id: business.id,
        associate_id: associate.id,
        location_id: location.id,
        product_id: product.id,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}
