use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::domain::associate::Associate;
use crate::domain::availability::{
    AvailabilityWindow, BookedInterval, DateRange, resolve_windows, subtract_bookings,
};
use crate::domain::schedule::ScheduleListQuery;
use crate::domain::weekday::DayOfWeekConvention;
use crate::repository::{
    AppointmentReader, AssociateReader, ProductLinkReader, ProductReader, ScheduleReader,
};
use crate::services::catalog::{get_associate, get_product};
use crate::services::eligibility::eligible_pairs_for_product;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the availability endpoints.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub from: NaiveDate,
    /// Last date of the range, `from` when omitted.
    pub to: Option<NaiveDate>,
    /// Restrict the answer to one location.
    pub location_id: Option<i32>,
}

impl AvailabilityQuery {
    pub fn range(&self) -> ServiceResult<DateRange> {
        Ok(DateRange::new(self.from, self.to.unwrap_or(self.from))?)
    }
}

/// Bookable slots of a product over a date range.
#[derive(Debug, Serialize)]
pub struct ProductAvailability {
    pub product_id: i32,
    pub duration_minutes: i32,
    pub range: DateRange,
    pub slots: Vec<AvailabilityWindow>,
}

/// Resolve the windows of one associate, at one location or at every location
/// the associate has schedules for.
pub fn load_associate_availability<R>(
    repo: &R,
    business_id: i32,
    associate_id: i32,
    query: AvailabilityQuery,
    convention: DayOfWeekConvention,
) -> ServiceResult<Vec<AvailabilityWindow>>
where
    R: AssociateReader + ScheduleReader + ?Sized,
{
    let range = query.range()?;
    let associate = get_associate(repo, business_id, associate_id)?;

    let mut list_query =
        ScheduleListQuery::for_associate(associate_id).active_between(range.from(), range.to());
    if let Some(location_id) = query.location_id {
        list_query = list_query.at_location(location_id);
    }
    let schedules = repo
        .list_schedules(list_query)
        .map_err(ServiceError::from)?;

    let locations: BTreeSet<i32> = schedules.iter().map(|rule| rule.location_id).collect();
    let tz = associate_tz(&associate)?;

    let mut windows = Vec::new();
    for location_id in locations {
        windows.extend(resolve_windows(
            associate_id,
            location_id,
            tz,
            &schedules,
            range,
            convention,
        )?);
    }
    sort_windows(&mut windows);

    Ok(windows)
}

/// Bookable slots of a product: eligible pairs, their resolved windows, minus
/// the associates' appointments, keeping pieces at least one session long.
pub fn load_product_availability<R>(
    repo: &R,
    business_id: i32,
    product_id: i32,
    query: AvailabilityQuery,
    convention: DayOfWeekConvention,
) -> ServiceResult<ProductAvailability>
where
    R: ProductReader
        + ProductLinkReader
        + ScheduleReader
        + AssociateReader
        + AppointmentReader
        + ?Sized,
{
    let range = query.range()?;
    let product = get_product(repo, business_id, product_id)?;
    let session = TimeDelta::minutes(i64::from(product.duration_minutes));

    let mut locations_by_associate: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for pair in eligible_pairs_for_product(repo, product_id)? {
        if query.location_id.is_none_or(|id| id == pair.location_id) {
            locations_by_associate
                .entry(pair.associate_id)
                .or_default()
                .push(pair.location_id);
        }
    }

    let mut slots = Vec::new();
    for (associate_id, locations) in locations_by_associate {
        let associate = get_associate(repo, business_id, associate_id)?;
        let tz = associate_tz(&associate)?;

        let schedules = repo
            .list_schedules(
                ScheduleListQuery::for_associate(associate_id)
                    .active_between(range.from(), range.to()),
            )
            .map_err(ServiceError::from)?;

        let booked = repo
            .list_appointments(associate_id, range.from(), range.to())
            .map_err(ServiceError::from)?
            .iter()
            .map(|appointment| BookedInterval::from_appointment(appointment, tz))
            .collect::<Result<Vec<_>, _>>()?;

        for location_id in locations {
            let windows = resolve_windows(
                associate_id,
                location_id,
                tz,
                &schedules,
                range,
                convention,
            )?;
            slots.extend(subtract_bookings(windows, &booked, session));
        }
    }
    sort_windows(&mut slots);

    Ok(ProductAvailability {
        product_id,
        duration_minutes: product.duration_minutes,
        range,
        slots,
    })
}

fn associate_tz(associate: &Associate) -> ServiceResult<chrono_tz::Tz> {
    associate.tz().map_err(|err| {
        log::error!("Associate {} has an invalid timezone: {err}", associate.id);
        ServiceError::Internal(err.to_string())
    })
}

fn sort_windows(windows: &mut [AvailabilityWindow]) {
    windows.sort_by_key(|window| (window.start, window.associate_id, window.location_id));
}
