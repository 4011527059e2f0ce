use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::schedule::{
        NewSchedule as DomainNewSchedule, Schedule as DomainSchedule, ScheduleListQuery,
    },
    models::schedule::{NewSchedule as DbNewSchedule, Schedule as DbSchedule},
    repository::{
        DieselRepository, RepositoryError, RepositoryResult, ScheduleReader, ScheduleWriter,
    },
};

impl ScheduleReader for DieselRepository {
    fn get_schedule_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSchedule>> {
        use crate::schema::schedules;

        let mut conn = self.conn()?;
        let schedule = schedules::table
            .filter(schedules::id.eq(id))
            .first::<DbSchedule>(&mut conn)
            .optional()?;

        Ok(schedule.map(Into::into))
    }

    fn list_schedules(&self, query: ScheduleListQuery) -> RepositoryResult<Vec<DomainSchedule>> {
        use crate::schema::schedules;

        let mut conn = self.conn()?;
        let mut items = schedules::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(associate_id) = query.associate_id {
            items = items.filter(schedules::associate_id.eq(associate_id));
        }

        if let Some(location_id) = query.location_id {
            items = items.filter(schedules::location_id.eq(location_id));
        }

        if let Some((from, to)) = query.active_between {
            items = items
                .filter(schedules::effective_on.le(to))
                .filter(schedules::expires_on.ge(from));
        }

        let db_schedules = items
            .order((
                schedules::day_of_week.asc(),
                schedules::start_time.asc(),
                schedules::id.asc(),
            ))
            .load::<DbSchedule>(&mut conn)?;

        Ok(db_schedules.into_iter().map(Into::into).collect())
    }

    fn list_serviced_pairs(
        &self,
        associate_ids: &[i32],
        location_ids: &[i32],
    ) -> RepositoryResult<Vec<(i32, i32)>> {
        use crate::schema::schedules;

        if associate_ids.is_empty() || location_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let pairs = schedules::table
            .filter(schedules::associate_id.eq_any(associate_ids))
            .filter(schedules::location_id.eq_any(location_ids))
            .select((schedules::associate_id, schedules::location_id))
            .distinct()
            .order((schedules::associate_id.asc(), schedules::location_id.asc()))
            .load::<(i32, i32)>(&mut conn)?;

        Ok(pairs)
    }
}

impl ScheduleWriter for DieselRepository {
    fn create_schedule(&self, new_schedule: &DomainNewSchedule) -> RepositoryResult<DomainSchedule> {
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| insert_schedule(conn, new_schedule))
    }

    fn create_schedules(&self, new_schedules: &[DomainNewSchedule]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            for new_schedule in new_schedules {
                insert_schedule(conn, new_schedule)?;
            }
            Ok(new_schedules.len())
        })
    }

    fn supersede_schedule(
        &self,
        schedule_id: i32,
        replacement: &DomainNewSchedule,
    ) -> RepositoryResult<DomainSchedule> {
        use crate::schema::schedules;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let current: DomainSchedule = schedules::table
                .filter(schedules::id.eq(schedule_id))
                .first::<DbSchedule>(conn)?
                .into();

            let expires_on = replacement.supersedes(&current)?;

            diesel::update(schedules::table.filter(schedules::id.eq(schedule_id)))
                .set(schedules::expires_on.eq(expires_on))
                .execute(conn)?;

            insert_schedule(conn, replacement)
        })
    }
}

fn insert_schedule(
    conn: &mut SqliteConnection,
    new_schedule: &DomainNewSchedule,
) -> RepositoryResult<DomainSchedule> {
    use crate::schema::schedules;

    new_schedule.validate()?;
    ensure_same_business(conn, new_schedule.associate_id, new_schedule.location_id)?;

    let db_new = DbNewSchedule::from(new_schedule);
    let created = diesel::insert_into(schedules::table)
        .values(&db_new)
        .get_result::<DbSchedule>(conn)?;

    Ok(created.into())
}

/// Fails unless the associate and the location exist and share a business.
fn ensure_same_business(
    conn: &mut SqliteConnection,
    associate_id: i32,
    location_id: i32,
) -> RepositoryResult<()> {
    use crate::schema::{associates, locations};

    let associate_business = associates::table
        .filter(associates::id.eq(associate_id))
        .select(associates::business_id)
        .first::<i32>(conn)
        .optional()?
        .ok_or(RepositoryError::MissingReference)?;

    let location_business = locations::table
        .filter(locations::id.eq(location_id))
        .select(locations::business_id)
        .first::<i32>(conn)
        .optional()?
        .ok_or(RepositoryError::MissingReference)?;

    if associate_business == location_business {
        Ok(())
    } else {
        Err(RepositoryError::ValidationError(format!(
            "associate {associate_id} and location {location_id} belong to different businesses"
        )))
    }
}
