use chrono::NaiveDate;
use diesel::prelude::*;

use crate::{
    domain::appointment::{Appointment as DomainAppointment, NewAppointment as DomainNewAppointment},
    models::appointment::{Appointment as DbAppointment, NewAppointment as DbNewAppointment},
    repository::{AppointmentReader, AppointmentWriter, DieselRepository, RepositoryResult},
};

impl AppointmentReader for DieselRepository {
    fn list_appointments(
        &self,
        associate_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepositoryResult<Vec<DomainAppointment>> {
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let items = appointments::table
            .filter(appointments::associate_id.eq(associate_id))
            .filter(appointments::date.between(from, to))
            .order((appointments::date.asc(), appointments::start_time.asc()))
            .load::<DbAppointment>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl AppointmentWriter for DieselRepository {
    fn create_appointment(
        &self,
        new_appointment: &DomainNewAppointment,
    ) -> RepositoryResult<DomainAppointment> {
        use crate::schema::appointments;

        new_appointment.validate()?;

        let mut conn = self.conn()?;
        let db_new = DbNewAppointment::from(new_appointment);

        let created = diesel::insert_into(appointments::table)
            .values(&db_new)
            .get_result::<DbAppointment>(&mut conn)?;

        Ok(created.into())
    }
}
