use chrono::NaiveDate;
use mockall::mock;

use super::{
    AppointmentReader, AppointmentWriter, AssistantReader, AssistantWriter, AssociateReader,
    AssociateWriter, BusinessReader, BusinessWriter, LocationReader, LocationWriter, PhotoReader,
    PhotoWriter, ProductLinkReader, ProductLinkWriter, ProductReader, ProductWriter,
    RepositoryResult, ScheduleReader, ScheduleWriter,
};
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

mock! {
    pub BusinessReader {}

    impl BusinessReader for BusinessReader {
        fn get_business_by_id(&self, id: i32) -> RepositoryResult<Option<Business>>;
        fn list_businesses(&self) -> RepositoryResult<Vec<Business>>;
    }
}

mock! {
    pub BusinessWriter {}

    impl BusinessWriter for BusinessWriter {
        fn create_business(&self, new_business: &NewBusiness) -> RepositoryResult<Business>;
    }
}

mock! {
    pub AssistantReader {}

    impl AssistantReader for AssistantReader {
        fn get_assistant_by_external_id(&self, external_id: &str) -> RepositoryResult<Option<Assistant>>;
        fn list_assistants(&self, business_id: i32) -> RepositoryResult<Vec<Assistant>>;
    }
}

mock! {
    pub AssistantWriter {}

    impl AssistantWriter for AssistantWriter {
        fn create_assistant(&self, new_assistant: &NewAssistant) -> RepositoryResult<Assistant>;
    }
}

mock! {
    pub AssociateReader {}

    impl AssociateReader for AssociateReader {
        fn get_associate_by_id(&self, id: i32, business_id: i32) -> RepositoryResult<Option<Associate>>;
        fn list_associates(&self, business_id: i32) -> RepositoryResult<Vec<Associate>>;
    }
}

mock! {
    pub AssociateWriter {}

    impl AssociateWriter for AssociateWriter {
        fn create_associate(&self, new_associate: &NewAssociate) -> RepositoryResult<Associate>;
    }
}

mock! {
    pub LocationReader {}

    impl LocationReader for LocationReader {
        fn get_location_by_id(&self, id: i32, business_id: i32) -> RepositoryResult<Option<Location>>;
        fn list_locations(&self, business_id: i32) -> RepositoryResult<Vec<Location>>;
        fn list_locations_for_product(&self, product_id: i32, business_id: i32) -> RepositoryResult<Vec<Location>>;
    }
}

mock! {
    pub LocationWriter {}

    impl LocationWriter for LocationWriter {
        fn create_location(&self, new_location: &NewLocation) -> RepositoryResult<Location>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32, business_id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    }
}

mock! {
    pub PhotoReader {}

    impl PhotoReader for PhotoReader {
        fn list_photos_for_product(&self, product_id: i32, business_id: i32) -> RepositoryResult<Vec<Photo>>;
    }
}

mock! {
    pub PhotoWriter {}

    impl PhotoWriter for PhotoWriter {
        fn create_photo(&self, new_photo: &NewPhoto) -> RepositoryResult<Photo>;
    }
}

mock! {
    pub ProductLinkReader {}

    impl ProductLinkReader for ProductLinkReader {
        fn list_associate_ids_for_product(&self, product_id: i32) -> RepositoryResult<Vec<i32>>;
        fn list_location_ids_for_product(&self, product_id: i32) -> RepositoryResult<Vec<i32>>;
    }
}

mock! {
    pub ProductLinkWriter {}

    impl ProductLinkWriter for ProductLinkWriter {
        fn link_product(&self, link: &NewProductLink) -> RepositoryResult<()>;
    }
}

mock! {
    pub ScheduleReader {}

    impl ScheduleReader for ScheduleReader {
        fn get_schedule_by_id(&self, id: i32) -> RepositoryResult<Option<Schedule>>;
        fn list_schedules(&self, query: ScheduleListQuery) -> RepositoryResult<Vec<Schedule>>;
        fn list_serviced_pairs(&self, associate_ids: &[i32], location_ids: &[i32]) -> RepositoryResult<Vec<(i32, i32)>>;
    }
}

mock! {
    pub ScheduleWriter {}

    impl ScheduleWriter for ScheduleWriter {
        fn create_schedule(&self, new_schedule: &NewSchedule) -> RepositoryResult<Schedule>;
        fn create_schedules(&self, new_schedules: &[NewSchedule]) -> RepositoryResult<usize>;
        fn supersede_schedule(&self, schedule_id: i32, replacement: &NewSchedule) -> RepositoryResult<Schedule>;
    }
}

mock! {
    pub AppointmentReader {}

    impl AppointmentReader for AppointmentReader {
        fn list_appointments(&self, associate_id: i32, from: NaiveDate, to: NaiveDate) -> RepositoryResult<Vec<Appointment>>;
    }
}

mock! {
    pub AppointmentWriter {}

    impl AppointmentWriter for AppointmentWriter {
        fn create_appointment(&self, new_appointment: &NewAppointment) -> RepositoryResult<Appointment>;
    }
}
