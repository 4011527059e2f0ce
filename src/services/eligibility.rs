use crate::domain::eligibility::{EligiblePair, eligible_pairs};
use crate::repository::{ProductLinkReader, ProductReader, ScheduleReader};
use crate::services::catalog::get_product;
use crate::services::{ServiceError, ServiceResult};

/// Associate/location pairs able to fulfil a product of `business_id`.
pub fn product_eligibility<R>(
    repo: &R,
    business_id: i32,
    product_id: i32,
) -> ServiceResult<Vec<EligiblePair>>
where
    R: ProductReader + ProductLinkReader + ScheduleReader + ?Sized,
{
    get_product(repo, business_id, product_id)?;
    eligible_pairs_for_product(repo, product_id)
}

pub(crate) fn eligible_pairs_for_product<R>(
    repo: &R,
    product_id: i32,
) -> ServiceResult<Vec<EligiblePair>>
where
    R: ProductLinkReader + ScheduleReader + ?Sized,
{
    let associates = repo
        .list_associate_ids_for_product(product_id)
        .map_err(ServiceError::from)?;
    let locations = repo
        .list_location_ids_for_product(product_id)
        .map_err(ServiceError::from)?;

    if associates.is_empty() || locations.is_empty() {
        return Ok(Vec::new());
    }

    let serviced = repo
        .list_serviced_pairs(&associates, &locations)
        .map_err(ServiceError::from)?;

    Ok(eligible_pairs(&associates, &locations, &serviced))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::schedule::{Schedule, ScheduleListQuery};
    use crate::repository::RepositoryResult;
    use crate::repository::mock::{MockProductLinkReader, MockScheduleReader};

    struct FakeRepo {
        link_reader: MockProductLinkReader,
        schedule_reader: MockScheduleReader,
    }

    impl ProductLinkReader for FakeRepo {
        fn list_associate_ids_for_product(&self, product_id: i32) -> RepositoryResult<Vec<i32>> {
            self.link_reader.list_associate_ids_for_product(product_id)
        }

        fn list_location_ids_for_product(&self, product_id: i32) -> RepositoryResult<Vec<i32>> {
            self.link_reader.list_location_ids_for_product(product_id)
        }
    }

    impl ScheduleReader for FakeRepo {
        fn get_schedule_by_id(&self, id: i32) -> RepositoryResult<Option<Schedule>> {
            self.schedule_reader.get_schedule_by_id(id)
        }

        fn list_schedules(&self, query: ScheduleListQuery) -> RepositoryResult<Vec<Schedule>> {
            self.schedule_reader.list_schedules(query)
        }

        fn list_serviced_pairs(
            &self,
            associate_ids: &[i32],
            location_ids: &[i32],
        ) -> RepositoryResult<Vec<(i32, i32)>> {
            self.schedule_reader
                .list_serviced_pairs(associate_ids, location_ids)
        }
    }

    #[test]
    fn pairs_need_links_on_both_sides() {
        let mut repo = FakeRepo {
            link_reader: MockProductLinkReader::new(),
            schedule_reader: MockScheduleReader::new(),
        };
        repo.link_reader
            .expect_list_associate_ids_for_product()
            .returning(|_| Ok(vec![1, 2]));
        repo.link_reader
            .expect_list_location_ids_for_product()
            .returning(|_| Ok(vec![10]));
        repo.schedule_reader
            .expect_list_serviced_pairs()
            .withf(|associates, locations| {
                associates.to_vec() == vec![1, 2] && locations.to_vec() == vec![10]
            })
            .times(1)
            .returning(|_, _| Ok(vec![(1, 10), (2, 10)]));

        let pairs = eligible_pairs_for_product(&repo, 3).expect("expected success");

        assert_eq!(
            pairs,
            vec![
                EligiblePair {
                    associate_id: 1,
                    location_id: 10
                },
                EligiblePair {
                    associate_id: 2,
                    location_id: 10
                },
            ]
        );
    }

    #[test]
    fn product_without_locations_skips_schedule_lookup() {
        let mut repo = FakeRepo {
            link_reader: MockProductLinkReader::new(),
            schedule_reader: MockScheduleReader::new(),
        };
        repo.link_reader
            .expect_list_associate_ids_for_product()
            .returning(|_| Ok(vec![1]));
        repo.link_reader
            .expect_list_location_ids_for_product()
            .returning(|_| Ok(Vec::new()));
        repo.schedule_reader.expect_list_serviced_pairs().never();

        let pairs = eligible_pairs_for_product(&repo, 3).expect("expected success");

        assert!(pairs.is_empty());
    }
}
