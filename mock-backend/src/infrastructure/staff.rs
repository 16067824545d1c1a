use async_trait::async_trait;
use shared::types::{NewStaff, Staff};
use tokio::sync::RwLock;

use crate::{
    domain::staff::{StaffQuery, StaffRepository, gen_id},
    error::MockBackendError,
};

const SEED: [(i64, &str); 10] = [
    (1, "Dr Nice"),
    (2, "Narco"),
    (3, "Bombasto"),
    (4, "Celeritas"),
    (5, "Magneta"),
    (6, "RubberMan"),
    (7, "Dynama"),
    (8, "Dr IQ"),
    (9, "Magma"),
    (10, "Tornado"),
];

/// `staffs` collection held in process memory. State is lost on restart.
pub struct InMemoryStaffRepository {
    staffs: RwLock<Vec<Staff>>,
}

impl InMemoryStaffRepository {
    pub fn new(staffs: Vec<Staff>) -> Self {
        Self {
            staffs: RwLock::new(staffs),
        }
    }

    /// Repository pre-populated with the ten demo records (ids 1 to 10).
    pub fn seeded() -> Self {
        Self::new(
            SEED.iter()
                .map(|(id, name)| Staff::new(*id, *name))
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl StaffRepository for InMemoryStaffRepository {
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Staff>, MockBackendError> {
        let staffs = self.staffs.read().await;
        Ok(staffs.iter().find(|s| s.id == id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, query: StaffQuery) -> Result<Vec<Staff>, MockBackendError> {
        let staffs = self.staffs.read().await;
        Ok(staffs.iter().filter(|s| query.matches(s)).cloned().collect())
    }

    #[tracing::instrument(skip(self))]
    async fn create(&self, staff: NewStaff) -> Result<Staff, MockBackendError> {
        let mut staffs = self.staffs.write().await;
        let created = Staff {
            id: gen_id(&staffs),
            name: staff.name,
        };
        staffs.push(created.clone());

        tracing::debug!(id = created.id, "Staff inserted");
        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    async fn update(&self, staff: Staff) -> Result<(), MockBackendError> {
        let mut staffs = self.staffs.write().await;
        let existing = staffs
            .iter_mut()
            .find(|s| s.id == staff.id)
            .ok_or_else(|| MockBackendError::NotFound(format!("Staff {} not found", staff.id)))?;

        existing.name = staff.name;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, MockBackendError> {
        let mut staffs = self.staffs.write().await;
        let before = staffs.len();
        staffs.retain(|s| s.id != id);
        Ok(staffs.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_repository_has_ten_records_in_id_order() {
        let repo = InMemoryStaffRepository::seeded();
        let all = repo.find_all(StaffQuery::default()).await.unwrap();

        assert_eq!(all.len(), 10);
        let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(all[0].name, "Dr Nice");
    }

    #[tokio::test]
    async fn create_on_seeded_assigns_eleven() {
        let repo = InMemoryStaffRepository::seeded();
        let created = repo.create(NewStaff::new("Zero")).await.unwrap();
        assert_eq!(created.id, 11);

        let next = repo.create(NewStaff::new("One")).await.unwrap();
        assert_eq!(next.id, 12);
    }

    #[tokio::test]
    async fn create_on_empty_assigns_baseline() {
        let repo = InMemoryStaffRepository::empty();
        let created = repo.create(NewStaff::new("First")).await.unwrap();
        assert_eq!(created.id, 11);
    }

    #[tokio::test]
    async fn update_renames_existing_record() {
        let repo = InMemoryStaffRepository::seeded();
        repo.update(Staff::new(4, "Celeritas II")).await.unwrap();

        let found = repo.find_by_id(4).await.unwrap().unwrap();
        assert_eq!(found.name, "Celeritas II");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = InMemoryStaffRepository::seeded();
        let err = repo.update(Staff::new(99, "Ghost")).await.unwrap_err();
        assert!(matches!(err, MockBackendError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repo = InMemoryStaffRepository::seeded();
        assert!(repo.delete(5).await.unwrap());
        assert!(!repo.delete(5).await.unwrap());
        assert!(repo.find_by_id(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_stay_unique_after_delete_of_max() {
        let repo = InMemoryStaffRepository::seeded();
        repo.delete(10).await.unwrap();
        let created = repo.create(NewStaff::new("Tornado II")).await.unwrap();
        assert_eq!(created.id, 10);

        let all = repo.find_all(StaffQuery::default()).await.unwrap();
        let mut ids: Vec<i64> = all.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }
}
