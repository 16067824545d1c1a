use std::sync::Arc;

use crate::domain::staff::StaffRepository;

pub struct MockBackendState {
    pub staff_repo: Arc<dyn StaffRepository>,
}
