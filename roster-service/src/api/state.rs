use std::sync::Arc;

use crate::domain::{message::MessageService, service::StaffService, views::DashboardWindow};

pub struct RosterAppState {
    pub staff_service: Arc<StaffService>,
    pub messages: Arc<MessageService>,
    pub dashboard: DashboardWindow,
}
