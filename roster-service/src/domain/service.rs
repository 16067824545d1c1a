use std::{future::Future, sync::Arc};

use shared::types::{NewStaff, Staff};

use crate::domain::client::{Ack, StaffClient};
use crate::domain::message::MessageService;
use crate::error::GatewayError;

/// What to delete: a bare id or a record carrying one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffRef {
    Id(i64),
    Record(Staff),
}

impl StaffRef {
    pub fn id(&self) -> i64 {
        match self {
            Self::Id(id) => *id,
            Self::Record(staff) => staff.id,
        }
    }
}

/// Gateway between the views and the staff backend.
///
/// No method returns an error. A failed request is logged to tracing and to the
/// [`MessageService`], and the caller receives an empty list or `None` instead.
pub struct StaffService {
    client: Arc<dyn StaffClient>,
    messages: Arc<MessageService>,
}

impl StaffService {
    pub fn new(client: Arc<dyn StaffClient>, messages: Arc<MessageService>) -> Self {
        Self { client, messages }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_staff(&self) -> Vec<Staff> {
        let request = async {
            let staffs = self.client.list().await?;
            self.log("fetched staffs");
            Ok::<_, GatewayError>(staffs)
        };
        self.handle_error("list_staff", Vec::new(), request).await
    }

    /// Looks a record up through the `?id=` filter. A missing id is `None`, not a failure.
    #[tracing::instrument(skip(self))]
    pub async fn find_staff_lenient(&self, id: i64) -> Option<Staff> {
        let request = async {
            let found = self.client.find_by_query_id(id).await?.into_iter().next();
            let outcome = if found.is_some() {
                "fetched"
            } else {
                "did not find"
            };
            self.log(format!("{outcome} staff id={id}"));
            Ok::<_, GatewayError>(found)
        };
        self.handle_error(&format!("find_staff_lenient id={id}"), None, request)
            .await
    }

    /// Looks a record up by path. A missing id is a 404 and goes down the failure path.
    #[tracing::instrument(skip(self))]
    pub async fn find_staff_strict(&self, id: i64) -> Option<Staff> {
        let request = async {
            let staff = self.client.find_by_id(id).await?;
            self.log(format!("fetched staff id={id}"));
            Ok::<_, GatewayError>(Some(staff))
        };
        self.handle_error(&format!("find_staff_strict id={id}"), None, request)
            .await
    }

    /// Name search. A blank term answers `[]` locally without touching the backend.
    #[tracing::instrument(skip(self))]
    pub async fn search_staff(&self, term: &str) -> Vec<Staff> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let request = async {
            let staffs = self.client.search(term).await?;
            if staffs.is_empty() {
                self.log(format!("no staffs matching \"{term}\""));
            } else {
                self.log(format!("found staffs matching \"{term}\""));
            }
            Ok::<_, GatewayError>(staffs)
        };
        self.handle_error("search_staff", Vec::new(), request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_staff(&self, staff: NewStaff) -> Option<Staff> {
        let request = async {
            let created = self.client.create(&staff).await?;
            self.log(format!("added staff w/ id={}", created.id));
            Ok::<_, GatewayError>(Some(created))
        };
        self.handle_error("create_staff", None, request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_staff(&self, target: StaffRef) -> Option<Ack> {
        let id = target.id();
        let request = async {
            let ack = self.client.delete(id).await?;
            self.log(format!("deleted staff id={id}"));
            Ok::<_, GatewayError>(Some(ack))
        };
        self.handle_error("delete_staff", None, request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_staff(&self, staff: Staff) -> Option<Ack> {
        let request = async {
            let ack = self.client.update(&staff).await?;
            self.log(format!("updated staff id={}", staff.id));
            Ok::<_, GatewayError>(Some(ack))
        };
        self.handle_error("update_staff", None, request).await
    }

    /// Runs `request` and swaps any failure for `fallback`.
    ///
    /// The failure is reported on the error log and appended to the message log as
    /// `"<operation> failed: <error>"`, exactly once.
    pub async fn handle_error<T, F>(&self, operation: &str, fallback: T, request: F) -> T
    where
        F: Future<Output = Result<T, GatewayError>>,
    {
        match request.await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(operation, error = %e, "Staff backend request failed");
                self.log(format!("{operation} failed: {e}"));
                fallback
            }
        }
    }

    fn log(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::info!("StaffService: {message}");
        self.messages.add(format!("StaffService: {message}"));
    }
}
