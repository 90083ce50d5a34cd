use super::{dto::Ticket, error::Error};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket with is_used = false
    ///
    /// ### Returns
    /// ID assigned by the database
    ///
    async fn insert(
        &self,
        event_name: &str,
        location: &str,
        time: OffsetDateTime,
    ) -> Result<ObjectId, Error>;

    ///
    /// Finds one ticket by its ID
    ///
    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error>;

    ///
    /// Finds all tickets.
    /// Unused tickets come first, each group sorted ascending by time
    ///
    async fn find_all(&self) -> Result<Vec<Ticket>, Error>;

    ///
    /// Marks unused ticket as used
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - ticket does not exist
    ///     - ticket is already used
    ///
    async fn update_used(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// Removes ticket
    ///
    /// ### Errors
    /// - [Error::NoDocumentDeleted] when ticket does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), Error>;
}
