use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Save new ticket in application.
    ///
    /// ### Returns
    /// ID of created ticket
    ///
    /// ### Errors
    /// - [Error::MissingField] when a required field is absent
    /// - [Error::InvalidTimeFormat] when time is not a valid timestamp
    /// - [Error::TimeInPast] when time already passed
    ///
    async fn create_ticket(&self, ticket: input::TicketCreate) -> Result<output::TicketId, Error>;

    ///
    /// Find all tickets.
    /// Unused tickets come first, each group sorted ascending by time.
    ///
    async fn find_tickets(&self) -> Result<output::TicketList, Error>;

    ///
    /// Find one ticket
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket with id does not exist
    ///
    async fn find_ticket(&self, id: ObjectId) -> Result<output::TicketFound, Error>;

    ///
    /// Mark ticket as used
    ///
    /// ### Errors
    /// - [Error::TicketNotExistOrUsed] when
    ///     - ticket with id does not exist
    ///     - ticket is already used
    ///
    async fn use_ticket(&self, id: ObjectId) -> Result<output::TicketId, Error>;

    ///
    /// Delete ticket
    ///
    /// ### Errors
    /// - [Error::TicketNotExistOrDeleted] when ticket with id does not exist
    ///
    async fn delete_ticket(&self, id: ObjectId) -> Result<output::TicketId, Error>;
}
