use super::TicketsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, TicketsRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }

    ///
    /// Checks required fields one by one so the error
    /// names the first missing field
    ///
    fn validate_create_ticket(
        ticket: input::TicketCreate,
    ) -> Result<(String, String, OffsetDateTime), Error> {
        let Some(event_name) = ticket.event_name else {
            return Err(Error::MissingField("eventName"));
        };
        let Some(location) = ticket.location else {
            return Err(Error::MissingField("location"));
        };
        let Some(time) = ticket.time else {
            return Err(Error::MissingField("time"));
        };

        let time = Self::validate_time(&time)?;

        Ok((event_name, location, time))
    }

    ///
    /// Accepts RFC 3339 timestamps, both 'Z' and numeric UTC offsets.
    /// Rejects instants strictly earlier than now.
    ///
    fn validate_time(time: &str) -> Result<OffsetDateTime, Error> {
        let time = OffsetDateTime::parse(time, &Rfc3339).map_err(|_| Error::InvalidTimeFormat)?;

        if time < OffsetDateTime::now_utc() {
            return Err(Error::TimeInPast);
        }

        Ok(time)
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(&self, ticket: input::TicketCreate) -> Result<output::TicketId, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        let (event_name, location, time) = Self::validate_create_ticket(ticket)?;

        let id = self.repository.insert(&event_name, &location, time).await?;

        let id = id.to_hex();
        tracing::info!(id, "created ticket");

        Ok(output::TicketId {
            message: format!("Created new ticket: {event_name}"),
            id,
        })
    }

    async fn find_tickets(&self) -> Result<output::TicketList, Error> {
        tracing::info!("finding tickets");

        let tickets = self.repository.find_all().await?;
        tracing::info!(count = tickets.len(), "found tickets");

        let tickets = tickets.into_iter().map(output::Ticket::from).collect();

        Ok(output::TicketList {
            message: "Currently viewing all tickets".to_string(),
            tickets,
        })
    }

    async fn find_ticket(&self, id: ObjectId) -> Result<output::TicketFound, Error> {
        tracing::info!("finding ticket");

        let ticket = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        tracing::info!("found ticket");

        Ok(output::TicketFound {
            message: format!("Viewing a ticket with ID: {}", id.to_hex()),
            ticket: ticket.into(),
        })
    }

    async fn use_ticket(&self, id: ObjectId) -> Result<output::TicketId, Error> {
        tracing::info!("marking ticket as used");

        self.repository
            .update_used(id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::TicketNotExistOrUsed,
                err => Error::Database(err),
            })?;

        let id = id.to_hex();
        tracing::info!(id, "marked ticket as used");

        Ok(output::TicketId {
            message: format!("Ticket ID: {id} was successfully marked as used"),
            id,
        })
    }

    async fn delete_ticket(&self, id: ObjectId) -> Result<output::TicketId, Error> {
        tracing::info!("deleting ticket");

        self.repository.delete(id).await.map_err(|err| match err {
            repository::Error::NoDocumentDeleted => Error::TicketNotExistOrDeleted,
            err => Error::Database(err),
        })?;

        let id = id.to_hex();
        tracing::info!(id, "deleted ticket");

        Ok(output::TicketId {
            message: format!("Ticket ID: {id} was successfully deleted"),
            id,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{MockTicketsRepository, Ticket};
    use time::macros::datetime;

    fn valid_ticket() -> input::TicketCreate {
        input::TicketCreate {
            event_name: Some("Rust Meetup".to_string()),
            location: Some("Warsaw".to_string()),
            time: Some("2999-01-01T00:00:00Z".to_string()),
        }
    }

    #[tokio::test]
    async fn create_ticket_ok() {
        let id = ObjectId::new();

        let mut repository = MockTicketsRepository::new();
        repository
            .expect_insert()
            .withf(|event_name, location, time| {
                event_name == "Rust Meetup"
                    && location == "Warsaw"
                    && *time == datetime!(2999-01-01 00:00:00 UTC)
            })
            .return_once(move |_, _, _| Ok(id));
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let created = service.create_ticket(valid_ticket()).await.unwrap();

        assert_eq!(created.id, id.to_hex());
        assert_eq!(created.message, "Created new ticket: Rust Meetup");
    }

    #[tokio::test]
    async fn create_ticket_time_with_numeric_offset_ok() {
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_insert()
            .return_once(|_, _, _| Ok(ObjectId::new()));
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let mut ticket = valid_ticket();
        ticket.time = Some("2999-01-01T00:00:00+00:00".to_string());

        let create_result = service.create_ticket(ticket).await;

        assert!(create_result.is_ok());
    }

    #[tokio::test]
    async fn create_ticket_missing_event_name() {
        let repository = MockTicketsRepository::new();
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let mut ticket = valid_ticket();
        ticket.event_name = None;

        let create_result = service.create_ticket(ticket).await;

        assert!(matches!(
            create_result,
            Err(Error::MissingField("eventName"))
        ));
    }

    #[tokio::test]
    async fn create_ticket_missing_location() {
        let repository = MockTicketsRepository::new();
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let mut ticket = valid_ticket();
        ticket.location = None;

        let create_result = service.create_ticket(ticket).await;

        assert!(matches!(
            create_result,
            Err(Error::MissingField("location"))
        ));
    }

    #[tokio::test]
    async fn create_ticket_missing_time() {
        let repository = MockTicketsRepository::new();
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let mut ticket = valid_ticket();
        ticket.time = None;

        let create_result = service.create_ticket(ticket).await;

        assert!(matches!(create_result, Err(Error::MissingField("time"))));
    }

    #[tokio::test]
    async fn create_ticket_missing_fields_reported_in_order() {
        let repository = MockTicketsRepository::new();
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let ticket = input::TicketCreate {
            event_name: None,
            location: None,
            time: None,
        };

        let create_result = service.create_ticket(ticket).await;

        assert!(matches!(
            create_result,
            Err(Error::MissingField("eventName"))
        ));
    }

    #[tokio::test]
    async fn create_ticket_invalid_time_format() {
        let repository = MockTicketsRepository::new();
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let mut ticket = valid_ticket();
        ticket.time = Some("not-a-date".to_string());

        let create_result = service.create_ticket(ticket).await;

        assert!(matches!(create_result, Err(Error::InvalidTimeFormat)));
    }

    #[tokio::test]
    async fn create_ticket_time_without_offset_rejected() {
        let repository = MockTicketsRepository::new();
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let mut ticket = valid_ticket();
        ticket.time = Some("2999-01-01T00:00:00".to_string());

        let create_result = service.create_ticket(ticket).await;

        assert!(matches!(create_result, Err(Error::InvalidTimeFormat)));
    }

    #[tokio::test]
    async fn create_ticket_time_in_past() {
        let repository = MockTicketsRepository::new();
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let mut ticket = valid_ticket();
        ticket.time = Some("2000-01-01T00:00:00Z".to_string());

        let create_result = service.create_ticket(ticket).await;

        assert!(matches!(create_result, Err(Error::TimeInPast)));
    }

    #[tokio::test]
    async fn find_tickets_maps_repository_tickets() {
        let id = ObjectId::new();

        let mut repository = MockTicketsRepository::new();
        repository.expect_find_all().return_once(move || {
            Ok(vec![Ticket {
                id,
                event_name: "Rust Meetup".to_string(),
                location: "Warsaw".to_string(),
                time: datetime!(2999-01-01 00:00:00 UTC),
                is_used: false,
            }])
        });
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let list = service.find_tickets().await.unwrap();

        assert_eq!(list.tickets.len(), 1);
        assert_eq!(list.tickets[0].id, id.to_hex());
        assert_eq!(list.tickets[0].event_name, "Rust Meetup");
        assert!(!list.tickets[0].is_used);
    }

    #[tokio::test]
    async fn find_tickets_empty_ok() {
        let mut repository = MockTicketsRepository::new();
        repository.expect_find_all().return_once(|| Ok(Vec::new()));
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let list = service.find_tickets().await.unwrap();

        assert!(list.tickets.is_empty());
    }

    #[tokio::test]
    async fn find_ticket_not_exist() {
        let mut repository = MockTicketsRepository::new();
        repository.expect_find().return_once(|_| Ok(None));
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let find_result = service.find_ticket(ObjectId::new()).await;

        assert!(matches!(find_result, Err(Error::TicketNotExist)));
    }

    #[tokio::test]
    async fn find_ticket_ok() {
        let id = ObjectId::new();

        let mut repository = MockTicketsRepository::new();
        repository.expect_find().return_once(move |_| {
            Ok(Some(Ticket {
                id,
                event_name: "Rust Meetup".to_string(),
                location: "Warsaw".to_string(),
                time: datetime!(2999-01-01 00:00:00 UTC),
                is_used: true,
            }))
        });
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let found = service.find_ticket(id).await.unwrap();

        assert_eq!(found.ticket.id, id.to_hex());
        assert!(found.ticket.is_used);
    }

    #[tokio::test]
    async fn use_ticket_ok() {
        let id = ObjectId::new();

        let mut repository = MockTicketsRepository::new();
        repository.expect_update_used().return_once(|_| Ok(()));
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let used = service.use_ticket(id).await.unwrap();

        assert_eq!(used.id, id.to_hex());
    }

    #[tokio::test]
    async fn use_ticket_not_exist_or_used() {
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_update_used()
            .return_once(|_| Err(repository::Error::NoDocumentUpdated));
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let use_result = service.use_ticket(ObjectId::new()).await;

        assert!(matches!(use_result, Err(Error::TicketNotExistOrUsed)));
    }

    #[tokio::test]
    async fn delete_ticket_ok() {
        let id = ObjectId::new();

        let mut repository = MockTicketsRepository::new();
        repository.expect_delete().return_once(|_| Ok(()));
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let deleted = service.delete_ticket(id).await.unwrap();

        assert_eq!(deleted.id, id.to_hex());
    }

    #[tokio::test]
    async fn delete_ticket_not_exist_or_deleted() {
        let mut repository = MockTicketsRepository::new();
        repository
            .expect_delete()
            .return_once(|_| Err(repository::Error::NoDocumentDeleted));
        let service = TicketsServiceImpl::new(Arc::new(repository));

        let delete_result = service.delete_ticket(ObjectId::new()).await;

        assert!(matches!(
            delete_result,
            Err(Error::TicketNotExistOrDeleted)
        ));
    }
}
