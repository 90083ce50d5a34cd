use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", get(index))
        .route("/tickets", get(find_tickets).post(create_ticket))
        .route(
            "/tickets/:id",
            get(find_ticket).patch(use_ticket).delete(delete_ticket),
        )
}

async fn index() -> &'static str {
    "Halo, Welcome to the TicketQ backend!"
}

async fn create_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    ticket: Result<Json<input::TicketCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<output::TicketId>), Error> {
    let Json(ticket) = ticket.map_err(|_| Error::MissingJson)?;

    let created = tickets_service.create_ticket(ticket).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn find_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Json<output::TicketList>, Error> {
    let tickets = tickets_service.find_tickets().await?;

    Ok(Json(tickets))
}

async fn find_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::TicketFound>, Error> {
    let id = parse_ticket_id(&id)?;

    let ticket = tickets_service.find_ticket(id).await?;

    Ok(Json(ticket))
}

async fn use_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::TicketId>, Error> {
    let id = parse_ticket_id(&id)?;

    let used = tickets_service.use_ticket(id).await?;

    Ok(Json(used))
}

async fn delete_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::TicketId>, Error> {
    let id = parse_ticket_id(&id)?;

    let deleted = tickets_service.delete_ticket(id).await?;

    Ok(Json(deleted))
}

///
/// Parsing happens before any service call so malformed
/// IDs never reach the database
///
fn parse_ticket_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::InvalidTicketId)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_ticket_id_ok() {
        let id = ObjectId::new();

        let parsed = parse_ticket_id(&id.to_hex()).unwrap();

        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_ticket_id_malformed() {
        let parse_result = parse_ticket_id("xyz");

        assert!(matches!(parse_result, Err(Error::InvalidTicketId)));
    }
}
