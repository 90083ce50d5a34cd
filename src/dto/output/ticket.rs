use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub event_name: String,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    pub is_used: bool,
}

impl From<repository::Ticket> for Ticket {
    fn from(ticket: repository::Ticket) -> Self {
        Self {
            id: ticket.id.to_hex(),
            event_name: ticket.event_name,
            location: ticket.location,
            time: ticket.time,
            is_used: ticket.is_used,
        }
    }
}
