use super::Ticket;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketFound {
    pub message: String,
    pub ticket: Ticket,
}
