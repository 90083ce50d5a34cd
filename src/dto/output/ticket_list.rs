use super::Ticket;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketList {
    pub message: String,
    pub tickets: Vec<Ticket>,
}
