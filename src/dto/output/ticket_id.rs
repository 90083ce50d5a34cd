use serde::Serialize;

#[derive(Serialize)]
pub struct TicketId {
    pub message: String,
    pub id: String,
}
