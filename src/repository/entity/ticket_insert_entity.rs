use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity {
    pub event_name: String,
    pub location: String,
    pub time: DateTime,
    pub is_used: bool,
}
