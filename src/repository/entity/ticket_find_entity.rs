use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,
    pub event_name: String,
    pub location: String,
    pub time: DateTime,
    pub is_used: bool,
}
