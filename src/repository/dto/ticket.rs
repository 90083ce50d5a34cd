use crate::repository::entity::TicketFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct Ticket {
    pub id: ObjectId,
    pub event_name: String,
    pub location: String,
    pub time: OffsetDateTime,
    pub is_used: bool,
}

impl From<TicketFindEntity> for Ticket {
    fn from(entity: TicketFindEntity) -> Self {
        Self {
            id: entity._id,
            event_name: entity.event_name,
            location: entity.location,
            time: entity.time.to_time_0_3(),
            is_used: entity.is_used,
        }
    }
}
