use super::{dto::Ticket, entity::TicketFindEntity, Error, TicketsRepository};
use crate::repository::entity::TicketInsertEntity;
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, options::IndexOptions, Collection, Database, IndexModel};
use std::sync::Arc;
use time::OffsetDateTime;

const TICKETS: &str = "tickets";
const INDEX_NAME_LIST_ORDER: &str = "index_is_used_time";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(TICKETS).await?;

        let collection = database.collection::<Document>(TICKETS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_LIST_ORDER.to_string()) {
            Self::create_list_order_index(&collection).await?;
            tracing::debug!("created index {TICKETS}.{INDEX_NAME_LIST_ORDER}");
        }

        Ok(Self { database })
    }

    async fn create_list_order_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "is_used": 1,
                "time": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_LIST_ORDER.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        event_name: &str,
        location: &str,
        time: OffsetDateTime,
    ) -> Result<ObjectId, Error> {
        let insert_entity = TicketInsertEntity {
            event_name: event_name.to_string(),
            location: location.to_string(),
            time: DateTime::from(time),
            is_used: false,
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error> {
        let ticket_entity = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "_id": id,
            })
            .await?;

        let ticket = ticket_entity.map(Ticket::from);

        Ok(ticket)
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, Error> {
        let cursor = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(doc! {})
            .sort(doc! {
                "is_used": 1,
                "time": 1,
            })
            .await?;

        let tickets = cursor.map_ok(Ticket::from).try_collect().await?;

        Ok(tickets)
    }

    async fn update_used(&self, id: ObjectId) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "_id": id,
                    "is_used": false,
                },
                doc! {
                    "$set": {
                        "is_used": true,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(TICKETS)
            .delete_one(doc! {
                "_id": id,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentDeleted),
        }
    }
}
