use serde::Deserialize;

///
/// Fields are optional so missing ones can be reported
/// one by one instead of failing deserialization.
/// Unknown keys are ignored.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreate {
    pub event_name: Option<String>,
    pub location: Option<String>,
    pub time: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ticket_create_json_deserialize_ok() {
        let json = r#"{
            "eventName": "Rust Meetup",
            "location": "Warsaw",
            "time": "2999-01-01T00:00:00Z",
            "somethingElse": 42
        }"#;

        let ticket = serde_json::from_str::<TicketCreate>(json).unwrap();

        assert_eq!(ticket.event_name.as_deref(), Some("Rust Meetup"));
        assert_eq!(ticket.location.as_deref(), Some("Warsaw"));
        assert_eq!(ticket.time.as_deref(), Some("2999-01-01T00:00:00Z"));
    }

    #[test]
    fn ticket_create_json_deserialize_missing_fields_ok() {
        let json = r#"{ "location": "Warsaw" }"#;

        let ticket = serde_json::from_str::<TicketCreate>(json).unwrap();

        assert!(ticket.event_name.is_none());
        assert!(ticket.time.is_none());
    }
}
