/// Payload pushed on the `/events` stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiveEvent {
    /// New alert data is available and the feed should be fetched again.
    Update,
    Other(String),
}

impl LiveEvent {
    pub const UPDATE: &'static str = "update";

    pub fn parse(payload: &str) -> Self {
        if payload == Self::UPDATE {
            Self::Update
        } else {
            Self::Other(payload.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_literal_update_triggers() {
        assert_eq!(LiveEvent::parse("update"), LiveEvent::Update);
        assert_eq!(
            LiveEvent::parse("Update"),
            LiveEvent::Other("Update".to_string())
        );
        assert_eq!(
            LiveEvent::parse("ping"),
            LiveEvent::Other("ping".to_string())
        );
        assert_eq!(LiveEvent::parse(""), LiveEvent::Other(String::new()));
    }
}
