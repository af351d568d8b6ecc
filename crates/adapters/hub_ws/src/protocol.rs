//! Hub wire protocol — handshake frames and snapshot parsing.
//!
//! The hub speaks plain text frames over the websocket. Commands and
//! handshake requests are colon-prefixed strings; state arrives as JSON
//! objects. A connection becomes usable by sending the credentials
//! frame followed by the full-state request; the hub answers the latter
//! with a snapshot whose `all.programs` key carries the automation
//! program list.

use holibot_domain::program::AutomationProgram;

/// Request for the hub's full current state.
pub const SNAPSHOT_REQUEST: &str = "GET:all";

/// Credentials frame, sent first on every new connection.
#[must_use]
pub fn auth_request(username: &str, password: &str) -> String {
    format!("AUTH:{username}:{password}")
}

/// One interpreted text frame from the hub.
#[derive(Debug)]
pub enum Frame {
    /// Full-state snapshot carrying the automation program list.
    Snapshot(Vec<AutomationProgram>),
    /// Hub chatter the agent does not act on.
    Other,
}

/// Interpret one text frame.
///
/// Non-JSON frames and JSON without the `all.programs` key are normal
/// hub chatter ([`Frame::Other`]). A snapshot whose program rows fail
/// to deserialize is a protocol error; the caller keeps its stale
/// cache.
///
/// # Errors
///
/// Returns the deserialization error for a malformed program list.
pub fn parse_frame(text: &str) -> Result<Frame, serde_json::Error> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return Ok(Frame::Other);
    };
    match value.pointer("/all/programs") {
        Some(programs) => {
            let programs: Vec<AutomationProgram> = serde_json::from_value(programs.clone())?;
            Ok(Frame::Snapshot(programs))
        }
        None => Ok(Frame::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_auth_request() {
        assert_eq!(auth_request("bot", "secret"), "AUTH:bot:secret");
    }

    #[test]
    fn should_parse_snapshot_frame() {
        let text = r#"{
            "all": {
                "devices": [],
                "programs": [
                    {"id": 11, "name": "Morning scene (1)", "active": true},
                    {"id": 12, "name": "Morning%20scene vacation (1)", "active": false}
                ]
            }
        }"#;
        let Frame::Snapshot(programs) = parse_frame(text).unwrap() else {
            panic!("expected snapshot frame");
        };
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[0].id, 11);
        assert!(programs[0].active);
        assert_eq!(programs[1].name, "Morning%20scene vacation (1)");
    }

    #[test]
    fn should_treat_other_json_as_chatter() {
        assert!(matches!(
            parse_frame(r#"{"attribute": {"id": 4, "value": 1}}"#),
            Ok(Frame::Other)
        ));
    }

    #[test]
    fn should_treat_non_json_as_chatter() {
        assert!(matches!(parse_frame("pong"), Ok(Frame::Other)));
    }

    #[test]
    fn should_reject_snapshot_with_malformed_rows() {
        let text = r#"{"all": {"programs": [{"id": "not-a-number"}]}}"#;
        assert!(parse_frame(text).is_err());
    }

    #[test]
    fn should_parse_empty_program_list() {
        let Frame::Snapshot(programs) = parse_frame(r#"{"all": {"programs": []}}"#).unwrap()
        else {
            panic!("expected snapshot frame");
        };
        assert!(programs.is_empty());
    }
}
