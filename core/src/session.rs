//! Session-scoped chat state
//!
//! A [`ChatSession`] owns the transcript for one interactive session and the
//! client used to answer each turn. It is created when the session starts,
//! passed explicitly to the input loop, and dropped when the session ends.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::client::RecommendationClient;
use crate::transcript::{ChatMessage, Transcript};
use crate::transport::{ReqwestTransport, Transport};

pub struct ChatSession<T = ReqwestTransport> {
    id: String,
    client: RecommendationClient<T>,
    transcript: Transcript,
}

impl<T: Transport> ChatSession<T> {
    pub fn new(client: RecommendationClient<T>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client,
            transcript: Transcript::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn client(&self) -> &RecommendationClient<T> {
        &self.client
    }

    /// Records the user's turn, asks for a recommendation and records the reply.
    ///
    /// Returns the assistant message just appended.
    pub async fn submit(&mut self, text: &str) -> &ChatMessage {
        self.transcript.push(ChatMessage::user(text));

        let span = info_span!("turn", session = %self.id, turn = self.transcript.len() / 2 + 1);
        let reply = self.client.recommend(text).instrument(span).await;

        self.transcript.push(ChatMessage::assistant(reply));
        info!(session = %self.id, messages = self.transcript.len(), "Turn complete");

        &self.transcript.messages()[self.transcript.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{reply_body, StubTransport};
    use crate::config::TriageConfig;
    use crate::errors::TRANSPORT_FAILURE_MESSAGE;
    use crate::transcript::Role;

    fn session_with(transport: StubTransport) -> ChatSession<StubTransport> {
        let config = TriageConfig::default().with_api_key("test-key");
        ChatSession::new(RecommendationClient::with_transport(config, transport))
    }

    #[tokio::test]
    async fn test_submissions_alternate_roles() {
        let mut session = session_with(StubTransport::respond(200, &reply_body("Cardiology")));

        let inputs = ["chest pain", "palpitations", "short of breath", "dizzy"];
        for input in inputs {
            let reply = session.submit(input).await;
            assert_eq!(reply.role(), Role::Assistant);
            assert_eq!(reply.content(), "Cardiology");
        }

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2 * inputs.len());
        for (i, message) in transcript.iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(message.role(), expected);
        }
        assert_eq!(transcript.messages()[2].content(), "palpitations");
    }

    #[tokio::test]
    async fn test_failed_turn_still_records_fallback() {
        let mut session = session_with(StubTransport::fail("connection reset"));

        let reply = session.submit("back pain").await.clone();
        assert_eq!(reply.content(), TRANSPORT_FAILURE_MESSAGE);

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0], ChatMessage::user("back pain"));
        assert_eq!(transcript.last(), Some(&reply));
    }

    #[tokio::test]
    async fn test_each_call_sends_only_latest_message() {
        let transport = StubTransport::respond(200, &reply_body("Urology"));
        let mut session = session_with(transport.clone());

        session.submit("burning when urinating").await;
        session.submit("frequent urination").await;

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        let second = requests[1].1["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(second.contains("frequent urination"));
        assert!(!second.contains("burning when urinating"));
        assert_eq!(requests[1].1["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let a = session_with(StubTransport::respond(200, "{}"));
        let b = session_with(StubTransport::respond(200, "{}"));
        assert_ne!(a.id(), b.id());
    }
}
