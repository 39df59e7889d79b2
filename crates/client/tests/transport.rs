//! End-to-end tests: client session through a live relay.

use anyhow::{Result, anyhow};
use fitb_client::{
    APOLOGY, ClientConfig, Conversation, GREETING, HttpTransport, Role, Session, Transport, Turn,
};
use futures_util::{StreamExt, stream};
use llm::{Chunks, Model, Request, StreamChunk, reqwest};
use relay::{Relay, ServeHandle, SYSTEM_PROMPT, serve_relay};
use std::sync::{Arc, Mutex};

/// A model replaying text deltas and recording what it was asked.
#[derive(Clone, Default)]
struct Scripted {
    deltas: Vec<&'static str>,
    refuse: bool,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl Model for Scripted {
    async fn stream(&self, request: Request) -> Result<Chunks> {
        self.requests.lock().unwrap().push(request);
        if self.refuse {
            return Err(anyhow!("401 unauthorized"));
        }
        let items: Vec<Result<StreamChunk>> = self
            .deltas
            .iter()
            .map(|d| Ok(StreamChunk::text(*d)))
            .collect();
        Ok(stream::iter(items).boxed())
    }
}

async fn start(model: Scripted) -> (ServeHandle, HttpTransport) {
    let handle = serve_relay(Relay::new(model, "test-model"), "127.0.0.1:0")
        .await
        .unwrap();
    let config = ClientConfig {
        relay_url: handle.local_url(),
    };
    let transport = HttpTransport::new(reqwest::Client::new(), &config);
    (handle, transport)
}

#[test]
fn url_joins_chat_path() {
    let config = ClientConfig {
        relay_url: "http://localhost:3000/".into(),
    };
    let transport = HttpTransport::new(reqwest::Client::new(), &config);
    assert_eq!(transport.url(), "http://localhost:3000/api/chat");

    let transport = HttpTransport::new(reqwest::Client::new(), &ClientConfig::default());
    assert_eq!(transport.url(), "http://127.0.0.1:3000/api/chat");
}

#[tokio::test]
async fn session_streams_reply_through_relay() {
    let model = Scripted {
        deltas: vec!["Great", " question! ", "Try 💪 push-ups."],
        ..Default::default()
    };
    let requests = model.requests.clone();
    let (handle, transport) = start(model).await;

    let mut session = Session::new();
    let mut renders = 0;
    assert!(
        session
            .submit("What's a good beginner workout?", &transport, |_| renders += 1)
            .await
    );

    assert!(renders >= 2);
    assert_eq!(
        session.conversation().last(),
        Some(&Turn::assistant("Great question! Try 💪 push-ups."))
    );

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0].messages;
    assert_eq!(sent[0], Turn::system(SYSTEM_PROMPT));
    assert_eq!(sent[1], Turn::assistant(GREETING));
    assert_eq!(sent[2], Turn::user("What's a good beginner workout?"));
    assert_eq!(sent.len(), 3);
    drop(requests);

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn refused_upstream_becomes_apology() {
    let model = Scripted {
        refuse: true,
        ..Default::default()
    };
    let (handle, transport) = start(model).await;

    let mut session = Session::with_conversation(Conversation::default());
    session.submit("hi", &transport, |_| {}).await;

    let turns = session.conversation().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].content, APOLOGY);
    assert!(session.input_enabled());

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn unreachable_relay_fails_send() {
    let (handle, transport) = start(Scripted::default()).await;
    handle.shutdown().await.unwrap();

    assert!(transport.send(&[Turn::user("hi")]).await.is_err());
}
