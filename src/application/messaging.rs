//! Message exchange use case

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::messaging::{Message, MessageLog, Sender};

use super::ports::{Announcer, FeedbackLevel, FeedbackPanel, MessageStore, MessageStoreError};

/// Errors from the messaging use case
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Message store failed: {0}")]
    Store(#[from] MessageStoreError),
}

/// Shared-log messaging between the client and the admin.
///
/// A watermark of seen entries turns the append-only log into an inbox:
/// `poll_new` returns only what arrived since the previous call. The
/// first poll swallows history so old messages are not replayed on
/// every startup.
pub struct MessagingUseCase<S, A, P>
where
    S: MessageStore,
    A: Announcer,
    P: FeedbackPanel,
{
    store: S,
    announcer: A,
    feedback: P,
    seen: Mutex<Option<usize>>,
}

impl<S, A, P> MessagingUseCase<S, A, P>
where
    S: MessageStore,
    A: Announcer,
    P: FeedbackPanel,
{
    /// Create a new use case instance
    pub fn new(store: S, announcer: A, feedback: P) -> Self {
        Self {
            store,
            announcer,
            feedback,
            seen: Mutex::new(None),
        }
    }

    /// Append a chat message to the shared log.
    pub async fn send(&self, sender: Sender, content: &str) -> Result<(), MessagingError> {
        self.store.append(Message::chat(sender, content)).await?;
        Ok(())
    }

    /// Load the full log.
    pub async fn history(&self) -> Result<MessageLog, MessagingError> {
        Ok(self.store.load().await?)
    }

    /// Read the latest admin message aloud (SwipeDown).
    ///
    /// # Returns
    /// The message that was read, or None when the admin has not
    /// written yet
    pub async fn read_last_admin(&self) -> Result<Option<Message>, MessagingError> {
        let log = self.store.load().await?;

        match log.last_from(Sender::Admin) {
            Some(message) => {
                let _ = self
                    .announcer
                    .announce(&format!("Message from admin: {}", message.content))
                    .await;
                Ok(Some(message.clone()))
            }
            None => {
                let _ = self.announcer.announce("No messages from admin yet.").await;
                Ok(None)
            }
        }
    }

    /// Collect messages appended since the previous poll.
    ///
    /// The first call establishes the watermark and returns nothing.
    pub async fn poll_new(&self) -> Result<Vec<Message>, MessagingError> {
        let log = self.store.load().await?;

        let mut seen = self.seen.lock().await;
        let fresh = match *seen {
            Some(watermark) => log.new_since(watermark).to_vec(),
            None => Vec::new(),
        };
        *seen = Some(log.len());

        Ok(fresh)
    }

    /// Poll and announce fresh admin chat messages (client session).
    ///
    /// # Returns
    /// How many admin messages were announced
    pub async fn announce_new_admin_messages(&self) -> Result<usize, MessagingError> {
        let fresh = self.poll_new().await?;

        let mut announced = 0;
        for message in fresh {
            if message.sender == Sender::Admin && message.kind.is_chat() {
                let _ = self
                    .feedback
                    .show("New message from admin", FeedbackLevel::Info)
                    .await;
                let _ = self
                    .announcer
                    .announce(&format!("New message from admin: {}", message.content))
                    .await;
                announced += 1;
            }
        }

        Ok(announced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{AnnounceError, FeedbackError};
    use crate::domain::messaging::MessageKind;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct MockStore {
        messages: StdMutex<Vec<Message>>,
    }

    impl MockStore {
        fn with(messages: Vec<Message>) -> Self {
            Self {
                messages: StdMutex::new(messages),
            }
        }

        fn push(&self, message: Message) {
            self.messages.lock().unwrap().push(message);
        }
    }

    #[async_trait]
    impl MessageStore for MockStore {
        async fn load(&self) -> Result<MessageLog, MessageStoreError> {
            Ok(MessageLog::from_messages(
                self.messages.lock().unwrap().clone(),
            ))
        }

        async fn append(&self, message: Message) -> Result<(), MessageStoreError> {
            self.messages.lock().unwrap().push(message);
            Ok(())
        }

        fn path(&self) -> PathBuf {
            PathBuf::from("/tmp/messages.json")
        }
    }

    #[derive(Default)]
    struct SpyAnnouncer {
        spoken: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl Announcer for SpyAnnouncer {
        async fn announce(&self, text: &str) -> Result<(), AnnounceError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct MockFeedback;

    #[async_trait]
    impl FeedbackPanel for MockFeedback {
        async fn show(&self, _message: &str, _level: FeedbackLevel) -> Result<(), FeedbackError> {
            Ok(())
        }
    }

    fn use_case(store: MockStore) -> MessagingUseCase<MockStore, SpyAnnouncer, MockFeedback> {
        MessagingUseCase::new(store, SpyAnnouncer::default(), MockFeedback)
    }

    #[tokio::test]
    async fn send_appends_a_client_chat_message() {
        let messaging = use_case(MockStore::default());

        messaging.send(Sender::Client, "hello").await.unwrap();

        let log = messaging.history().await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].content, "hello");
        assert_eq!(log.messages()[0].kind, MessageKind::Chat);
    }

    #[tokio::test]
    async fn read_last_admin_speaks_the_newest_admin_message() {
        let messaging = use_case(MockStore::with(vec![
            Message::chat(Sender::Admin, "old note"),
            Message::chat(Sender::Client, "thanks"),
            Message::chat(Sender::Admin, "bus leaves at nine"),
        ]));

        let read = messaging.read_last_admin().await.unwrap().unwrap();
        assert_eq!(read.content, "bus leaves at nine");

        let spoken = messaging.announcer.spoken.lock().unwrap();
        assert_eq!(spoken[0], "Message from admin: bus leaves at nine");
    }

    #[tokio::test]
    async fn read_last_admin_with_no_admin_messages() {
        let messaging = use_case(MockStore::with(vec![Message::chat(
            Sender::Client,
            "anyone there?",
        )]));

        let read = messaging.read_last_admin().await.unwrap();
        assert!(read.is_none());

        let spoken = messaging.announcer.spoken.lock().unwrap();
        assert_eq!(spoken[0], "No messages from admin yet.");
    }

    #[tokio::test]
    async fn first_poll_swallows_history() {
        let messaging = use_case(MockStore::with(vec![
            Message::chat(Sender::Admin, "old"),
            Message::chat(Sender::Admin, "older"),
        ]));

        let fresh = messaging.poll_new().await.unwrap();
        assert!(fresh.is_empty());
    }

    #[tokio::test]
    async fn poll_returns_only_the_new_tail() {
        let messaging = use_case(MockStore::with(vec![Message::chat(Sender::Admin, "old")]));

        messaging.poll_new().await.unwrap();
        messaging.store.push(Message::chat(Sender::Admin, "fresh"));
        messaging.store.push(Message::chat(Sender::Client, "mine"));

        let fresh = messaging.poll_new().await.unwrap();
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].content, "fresh");

        // Nothing new on the next poll
        assert!(messaging.poll_new().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn announces_only_fresh_admin_chat_messages() {
        let messaging = use_case(MockStore::default());

        messaging.poll_new().await.unwrap();
        messaging.store.push(Message::chat(Sender::Admin, "hello"));
        messaging.store.push(Message::chat(Sender::Client, "mine"));
        messaging.store.push(Message::tagged(
            Sender::Client,
            "SOS ACTIVATED! Location unavailable.",
            MessageKind::Sos,
        ));

        let announced = messaging.announce_new_admin_messages().await.unwrap();
        assert_eq!(announced, 1);

        let spoken = messaging.announcer.spoken.lock().unwrap();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0], "New message from admin: hello");
    }
}
