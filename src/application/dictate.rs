//! Voice dictation use case

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::config::Interval;
use crate::domain::messaging::{Message, Sender};
use crate::domain::prompt::DictationPrompt;
use crate::domain::session::{DictationSession, DictationState, InvalidDictationTransition};

use super::ports::{
    Announcer, FeedbackLevel, FeedbackPanel, MessageStore, MessageStoreError, RecordingError,
    Transcriber, TranscriptionError, VoiceRecorder,
};

/// Errors from the dictation use case
#[derive(Debug, Error)]
pub enum DictationError {
    #[error("Recording failed: {0}")]
    Recording(#[from] RecordingError),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Failed to store message: {0}")]
    Store(#[from] MessageStoreError),

    #[error("Invalid dictation state: {0}")]
    InvalidState(#[from] InvalidDictationTransition),
}

/// What one double tap did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationEvent {
    /// Recording started; the next double tap stops and sends
    Started,
    /// Recording stopped, the transcript was sent as a chat message
    MessageSent(String),
    /// Recording stopped but nothing intelligible was said
    EmptyTranscript,
    /// A transcription was already in flight; the tap was ignored
    Ignored,
}

/// Double-tap driven record-transcribe-send workflow for the messaging
/// screen.
pub struct DictationFlowUseCase<R, T, S, A, P>
where
    R: VoiceRecorder,
    T: Transcriber,
    S: MessageStore,
    A: Announcer,
    P: FeedbackPanel,
{
    recorder: R,
    transcriber: T,
    store: S,
    announcer: A,
    feedback: P,
    session: Arc<Mutex<DictationSession>>,
    max_duration: Interval,
}

impl<R, T, S, A, P> DictationFlowUseCase<R, T, S, A, P>
where
    R: VoiceRecorder,
    T: Transcriber,
    S: MessageStore,
    A: Announcer,
    P: FeedbackPanel,
{
    /// Create a new use case instance
    pub fn new(
        recorder: R,
        transcriber: T,
        store: S,
        announcer: A,
        feedback: P,
        max_duration: Interval,
    ) -> Self {
        Self {
            recorder,
            transcriber,
            store,
            announcer,
            feedback,
            session: Arc::new(Mutex::new(DictationSession::new())),
            max_duration,
        }
    }

    /// Get the current dictation state
    pub async fn state(&self) -> DictationState {
        self.session.lock().await.state()
    }

    /// Check if a recording is in progress
    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    /// Handle one double tap: start recording when idle, stop and send
    /// when listening.
    pub async fn toggle(&self) -> Result<DictationEvent, DictationError> {
        let state = self.session.lock().await.state();
        match state {
            DictationState::Idle => self.start().await,
            DictationState::Listening => self.stop_and_send().await,
            DictationState::Transcribing => Ok(DictationEvent::Ignored),
        }
    }

    /// Stop a recording that reached the maximum duration.
    ///
    /// # Returns
    /// The send result when the limit was hit, None otherwise
    pub async fn enforce_time_limit(&self) -> Result<Option<DictationEvent>, DictationError> {
        let listening = self.session.lock().await.is_listening();
        if !listening || self.recorder.elapsed_ms() < self.max_duration.as_millis() {
            return Ok(None);
        }

        let _ = self
            .announcer
            .announce("Recording stopped automatically. Your message will be sent.")
            .await;
        self.stop_and_send().await.map(Some)
    }

    /// Abandon any in-progress cycle, discarding audio. Used when the
    /// messaging screen opens or closes.
    pub async fn reset(&self) {
        if self.recorder.is_recording() {
            let _ = self.recorder.cancel().await;
        }
        self.session.lock().await.reset();
    }

    async fn start(&self) -> Result<DictationEvent, DictationError> {
        {
            let mut session = self.session.lock().await;
            session.start_listening()?;
        }

        if let Err(e) = self.recorder.start().await {
            self.session.lock().await.reset();
            let _ = self
                .feedback
                .show("Voice recording not available. Please try again.", FeedbackLevel::Alert)
                .await;
            let _ = self
                .announcer
                .announce("Voice recording is not available on this device.")
                .await;
            return Err(e.into());
        }

        let notice = "Recording started. Double-click again to stop and send.";
        let _ = self.feedback.show(notice, FeedbackLevel::Info).await;
        let _ = self.announcer.announce(notice).await;

        Ok(DictationEvent::Started)
    }

    async fn stop_and_send(&self) -> Result<DictationEvent, DictationError> {
        {
            let mut session = self.session.lock().await;
            session.finish_listening()?;
        }

        let outcome = self.transcribe_and_send().await;

        // The cycle always returns to idle, even when sending failed.
        self.session.lock().await.reset();
        outcome
    }

    async fn transcribe_and_send(&self) -> Result<DictationEvent, DictationError> {
        let clip = self.recorder.stop().await?;

        let prompt = DictationPrompt::standard();
        let transcript = self.transcriber.transcribe(&clip, &prompt).await?;
        let transcript = transcript.trim().to_string();

        if transcript.is_empty() {
            let notice = "No message to send. Please try again.";
            let _ = self.feedback.show(notice, FeedbackLevel::Alert).await;
            let _ = self.announcer.announce(notice).await;
            return Ok(DictationEvent::EmptyTranscript);
        }

        let message = Message::chat(Sender::Client, transcript.clone());
        if let Err(e) = self.store.append(message).await {
            let notice = "Could not send message. Please try again.";
            let _ = self.feedback.show(notice, FeedbackLevel::Alert).await;
            let _ = self.announcer.announce(notice).await;
            return Err(e.into());
        }

        let notice = "Message sent successfully.";
        let _ = self.feedback.show(notice, FeedbackLevel::Info).await;
        let _ = self.announcer.announce(notice).await;

        Ok(DictationEvent::MessageSent(transcript))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{AnnounceError, FeedbackError};
    use crate::domain::media::VoiceClip;
    use crate::domain::messaging::MessageLog;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Mutex as StdMutex;

    struct MockRecorder {
        recording: AtomicBool,
        elapsed: AtomicU64,
        fail_start: bool,
    }

    impl MockRecorder {
        fn new() -> Self {
            Self {
                recording: AtomicBool::new(false),
                elapsed: AtomicU64::new(0),
                fail_start: false,
            }
        }

        fn unavailable() -> Self {
            Self {
                fail_start: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl VoiceRecorder for MockRecorder {
        async fn start(&self) -> Result<(), RecordingError> {
            if self.fail_start {
                return Err(RecordingError::NoAudioDevice);
            }
            self.recording.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn stop(&self) -> Result<VoiceClip, RecordingError> {
            self.recording.store(false, Ordering::SeqCst);
            Ok(VoiceClip::new(vec![0u8; 64], Default::default()))
        }

        async fn cancel(&self) -> Result<(), RecordingError> {
            self.recording.store(false, Ordering::SeqCst);
            Ok(())
        }

        fn is_recording(&self) -> bool {
            self.recording.load(Ordering::SeqCst)
        }

        fn elapsed_ms(&self) -> u64 {
            self.elapsed.load(Ordering::SeqCst)
        }
    }

    struct MockTranscriber {
        transcript: &'static str,
    }

    #[async_trait]
    impl Transcriber for MockTranscriber {
        async fn transcribe(
            &self,
            _clip: &VoiceClip,
            _prompt: &DictationPrompt,
        ) -> Result<String, TranscriptionError> {
            Ok(self.transcript.to_string())
        }
    }

    #[derive(Default)]
    struct MockStore {
        appended: StdMutex<Vec<Message>>,
    }

    #[async_trait]
    impl MessageStore for MockStore {
        async fn load(&self) -> Result<MessageLog, MessageStoreError> {
            Ok(MessageLog::from_messages(
                self.appended.lock().unwrap().clone(),
            ))
        }

        async fn append(&self, message: Message) -> Result<(), MessageStoreError> {
            self.appended.lock().unwrap().push(message);
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

    fn use_case(
        recorder: MockRecorder,
        transcript: &'static str,
    ) -> DictationFlowUseCase<MockRecorder, MockTranscriber, MockStore, SpyAnnouncer, MockFeedback>
    {
        DictationFlowUseCase::new(
            recorder,
            MockTranscriber { transcript },
            MockStore::default(),
            SpyAnnouncer::default(),
            MockFeedback,
            Interval::default_max_dictation(),
        )
    }

    #[tokio::test]
    async fn first_toggle_starts_recording() {
        let flow = use_case(MockRecorder::new(), "hello");

        let event = flow.toggle().await.unwrap();
        assert_eq!(event, DictationEvent::Started);
        assert_eq!(flow.state().await, DictationState::Listening);
        assert!(flow.is_recording());
    }

    #[tokio::test]
    async fn second_toggle_sends_the_transcript() {
        let flow = use_case(MockRecorder::new(), "I need help crossing the street");

        flow.toggle().await.unwrap();
        let event = flow.toggle().await.unwrap();

        assert_eq!(
            event,
            DictationEvent::MessageSent("I need help crossing the street".to_string())
        );
        assert_eq!(flow.state().await, DictationState::Idle);

        let stored = flow.store.appended.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].sender, Sender::Client);
        assert_eq!(stored[0].content, "I need help crossing the street");
    }

    #[tokio::test]
    async fn empty_transcript_sends_nothing() {
        let flow = use_case(MockRecorder::new(), "   ");

        flow.toggle().await.unwrap();
        let event = flow.toggle().await.unwrap();

        assert_eq!(event, DictationEvent::EmptyTranscript);
        assert!(flow.store.appended.lock().unwrap().is_empty());

        let spoken = flow.announcer.spoken.lock().unwrap();
        assert!(spoken.contains(&"No message to send. Please try again.".to_string()));
    }

    #[tokio::test]
    async fn unavailable_recorder_resets_and_reports() {
        let flow = use_case(MockRecorder::unavailable(), "hello");

        let err = flow.toggle().await.unwrap_err();
        assert!(matches!(
            err,
            DictationError::Recording(RecordingError::NoAudioDevice)
        ));
        assert_eq!(flow.state().await, DictationState::Idle);

        let spoken = flow.announcer.spoken.lock().unwrap();
        assert!(spoken.contains(&"Voice recording is not available on this device.".to_string()));
    }

    #[tokio::test]
    async fn reset_cancels_a_live_recording() {
        let flow = use_case(MockRecorder::new(), "hello");

        flow.toggle().await.unwrap();
        assert!(flow.is_recording());

        flow.reset().await;
        assert!(!flow.is_recording());
        assert_eq!(flow.state().await, DictationState::Idle);
    }

    #[tokio::test]
    async fn time_limit_does_nothing_before_the_cap() {
        let flow = use_case(MockRecorder::new(), "hello");

        flow.toggle().await.unwrap();
        flow.recorder.elapsed.store(29_999, Ordering::SeqCst);

        let sent = flow.enforce_time_limit().await.unwrap();
        assert!(sent.is_none());
        assert!(flow.is_recording());
    }

    #[tokio::test]
    async fn time_limit_stops_and_sends_at_the_cap() {
        let flow = use_case(MockRecorder::new(), "long story");

        flow.toggle().await.unwrap();
        flow.recorder.elapsed.store(30_000, Ordering::SeqCst);

        let sent = flow.enforce_time_limit().await.unwrap();
        assert_eq!(
            sent,
            Some(DictationEvent::MessageSent("long story".to_string()))
        );

        let spoken = flow.announcer.spoken.lock().unwrap();
        assert!(spoken
            .contains(&"Recording stopped automatically. Your message will be sent.".to_string()));
    }

    #[tokio::test]
    async fn announces_success_after_sending() {
        let flow = use_case(MockRecorder::new(), "hello");

        flow.toggle().await.unwrap();
        flow.toggle().await.unwrap();

        let spoken = flow.announcer.spoken.lock().unwrap();
        assert_eq!(
            spoken.last(),
            Some(&"Message sent successfully.".to_string())
        );
    }
}
