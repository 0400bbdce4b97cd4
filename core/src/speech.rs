//! # Speech Playback
//!
//! Tracks one text-to-speech trigger. At most one synthesis request is
//! outstanding at a time; the trigger stays disabled until it answers. The
//! playable resource `A` is whatever the platform plays (an object URL in
//! the browser). Nothing is cached: every request synthesizes again.

use log::{error, info, warn};

use crate::error::ClientError;
use crate::ports::SpeechSynthesizer;

/// Identifies one synthesis request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechTicket(u32);

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechPlayback<A> {
    next_ticket: u32,
    pending: Option<SpeechTicket>,
    current: Option<A>,
    last_error: Option<String>,
}

impl<A> Default for SpeechPlayback<A> {
    fn default() -> Self {
        Self {
            next_ticket: 0,
            pending: None,
            current: None,
            last_error: None,
        }
    }
}

impl<A> SpeechPlayback<A> {
    /// Start a request for `text`.
    ///
    /// Returns `None`, and nothing should be sent, when the text is blank or a
    /// request is already outstanding.
    pub fn begin(&mut self, text: &str) -> Option<SpeechTicket> {
        if text.trim().is_empty() {
            return None;
        }
        if self.pending.is_some() {
            warn!("Speech request already in flight");
            return None;
        }
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = SpeechTicket(self.next_ticket);
        self.pending = Some(ticket);
        self.last_error = None;
        Some(ticket)
    }

    /// Settle the request identified by `ticket`.
    ///
    /// Returns true when the result was accepted. On failure the previous
    /// resource stays current.
    pub fn finish(&mut self, ticket: SpeechTicket, result: Result<A, ClientError>) -> bool {
        if self.pending != Some(ticket) {
            warn!("Dropping stale speech response");
            return false;
        }
        self.pending = None;
        match result {
            Ok(resource) => {
                self.current = Some(resource);
            }
            Err(e) => {
                error!("Speech synthesis failed: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current(&self) -> Option<&A> {
        self.current.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Synthesize `text`, mapping the audio bytes into a playable resource
pub async fn synthesize_with<S, A, F>(synthesizer: &S, text: &str, into_resource: F) -> Result<A, ClientError>
where
    S: SpeechSynthesizer + ?Sized,
    F: FnOnce(Vec<u8>) -> Result<A, ClientError>,
{
    let audio = synthesizer.synthesize(text).await?;
    info!("Synthesized {} bytes of audio", audio.len());
    into_resource(audio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeBackend};

    async fn speak(playback: &mut SpeechPlayback<Vec<u8>>, backend: &FakeBackend, text: &str) {
        if let Some(ticket) = playback.begin(text) {
            playback.finish(ticket, synthesize_with(backend, text, Ok).await);
        }
    }

    #[tokio::test]
    async fn test_blank_text_sends_nothing() {
        let backend = FakeBackend::new();
        let mut playback = SpeechPlayback::default();

        speak(&mut playback, &backend, "").await;
        speak(&mut playback, &backend, "   \n").await;

        assert!(!playback.is_busy());
        assert_eq!(playback.current(), None);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_trigger_disabled_until_response() {
        let backend = FakeBackend::new();
        let mut playback = SpeechPlayback::default();

        let ticket = playback.begin("hola").unwrap();
        assert!(playback.is_busy());
        assert_eq!(playback.begin("hola"), None);

        let result = synthesize_with(&backend, "hola", Ok).await;
        assert!(playback.finish(ticket, result));
        assert!(!playback.is_busy());
        assert_eq!(playback.current(), Some(&b"hola".to_vec()));
        assert_eq!(backend.calls(), vec![Call::Synthesize("hola".to_string())]);
    }

    #[tokio::test]
    async fn test_repeat_text_is_synthesized_again() {
        let backend = FakeBackend::new();
        let mut playback = SpeechPlayback::default();

        for _ in 0..2 {
            let ticket = playback.begin("hola").unwrap();
            let result = synthesize_with(&backend, "hola", Ok).await;
            playback.finish(ticket, result);
        }
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_audio() {
        let backend = FakeBackend::new();
        let mut playback = SpeechPlayback::default();
        let first = playback.begin("uno").unwrap();
        playback.finish(first, synthesize_with(&backend, "uno", Ok).await);

        backend.fail_next(ClientError::Server {
            status: 500,
            message: "tts down".to_string(),
        });
        let second = playback.begin("dos").unwrap();
        playback.finish(second, synthesize_with(&backend, "dos", Ok).await);

        assert!(!playback.is_busy());
        assert_eq!(playback.current(), Some(&b"uno".to_vec()));
        assert_eq!(playback.last_error(), Some("Server error 500: tts down"));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut playback = SpeechPlayback::<&str>::default();
        let first = playback.begin("uno").unwrap();
        playback.finish(first, Ok("a"));
        let second = playback.begin("dos").unwrap();

        assert!(!playback.finish(first, Ok("stale")));
        assert!(playback.is_busy());
        assert!(playback.finish(second, Ok("b")));
        assert_eq!(playback.current(), Some(&"b"));
    }
}
