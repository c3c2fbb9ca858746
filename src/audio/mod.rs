// src/audio/mod.rs
// Audio packaging - embeddable data URIs and the synthesizer seam

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

pub const MP3_MIME: &str = "audio/mp3";

/// One silent MPEG-1 Layer III frame. Stands in for real synthesis output
/// until a speech backend is wired up.
const SILENT_MP3_FRAME: &[u8] = &[
    0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
];

/// Synthesized audio plus its MIME type.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    bytes: Vec<u8>,
    mime_type: &'static str,
}

impl AudioArtifact {
    pub fn mp3(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: MP3_MIME,
        }
    }

    /// Self-contained `data:<mime>;base64,<payload>` URI, usable directly
    /// in an `<audio>` element without a separate fetch.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            STANDARD.encode(&self.bytes)
        )
    }
}

/// Speech synthesis backend. Never fails a request: a backend that cannot
/// produce audio answers `None` and the pipeline carries on without it.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Option<AudioArtifact>;
}

/// Placeholder backend emitting a fixed silent frame regardless of input,
/// or nothing when audio is disabled.
pub struct PlaceholderSynthesizer {
    enabled: bool,
}

impl PlaceholderSynthesizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl SpeechSynthesizer for PlaceholderSynthesizer {
    async fn synthesize(&self, text: &str) -> Option<AudioArtifact> {
        if !self.enabled {
            return None;
        }
        debug!(chars = text.len(), "emitting placeholder audio");
        Some(AudioArtifact::mp3(SILENT_MP3_FRAME.to_vec()))
    }
}
