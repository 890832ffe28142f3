//! Watch party sessions and the shared party registry.
//!
//! A watch party is a host-owned viewing session other users join by code.
//! The registry is the single source of truth for active parties; it lives
//! for the process lifetime and is rebuilt at deployment.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::{Rng, rng};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::PartyConfig;

/// Unique identifier for a watch party.
pub type PartyId = Uuid;

/// Human-shareable code used to join a party.
///
/// Codes are uppercase alphanumeric with ambiguous glyphs (0/O, 1/I)
/// excluded. Comparison is case-insensitive via normalization at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoinCode(String);

impl JoinCode {
    const ALPHABET: &'static [u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

    /// Generates a random join code of the given length.
    pub fn generate(length: usize) -> Self {
        let mut rng = rng();
        let code: String = (0..length)
            .map(|_| {
                let idx = rng.random_range(0..Self::ALPHABET.len());
                Self::ALPHABET[idx] as char
            })
            .collect();
        Self(code)
    }

    /// Parses user input into a join code, normalizing case.
    ///
    /// # Errors
    /// - `PartyError::InvalidJoinCode` - Empty input or characters outside the code alphabet
    pub fn parse(input: &str) -> Result<Self, PartyError> {
        let normalized = input.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(PartyError::InvalidJoinCode {
                reason: "code is empty".to_string(),
            });
        }
        if !normalized.bytes().all(|b| Self::ALPHABET.contains(&b)) {
            return Err(PartyError::InvalidJoinCode {
                reason: format!("'{normalized}' contains unsupported characters"),
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JoinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from party lookup and membership changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    #[error("Party not found: {code}")]
    PartyNotFound { code: String },

    #[error("Party is full ({max} participants)")]
    PartyFull { max: usize },

    #[error("Invalid join code: {reason}")]
    InvalidJoinCode { reason: String },
}

/// A single active watch party.
#[derive(Debug, Clone, Serialize)]
pub struct WatchParty {
    pub id: PartyId,
    pub code: JoinCode,
    pub title: String,
    pub host: String,
    /// Video currently queued or playing
    pub video: String,
    pub participants: Vec<String>,
    pub max_participants: usize,
    /// Seconds of playback the host has buffered ahead
    pub buffered_secs: f64,
    pub host_connected: bool,
    pub created_at: DateTime<Utc>,
}

impl WatchParty {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    /// Evaluates whether this party can accept a join right now.
    ///
    /// Joining requires a connected host and enough buffered playback that a
    /// new participant lands in sync instead of stalling the room. While not
    /// ready, reports a progress fraction and what is still missing.
    pub fn join_readiness(&self, min_buffer_secs: f64) -> JoinReadiness {
        if self.is_full() {
            return JoinReadiness::NotReady {
                message: format!("Party is full ({} participants)", self.max_participants),
                progress: 0.0,
            };
        }

        let buffer_ready = self.buffered_secs >= min_buffer_secs;
        if self.host_connected && buffer_ready {
            return JoinReadiness::Ready;
        }

        let mut missing = Vec::new();
        if !self.host_connected {
            missing.push("Waiting for host".to_string());
        }
        if !buffer_ready {
            missing.push(format!(
                "Buffering: {:.1}s/{:.1}s",
                self.buffered_secs, min_buffer_secs
            ));
        }

        let buffer_progress = if min_buffer_secs > 0.0 {
            (self.buffered_secs / min_buffer_secs).min(0.9)
        } else {
            0.9
        };
        let host_progress = if self.host_connected { 0.1 } else { 0.0 };

        JoinReadiness::NotReady {
            message: missing.join(", "),
            progress: (buffer_progress * 0.9 + host_progress).clamp(0.05, 0.95),
        }
    }
}

/// Result of a join-readiness check.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinReadiness {
    /// Party can accept a join immediately
    Ready,
    /// Party exists but cannot accept a join yet
    NotReady { message: String, progress: f64 },
}

/// Shared registry of active parties.
///
/// Cheap to clone; all clones observe the same state.
#[derive(Clone)]
pub struct PartyRegistry {
    parties: Arc<RwLock<HashMap<JoinCode, WatchParty>>>,
    config: PartyConfig,
}

impl PartyRegistry {
    pub fn new(config: PartyConfig) -> Self {
        Self {
            parties: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Creates a new party with a freshly generated join code.
    pub async fn create_party(&self, title: &str, host: &str, video: &str) -> WatchParty {
        let mut parties = self.parties.write().await;

        // Regenerate on collision; the code space is large enough that this
        // loop terminates almost immediately in practice.
        let mut code = JoinCode::generate(self.config.join_code_length);
        while parties.contains_key(&code) {
            code = JoinCode::generate(self.config.join_code_length);
        }

        let party = WatchParty {
            id: Uuid::new_v4(),
            code: code.clone(),
            title: title.to_string(),
            host: host.to_string(),
            video: video.to_string(),
            participants: vec![host.to_string()],
            max_participants: self.config.max_participants,
            buffered_secs: 0.0,
            host_connected: false,
            created_at: Utc::now(),
        };
        parties.insert(code, party.clone());
        tracing::info!("Created party '{}' with code {}", party.title, party.code);
        party
    }

    /// Looks up a party by its join code.
    pub async fn party_by_code(&self, code: &JoinCode) -> Option<WatchParty> {
        self.parties.read().await.get(code).cloned()
    }

    /// Adds a participant to a party.
    ///
    /// # Errors
    /// - `PartyError::PartyNotFound` - No party registered under `code`
    /// - `PartyError::PartyFull` - Participant limit reached
    pub async fn join(&self, code: &JoinCode, participant: &str) -> Result<WatchParty, PartyError> {
        let mut parties = self.parties.write().await;
        let party = parties.get_mut(code).ok_or_else(|| PartyError::PartyNotFound {
            code: code.to_string(),
        })?;

        if party.is_full() {
            return Err(PartyError::PartyFull {
                max: party.max_participants,
            });
        }

        party.participants.push(participant.to_string());
        tracing::debug!("{} joined party {}", participant, code);
        Ok(party.clone())
    }

    /// Marks the host's connection state for a party.
    pub async fn mark_host_connected(&self, code: &JoinCode, connected: bool) {
        if let Some(party) = self.parties.write().await.get_mut(code) {
            party.host_connected = connected;
        }
    }

    /// Updates the host's buffered playback measurement for a party.
    pub async fn update_buffer(&self, code: &JoinCode, buffered_secs: f64) {
        if let Some(party) = self.parties.write().await.get_mut(code) {
            party.buffered_secs = buffered_secs;
        }
    }

    /// Removes a party, returning it if it existed.
    pub async fn remove(&self, code: &JoinCode) -> Option<WatchParty> {
        self.parties.write().await.remove(code)
    }

    /// Snapshot of all active parties, newest first.
    pub async fn active_parties(&self) -> Vec<WatchParty> {
        let mut parties: Vec<WatchParty> = self.parties.read().await.values().cloned().collect();
        parties.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        parties
    }

    pub async fn party_count(&self) -> usize {
        self.parties.read().await.len()
    }

    /// Minimum buffered seconds required before a party accepts joins.
    pub fn min_join_buffer_secs(&self) -> f64 {
        self.config.min_join_buffer_secs
    }

    /// Seeds the registry with demo parties so every dashboard renders
    /// offline in development mode.
    pub async fn seed_demo_parties(&self) {
        const DEMO_PARTIES: &[(&str, &str, &str)] = &[
            ("Friday Movie Night", "ava", "Interstellar (2014)"),
            ("Retro Cartoons", "marco", "Samurai Jack S01E05"),
            ("Documentary Club", "lin", "Planet Earth II E03"),
            ("Speedrun Watchalong", "kai", "AGDQ 2026 Highlights"),
            ("Anime Sunday", "noor", "Mushishi E12"),
        ];

        let count = self.config.demo_party_count.min(DEMO_PARTIES.len());
        for (index, (title, host, video)) in DEMO_PARTIES.iter().take(count).enumerate() {
            let party = self.create_party(title, host, video).await;
            // Leave the last seeded party warming up so the join flow's
            // loading state is reachable in development.
            let ready = index + 1 < count;
            self.mark_host_connected(&party.code, ready).await;
            if ready {
                self.update_buffer(&party.code, self.config.min_join_buffer_secs * 2.0)
                    .await;
            }
        }
        tracing::info!("Seeded {count} demo parties");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PartyConfig {
        PartyConfig {
            max_participants: 3,
            ..PartyConfig::default()
        }
    }

    #[test]
    fn generated_codes_use_safe_alphabet() {
        let code = JoinCode::generate(6);
        assert_eq!(code.as_str().len(), 6);
        assert!(
            code.as_str()
                .bytes()
                .all(|b| JoinCode::ALPHABET.contains(&b))
        );
    }

    #[test]
    fn parse_normalizes_case_and_rejects_junk() {
        let code = JoinCode::parse("abc234").unwrap();
        assert_eq!(code.as_str(), "ABC234");
        assert!(JoinCode::parse("").is_err());
        assert!(JoinCode::parse("AB!@#").is_err());
    }

    #[test]
    fn readiness_requires_host_and_buffer() {
        let mut party = WatchParty {
            id: Uuid::new_v4(),
            code: JoinCode::parse("ABC234").unwrap(),
            title: "Test".to_string(),
            host: "host".to_string(),
            video: "video.mkv".to_string(),
            participants: vec!["host".to_string()],
            max_participants: 10,
            buffered_secs: 0.0,
            host_connected: false,
            created_at: Utc::now(),
        };

        match party.join_readiness(5.0) {
            JoinReadiness::NotReady { message, progress } => {
                assert!(message.contains("Waiting for host"));
                assert!(message.contains("Buffering"));
                assert!(progress < 0.5);
            }
            JoinReadiness::Ready => panic!("expected not ready"),
        }

        party.host_connected = true;
        party.buffered_secs = 6.0;
        assert_eq!(party.join_readiness(5.0), JoinReadiness::Ready);
    }

    #[test]
    fn full_party_is_never_ready() {
        let party = WatchParty {
            id: Uuid::new_v4(),
            code: JoinCode::parse("ABC234").unwrap(),
            title: "Test".to_string(),
            host: "host".to_string(),
            video: "video.mkv".to_string(),
            participants: vec!["a".to_string(), "b".to_string()],
            max_participants: 2,
            buffered_secs: 10.0,
            host_connected: true,
            created_at: Utc::now(),
        };
        assert!(matches!(
            party.join_readiness(5.0),
            JoinReadiness::NotReady { .. }
        ));
    }

    #[tokio::test]
    async fn create_and_join_party() {
        let registry = PartyRegistry::new(test_config());
        let party = registry.create_party("Movie Night", "ava", "film.mkv").await;

        let joined = registry.join(&party.code, "ben").await.unwrap();
        assert_eq!(joined.participants, vec!["ava", "ben"]);

        // Third join hits the limit from test_config
        registry.join(&party.code, "cam").await.unwrap();
        assert!(matches!(
            registry.join(&party.code, "dee").await,
            Err(PartyError::PartyFull { max: 3 })
        ));
    }

    #[tokio::test]
    async fn join_unknown_code_fails() {
        let registry = PartyRegistry::new(test_config());
        let code = JoinCode::parse("ZZZZZZ").unwrap();
        assert!(matches!(
            registry.join(&code, "ben").await,
            Err(PartyError::PartyNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn demo_seeding_populates_registry() {
        let registry = PartyRegistry::new(PartyConfig::default());
        registry.seed_demo_parties().await;
        assert_eq!(registry.party_count().await, 3);

        let ready_count = registry
            .active_parties()
            .await
            .iter()
            .filter(|p| p.join_readiness(registry.min_join_buffer_secs()) == JoinReadiness::Ready)
            .count();
        assert_eq!(ready_count, 2);
    }
}
