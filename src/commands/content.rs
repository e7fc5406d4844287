// Content generation workflow: simulated latency, regeneration, overlap handling

use crate::commands::business;
use crate::models::{BusinessInfo, ContentSection, GeneratedContent};
use crate::templates::ContentEngine;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Simulated latency of a full generation.
pub const GENERATE_DELAY: Duration = Duration::from_millis(2000);
/// Simulated latency of a section or item regeneration.
pub const REGENERATE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Default)]
struct ContentInner {
    content: Option<GeneratedContent>,
    is_generating: bool,
    /// Token of the most recently issued request. Completions for older
    /// tokens are discarded so the latest request wins.
    latest_request: u64,
}

/// Snapshot of the generation workflow for the shell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub content: Option<GeneratedContent>,
    pub is_generating: bool,
}

/// Holds the generated bundle and the generating flag.
///
/// Requests carry a monotonically increasing token; a completion only
/// applies (and only clears `is_generating`) while its token is still the
/// latest issued, so an overlapping newer request supersedes it and the
/// flag cannot stick.
pub struct ContentState {
    engine: ContentEngine,
    inner: Mutex<ContentInner>,
    next_request: AtomicU64,
    generate_delay: Duration,
    regenerate_delay: Duration,
}

impl ContentState {
    pub fn new() -> Result<Self, String> {
        Self::with_delays(GENERATE_DELAY, REGENERATE_DELAY)
    }

    /// Construct with custom latencies; tests use short ones.
    pub fn with_delays(
        generate_delay: Duration,
        regenerate_delay: Duration,
    ) -> Result<Self, String> {
        let engine = ContentEngine::new().map_err(|e| e.to_string())?;
        Ok(Self {
            engine,
            inner: Mutex::new(ContentInner::default()),
            next_request: AtomicU64::new(0),
            generate_delay,
            regenerate_delay,
        })
    }

    pub fn snapshot(&self) -> Result<ContentSnapshot, String> {
        let inner = self.lock()?;
        Ok(ContentSnapshot {
            content: inner.content.clone(),
            is_generating: inner.is_generating,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, ContentInner>, String> {
        self.inner
            .lock()
            .map_err(|e| format!("Failed to acquire lock: {}", e))
    }

    /// Issue a new request token and raise the generating flag.
    fn begin_request(&self) -> Result<u64, String> {
        let token = self.next_request.fetch_add(1, Ordering::SeqCst) + 1;
        let mut inner = self.lock()?;
        inner.latest_request = token;
        inner.is_generating = true;
        Ok(token)
    }

    /// Complete a request: returns the state guard with the generating flag
    /// cleared, or None when a newer request has superseded this one.
    fn complete_request(&self, token: u64) -> Result<Option<MutexGuard<'_, ContentInner>>, String> {
        let mut inner = self.lock()?;
        if inner.latest_request != token {
            log::debug!("Discarding stale generation request {}", token);
            return Ok(None);
        }
        inner.is_generating = false;
        Ok(Some(inner))
    }

    /// Generate a fresh bundle after the simulated latency.
    ///
    /// Returns None when a newer request superseded this one while it was
    /// in flight.
    pub async fn generate(
        &self,
        info: &BusinessInfo,
    ) -> Result<Option<GeneratedContent>, String> {
        if !business::can_generate(info) {
            return Err(
                "Completa nombre, rubro y objetivo antes de generar contenido".to_string()
            );
        }

        let token = self.begin_request()?;
        tokio::time::sleep(self.generate_delay).await;

        let content = match self.engine.generate(info) {
            Ok(content) => content,
            Err(e) => {
                // Still settle the request so the flag cannot stick
                self.complete_request(token)?;
                return Err(e.to_string());
            }
        };

        match self.complete_request(token)? {
            Some(mut inner) => {
                inner.content = Some(content.clone());
                Ok(Some(content))
            }
            None => Ok(None),
        }
    }

    /// Regenerate a whole section, or a single item when `id` is given.
    ///
    /// A call before any successful `generate` is a silent no-op, as is an
    /// unmatched id. Returns the resulting bundle, or None when the call
    /// was a no-op or was superseded.
    pub async fn regenerate_section(
        &self,
        section: ContentSection,
        id: Option<u32>,
        info: &BusinessInfo,
    ) -> Result<Option<GeneratedContent>, String> {
        // Guard: nothing to regenerate yet
        if self.lock()?.content.is_none() {
            return Ok(None);
        }

        let token = self.begin_request()?;
        tokio::time::sleep(self.regenerate_delay).await;

        let mut inner = match self.complete_request(token)? {
            Some(inner) => inner,
            None => return Ok(None),
        };

        // The bundle can only have been replaced, never removed
        let content = match inner.content.as_mut() {
            Some(content) => content,
            None => return Ok(None),
        };

        let result = match id {
            Some(id) => self
                .engine
                .improve_item(content, section, id, info)
                .map(|_| ()),
            None => self.engine.refresh_section(content, section, info),
        };
        result.map_err(|e| e.to_string())?;

        Ok(Some(content.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessInfo;

    fn sample_info() -> BusinessInfo {
        BusinessInfo {
            name: "MediSalud Plus".to_string(),
            industry: "Salud".to_string(),
            objective: "Lanzamiento".to_string(),
            keywords: "innovación, calidad".to_string(),
        }
    }

    fn fast_state() -> ContentState {
        ContentState::with_delays(Duration::from_millis(50), Duration::from_millis(30)).unwrap()
    }

    #[tokio::test]
    async fn test_generate_sets_bundle_and_clears_flag() {
        let state = fast_state();
        let info = sample_info();

        let content = state.generate(&info).await.unwrap().unwrap();
        assert_eq!(content.social_posts.len(), 3);

        let snapshot = state.snapshot().unwrap();
        assert!(!snapshot.is_generating);
        assert_eq!(snapshot.content.unwrap(), content);
    }

    #[tokio::test]
    async fn test_generate_rejects_incomplete_info() {
        let state = fast_state();
        let info = BusinessInfo::default();

        let err = state.generate(&info).await.unwrap_err();
        assert!(err.contains("Completa"));
        assert!(state.snapshot().unwrap().content.is_none());
    }

    #[tokio::test]
    async fn test_flag_raised_while_in_flight() {
        let state = std::sync::Arc::new(fast_state());
        let info = sample_info();

        let task = {
            let state = state.clone();
            let info = info.clone();
            tokio::spawn(async move { state.generate(&info).await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(state.snapshot().unwrap().is_generating);

        task.await.unwrap().unwrap();
        assert!(!state.snapshot().unwrap().is_generating);
    }

    #[tokio::test]
    async fn test_regenerate_before_generate_is_noop() {
        let state = fast_state();
        let info = sample_info();

        let result = state
            .regenerate_section(ContentSection::SocialPosts, None, &info)
            .await
            .unwrap();

        assert!(result.is_none());
        let snapshot = state.snapshot().unwrap();
        assert!(snapshot.content.is_none());
        assert!(!snapshot.is_generating);
    }

    #[tokio::test]
    async fn test_regenerate_item_preserves_id_and_neighbors() {
        let state = fast_state();
        let info = sample_info();
        let original = state.generate(&info).await.unwrap().unwrap();

        let updated = state
            .regenerate_section(ContentSection::SocialPosts, Some(2), &info)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.social_posts[1].id, 2);
        assert_ne!(updated.social_posts[1].text, original.social_posts[1].text);
        assert_eq!(updated.social_posts[0], original.social_posts[0]);
        assert_eq!(updated.social_posts[2], original.social_posts[2]);
        assert_eq!(updated.emails, original.emails);
        assert_eq!(updated.slogans, original.slogans);
        assert_eq!(updated.ads, original.ads);
    }

    #[tokio::test]
    async fn test_regenerate_section_resets_ids() {
        let state = fast_state();
        let info = sample_info();
        state.generate(&info).await.unwrap();

        let updated = state
            .regenerate_section(ContentSection::SocialPosts, None, &info)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            updated.social_posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_regenerate_unknown_id_is_noop() {
        let state = fast_state();
        let info = sample_info();
        let original = state.generate(&info).await.unwrap().unwrap();

        let updated = state
            .regenerate_section(ContentSection::Slogans, Some(42), &info)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated, original);
    }

    #[tokio::test]
    async fn test_latest_overlapping_request_wins() {
        let state = std::sync::Arc::new(fast_state());
        let info = sample_info();
        state.generate(&info).await.unwrap();

        // Start a slow full generation, then a faster regeneration shortly
        // after. The regeneration is the newer request: it lands first and
        // the older generation's completion must be discarded.
        let (generate_result, regenerate_result) = tokio::join!(
            state.generate(&info),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                state
                    .regenerate_section(ContentSection::SocialPosts, None, &info)
                    .await
            }
        );

        assert!(generate_result.unwrap().is_none());
        let regenerated = regenerate_result.unwrap().unwrap();
        assert!(regenerated.social_posts[0].text.contains("Renovamos"));

        let snapshot = state.snapshot().unwrap();
        assert!(!snapshot.is_generating);
        assert_eq!(snapshot.content.unwrap(), regenerated);
    }
}
