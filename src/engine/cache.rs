//! Per-language engine handle cache.
//!
//! A memoizing factory keyed by language code. The map is unbounded, which
//! is acceptable because the key domain is the handful of Kokoro language
//! codes; no eviction policy exists.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::core::error::Result;

use super::traits::{EngineFactory, SpeechEngine};

/// Registry of constructed engine pipelines, one per language code
pub struct EngineCache {
    factory: Box<dyn EngineFactory>,
    engines: Mutex<HashMap<String, Arc<dyn SpeechEngine>>>,
}

impl EngineCache {
    pub fn new(factory: Box<dyn EngineFactory>) -> Self {
        Self {
            factory,
            engines: Mutex::new(HashMap::new()),
        }
    }

    /// Get the pipeline for `lang_code`, constructing it on first use.
    ///
    /// The map lock is held across construction, so concurrent first
    /// requests for the same language serialize and observe a single handle.
    /// Construction errors are propagated and nothing is inserted.
    pub async fn get(&self, lang_code: &str) -> Result<Arc<dyn SpeechEngine>> {
        let mut engines = self.engines.lock().await;

        if let Some(engine) = engines.get(lang_code) {
            return Ok(Arc::clone(engine));
        }

        debug!("constructing engine pipeline for language '{}'", lang_code);
        let engine = self.factory.create(lang_code).await?;
        engines.insert(lang_code.to_string(), Arc::clone(&engine));

        Ok(engine)
    }

    /// Number of constructed pipelines
    pub async fn loaded(&self) -> usize {
        self.engines.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TtsError;
    use crate::engine::traits::Segment;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeEngine {
        lang_code: String,
    }

    #[async_trait]
    impl SpeechEngine for FakeEngine {
        fn lang_code(&self) -> &str {
            &self.lang_code
        }

        async fn synthesize(
            &self,
            _text: &str,
            _voice: &str,
            _speed: f32,
        ) -> Result<Vec<Segment>> {
            Ok(Vec::new())
        }
    }

    struct CountingFactory {
        constructed: AtomicUsize,
    }

    #[async_trait]
    impl EngineFactory for CountingFactory {
        async fn create(&self, lang_code: &str) -> Result<Arc<dyn SpeechEngine>> {
            if lang_code == "q" {
                return Err(TtsError::Engine {
                    message: format!("unsupported language code '{}'", lang_code),
                    lang_code: Some(lang_code.to_string()),
                });
            }
            self.constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(FakeEngine {
                lang_code: lang_code.to_string(),
            }))
        }
    }

    fn counting_cache() -> EngineCache {
        EngineCache::new(Box::new(CountingFactory {
            constructed: AtomicUsize::new(0),
        }))
    }

    #[tokio::test]
    async fn test_sequential_gets_return_the_same_handle() {
        let cache = counting_cache();

        let first = cache.get("a").await.unwrap();
        let second = cache.get("a").await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.loaded().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_languages_get_distinct_handles() {
        let cache = counting_cache();

        let english = cache.get("a").await.unwrap();
        let japanese = cache.get("j").await.unwrap();

        assert!(!Arc::ptr_eq(&english, &japanese));
        assert_eq!(english.lang_code(), "a");
        assert_eq!(japanese.lang_code(), "j");
        assert_eq!(cache.loaded().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_first_use_constructs_once() {
        let cache = Arc::new(counting_cache());

        let left = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get("b").await.unwrap() })
        };
        let right = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get("b").await.unwrap() })
        };

        let (left, right) = (left.await.unwrap(), right.await.unwrap());
        assert!(Arc::ptr_eq(&left, &right));
        assert_eq!(cache.loaded().await, 1);
    }

    #[tokio::test]
    async fn test_construction_failure_is_propagated_and_not_cached() {
        let cache = counting_cache();

        assert!(cache.get("q").await.is_err());
        assert_eq!(cache.loaded().await, 0);

        // still rejected on a second attempt
        assert!(cache.get("q").await.is_err());
    }
}
