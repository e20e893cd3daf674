use super::backend::BackendRateProvider;
use super::fallback::StaticRateProvider;
use super::traits::RateProvider;

/// Ordered collection of rate providers.
///
/// Registration order is fallback priority: the rate service walks the
/// list and the first provider that returns a usable table wins. New
/// sources can be added without modifying existing code.
pub struct RateProviderRegistry {
    providers: Vec<Box<dyn RateProvider>>,
}

impl RateProviderRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// The default chain: live backend endpoint first, static table last.
    #[must_use]
    pub fn new_with_defaults(api_base_url: &str) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(BackendRateProvider::new(api_base_url)));
        registry.register(Box::new(StaticRateProvider));
        registry
    }

    /// Register a new rate provider at the end of the chain.
    pub fn register(&mut self, provider: Box<dyn RateProvider>) {
        self.providers.push(provider);
    }

    #[must_use]
    pub fn providers(&self) -> &[Box<dyn RateProvider>] {
        &self.providers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for RateProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
