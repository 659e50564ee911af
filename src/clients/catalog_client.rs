use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::app_system::CatalogError;
use crate::domain::{Language, Product};
use crate::speech::SpeechRecognizer;

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(CatalogClient, Product, CatalogError, product);

impl CatalogClient {
    /// Loads products under their own ids.
    #[instrument(skip_all, fields(count = products.len()))]
    pub async fn seed(&self, products: Vec<Product>) -> Result<(), CatalogError> {
        for product in products {
            self.inner.insert(product.id.clone(), product).await?;
        }
        info!("Catalog seeded");
        Ok(())
    }

    /// Every product, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        let mut products = self.inner.list().await?;
        products.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(products)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let products = self.list_products().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category.trim()))
            .collect())
    }

    /// Case-insensitive name search over both languages, ordered by the name
    /// shown in `language`. A blank query returns the whole catalog.
    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn search(&self, query: &str, language: Language) -> Result<Vec<Product>, CatalogError> {
        let mut hits: Vec<Product> = self
            .list_products()
            .await?
            .into_iter()
            .filter(|p| p.name.matches(query))
            .collect();
        hits.sort_by(|a, b| a.name.in_language(language).cmp(b.name.in_language(language)));
        debug!(hits = hits.len(), "Search finished");
        Ok(hits)
    }

    /// Listens once and searches for whatever was heard.
    ///
    /// # Errors
    /// `CatalogError::Speech` when no recognizer is available or it heard nothing.
    #[instrument(skip(self, recognizer))]
    #[allow(dead_code)]
    pub async fn voice_search(
        &self,
        recognizer: Option<&dyn SpeechRecognizer>,
        language: Language,
    ) -> Result<(String, Vec<Product>), CatalogError> {
        let recognizer = recognizer.ok_or(crate::speech::SpeechError::Unsupported)?;
        let transcript = recognizer.listen(language).map_err(|e| {
            warn!(error = %e, "Voice capture failed");
            e
        })?;
        info!(%transcript, "Voice query recognised");
        let hits = self.search(&transcript, language).await?;
        Ok((transcript, hits))
    }
}
