//! The set of provider clients a pipeline run can call.

use std::sync::Arc;

use serde::Serialize;
use vibeshift_providers::{
    build_http_client, GeminiClient, ImageGenerator, ImagenClient, LipSyncer, ShotstackClient,
    SyncClient, TextGenerator, VideoRenderer,
};

use crate::config::PipelineConfig;
use crate::error::PipelineError;

/// Provider clients, each `None` when its key is not configured.
#[derive(Clone, Default)]
pub struct Providers {
    pub text: Option<Arc<dyn TextGenerator>>,
    pub image: Option<Arc<dyn ImageGenerator>>,
    pub lip_sync: Option<Arc<dyn LipSyncer>>,
    pub renderer: Option<Arc<dyn VideoRenderer>>,
}

/// Which provider clients are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderAvailability {
    /// Gemini scene scripting.
    pub scripting: bool,
    /// Imagen stills.
    pub images: bool,
    pub lip_sync: bool,
    pub render: bool,
}

impl Providers {
    pub fn availability(&self) -> ProviderAvailability {
        ProviderAvailability {
            scripting: self.text.is_some(),
            images: self.image.is_some(),
            lip_sync: self.lip_sync.is_some(),
            render: self.renderer.is_some(),
        }
    }

    /// Build real HTTP clients for every provider that has a key.
    ///
    /// All clients share one connection pool and the configured timeout.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let http = build_http_client(config.provider_timeout())?;

        let text = config.vertex_api_key.as_ref().map(|key| {
            Arc::new(GeminiClient::with_base_url(
                http.clone(),
                &config.gemini_base_url,
                key.clone(),
            )) as Arc<dyn TextGenerator>
        });

        let image = config.vertex_api_key.as_ref().map(|key| {
            Arc::new(ImagenClient::with_base_url(
                http.clone(),
                &config.gemini_base_url,
                key.clone(),
            )) as Arc<dyn ImageGenerator>
        });

        let lip_sync = config.sync_api_key.as_ref().map(|key| {
            Arc::new(SyncClient::with_base_url(
                http.clone(),
                &config.sync_base_url,
                key.clone(),
            )) as Arc<dyn LipSyncer>
        });

        let renderer = config.shotstack_api_key.as_ref().map(|key| {
            Arc::new(ShotstackClient::with_base_url(
                http.clone(),
                &config.shotstack_base_url,
                key.clone(),
            )) as Arc<dyn VideoRenderer>
        });

        Ok(Self {
            text,
            image,
            lip_sync,
            renderer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_leave_providers_unset() {
        let providers = Providers::from_config(&PipelineConfig::default()).unwrap();
        assert!(providers.text.is_none());
        assert!(providers.image.is_none());
        assert!(providers.lip_sync.is_none());
        assert!(providers.renderer.is_none());
    }

    #[test]
    fn vertex_key_enables_text_and_image() {
        let config = PipelineConfig {
            vertex_api_key: Some("k".into()),
            shotstack_api_key: Some("s".into()),
            ..PipelineConfig::default()
        };
        let providers = Providers::from_config(&config).unwrap();
        assert!(providers.text.is_some());
        assert!(providers.image.is_some());
        assert!(providers.lip_sync.is_none());
        assert!(providers.renderer.is_some());
    }

    #[test]
    fn availability_reflects_configured_clients() {
        let config = PipelineConfig {
            sync_api_key: Some("s".into()),
            ..PipelineConfig::default()
        };
        let providers = Providers::from_config(&config).unwrap();
        assert_eq!(
            providers.availability(),
            ProviderAvailability {
                scripting: false,
                images: false,
                lip_sync: true,
                render: false,
            }
        );
        assert_eq!(
            Providers::default().availability(),
            ProviderAvailability {
                scripting: false,
                images: false,
                lip_sync: false,
                render: false,
            }
        );
    }
}
