//! Deterministic stock-library provider.

use adcraft_error::{AdcraftResult, SynthesisError};
use adcraft_interface::{ImageRequest, SynthesisProvider, VideoRequest};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{debug, instrument};

const STOCK_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=1080",
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=1080",
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=1080",
    "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=1080",
    "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=1080",
    "https://images.unsplash.com/photo-1560343090-f0409e92791a?w=1080",
];

const STOCK_VIDEOS: &[&str] = &[
    "https://videos.pexels.com/video-files/3195394/3195394-uhd_2560_1440_25fps.mp4",
    "https://videos.pexels.com/video-files/4065924/4065924-hd_1920_1080_30fps.mp4",
    "https://videos.pexels.com/video-files/5585939/5585939-hd_1080_1920_25fps.mp4",
];

/// Stand-in provider that selects from fixed pools of stock media.
///
/// Selection depends only on the request, so the same prompt always yields
/// the same URL. An optional latency simulates a real backend.
#[derive(Debug, Clone)]
pub struct StockLibraryProvider {
    images: Vec<String>,
    videos: Vec<String>,
    latency: Duration,
}

impl Default for StockLibraryProvider {
    fn default() -> Self {
        Self::with_pools(
            STOCK_IMAGES.iter().map(|s| s.to_string()).collect(),
            STOCK_VIDEOS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl StockLibraryProvider {
    /// Provider over custom pools.
    pub fn with_pools(images: Vec<String>, videos: Vec<String>) -> Self {
        Self {
            images,
            videos,
            latency: Duration::ZERO,
        }
    }

    /// Wait this long before answering each call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn pick<'a>(&self, pool: &'a [String], key: &str, kind: &str) -> AdcraftResult<&'a String> {
        if pool.is_empty() {
            return Err(SynthesisError::failed(
                self.provider_name(),
                format!("{} pool is empty", kind),
            )
            .into());
        }
        let digest = Sha256::digest(key.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let index = (u64::from_be_bytes(prefix) % pool.len() as u64) as usize;
        Ok(&pool[index])
    }
}

#[async_trait]
impl SynthesisProvider for StockLibraryProvider {
    #[instrument(skip(self, request), fields(provider = "stock"))]
    async fn generate_image(&self, request: &ImageRequest) -> AdcraftResult<String> {
        self.simulate_latency().await;
        let key = format!("{}|{}", request.prompt, request.style);
        let url = self.pick(&self.images, &key, "image")?;
        debug!(url = %url, "Selected stock image");
        Ok(url.clone())
    }

    #[instrument(skip(self, request), fields(provider = "stock"))]
    async fn generate_video(&self, request: &VideoRequest) -> AdcraftResult<String> {
        self.simulate_latency().await;
        let url = self.pick(&self.videos, &request.prompt, "video")?;
        debug!(url = %url, "Selected stock video");
        Ok(url.clone())
    }

    fn provider_name(&self) -> &str {
        "stock"
    }
}
