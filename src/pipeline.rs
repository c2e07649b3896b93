// compliance-docgen/src/pipeline.rs

use std::path::PathBuf;

use sha2::{Digest, Sha256};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::assembly::{artifact_filename, generate_document};
use crate::config::Config;
use crate::error::DocumentError;
use crate::models::{
    DocumentGenerationRequest, DocumentGenerationResponse, GeneratedArtifact,
};

/// Orchestrates: generate → checksum → write artifact → build response.
pub struct DocumentPipeline {
    output_dir: PathBuf,
}

impl DocumentPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: PathBuf::from(&config.output.dir),
        }
    }

    /// Parse a raw JSON request and process it. A request that does not
    /// parse yields an error response, not a panic.
    pub async fn process_raw(&self, raw: &[u8]) -> DocumentGenerationResponse {
        let request: DocumentGenerationRequest = match serde_json::from_slice(raw) {
            Ok(req) => req,
            Err(e) => {
                let e = DocumentError::from(e);
                error!(error = %e, "Failed to parse request");
                return DocumentGenerationResponse::error("unknown".to_string(), e.to_string());
            }
        };
        self.process(request).await
    }

    /// Main entry point. Failures are folded into an error response rather
    /// than propagated; callers always get a well-formed manifest.
    #[instrument(skip(self, req), fields(
        document_type = req.data.kind.type_key(),
        quality = ?req.options.quality,
    ))]
    pub async fn process(&self, req: DocumentGenerationRequest) -> DocumentGenerationResponse {
        let request_id = Uuid::new_v4().to_string();

        info!(request_id = %request_id, title = %req.data.metadata.title, "Processing generation request");

        let bytes = match generate_document(&req.data, &req.options).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(request_id = %request_id, error = %e, "Generation failed");
                return DocumentGenerationResponse::error(request_id, e.to_string());
            }
        };

        let filename = artifact_filename(&req.data.metadata.title);
        let sha256_checksum = hex::encode(Sha256::digest(&bytes));
        let size_bytes = bytes.len();

        if req.download {
            if let Err(e) = self.write_artifact(&filename, &bytes).await {
                error!(request_id = %request_id, error = %e, "Failed to write artifact");
                return DocumentGenerationResponse::error(request_id, e.to_string());
            }
        }

        info!(
            request_id = %request_id,
            filename = %filename,
            size_bytes,
            sha256 = %sha256_checksum,
            "Document generated"
        );

        DocumentGenerationResponse::success(
            request_id,
            GeneratedArtifact {
                format: req.options.format,
                filename,
                size_bytes,
                sha256_checksum,
            },
        )
    }

    async fn write_artifact(&self, filename: &str, bytes: &[u8]) -> crate::error::Result<()> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(self.output_dir.join(filename), bytes).await?;
        Ok(())
    }
}
