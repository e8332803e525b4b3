use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::collection::FeatureCollection;

/// Failure to retrieve or decode the wells FeatureCollection.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("response from {endpoint} is not valid JSON: {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn is_http_endpoint(endpoint: &str) -> bool {
    endpoint.starts_with("http://") || endpoint.starts_with("https://")
}

/// Fetch the body of an HTTP endpoint with a single GET. Non-2xx statuses are errors.
pub fn download_wells(endpoint: &str) -> Result<String, FetchError> {
    let request_error = |source: reqwest::Error| FetchError::Request {
        endpoint: endpoint.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::builder()
        .user_agent("well-map")
        .build()
        .map_err(request_error)?;
    let response = client
        .get(endpoint)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(request_error)?;
    response.text().map_err(request_error)
}

/// Load the wells FeatureCollection from `endpoint`.
///
/// HTTP(S) URLs are fetched once, anything else is read as a local file path. There is no retry.
pub fn load(endpoint: &str) -> Result<FeatureCollection, FetchError> {
    let contents = if is_http_endpoint(endpoint) {
        log::info!("Downloading wells from {}", endpoint);
        download_wells(endpoint)?
    } else {
        let path = Path::new(endpoint);
        log::info!("Reading wells from local file {:?}", path);
        fs::read_to_string(path).map_err(|source| FetchError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    FeatureCollection::from_json_str(&contents).map_err(|source| FetchError::Parse {
        endpoint: endpoint.to_string(),
        source,
    })
}
