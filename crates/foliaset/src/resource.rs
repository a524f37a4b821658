//! Scoped retrieval of local files and remote documents

use crate::config::LoaderConfig;
use crate::{Result, SetDefinitionError};
use std::fs::File;
use std::io::Read;
use tracing::{debug, trace};

/// Locations starting with `/` or `.` are local paths; anything else is fetched.
pub fn is_local(location: &str) -> bool {
    location.starts_with('/') || location.starts_with('.')
}

/// An open document handle. Released when dropped.
pub enum Resource {
    Local { path: String, file: File },
    Remote { url: String, response: reqwest::blocking::Response },
}

impl Resource {
    pub fn open(location: &str, config: &LoaderConfig) -> Result<Self> {
        if is_local(location) {
            debug!("Opening local set definition {}", location);
            let file = File::open(location).map_err(|e| SetDefinitionError::retrieval(location, e))?;
            return Ok(Resource::Local {
                path: location.to_string(),
                file,
            });
        }

        debug!("Fetching remote set definition {}", location);
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(|e| SetDefinitionError::retrieval(location, e))?;
        let response = client
            .get(location)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SetDefinitionError::retrieval(location, e))?;
        Ok(Resource::Remote {
            url: location.to_string(),
            response,
        })
    }

    pub fn location(&self) -> &str {
        match self {
            Resource::Local { path, .. } => path,
            Resource::Remote { url, .. } => url,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Resource::Remote { .. })
    }

    /// Read the whole document. A failed read is a retrieval error.
    pub fn read_all(mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.read_to_end(&mut bytes)
            .map_err(|e| SetDefinitionError::retrieval(self.location(), e))?;
        Ok(bytes)
    }
}

impl Read for Resource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Resource::Local { file, .. } => file.read(buf),
            Resource::Remote { response, .. } => response.read(buf),
        }
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        trace!("Released {}", self.location());
    }
}

/// Open, read fully and release a document
pub fn fetch(location: &str, config: &LoaderConfig) -> Result<Vec<u8>> {
    Resource::open(location, config)?.read_all()
}
