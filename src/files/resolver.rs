//! Target to response mapping

use tracing::debug;

use crate::files::sandbox::{FileLookup, Sandbox};
use crate::http::mime::{content_type_for, extension_of};
use crate::http::response::ResponseDescriptor;

const INDEX_DOCUMENT: &str = "/index.html";
const NOT_FOUND_DOCUMENT: &str = "404.html";
const BAD_REQUEST_DOCUMENT: &str = "400.html";

/// Maps request targets to response descriptors.
///
/// Every target yields exactly one of 200 with an existing file, 400 with
/// the `400.html` fallback, or 404 with the `404.html` fallback.
#[derive(Debug, Clone)]
pub struct Resolver {
    sandbox: Sandbox,
}

impl Resolver {
    pub fn new(sandbox: Sandbox) -> Self {
        Self { sandbox }
    }

    pub async fn resolve(&self, target: &str) -> ResponseDescriptor {
        let target = if target == "/" { INDEX_DOCUMENT } else { target };

        let path = match self.sandbox.locate(target) {
            Ok(path) => path,
            Err(e) => {
                debug!(path = %target, reason = %e, "Rejecting target");
                return self.bad_request();
            }
        };

        match self.sandbox.lookup(&path).await {
            FileLookup::File(file) => {
                let content_type = content_type_for(extension_of(target));
                ResponseDescriptor::ok(file, content_type)
            }
            FileLookup::Missing => self.not_found(),
            FileLookup::Escape => {
                debug!(path = %target, "Target resolves outside the content root");
                self.bad_request()
            }
        }
    }

    pub fn bad_request(&self) -> ResponseDescriptor {
        ResponseDescriptor::bad_request(self.sandbox.fallback(BAD_REQUEST_DOCUMENT))
    }

    pub fn not_found(&self) -> ResponseDescriptor {
        ResponseDescriptor::not_found(self.sandbox.fallback(NOT_FOUND_DOCUMENT))
    }
}
