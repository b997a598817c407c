//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Strings API",
        version = "0.1.0",
        description = "API for managing a collection of strings"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ServiceInfo;

/// Combined OpenAPI documentation for all APIs
///
/// Domain paths are served at the root, so their documents are merged in
/// as-is rather than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceInfo::openapi().merge_from(domain_items::ApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_document_keeps_info_and_item_paths() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Strings API");
        assert!(doc.paths.paths.contains_key("/items/{id}"));
        assert!(doc.paths.paths.contains_key("/tail"));
    }
}
