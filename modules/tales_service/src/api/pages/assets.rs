//! Static assets embedded at build time

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

fn content_type(path: &str) -> mime::Mime {
    match path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "css" => mime::TEXT_CSS_UTF_8,
        Some(ext) if ext == "js" => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some(ext) if ext == "svg" => mime::IMAGE_SVG,
        Some(ext) if ext == "png" => mime::IMAGE_PNG,
        Some(ext) if ext == "json" => mime::APPLICATION_JSON,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// `GET /assets/{*path}`
pub async fn asset_handler(Path(path): Path<String>) -> Response {
    match Assets::get(&path) {
        Some(file) => (
            [(header::CONTENT_TYPE, content_type(&path).to_string())],
            file.data.into_owned(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "asset not found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_is_embedded() {
        assert!(Assets::get("style.css").is_some());
        assert!(Assets::get("missing.css").is_none());
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type("style.css"), mime::TEXT_CSS_UTF_8);
        assert_eq!(content_type("logo.PNG"), mime::IMAGE_PNG);
        assert_eq!(content_type("README"), mime::APPLICATION_OCTET_STREAM);
    }
}
