/// Configuration for the frontend application

/// Base URL for static assets
/// - For local development: "/"
/// - For GitHub Pages: "/portfolio/"
#[cfg(not(feature = "gh-pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "gh-pages")]
pub const BASE_URL: &str = "/portfolio/";

/// Helper function to construct asset paths.
/// Absolute URLs (e.g. remote thumbnails) pass through untouched.
pub fn asset_path(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
