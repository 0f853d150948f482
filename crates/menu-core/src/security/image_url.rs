//! Image URL allow-listing.

use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

const IMAGE_HOSTS: [&str; 4] = [
    "unsplash.com",
    "images.unsplash.com",
    "pixabay.com",
    "pexels.com",
];

/// Outcome of [`validate_image_url`]. `sanitized` is empty unless valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlValidation {
    pub is_valid: bool,
    pub sanitized: String,
}

impl ImageUrlValidation {
    fn accept(sanitized: String) -> Self {
        Self {
            is_valid: true,
            sanitized,
        }
    }

    fn reject() -> Self {
        Self {
            is_valid: false,
            sanitized: String::new(),
        }
    }
}

/// Check that `url` points at an image we are willing to render.
///
/// An empty string is valid and means "no image". Otherwise the URL must be
/// absolute http(s), and either its path contains a known image extension
/// anywhere (not only as a suffix) or its host contains one of the image
/// hosting domains. The sanitized value is the parser's normalized
/// serialization, never the raw input.
pub fn validate_image_url(url: &str) -> ImageUrlValidation {
    if url.is_empty() {
        return ImageUrlValidation::accept(String::new());
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "Image URL failed to parse");
            return ImageUrlValidation::reject();
        }
    };

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return ImageUrlValidation::reject();
    }

    let path = parsed.path().to_lowercase();
    let has_image_extension = IMAGE_EXTENSIONS.iter().any(|ext| path.contains(ext));

    let host = parsed.host_str().unwrap_or_default();
    let is_image_host = IMAGE_HOSTS.iter().any(|domain| host.contains(domain));

    if !has_image_extension && !is_image_host {
        return ImageUrlValidation::reject();
    }

    ImageUrlValidation::accept(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_no_image() {
        assert_eq!(
            validate_image_url(""),
            ImageUrlValidation {
                is_valid: true,
                sanitized: String::new()
            }
        );
    }

    #[test]
    fn test_unsplash_png() {
        let result = validate_image_url("https://images.unsplash.com/x.png");
        assert!(result.is_valid);
        assert_eq!(result.sanitized, "https://images.unsplash.com/x.png");
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!validate_image_url("ftp://images.unsplash.com/x.png").is_valid);
        assert!(!validate_image_url("javascript:alert(1)").is_valid);
        assert!(!validate_image_url("data:image/png;base64,AAAA").is_valid);
    }

    #[test]
    fn test_rejects_unknown_host_without_extension() {
        let result = validate_image_url("https://evil.com/file.txt");
        assert!(!result.is_valid);
        assert_eq!(result.sanitized, "");
    }

    #[test]
    fn test_rejects_unparseable() {
        assert!(!validate_image_url("not a url").is_valid);
        assert!(!validate_image_url("/relative/photo.jpg").is_valid);
    }

    #[test]
    fn test_extension_is_substring_match() {
        assert!(validate_image_url("http://example.com/a.JPG").is_valid);
        assert!(validate_image_url("https://example.com/photo.jpg.html").is_valid);
        assert!(validate_image_url("https://cdn.example.com/img.webp/raw").is_valid);
        // the query string is not part of the path
        assert!(!validate_image_url("https://example.com/view?file=a.png").is_valid);
    }

    #[test]
    fn test_host_allow_list() {
        assert!(validate_image_url("https://pixabay.com/photos/123").is_valid);
        assert!(validate_image_url("https://www.pexels.com/photo/456").is_valid);
        assert!(validate_image_url("https://unsplash.com.evil.io/a").is_valid);
    }

    #[test]
    fn test_sanitized_is_normalized() {
        let result = validate_image_url("HTTPS://Images.Unsplash.COM/photo?w=400");
        assert!(result.is_valid);
        assert_eq!(result.sanitized, "https://images.unsplash.com/photo?w=400");

        let result = validate_image_url("https://pexels.com");
        assert_eq!(result.sanitized, "https://pexels.com/");

        let result = validate_image_url("https://example.com/my dish.png");
        assert_eq!(result.sanitized, "https://example.com/my%20dish.png");
    }
}
