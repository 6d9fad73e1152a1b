// The backend url can be baked in at build time (for when the frontend is being served from
// somewhere other than the api, like during development) with the `WEDDING_BACKEND_URL` env var.
// Otherwise we just assume the api lives at the same origin as the page.
pub fn resolve_base_url(configured: Option<&str>, origin: impl FnOnce() -> String) -> String {
	match configured.map(str::trim) {
		Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
		_ => origin(),
	}
}

#[cfg(test)]
mod tests {
	use super::resolve_base_url;

	#[test]
	fn configured_url_wins() {
		let url = resolve_base_url(Some("http://localhost:8001"), || unreachable!());
		assert_eq!(url, "http://localhost:8001");
	}

	#[test]
	fn trailing_slash_is_dropped() {
		let url = resolve_base_url(Some("https://wedding.example.com/"), || unreachable!());
		assert_eq!(url, "https://wedding.example.com");
	}

	#[test]
	fn blank_or_missing_uses_origin() {
		let origin = || "https://site.example.com".to_string();
		assert_eq!(resolve_base_url(None, origin), "https://site.example.com");
		assert_eq!(resolve_base_url(Some(""), origin), "https://site.example.com");
		assert_eq!(resolve_base_url(Some("   "), origin), "https://site.example.com");
	}
}
