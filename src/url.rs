//! URL handling: cold-start query parsing, target-URL construction, and
//! page identifier sanitization.

use std::sync::OnceLock;

use regex::Regex;

use crate::state::{NavigationState, PAGE_KEY, PageParams, RESERVED_KEYS};

fn query_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"[?&]([^=&]+)=([^&]*)").expect("query pattern is valid"))
}

/// Parses a query string (`?key=value&key=value`) into a flat parameter map.
///
/// Keys and values are percent-decoded; a component that fails to decode is
/// kept raw. Later occurrences of a duplicate key overwrite earlier ones —
/// accepted behavior, not a bug to fix.
pub fn parse_query(query: &str) -> PageParams {
	let mut params = PageParams::new();

	for caps in query_pattern().captures_iter(query) {
		let key = percent_decode(&caps[1]);
		let value = percent_decode(&caps[2]);
		params.insert(key, value);
	}

	params
}

fn percent_decode(component: &str) -> String {
	urlencoding::decode(component)
		.map(|decoded| decoded.into_owned())
		.unwrap_or_else(|_| component.to_string())
}

/// Builds the visible URL committed to the history stack for a state.
///
/// The shape is `{base}/../index.html?page={page}`, followed by `&key=value`
/// for every non-reserved param when `display_in_url` is set. Params are
/// percent-encoded; reserved keys never appear in the query string.
pub fn state_url(base: &str, state: &NavigationState) -> String {
	let mut url = format!("{}/../index.html?{}={}", base, PAGE_KEY, state.page);

	if state.display_in_url {
		for (key, value) in &state.params {
			if RESERVED_KEYS.contains(&key.as_str()) {
				continue;
			}
			url.push('&');
			url.push_str(&urlencoding::encode(key));
			url.push('=');
			url.push_str(&urlencoding::encode(value));
		}
	}

	url
}

/// Strips every character outside `[A-Za-z0-9_]` from a page identifier.
///
/// Sanitization policy, not an error: the stripped identifier is what gets
/// looked up in the page registry, so a hostile identifier can at worst miss.
pub fn sanitize_page_id(page: &str) -> String {
	page.chars()
		.filter(|c| c.is_ascii_alphanumeric() || *c == '_')
		.collect()
}
