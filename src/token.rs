use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Reads the named credential from [***document.cookie***](https://developer.mozilla.org/en-US/docs/Web/API/Document/cookie).
///
/// The value is read freshly on every call; nothing is cached between refresh
/// cycles. `None` means the cookie jar is inaccessible or holds no such cookie.
#[must_use]
pub fn csrf_token(name: &str) -> Option<String> {
	let document = web_sys::window()?
		.document()?
		.dyn_into::<HtmlDocument>()
		.ok()?;
	let cookies = document.cookie().ok()?;
	parse_cookie(&cookies, name)
}

/// Finds `name` in a `document.cookie` string and returns its percent-decoded
/// value. Names match exactly up to the `=`; `sessionid2` never satisfies a
/// lookup for `sessionid`.
#[must_use]
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
	for cookie in cookies.split(';') {
		let cookie = cookie.trim();
		if let Some(value) = cookie
			.strip_prefix(name)
			.and_then(|rest| rest.strip_prefix('='))
		{
			return match js_sys::decode_uri_component(value) {
				Ok(decoded) => Some(decoded.into()),
				Err(_) => {
					trace!("Cookie {:?} holds an undecodable value.", name);
					None
				}
			};
		}
	}
	None
}
