use core::cell::RefCell;

/// Client-side settings for the refresh exchange.
///
/// [`Default`] carries the values the server framework ships with, so most pages
/// never call [`configure`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
	/// Server endpoint every refresh request is POSTed to.
	pub endpoint: String,
	/// Name of the cookie holding the session credential.
	pub token_cookie: String,
	/// Request header the credential is sent under.
	pub token_header: String,
}
impl Default for Config {
	fn default() -> Self {
		Self {
			endpoint: "/ddf-get-form/".to_owned(),
			token_cookie: "csrftoken".to_owned(),
			token_header: "X-CSRFToken".to_owned(),
		}
	}
}

thread_local! {
	static CONFIG: RefCell<Config> = RefCell::new(Config::default());
}

/// Replaces the active configuration. Takes effect on the next refresh;
/// an exchange already in flight keeps the values it was issued with.
pub fn configure(config: Config) {
	CONFIG.with(|current| *current.borrow_mut() = config);
}

/// The active configuration.
#[must_use]
pub fn current() -> Config {
	CONFIG.with(|current| current.borrow().clone())
}
