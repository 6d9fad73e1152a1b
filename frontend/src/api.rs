use std::rc::Rc;
use gloo_console::log;
use gloo_net::http::{Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use shared_data::{LoginReq, LoginResp, WeddingData, WeddingUpdate, config::resolve_base_url};

const SESSION_KEY: &str = "wedding_session_id";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("Couldn't talk to the server: {0}")]
	Request(#[from] gloo_net::Error),
	#[error("Couldn't encode the request: {0}")]
	Encode(#[from] serde_json::Error),
	#[error("You're not logged in (or your session expired)")]
	Unauthorized,
	#[error("The server said no ({status}): {body}")]
	Status { status: u16, body: String },
}

pub fn backend_url() -> String {
	resolve_base_url(option_env!("WEDDING_BACKEND_URL"), || {
		web_sys::window()
			.and_then(|w| w.location().origin().ok())
			.unwrap_or_default()
	})
}

/// Sends a request to `endpoint` (which should start with `/api`) on the backend. Everything is
/// sent as json, but `headers` can override that if they need to. Whatever status the server
/// responds with is left for the caller to deal with; only failing to send at all is an error
/// here.
pub async fn api_call(
	method: Method,
	endpoint: &str,
	headers: &[(&str, &str)],
	body: Option<String>
) -> Result<Response, ApiError> {
	let url = format!("{}{endpoint}", backend_url());

	let builder = headers.iter().fold(
		RequestBuilder::new(&url)
			.method(method)
			.header("Content-Type", "application/json"),
		|builder, (name, value)| builder.header(name, value)
	);

	let request = match body {
		Some(body) => builder.body(body),
		None => builder.build()
	};

	// This could be a nice and_then chain but you can't await inside a closure
	let result = match request {
		Ok(req) => req.send().await,
		Err(err) => Err(err)
	};

	result.map_err(|err| {
		log!(format!("API call failed for {endpoint}: {err:?}"));
		ApiError::Request(err)
	})
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
	match res.status() {
		200..=299 => Ok(res.json::<T>().await?),
		401 | 403 => Err(ApiError::Unauthorized),
		status => Err(ApiError::Status {
			status,
			body: res.text().await.unwrap_or_else(|e| format!("Couldn't get text: {e:?}"))
		})
	}
}

fn encode_component(s: &str) -> String {
	js_sys::encode_uri_component(s).into()
}

/// The backend's copy of a single wedding, as seen by whoever is logged in.
#[derive(Clone, PartialEq, Debug)]
pub struct RemoteStore {
	session_id: Rc<str>,
}

#[derive(Serialize)]
struct SaveBody<'a> {
	session_id: &'a str,
	#[serde(flatten)]
	update: &'a WeddingUpdate,
}

impl RemoteStore {
	pub async fn login(username: String, password: String) -> Result<Self, ApiError> {
		let body = serde_json::to_string(&LoginReq { username, password })?;
		let res = api_call(Method::POST, "/api/auth/login", &[], Some(body)).await?;
		let resp: LoginResp = decode(res).await?;

		if !resp.success || resp.session_id.is_empty() {
			return Err(ApiError::Unauthorized);
		}

		let store = Self { session_id: resp.session_id.into() };
		store.remember();
		Ok(store)
	}

	// So that a reload of the admin page doesn't make you log in again
	pub fn remembered() -> Option<Self> {
		web_sys::window()?
			.local_storage()
			.ok()
			.flatten()?
			.get_item(SESSION_KEY)
			.ok()
			.flatten()
			.filter(|id| !id.is_empty())
			.map(|id| Self { session_id: id.into() })
	}

	fn remember(&self) {
		let stored = web_sys::window()
			.and_then(|w| w.local_storage().ok().flatten())
			.map(|storage| storage.set_item(SESSION_KEY, &self.session_id));

		if !matches!(stored, Some(Ok(()))) {
			log!("Couldn't save the session id; you'll have to log in again next time");
		}
	}

	pub fn forget(&self) {
		if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
			_ = storage.remove_item(SESSION_KEY);
		}
	}

	pub async fn load(&self) -> Result<WeddingData, ApiError> {
		let endpoint = format!("/api/wedding?session_id={}", encode_component(&self.session_id));
		decode(api_call(Method::GET, &endpoint, &[], None).await?).await
	}

	/// Sends just the fields set in `update`; the backend merges them into the document and hands
	/// back the whole thing.
	pub async fn save(&self, update: &WeddingUpdate) -> Result<WeddingData, ApiError> {
		let body = serde_json::to_string(&SaveBody { session_id: &self.session_id, update })?;
		decode(api_call(Method::PUT, "/api/wedding", &[], Some(body)).await?).await
	}

	pub async fn load_public(wedding_id: &str) -> Result<WeddingData, ApiError> {
		let endpoint = format!("/api/wedding/public/{}", encode_component(wedding_id));
		decode(api_call(Method::GET, &endpoint, &[], None).await?).await
	}
}
