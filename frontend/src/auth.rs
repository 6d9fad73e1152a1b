use yew::prelude::*;
use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use crate::api::{ApiError, RemoteStore};

#[derive(PartialEq, Debug)]
enum LoginStatus {
	AwaitingInput,
	LoggingIn,
	InternalError(String),
	LoggedIn(RemoteStore),
	BadAuth,
	NoPasswordProvided
}

#[derive(Properties, PartialEq)]
pub struct AuthProps {
	// what to show once we're logged in, given the store for the logged-in user's wedding
	pub render: Callback<RemoteStore, Html>
}

#[function_component(AuthView)]
pub fn auth_view(props: &AuthProps) -> Html {
	// So this whole thing is not really super secure 'cause it's all running in wasm client-side
	// and technically someone with know-how could mess with that but the important part is that
	// the true authentication is happening server-side with every API request (they all need the
	// session id), so if they manage to view this page, they don't actually gain any access

	// If we logged in before, just assume the session is still good. If it isn't, the first
	// request the admin page makes will tell them so.
	let login_status = use_state(|| RemoteStore::remembered()
		.map_or(LoginStatus::AwaitingInput, LoginStatus::LoggedIn)
	);
	// (username, password)
	let creds = use_state(|| (String::new(), String::new()));

	let login_clone = login_status.clone();

	let user_creds = creds.clone();
	let username_input = Callback::from(move |e: Event|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				user_creds.set((input.value(), user_creds.1.clone()));
			}
	);

	let pass_creds = creds.clone();
	let password_input = Callback::from(move |e: Event|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				pass_creds.set((pass_creds.0.clone(), input.value()));
			}
	);

	let submit_click = Callback::from(move |_| {
		let login_reclone = login_clone.clone();
		let (username, password) = (*creds).clone();

		if password.is_empty() {
			login_reclone.set(LoginStatus::NoPasswordProvided);
			return;
		}

		login_reclone.set(LoginStatus::LoggingIn);

		wasm_bindgen_futures::spawn_local(async move {
			let status = match RemoteStore::login(username, password).await {
				Ok(store) => LoginStatus::LoggedIn(store),
				Err(ApiError::Unauthorized) => LoginStatus::BadAuth,
				Err(e) => {
					log!(format!("Error logging in: {e:?}"));
					LoginStatus::InternalError(e.to_string())
				}
			};

			login_reclone.set(status);
		})
	});

	let logout_status = login_status.clone();

	let login_form = html! {
		<>
			<h1>{ "Login" }</h1>
			<input placeholder="username" onchange={ username_input } />
			<input placeholder="password" type="password" onchange={ password_input } />
			<button onclick={ submit_click }>{ "Login" }</button>
		</>
	};

	match &*login_status {
		LoginStatus::LoggingIn => html! { <p>{ "Logging in..." }</p> },
		LoginStatus::LoggedIn(store) => {
			let store_clone = store.clone();
			let logout = Callback::from(move |_| {
				store_clone.forget();
				logout_status.set(LoginStatus::AwaitingInput);
			});

			html! {
				<>
					<button class="secondary" id="logout-button" onclick={ logout }>{ "Log out" }</button>
					{ props.render.emit(store.clone()) }
				</>
			}
		},
		LoginStatus::AwaitingInput => login_form,
		failed => html! {
			<>
				<p>{
					match failed {
						LoginStatus::BadAuth => "Incorrect username or password".to_string(),
						LoginStatus::NoPasswordProvided => "No password was provided".to_string(),
						LoginStatus::InternalError(err) => format!("Something went wrong, try again later :/ ({err})"),
						_ => String::new()
					}
				}</p>
				{ login_form }
			</>
		}
	}
}
