use std::{marker::PhantomData, rc::Rc, str::FromStr};
use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use shared_data::{Theme, WeddingData, WeddingUpdate, editor::{BridalParty, GroomParty, SpecialRoles}};
use crate::{
	api::{ApiError, RemoteStore},
	faq_admin::FaqAdmin,
	notice::alert,
	party_admin::PartyAdmin,
	style::SharedStyle
};

#[derive(Properties, PartialEq)]
pub struct AdminProps {
	pub store: RemoteStore
}

#[function_component(Admin)]
pub fn admin(props: &AdminProps) -> Html {
	let doc = use_state(|| Option::<Result<Rc<WeddingData>, ApiError>>::None);
	// Kept apart from the document so that switching it doesn't make every editor reload
	let theme = use_state(|| Option::<Theme>::None);

	{
		let doc = doc.clone();
		use_effect_with(props.store.clone(), move |store| {
			let store = store.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let res = store.load().await;

				match &res {
					Ok(_) => log!("Loaded wedding data"),
					// Whatever we had stored isn't any good anymore, so don't try it again next time
					Err(ApiError::Unauthorized) => store.forget(),
					Err(e) => log!(format!("Couldn't load wedding data: {e:?}"))
				}

				doc.set(Some(res.map(Rc::new)));
			});
		});
	}

	let data = match &*doc {
		None => return html! { <p>{ "Loading your wedding..." }</p> },
		Some(Err(ApiError::Unauthorized)) => return html! {
			<p>{ "Your session has expired. Log out and log back in to keep editing." }</p>
		},
		Some(Err(err)) => return html! {
			<>
				<h1>{ "Couldn't load your wedding" }</h1>
				<p>{ err.to_string() }</p>
			</>
		},
		Some(Ok(data)) => data.clone()
	};

	let current_theme = (*theme).unwrap_or(data.theme);

	let theme_store = props.store.clone();
	let theme_state = theme.clone();
	let theme_change = Callback::from(move |e: Event| {
		let Some(picked) = e.target()
			.and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
			.and_then(|select| Theme::from_str(&select.value()).ok()) else {
				return;
			};

		theme_state.set(Some(picked));

		let store = theme_store.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let update = WeddingUpdate { theme: Some(picked), ..WeddingUpdate::default() };
			if let Err(e) = store.save(&update).await {
				log!(format!("Couldn't save theme: {e:?}"));
				alert("Failed to save theme. Please try again.");
			}
		});
	});

	html! {
		<>
			<SharedStyle theme={ current_theme } />
			<div class="page">
				<div class="page-header">
					<h1>{ data.couple_display() }</h1>
					<div class="divider" />
					<p class="subtitle">{ "Wedding Dashboard" }</p>
				</div>
				<nav class="site-nav">
					<a href={ format!("/site/{}/schedule", data.id) }>{ "Schedule" }</a>
					<a href={ format!("/site/{}/party", data.id) }>{ "Wedding Party" }</a>
					<a href={ format!("/site/{}/faq", data.id) }>{ "FAQ" }</a>
				</nav>
				<div class="card">
					<label>{ "Theme " }</label>
					<select onchange={ theme_change }>
						{ for Theme::ALL.into_iter().map(|t| html! {
							<option value={ t.to_string() } selected={ t == current_theme }>{ t.to_string() }</option>
						}) }
					</select>
				</div>
				<div class="card">
					<FaqAdmin doc={ data.clone() } store={ props.store.clone() } />
				</div>
				<div class="card">
					<PartyAdmin<BridalParty> doc={ data.clone() } store={ props.store.clone() } list={ PhantomData } />
				</div>
				<div class="card">
					<PartyAdmin<GroomParty> doc={ data.clone() } store={ props.store.clone() } list={ PhantomData } />
				</div>
				<div class="card">
					<PartyAdmin<SpecialRoles> doc={ data } store={ props.store.clone() } list={ PhantomData } />
				</div>
			</div>
		</>
	}
}
