use std::rc::Rc;
use gloo_console::log;
use yew::prelude::*;
use shared_data::WeddingData;
use crate::{
	api::{ApiError, RemoteStore},
	faq::FaqPage,
	party::PartyPage,
	schedule::SchedulePage,
	style::SharedStyle
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SitePage {
	Schedule,
	Party,
	Faq
}

#[derive(Properties, PartialEq)]
pub struct SiteProps {
	pub wedding_id: String,
	pub page: SitePage
}

/// Loads a wedding for guests to look at, and shows one of its pages
#[function_component(PublicSite)]
pub fn public_site(props: &SiteProps) -> Html {
	let doc = use_state(|| Option::<Result<Rc<WeddingData>, ApiError>>::None);

	{
		let doc = doc.clone();
		use_effect_with(props.wedding_id.clone(), move |id| {
			let id = id.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let res = RemoteStore::load_public(&id).await;

				if let Err(ref e) = res {
					log!(format!("Couldn't load wedding {id}: {e:?}"));
				}

				doc.set(Some(res.map(Rc::new)));
			});
		});
	}

	let data = match &*doc {
		None => return html! { <p>{ "Loading..." }</p> },
		Some(Err(ApiError::Status { status: 404, .. })) => return html! {
			<>
				<SharedStyle theme={ shared_data::Theme::default() } />
				<h1>{ "We couldn't find this wedding" }</h1>
			</>
		},
		Some(Err(err)) => return html! {
			<>
				<SharedStyle theme={ shared_data::Theme::default() } />
				<h1>{ "Something went wrong" }</h1>
				<p>{ err.to_string() }</p>
			</>
		},
		Some(Ok(data)) => data.clone()
	};

	let link = |page: SitePage, label: &str| {
		let path = match page {
			SitePage::Schedule => "schedule",
			SitePage::Party => "party",
			SitePage::Faq => "faq",
		};

		html! {
			<a href={ format!("/site/{}/{path}", props.wedding_id) } class={ classes!((page == props.page).then_some("current")) }>
				{ label }
			</a>
		}
	};

	html! {
		<>
			<SharedStyle theme={ data.theme } />
			<nav class="site-nav">
				<strong>{ data.couple_display() }</strong>
				{ link(SitePage::Schedule, "Schedule") }
				{ link(SitePage::Party, "Wedding Party") }
				{ link(SitePage::Faq, "FAQ") }
			</nav>
			{
				match props.page {
					SitePage::Schedule => html! { <SchedulePage doc={ data } /> },
					SitePage::Party => html! { <PartyPage doc={ data } /> },
					SitePage::Faq => html! { <FaqPage doc={ data } /> },
				}
			}
		</>
	}
}
