use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;
use admin::Admin;
use auth::AuthView;
use api::RemoteStore;
use site::{PublicSite, SitePage};

mod api;
mod notice;
mod style;
mod auth;
mod home;
mod site;
mod schedule;
mod party;
mod faq;
mod list_admin;
mod faq_admin;
mod party_admin;
mod admin;

#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[not_found]
	#[at("/")]
	Home,
	#[at("/site/:wedding_id/schedule")]
	Schedule { wedding_id: String },
	#[at("/site/:wedding_id/party")]
	Party { wedding_id: String },
	#[at("/site/:wedding_id/faq")]
	Faq { wedding_id: String },
	#[at("/admin")]
	Admin
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::Schedule { wedding_id } => html! { <PublicSite { wedding_id } page={ SitePage::Schedule } /> },
		Route::Party { wedding_id } => html! { <PublicSite { wedding_id } page={ SitePage::Party } /> },
		Route::Faq { wedding_id } => html! { <PublicSite { wedding_id } page={ SitePage::Faq } /> },
		Route::Admin => html! {
			<AuthView render={ Callback::from(|store: RemoteStore| html! { <Admin { store } /> }) } />
		}
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
