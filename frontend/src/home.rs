use yew::prelude::*;
use shared_data::Theme;
use crate::style::SharedStyle;

#[function_component(Home)]
pub fn home() -> Html {
	html! {
		<>
			<SharedStyle theme={ Theme::default() } />
			<div class="page">
				<div class="page-header">
					<h1>{ "Our Wedding" }</h1>
					<div class="divider" />
					<p class="subtitle">
						{ "Guests should have gotten a link to the couple's site with their invitation. \
						If you're one of the couple, you can manage everything from the dashboard." }
					</p>
				</div>
				<nav class="site-nav">
					<a href="/admin">{ "Dashboard" }</a>
				</nav>
			</div>
		</>
	}
}
