use yew::prelude::*;
use shared_data::Theme;

#[derive(Properties, PartialEq)]
pub struct StyleProps {
	pub theme: Theme
}

#[function_component(SharedStyle)]
pub fn shared_style(props: &StyleProps) -> Html {
	html! {
		<>
			<style>{ props.theme.css_vars() }</style>
			<style>{ shared_data::BASE_STYLE }</style>
		</>
	}
}
