use std::rc::Rc;
use yew::prelude::*;
use shared_data::{WeddingData, display::{format_wedding_date, important_info, schedule_events}};

#[derive(Properties, PartialEq)]
pub struct PageProps {
	pub doc: Rc<WeddingData>
}

#[function_component(SchedulePage)]
pub fn schedule_page(props: &PageProps) -> Html {
	let date = format_wedding_date(&props.doc.wedding_date);

	html! {
		<div class="page">
			<div class="page-header">
				<h1>{ "Wedding Schedule" }</h1>
				<div class="divider" />
				<p class="subtitle">
					{ "Here's everything you need to know about our special day. We can't wait to celebrate with you!" }
				</p>
				if !date.is_empty() {
					<p class="card" style="display: inline-block; margin-top: 24px;">
						{ shared_data::Icon::Calendar.glyph() }{ " " }<strong>{ date }</strong>
					</p>
				}
			</div>
			<div class="timeline">
				{ for schedule_events(&props.doc).iter().map(|event| html! {
					<div class={ classes!("card", "event", event.highlight.then_some("highlight")) }>
						<span class="icon-badge">{ event.display_icon().glyph() }</span>
						<h3>{ event.title.clone() }</h3>
						<p>
							<strong>{ event.time.clone() }</strong>
							if !event.duration.is_empty() {
								{ " · " }{ event.duration.clone() }
							}
						</p>
						<p>{ event.description.clone() }</p>
						if !event.location.is_empty() {
							<p class="hint">{ shared_data::Icon::MapPin.glyph() }{ " " }{ event.location.clone() }</p>
						}
					</div>
				}) }
			</div>
			<h2 style="text-align: center;">{ "Important Information" }</h2>
			<div class="info-grid">
				{ for important_info(&props.doc).iter().map(|info| html! {
					<div class="card">
						<span class="icon-badge">{ info.display_icon().glyph() }</span>
						<h3>{ info.title.clone() }</h3>
						<p>{ info.description.clone() }</p>
					</div>
				}) }
			</div>
		</div>
	}
}
