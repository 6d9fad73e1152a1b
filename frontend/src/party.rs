use yew::prelude::*;
use shared_data::{PartyMember, display::{PartySection, party_sections}};
use crate::schedule::PageProps;

#[function_component(PartyPage)]
pub fn party_page(props: &PageProps) -> Html {
	html! {
		<div class="page">
			<div class="page-header">
				<h1>{ "Wedding Party" }</h1>
				<div class="divider" />
				<p class="subtitle">
					{ "We're surrounded by the most amazing family and friends who have supported our journey. \
					Meet the special people who will be standing with us on our big day!" }
				</p>
			</div>
			// Sections with nobody in them don't get shown at all
			{ for party_sections(&props.doc).into_iter().map(|(section, members)| html! {
				<section class="party-section">
					<div class="page-header">
						<h2>{ section.header_glyph() }{ " " }{ section.title() }</h2>
						<p class="subtitle">{ section.blurb() }</p>
					</div>
					<div class="party-grid">
						{ for members.iter().enumerate().map(|(idx, member)| member_card(section, idx, member)) }
					</div>
				</section>
			}) }
		</div>
	}
}

fn member_card(section: PartySection, idx: usize, member: &PartyMember) -> Html {
	let key = if member.id.is_empty() { idx.to_string() } else { member.id.clone() };

	let details = match (member.relationship.is_empty(), member.age.is_empty()) {
		(_, true) => member.relationship.clone(),
		(true, false) => member.age.clone(),
		(false, false) => format!("{} • {}", member.relationship, member.age),
	};

	html! {
		<div class="card member" key={ key }>
			<div class="photo">
				<img src={ member.display_photo().to_string() } alt={ member.name.clone() } />
				<span class="icon-badge">{ member.badge(section).glyph() }</span>
			</div>
			<h3>{ member.name.clone() }</h3>
			<p><strong>{ member.display_role() }</strong></p>
			if !details.is_empty() {
				<p class="hint">{ details }</p>
			}
			<p>{ member.description.clone() }</p>
		</div>
	}
}
