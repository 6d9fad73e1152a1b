use yew::prelude::*;
use shared_data::md_to_html;
use crate::schedule::PageProps;

// The read-only version of the faq admin's cards; one answer open at a time
#[function_component(FaqPage)]
pub fn faq_page(props: &PageProps) -> Html {
	let open = use_state(|| Option::<String>::None);

	html! {
		<div class="page">
			<div class="page-header">
				<h1>{ "Questions & Answers" }</h1>
				<div class="divider" />
				<p class="subtitle">{ "Everything else you might be wondering about." }</p>
			</div>
			if props.doc.faqs.is_empty() {
				<p class="empty-state">{ "No questions yet, check back later!" }</p>
			}
			{ for props.doc.faqs.iter().enumerate().map(|(idx, faq)| {
				let key = if faq.id.is_empty() { format!("faq-{idx}") } else { faq.id.clone() };
				let expanded = open.as_deref() == Some(key.as_str());

				let open = open.clone();
				let toggle_key = key.clone();
				let toggle = Callback::from(move |_: MouseEvent|
					open.set((!expanded).then(|| toggle_key.clone()))
				);

				html! {
					<div class={ classes!("entry-card", expanded.then_some("expanded")) } key={ key } onclick={ toggle }>
						<h4>{ faq.question.clone() }</h4>
						if expanded {
							<div class="answer">
								{ Html::from_html_unchecked(md_to_html(&faq.answer).into()) }
							</div>
						}
					</div>
				}
			}) }
		</div>
	}
}
