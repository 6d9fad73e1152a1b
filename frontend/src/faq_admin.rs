use std::rc::Rc;
use yew::prelude::*;
use shared_data::{Faq, WeddingData, editor::Faqs};
use crate::{api::RemoteStore, list_admin::{EditorHandle, use_list_editor}};

#[derive(Properties, PartialEq)]
pub struct FaqAdminProps {
	pub doc: Rc<WeddingData>,
	pub store: RemoteStore,
}

// New faqs need an id before they've ever been saved, and the backend is fine with whatever we
// give it as long as it doesn't collide with anything else in the list
fn temporary_id() -> String {
	(js_sys::Date::now() as u64).to_string()
}

#[function_component(FaqAdmin)]
pub fn faq_admin(props: &FaqAdminProps) -> Html {
	let handle = use_list_editor::<Faqs>(props.doc.clone(), props.store.clone(), "FAQs");

	let (entries, draft, adding_new, dirty) = handle.read(|editor| (
		editor.entries().to_vec(),
		editor.draft_entry().cloned(),
		editor.is_adding_new(),
		editor.is_dirty()
	));

	let add_handle = handle.clone();
	let add_new = Callback::from(move |_: MouseEvent| add_handle.update(|editor| {
		editor.begin_add(temporary_id());
	}));

	html! {
		<div class="faq-admin">
			<div>
				<span class={ classes!("section-toggle", (!entries.is_empty()).then_some("on")) } style="float: right;" />
				<span class="hint" style="float: right; margin-right: 12px;">{ "Enable Section" }</span>
				<h3>{ "FAQ Management" }</h3>
				<p class="hint">{ "Manage frequently asked questions for your wedding guests." }</p>
			</div>
			// stays up after a failed save, until one goes through
			if dirty {
				<p class="hint">{ "Some changes haven't been saved yet" }</p>
			}
			if draft.is_none() {
				<button class="add-new" onclick={ add_new }>{ "+ Add New FAQ" }</button>
			}
			if let (true, Some(faq)) = (adding_new, &draft) {
				{ faq_form(&handle, faq, "Add New FAQ", "Add FAQ") }
			}
			if !adding_new && !entries.is_empty() {
				<p class="hint">{ "Click on any question to view/edit the answer" }</p>
			}
			{ for entries.iter().map(|faq| faq_card(&handle, faq, draft.as_ref())) }
			if entries.is_empty() && !adding_new {
				<div class="empty-state">
					<h1>{ "?" }</h1>
					<p>{ "No FAQs added yet" }</p>
				</div>
			}
		</div>
	}
}

fn faq_card(handle: &EditorHandle<Faqs>, faq: &Faq, draft: Option<&Faq>) -> Html {
	let (expanded, editing) = handle.read(|editor| (editor.is_expanded(&faq.id), editor.is_editing(&faq.id)));

	// the card being edited has its form in place of the answer
	if let (true, Some(draft)) = (editing, draft) {
		return html! {
			<div class="entry-card expanded" key={ faq.id.clone() }>
				{ faq_form(handle, draft, "Edit FAQ", "Save Changes") }
			</div>
		};
	}

	let toggle_handle = handle.clone();
	let toggle_id = faq.id.clone();
	let toggle = Callback::from(move |_: MouseEvent| toggle_handle.update(|editor| editor.toggle(&toggle_id)));

	// These two are inside the card, so they can't let the click bubble up and toggle it too
	let edit_handle = handle.clone();
	let edit_id = faq.id.clone();
	let edit = Callback::from(move |e: MouseEvent| {
		e.stop_propagation();
		edit_handle.update(|editor| {
			editor.begin_edit(&edit_id);
		});
	});

	let delete_handle = handle.clone();
	let delete_id = faq.id.clone();
	let delete = Callback::from(move |e: MouseEvent| {
		e.stop_propagation();
		delete_handle.delete(&delete_id, "Are you sure you want to delete this FAQ?");
	});

	html! {
		<div class={ classes!("entry-card", expanded.then_some("expanded")) } key={ faq.id.clone() } onclick={ toggle }>
			<div class="actions">
				<button title="Edit FAQ" onclick={ edit }>{ "Edit" }</button>
				<button class="secondary" title="Delete FAQ" onclick={ delete }>{ "Delete" }</button>
				<span>{ if expanded { "▲" } else { "▼" } }</span>
			</div>
			<h4>{ "Q: " }{ faq.question.clone() }</h4>
			if expanded {
				<div class="answer">
					<strong>{ "A: " }</strong>
					{ Html::from_html_unchecked(shared_data::md_to_html(&faq.answer).into()) }
				</div>
			}
		</div>
	}
}

fn faq_form(handle: &EditorHandle<Faqs>, draft: &Faq, heading: &str, submit_label: &str) -> Html {
	let question_input = handle.draft_setter(|faq, question| faq.question = question);
	let answer_input = handle.draft_setter(|faq, answer| faq.answer = answer);

	let commit_handle = handle.clone();
	let commit = Callback::from(move |_: MouseEvent| commit_handle.commit());

	let cancel_handle = handle.clone();
	let cancel = Callback::from(move |_: MouseEvent| cancel_handle.update(|editor| editor.cancel()));

	html! {
		<div class="editor-form">
			<h4>{ heading }</h4>
			<label>{ "Question" }</label>
			<input
				placeholder="Enter your question..."
				value={ draft.question.clone() }
				oninput={ question_input }
			/>
			<label>{ "Answer" }</label>
			<textarea
				rows="4"
				placeholder="Enter the answer..."
				value={ draft.answer.clone() }
				oninput={ answer_input }
			/>
			<div>
				<button onclick={ commit }>{ submit_label }</button>
				{ " " }
				<button class="secondary" onclick={ cancel }>{ "Cancel" }</button>
			</div>
		</div>
	}
}
