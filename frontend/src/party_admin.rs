use std::{marker::PhantomData, rc::Rc};
use yew::prelude::*;
use shared_data::{
	PartyMember,
	WeddingData,
	display::PartySection,
	editor::{BridalParty, GroomParty, Section, SpecialRoles}
};
use crate::{api::RemoteStore, list_admin::{EditorHandle, use_list_editor}};

/// One of the lists of people on the party page
pub trait PartyList: Section<Entry = PartyMember> + PartialEq + 'static {
	const SECTION: PartySection;
}

impl PartyList for BridalParty {
	const SECTION: PartySection = PartySection::Bride;
}

impl PartyList for GroomParty {
	const SECTION: PartySection = PartySection::Groom;
}

impl PartyList for SpecialRoles {
	const SECTION: PartySection = PartySection::Special;
}

#[derive(Properties, PartialEq)]
pub struct PartyAdminProps<L: PartyList> {
	pub doc: Rc<WeddingData>,
	pub store: RemoteStore,
	pub list: PhantomData<L>
}

#[function_component(PartyAdmin)]
pub fn party_admin<L: PartyList>(props: &PartyAdminProps<L>) -> Html {
	let title = L::SECTION.title();
	let handle = use_list_editor::<L>(props.doc.clone(), props.store.clone(), title);

	let (members, draft, adding_new, dirty) = handle.read(|editor| (
		editor.entries().to_vec(),
		editor.draft_entry().cloned(),
		editor.is_adding_new(),
		editor.is_dirty()
	));

	let add_handle = handle.clone();
	let add_new = Callback::from(move |_: MouseEvent| add_handle.update(|editor| {
		editor.begin_add(uuid::Uuid::new_v4().to_string());
	}));

	html! {
		<div class="party-admin">
			<h3>{ L::SECTION.header_glyph() }{ " " }{ title }</h3>
			// stays up after a failed save, until one goes through
			if dirty {
				<p class="hint">{ "Some changes haven't been saved yet" }</p>
			}
			if draft.is_none() {
				<button class="add-new" onclick={ add_new }>{ "+ Add Person" }</button>
			}
			if let (true, Some(member)) = (adding_new, &draft) {
				{ member_form(&handle, member, "Add Person", "Add") }
			}
			{ for members.iter().map(|member| member_card(&handle, member, draft.as_ref())) }
			if members.is_empty() && !adding_new {
				<p class="empty-state">{ "Nobody here yet. This section stays hidden on the party page until someone is added." }</p>
			}
		</div>
	}
}

fn member_card<L: PartyList>(handle: &EditorHandle<L>, member: &PartyMember, draft: Option<&PartyMember>) -> Html {
	let (expanded, editing) = handle.read(|editor| (editor.is_expanded(&member.id), editor.is_editing(&member.id)));

	if let (true, Some(draft)) = (editing, draft) {
		return html! {
			<div class="entry-card expanded" key={ member.id.clone() }>
				{ member_form(handle, draft, "Edit Person", "Save Changes") }
			</div>
		};
	}

	let toggle_handle = handle.clone();
	let toggle_id = member.id.clone();
	let toggle = Callback::from(move |_: MouseEvent| toggle_handle.update(|editor| editor.toggle(&toggle_id)));

	let edit_handle = handle.clone();
	let edit_id = member.id.clone();
	let edit = Callback::from(move |e: MouseEvent| {
		e.stop_propagation();
		edit_handle.update(|editor| {
			editor.begin_edit(&edit_id);
		});
	});

	let delete_handle = handle.clone();
	let delete_id = member.id.clone();
	let delete = Callback::from(move |e: MouseEvent| {
		e.stop_propagation();
		delete_handle.delete(&delete_id, "Are you sure you want to remove this person?");
	});

	html! {
		<div class={ classes!("entry-card", expanded.then_some("expanded")) } key={ member.id.clone() } onclick={ toggle }>
			<div class="actions">
				<button onclick={ edit }>{ "Edit" }</button>
				<button class="secondary" onclick={ delete }>{ "Remove" }</button>
			</div>
			<h4>{ member.badge(L::SECTION).glyph() }{ " " }{ member.name.clone() }</h4>
			<p class="hint">{ member.display_role() }</p>
			if expanded {
				<img src={ member.display_photo().to_string() } alt={ member.name.clone() } width="120" />
				if !member.relationship.is_empty() {
					<p>{ member.relationship.clone() }</p>
				}
				if !member.age.is_empty() {
					<p>{ format!("Age {}", member.age) }</p>
				}
				<p>{ member.description.clone() }</p>
			}
		</div>
	}
}

fn member_form<L: PartyList>(handle: &EditorHandle<L>, draft: &PartyMember, heading: &str, submit_label: &str) -> Html {
	let commit_handle = handle.clone();
	let commit = Callback::from(move |_: MouseEvent| commit_handle.commit());

	let cancel_handle = handle.clone();
	let cancel = Callback::from(move |_: MouseEvent| cancel_handle.update(|editor| editor.cancel()));

	// (label, current value, setter)
	let fields: [(&str, &str, fn(&mut PartyMember, String)); 6] = [
		("Name", &draft.name, |m, v| m.name = v),
		("Role", &draft.role, |m, v| m.role = v),
		("Relationship", &draft.relationship, |m, v| m.relationship = v),
		("Age", &draft.age, |m, v| m.age = v),
		("Photo URL", &draft.image, |m, v| m.image = v),
		("Description", &draft.description, |m, v| m.description = v),
	];

	html! {
		<div class="editor-form">
			<h4>{ heading }</h4>
			{ for fields.into_iter().map(|(label, value, set)| html! {
				<>
					<label>{ label }</label>
					<input placeholder={ label.to_string() } value={ value.to_string() } oninput={ handle.draft_setter(set) } />
				</>
			}) }
			<div>
				<button onclick={ commit }>{ submit_label }</button>
				{ " " }
				<button class="secondary" onclick={ cancel }>{ "Cancel" }</button>
			</div>
		</div>
	}
}
