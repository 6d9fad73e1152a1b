//! The local copy of one of the editable lists in the wedding document (the faqs, or one of the
//! party lists), plus whatever the admin is currently in the middle of editing.
//!
//! Nothing in here does any I/O. Every operation that changes the list hands back a
//! [`SaveRequest`] holding the *entire* new list, and the caller is expected to fire that off to
//! the store and then report back with [`ListEditor::finish_save`]. The local list is never rolled
//! back if that save fails; what the admin sees is always the result of their last action.

use std::marker::PhantomData;
use crate::{Faq, PartyMember, WeddingData, WeddingUpdate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
	#[error("Please fill in both question and answer fields")]
	MissingQuestionOrAnswer,
	#[error("Please fill in a name for this person")]
	MissingName,
	#[error("There's nothing being edited right now")]
	NothingToCommit,
}

pub trait Entry: Clone + PartialEq {
	fn id(&self) -> &str;
	fn id_mut(&mut self) -> &mut String;
	fn blank(id: String) -> Self;
	fn validate(&self) -> Result<(), EntryError>;
}

impl Entry for Faq {
	fn id(&self) -> &str {
		&self.id
	}

	fn id_mut(&mut self) -> &mut String {
		&mut self.id
	}

	fn blank(id: String) -> Self {
		Self { id, ..Self::default() }
	}

	fn validate(&self) -> Result<(), EntryError> {
		if self.question.trim().is_empty() || self.answer.trim().is_empty() {
			Err(EntryError::MissingQuestionOrAnswer)
		} else {
			Ok(())
		}
	}
}

impl Entry for PartyMember {
	fn id(&self) -> &str {
		&self.id
	}

	fn id_mut(&mut self) -> &mut String {
		&mut self.id
	}

	fn blank(id: String) -> Self {
		Self { id, ..Self::default() }
	}

	fn validate(&self) -> Result<(), EntryError> {
		if self.name.trim().is_empty() {
			Err(EntryError::MissingName)
		} else {
			Ok(())
		}
	}
}

/// Which field of the document a [`ListEditor`] is responsible for.
pub trait Section {
	type Entry: Entry;

	fn entries(doc: &WeddingData) -> &[Self::Entry];
	fn update(entries: Vec<Self::Entry>) -> WeddingUpdate;

	/// What gets put in (and saved) when the document doesn't have anything for this section yet.
	fn defaults() -> Vec<Self::Entry> {
		Vec::new()
	}
}

#[derive(PartialEq)]
pub struct Faqs;
#[derive(PartialEq)]
pub struct BridalParty;
#[derive(PartialEq)]
pub struct GroomParty;
#[derive(PartialEq)]
pub struct SpecialRoles;

impl Section for Faqs {
	type Entry = Faq;

	fn entries(doc: &WeddingData) -> &[Faq] {
		&doc.faqs
	}

	fn update(entries: Vec<Faq>) -> WeddingUpdate {
		WeddingUpdate { faqs: Some(entries), ..WeddingUpdate::default() }
	}

	fn defaults() -> Vec<Faq> {
		[
			(
				"What should I wear?",
				"We're having a garden ceremony, so we recommend cocktail attire. Ladies, consider comfortable shoes for outdoor surfaces."
			),
			(
				"Will there be parking available?",
				"Yes, there is complimentary valet parking available at the venue entrance."
			),
			(
				"Can I bring a guest?",
				"Please check your invitation for guest details. If you have any questions, feel free to reach out to us directly."
			),
			(
				"Is the venue accessible?",
				"Yes, our venue is fully wheelchair accessible with ramps and accessible restroom facilities."
			),
		].into_iter()
			.enumerate()
			.map(|(idx, (question, answer))| Faq {
				id: format!("default-{}", idx + 1),
				question: question.into(),
				answer: answer.into(),
			})
			.collect()
	}
}

macro_rules! party_section{
	($name:ident, $field:ident) => {
		impl Section for $name {
			type Entry = PartyMember;

			fn entries(doc: &WeddingData) -> &[PartyMember] {
				&doc.$field
			}

			fn update(entries: Vec<PartyMember>) -> WeddingUpdate {
				WeddingUpdate { $field: Some(entries), ..WeddingUpdate::default() }
			}
		}
	}
}

party_section!(BridalParty, bridal_party);
party_section!(GroomParty, groom_party);
party_section!(SpecialRoles, special_roles);

/// A snapshot of the whole list, ready to be sent to the store as a partial update.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "the new list only gets persisted if this is sent to the store"]
pub struct SaveRequest(pub WeddingUpdate);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft<E> {
	// composing something that isn't in the list yet
	New(E),
	// editing a copy of something that's already in the list
	Existing(E),
}

impl<E> Draft<E> {
	pub fn entry(&self) -> &E {
		match self {
			Self::New(e) | Self::Existing(e) => e
		}
	}

	fn entry_mut(&mut self) -> &mut E {
		match self {
			Self::New(e) | Self::Existing(e) => e
		}
	}
}

pub struct ListEditor<S: Section> {
	entries: Vec<S::Entry>,
	draft: Option<Draft<S::Entry>>,
	// only one card can be open at a time
	expanded: Option<String>,
	// set when we've changed the list and haven't yet heard that the store got it
	dirty: bool,
	section: PhantomData<S>,
}

pub type FaqEditor = ListEditor<Faqs>;

impl<S: Section> Default for ListEditor<S> {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
			draft: None,
			expanded: None,
			dirty: false,
			section: PhantomData,
		}
	}
}

impl<S: Section> ListEditor<S> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn entries(&self) -> &[S::Entry] {
		&self.entries
	}

	pub fn draft(&self) -> Option<&Draft<S::Entry>> {
		self.draft.as_ref()
	}

	pub fn draft_entry(&self) -> Option<&S::Entry> {
		self.draft.as_ref().map(Draft::entry)
	}

	pub fn is_adding_new(&self) -> bool {
		matches!(self.draft, Some(Draft::New(_)))
	}

	pub fn is_editing(&self, id: &str) -> bool {
		self.draft.as_ref().is_some_and(|d| d.entry().id() == id)
	}

	pub fn is_expanded(&self, id: &str) -> bool {
		self.expanded.as_deref() == Some(id)
	}

	pub fn expanded(&self) -> Option<&str> {
		self.expanded.as_deref()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.entries.iter().any(|e| e.id() == id)
	}

	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	/// Replaces the list with whatever the document has. If the document has nothing, the section's
	/// defaults are put in instead, and (if there are any) those need to be saved right away.
	pub fn load(&mut self, doc: &WeddingData) -> Option<SaveRequest> {
		let from_doc = S::entries(doc);

		if from_doc.is_empty() {
			let defaults = S::defaults();
			if defaults.is_empty() {
				self.entries = defaults;
				return None;
			}

			self.entries = defaults.clone();
			Some(SaveRequest(S::update(defaults)))
		} else {
			self.entries = from_doc.to_vec();

			// Everything else here finds entries by id, so entries that the store gave us without
			// one get a stand-in. It's only sent back to the store if this list gets saved, which
			// means an earlier stand-in can already be sitting in the list under that name.
			for idx in 0..self.entries.len() {
				if !self.entries[idx].id().is_empty() {
					continue;
				}

				let stand_in = (idx..)
					.map(|n| format!("unsaved-{n}"))
					.find(|id| !self.contains(id))
					.unwrap_or_default();

				*self.entries[idx].id_mut() = stand_in;
			}

			None
		}
	}

	/// Starts composing a new, empty entry. Does nothing if something is already being edited.
	pub fn begin_add(&mut self, id: String) -> bool {
		if self.draft.is_some() {
			return false;
		}

		self.expanded = Some(id.clone());
		self.draft = Some(Draft::New(S::Entry::blank(id)));
		true
	}

	/// Starts editing a copy of the entry with this id, dropping anything else that was being
	/// edited.
	pub fn begin_edit(&mut self, id: &str) -> bool {
		let Some(entry) = self.entries.iter().find(|e| e.id() == id) else {
			return false;
		};

		self.draft = Some(Draft::Existing(entry.clone()));
		self.expanded = Some(id.to_string());
		true
	}

	pub fn update_draft(&mut self, f: impl FnOnce(&mut S::Entry)) {
		if let Some(draft) = self.draft.as_mut() {
			f(draft.entry_mut());
		}
	}

	pub fn commit(&mut self) -> Result<SaveRequest, EntryError> {
		let draft = self.draft.take().ok_or(EntryError::NothingToCommit)?;

		// a bad draft stays put so that it can be fixed up and committed again
		if let Err(e) = draft.entry().validate() {
			self.draft = Some(draft);
			return Err(e);
		}

		match draft {
			Draft::New(entry) => self.entries.push(entry),
			Draft::Existing(entry) => {
				if let Some(existing) = self.entries.iter_mut().find(|e| e.id() == entry.id()) {
					*existing = entry;
				}
			}
		}

		self.expanded = None;
		Ok(self.changed())
	}

	/// Removes the entry with this id, but only if `confirm` says so. `confirm` isn't called at all
	/// if there's nothing with that id.
	pub fn delete(&mut self, id: &str, confirm: impl FnOnce() -> bool) -> Option<SaveRequest> {
		let idx = self.entries.iter().position(|e| e.id() == id)?;

		if !confirm() {
			return None;
		}

		self.entries.remove(idx);

		if self.is_editing(id) {
			self.draft = None;
			self.expanded = None;
		}

		Some(self.changed())
	}

	pub fn cancel(&mut self) {
		self.draft = None;
		self.expanded = None;
	}

	pub fn toggle(&mut self, id: &str) {
		// the card that's being edited has to stay open
		if self.is_editing(id) {
			return;
		}

		self.expanded = if self.is_expanded(id) {
			None
		} else {
			Some(id.to_string())
		};
	}

	/// Call once a save has come back. We don't keep track of which save it was; if two overlap,
	/// whichever finishes successfully clears the flag.
	pub fn finish_save<T, E>(&mut self, result: &Result<T, E>) {
		if result.is_ok() {
			self.dirty = false;
		}
	}

	fn changed(&mut self) -> SaveRequest {
		self.dirty = true;
		SaveRequest(S::update(self.entries.clone()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn faq(id: &str, question: &str, answer: &str) -> Faq {
		Faq { id: id.into(), question: question.into(), answer: answer.into() }
	}

	fn faq_editor(faqs: Vec<Faq>) -> FaqEditor {
		let mut editor = FaqEditor::new();
		let save = editor.load(&WeddingData { faqs, ..WeddingData::default() });
		assert_eq!(save, None);
		editor
	}

	fn saved_faqs(save: SaveRequest) -> Vec<Faq> {
		let SaveRequest(update) = save;
		assert_eq!(update.bridal_party, None);
		assert_eq!(update.groom_party, None);
		assert_eq!(update.special_roles, None);
		update.faqs.expect("save should carry faqs")
	}

	fn three() -> Vec<Faq> {
		vec![faq("1", "Q1", "A1"), faq("2", "Q2", "A2"), faq("3", "Q3", "A3")]
	}

	#[test]
	fn empty_document_seeds_and_saves_defaults() {
		let mut editor = FaqEditor::new();
		let save = editor.load(&WeddingData::default()).expect("defaults should be saved");

		let saved = saved_faqs(save);
		assert_eq!(saved.len(), 4);
		assert_eq!(editor.entries(), saved.as_slice());
		assert_eq!(
			saved.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
			["default-1", "default-2", "default-3", "default-4"]
		);
		assert_eq!(saved[0].question, "What should I wear?");
		assert_eq!(saved[3].question, "Is the venue accessible?");
		assert!(!editor.is_dirty());
	}

	#[test]
	fn existing_faqs_are_copied() {
		let editor = faq_editor(three());
		assert_eq!(editor.entries(), three().as_slice());
	}

	#[test]
	fn missing_ids_get_filled_in() {
		let editor = faq_editor(vec![faq("", "Q1", "A1"), faq("7", "Q2", "A2"), faq("", "Q3", "A3")]);
		assert_eq!(
			editor.entries().iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
			["unsaved-0", "7", "unsaved-2"]
		);
	}

	#[test]
	fn stand_ins_skip_ids_already_taken() {
		let mut editor = faq_editor(vec![faq("unsaved-1", "Q1", "A1"), faq("", "Q2", "A2")]);
		assert_eq!(
			editor.entries().iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
			["unsaved-1", "unsaved-2"]
		);

		assert!(editor.begin_edit("unsaved-2"));
		assert_eq!(editor.draft_entry().map(|f| f.question.as_str()), Some("Q2"));
	}

	#[test]
	fn new_document_replaces_everything() {
		let mut editor = faq_editor(three());
		let save = editor.load(&WeddingData { faqs: vec![faq("9", "Q9", "A9")], ..WeddingData::default() });
		assert_eq!(save, None);
		assert_eq!(editor.entries(), [faq("9", "Q9", "A9")]);
	}

	#[test]
	fn add_appends_one_entry() {
		let mut editor = faq_editor(vec![faq("1", "Q1", "A1")]);

		assert!(editor.begin_add("1700000000000".into()));
		assert!(editor.is_adding_new());
		assert!(editor.is_expanded("1700000000000"));
		// nothing's in the list until it's committed
		assert_eq!(editor.entries().len(), 1);

		editor.update_draft(|f| {
			f.question = "Q2".into();
			f.answer = "A2".into();
		});

		let saved = saved_faqs(editor.commit().unwrap());
		let expected = [faq("1", "Q1", "A1"), faq("1700000000000", "Q2", "A2")];
		assert_eq!(saved, expected);
		assert_eq!(editor.entries(), expected);
		assert!(editor.draft().is_none());
		assert!(!editor.is_adding_new());
		assert_eq!(editor.expanded(), None);
		assert!(editor.is_dirty());
	}

	#[test]
	fn add_is_refused_while_editing() {
		let mut editor = faq_editor(three());
		assert!(editor.begin_edit("2"));
		assert!(!editor.begin_add("new".into()));
		assert!(editor.is_editing("2"));
		assert!(!editor.is_adding_new());
	}

	#[test]
	fn blank_fields_are_rejected() {
		for (question, answer) in [("", "A"), ("Q", ""), ("   ", "A"), ("Q", "\n\t "), ("", "")] {
			let mut editor = faq_editor(three());
			assert!(editor.begin_add("new".into()));
			editor.update_draft(|f| {
				f.question = question.into();
				f.answer = answer.into();
			});

			assert_eq!(editor.commit(), Err(EntryError::MissingQuestionOrAnswer));
			assert_eq!(editor.entries(), three().as_slice());
			// the draft sticks around so they can fix it
			assert!(editor.is_adding_new());
			assert!(editor.is_expanded("new"));
			assert!(!editor.is_dirty());
		}

		let mut editor = faq_editor(three());
		assert!(editor.begin_edit("3"));
		editor.update_draft(|f| f.answer = " ".into());
		assert_eq!(editor.commit(), Err(EntryError::MissingQuestionOrAnswer));
		assert_eq!(editor.entries(), three().as_slice());
	}

	#[test]
	fn commit_without_draft() {
		let mut editor = faq_editor(three());
		assert_eq!(editor.commit(), Err(EntryError::NothingToCommit));
	}

	#[test]
	fn edit_replaces_in_place() {
		for idx in 0..3 {
			let mut editor = faq_editor(three());
			let id = three()[idx].id.clone();

			assert!(editor.begin_edit(&id));
			assert!(editor.is_editing(&id));
			assert!(editor.is_expanded(&id));
			assert!(!editor.is_adding_new());

			editor.update_draft(|f| f.answer = "Changed".into());
			// editing the draft doesn't touch the list
			assert_eq!(editor.entries(), three().as_slice());

			let saved = saved_faqs(editor.commit().unwrap());

			let mut expected = three();
			expected[idx].answer = "Changed".into();
			assert_eq!(saved, expected);
			assert_eq!(editor.entries(), expected.as_slice());
			assert_eq!(editor.expanded(), None);
		}
	}

	#[test]
	fn begin_edit_replaces_other_draft() {
		let mut editor = faq_editor(three());
		assert!(editor.begin_add("new".into()));
		assert!(editor.begin_edit("1"));
		assert!(!editor.is_adding_new());
		assert!(editor.is_editing("1"));
		assert!(editor.is_expanded("1"));
		assert!(!editor.begin_edit("nope"));
		assert!(editor.is_editing("1"));
	}

	#[test]
	fn delete_needs_confirmation() {
		let mut editor = faq_editor(three());
		assert_eq!(editor.delete("2", || false), None);
		assert_eq!(editor.entries(), three().as_slice());
		assert!(!editor.is_dirty());

		let saved = saved_faqs(editor.delete("2", || true).unwrap());
		let expected = [faq("1", "Q1", "A1"), faq("3", "Q3", "A3")];
		assert_eq!(saved, expected);
		assert_eq!(editor.entries(), expected);
		assert!(editor.is_dirty());
	}

	#[test]
	fn delete_unknown_id_never_asks() {
		let mut editor = faq_editor(three());
		assert_eq!(editor.delete("42", || panic!("shouldn't have asked")), None);
		assert_eq!(editor.entries(), three().as_slice());
	}

	#[test]
	fn contains_follows_the_list() {
		let mut editor = faq_editor(three());
		assert!(editor.contains("2"));
		assert!(!editor.contains("42"));

		// what the admin page checks before it asks about a delete
		_ = editor.delete("2", || true).unwrap();
		assert!(!editor.contains("2"));
		assert_eq!(editor.delete("2", || panic!("shouldn't have asked")), None);
	}

	#[test]
	fn deleting_the_draft_clears_it() {
		let mut editor = faq_editor(three());
		assert!(editor.begin_edit("3"));
		editor.update_draft(|f| f.question = "half-typed".into());

		let saved = saved_faqs(editor.delete("3", || true).unwrap());
		assert_eq!(saved.len(), 2);
		assert!(editor.draft().is_none());
		assert_eq!(editor.expanded(), None);

		// but deleting something else leaves the draft alone
		assert!(editor.begin_edit("1"));
		_ = editor.delete("2", || true).unwrap();
		assert!(editor.is_editing("1"));
		assert!(editor.is_expanded("1"));
	}

	#[test]
	fn cancel_discards_the_draft() {
		let mut editor = faq_editor(three());
		assert!(editor.begin_edit("1"));
		editor.update_draft(|f| f.question = "never mind".into());
		editor.cancel();

		assert!(editor.draft().is_none());
		assert_eq!(editor.expanded(), None);
		assert_eq!(editor.entries(), three().as_slice());
		assert!(!editor.is_dirty());
	}

	#[test]
	fn only_one_card_is_open() {
		let mut editor = faq_editor(three());
		editor.toggle("2");
		assert!(editor.is_expanded("2"));

		editor.toggle("1");
		assert!(editor.is_expanded("1"));
		assert!(!editor.is_expanded("2"));

		editor.toggle("1");
		assert_eq!(editor.expanded(), None);
	}

	#[test]
	fn toggling_the_draft_does_nothing() {
		let mut editor = faq_editor(three());
		assert!(editor.begin_edit("2"));
		editor.toggle("2");
		assert!(editor.is_expanded("2"));
		assert!(editor.is_editing("2"));

		let mut editor = faq_editor(three());
		assert!(editor.begin_add("new".into()));
		editor.toggle("new");
		assert!(editor.is_expanded("new"));
	}

	#[test]
	fn dirty_until_a_save_succeeds() {
		let mut editor = faq_editor(three());
		assert!(editor.begin_edit("1"));
		editor.update_draft(|f| f.question = "Q1!".into());
		let save = editor.commit().unwrap();
		assert!(editor.is_dirty());

		editor.finish_save(&Result::<(), _>::Err("offline"));
		// a failed save doesn't roll anything back
		assert!(editor.is_dirty());
		assert_eq!(editor.entries()[0].question, "Q1!");
		assert_eq!(saved_faqs(save)[0].question, "Q1!");

		editor.finish_save(&Result::<_, ()>::Ok(()));
		assert!(!editor.is_dirty());
	}

	#[test]
	fn every_save_is_a_full_snapshot() {
		let mut editor = faq_editor(three());
		let first = saved_faqs(editor.delete("1", || true).unwrap());
		let second = saved_faqs(editor.delete("2", || true).unwrap());

		assert_eq!(first, [faq("2", "Q2", "A2"), faq("3", "Q3", "A3")]);
		assert_eq!(second, [faq("3", "Q3", "A3")]);
	}

	#[test]
	fn party_lists_need_names_and_have_no_defaults() {
		let mut editor = ListEditor::<GroomParty>::new();
		assert_eq!(editor.load(&WeddingData::default()), None);
		assert!(editor.entries().is_empty());

		assert!(editor.begin_add("b1d9".into()));
		editor.update_draft(|m| m.role = "Best Man".into());
		assert_eq!(editor.commit(), Err(EntryError::MissingName));

		editor.update_draft(|m| m.name = "Liam".into());
		let SaveRequest(update) = editor.commit().unwrap();
		assert_eq!(update.faqs, None);
		assert_eq!(update.bridal_party, None);
		let groom = update.groom_party.unwrap();
		assert_eq!(groom.len(), 1);
		assert_eq!(groom[0].name, "Liam");
		assert_eq!(groom[0].id, "b1d9");
	}

	#[test]
	fn party_sections_read_their_own_field() {
		let doc = WeddingData {
			bridal_party: vec![PartyMember { id: "b".into(), name: "Ava".into(), ..PartyMember::default() }],
			special_roles: vec![PartyMember { id: "s".into(), name: "Mia".into(), ..PartyMember::default() }],
			..WeddingData::default()
		};

		let mut bride = ListEditor::<BridalParty>::new();
		let mut special = ListEditor::<SpecialRoles>::new();
		assert_eq!(bride.load(&doc), None);
		assert_eq!(special.load(&doc), None);
		assert_eq!(bride.entries()[0].name, "Ava");
		assert_eq!(special.entries()[0].name, "Mia");

		let SaveRequest(update) = special.delete("s", || true).unwrap();
		assert_eq!(update.special_roles, Some(Vec::new()));
		assert_eq!(update.bridal_party, None);
	}
}
