use std::{cell::RefCell, rc::Rc};
use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use shared_data::{WeddingData, editor::{ListEditor, SaveRequest, Section}};
use crate::{api::RemoteStore, notice::{alert, confirm}};

/// Everything a callback in one of the admin editors needs to change the list (and get it saved).
///
/// The editor itself lives in a `Rc<RefCell>` instead of a `use_state` because saves finish
/// whenever they finish, and by then any state handle we captured would be holding a stale copy.
/// We never hold a borrow across an await, so there's no chance of it being borrowed twice.
pub struct EditorHandle<S: Section> {
	editor: Rc<RefCell<ListEditor<S>>>,
	redraw: UseForceUpdateHandle,
	store: RemoteStore,
	// just for logs and alerts, e.g. "FAQs"
	what: &'static str,
}

// derive(Clone) would want S: Clone, which it doesn't need to be
impl<S: Section> Clone for EditorHandle<S> {
	fn clone(&self) -> Self {
		Self {
			editor: self.editor.clone(),
			redraw: self.redraw.clone(),
			store: self.store.clone(),
			what: self.what,
		}
	}
}

impl<S: Section + 'static> EditorHandle<S> {
	pub fn read<T>(&self, f: impl FnOnce(&ListEditor<S>) -> T) -> T {
		f(&self.editor.borrow())
	}

	/// For changes that don't touch the list itself, like typing into the draft or opening a card
	pub fn update(&self, f: impl FnOnce(&mut ListEditor<S>)) {
		f(&mut self.editor.borrow_mut());
		self.redraw.force_update();
	}

	/// For changes that might need the list to be saved. The save is fired off and forgotten
	/// about; the editor hears how it went once it's done.
	pub fn update_and_save(&self, f: impl FnOnce(&mut ListEditor<S>) -> Option<SaveRequest>) {
		let save = f(&mut self.editor.borrow_mut());
		self.redraw.force_update();

		if let Some(save) = save {
			self.save(save);
		}
	}

	/// Puts whatever's in the edit form into the list, or tells the admin what's wrong with it.
	pub fn commit(&self) {
		let result = self.editor.borrow_mut().commit();

		match result {
			Ok(save) => {
				self.redraw.force_update();
				self.save(save);
			}
			Err(e) => alert(&e.to_string())
		}
	}

	/// A callback for one of the edit form's fields, e.g. `handle.draft_setter(|faq, q| faq.question = q)`
	pub fn draft_setter(&self, set: fn(&mut S::Entry, String)) -> Callback<InputEvent> {
		let handle = self.clone();
		Callback::from(move |e: InputEvent| if let Some(value) = event_value(&e) {
			handle.update(|editor| editor.update_draft(|entry| set(entry, value)));
		})
	}

	/// The prompt blocks, so it's shown before the editor is borrowed. Nothing is asked about
	/// something that isn't in the list.
	pub fn delete(&self, id: &str, prompt: &str) {
		if !self.read(|editor| editor.contains(id)) || !confirm(prompt) {
			return;
		}

		self.update_and_save(|editor| editor.delete(id, || true));
	}

	fn save(&self, SaveRequest(update): SaveRequest) {
		let handle = self.clone();
		log!(format!("Saving {} to the backend...", self.what));

		wasm_bindgen_futures::spawn_local(async move {
			let result = handle.store.save(&update).await;

			match &result {
				Ok(_) => log!(format!("{} saved successfully!", handle.what)),
				Err(e) => {
					log!(format!("Error saving {}: {e:?}", handle.what));
					alert(&format!("Failed to save {}. Please try again.", handle.what));
				}
			}

			handle.editor.borrow_mut().finish_save(&result);
			handle.redraw.force_update();
		});
	}
}

fn event_value(e: &InputEvent) -> Option<String> {
	let target = e.target()?;

	match target.dyn_into::<HtmlInputElement>() {
		Ok(input) => Some(input.value()),
		Err(target) => target.dyn_into::<HtmlTextAreaElement>()
			.ok()
			.map(|area| area.value())
	}
}

/// Keeps a [`ListEditor`] in sync with `doc`: every time a new document shows up, the list is
/// replaced with what's in it (and saved, if it had to be seeded with defaults).
#[hook]
pub fn use_list_editor<S: Section + 'static>(
	doc: Rc<WeddingData>,
	store: RemoteStore,
	what: &'static str
) -> EditorHandle<S> {
	let editor = use_mut_ref(ListEditor::<S>::new);
	let redraw = use_force_update();

	let handle = EditorHandle { editor, redraw, store, what };

	{
		let handle = handle.clone();
		use_effect_with(doc, move |doc| {
			handle.update_and_save(|editor| editor.load(doc));
		});
	}

	handle
}
