use gloo_console::log;

// Blocking browser popups. If there's no window to pop them up in, there's nobody to show them to
// anyways, so we just log and move on.

pub fn alert(msg: &str) {
	match web_sys::window() {
		Some(win) => if let Err(e) = win.alert_with_message(msg) {
			log!("Couldn't show alert: ", e);
		},
		None => log!(format!("No window to alert with: {msg}"))
	}
}

// Declining and being unable to ask are treated the same
pub fn confirm(msg: &str) -> bool {
	web_sys::window()
		.and_then(|win| win.confirm_with_message(msg).ok())
		.unwrap_or(false)
}
