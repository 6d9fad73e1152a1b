use pulldown_cmark::{Event, Options, Parser};

// FAQ answers are typed in through the admin page and then shown to every guest, so raw html
// doesn't get through. It's rendered as the literal text instead, which is what the couple
// would've seen in the textarea anyways.
pub fn md_to_html(input: &str) -> String {
	let events = Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION)
		.map(|ev| match ev {
			Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
			e => e
		});

	let mut html = String::new();
	pulldown_cmark::html::push_html(&mut html, events);
	html
}

#[cfg(test)]
mod tests {
	use super::md_to_html;

	#[test]
	fn links_survive() {
		let html = md_to_html("Yes! You can find it [on Zola](https://www.zola.com/registry/maggieandjune).");
		assert!(html.contains(r#"<a href="https://www.zola.com/registry/maggieandjune">on Zola</a>"#));
	}

	#[test]
	fn raw_html_is_escaped() {
		let html = md_to_html("<script>alert('hi')</script>\n\nand some <b>bold</b> text");
		assert!(!html.contains("<script>"));
		assert!(!html.contains("<b>"));
		assert!(html.contains("&lt;script&gt;"));
		assert!(html.contains("&lt;b&gt;"));
	}
}
