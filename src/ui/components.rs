//! Renderable UI units the route table can point at.

/// A UI unit the shell renders when its route matches.
pub trait Component: Send + Sync {
    fn name(&self) -> &'static str;

    /// Markup for the component, without the surrounding document.
    fn render(&self) -> String;
}

/// Bookmark list with an add form; talks to the `/user` resource from the browser.
pub struct Bookmarker;

impl Component for Bookmarker {
    fn name(&self) -> &'static str {
        "Bookmarker"
    }

    fn render(&self) -> String {
        concat!(
            r#"<div id="bookmarker" class="bookmarker">"#,
            r#"<h1>Bookmarker</h1>"#,
            r#"<form class="bookmarker-add" autocomplete="off">"#,
            r#"<input name="title" placeholder="Title" required>"#,
            r#"<input name="url" type="url" placeholder="https://" required>"#,
            r#"<button type="submit">Add</button>"#,
            r#"</form>"#,
            r#"<ul class="bookmarker-list"></ul>"#,
            r#"</div>"#,
        )
        .to_string()
    }
}

/// Wraps a component in a full HTML document titled after its route.
pub fn render_page(title: &str, component: &dyn Component) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body data-component=\"{}\">\n{}\n</body>\n</html>\n",
        escape_html(title),
        component.name(),
        component.render()
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_component() {
        let page = render_page("Bookmarker", &Bookmarker);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Bookmarker</title>"));
        assert!(page.contains(r#"data-component="Bookmarker""#));
        assert!(page.contains(r#"<div id="bookmarker""#));
    }

    #[test]
    fn test_title_is_escaped() {
        let page = render_page("<Tom & Jerry>", &Bookmarker);
        assert!(page.contains("<title>&lt;Tom &amp; Jerry&gt;</title>"));
    }
}
