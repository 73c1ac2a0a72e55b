//! Page shell: document head, site header and closing tags.

use crate::escape::html_escape;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    pub title: Option<String>,
    pub meta: Vec<(String, String)>,
    /// Inline `<style>` blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Document wrapper around the page sections.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    pub lang: &'static str,
    pub body_start: String,
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            lang: "th",
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Everything before the sections.
    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}</head>\n{}",
            self.lang,
            self.head.render(),
            self.body_start
        )
    }

    /// Everything after the sections.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

/// Site header with the search box prefilled with `query`.
pub fn site_header(query: &str) -> String {
    format!(
        r#"<body>
<header class="site-header">
    <a href="/" class="logo">JIB Computer Shop</a>
    <form action="/search" method="GET" class="search-form">
        <input type="search" name="q" value="{}" placeholder="ค้นหาสินค้า เช่น โน้ตบุ๊คแรงๆ งบ 25,000 หรือ การ์ดจอ RTX" aria-label="ค้นหา">
        <button type="submit">ค้นหา</button>
    </form>
</header>
<main>
"#,
        html_escape(query)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_escapes_title_and_sets_lang() {
        let shell = Shell::new(HeadContent::new("<rtx> - ค้นหา"));
        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"th\">"));
        assert!(opening.contains("<title>&lt;rtx&gt; - ค้นหา</title>"));
        assert!(opening.contains("<meta charset=\"utf-8\">"));
        assert!(shell.render_closing().ends_with("</html>"));
    }

    #[test]
    fn test_site_header_prefills_query() {
        let html = site_header("\"quoted\"");
        assert!(html.contains(r#"value="&quot;quoted&quot;""#));
    }
}
