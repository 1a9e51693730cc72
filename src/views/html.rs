use maud::{html, Markup, PreEscaped, DOCTYPE};

// Подменяет плейсхолдер фрагментом, пришедшим позже в потоке страницы
const FRAGMENT_SCRIPT: &str = r#"
function swapFragment(id) {
    var tpl = document.querySelector('template[data-fragment-for="' + id + '"]');
    var target = document.getElementById(id);
    if (tpl && target) {
        target.replaceWith(tpl.content.cloneNode(true));
        tpl.remove();
    }
}
"#;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

// Потоковый ответ отдает документ частями, поэтому эти теги открываются и
// закрываются в разных чанках.
const HTML_OPEN: &str = r#"<html lang="ru">"#;
const BODY_OPEN: &str = r#"<body class="bg-light">"#;
const MAIN_OPEN: &str = r#"<main class="container">"#;
const MAIN_CLOSE: &str = "</main>";
const BODY_HTML_CLOSE: &str = "</body></html>";

fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (title) }
            link href=(BOOTSTRAP_CSS) rel="stylesheet";
            link href=(BOOTSTRAP_ICONS) rel="stylesheet";
            script { (PreEscaped(FRAGMENT_SCRIPT)) }
        }
    }
}

fn navbar(site_name: &str) -> Markup {
    html! {
        nav.navbar.navbar-dark.bg-primary."mb-4" {
            div.container {
                a.navbar-brand href="/" { (site_name) }
            }
        }
    }
}

/// Текст, где переводы строк превращены в `<br>`.
pub fn multiline(input: &str) -> Markup {
    html! {
        @for (idx, line) in input.lines().enumerate() {
            @if idx > 0 { br; }
            (line)
        }
    }
}

/// Начало документа: `<head>`, навбар и открытый `<main>`.
pub fn document_open(title: &str, site_name: &str) -> Markup {
    html! {
        (DOCTYPE)
        (PreEscaped(HTML_OPEN))
        (head(title))
        (PreEscaped(BODY_OPEN))
        (navbar(site_name))
        (PreEscaped(MAIN_OPEN))
    }
}

pub fn document_close() -> Markup {
    html! {
        (PreEscaped(MAIN_CLOSE))
        script src=(BOOTSTRAP_JS) {}
        (PreEscaped(BODY_HTML_CLOSE))
    }
}

/// Документ целиком, когда страница отдается одним ответом.
pub fn document(title: &str, site_name: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            (head(title))
            body.bg-light {
                (navbar(site_name))
                main.container { (body) }
                script src=(BOOTSTRAP_JS) {}
            }
        }
    }
}

/// Фрагмент, который браузер вставит на место элемента `target_id`.
pub fn fragment(target_id: &str, content: Markup) -> Markup {
    // JSON-строка годится как литерал JS
    let target = serde_json::to_string(target_id).unwrap_or_else(|_| String::from("\"\""));
    html! {
        template data-fragment-for=(target_id) { (content) }
        script { (PreEscaped(format!("swapFragment({})", target))) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolated_text_is_escaped() {
        let markup = document("<b onclick=\"x\">Tom & Jerry</b>", "Site", html! {});
        assert!(markup
            .into_string()
            .contains("<title>&lt;b onclick=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/b&gt;</title>"));
    }

    #[test]
    fn multiline_keeps_breaks() {
        assert_eq!(multiline("a<b\nc").into_string(), "a&lt;b<br>c");
    }

    #[test]
    fn streamed_parts_match_single_document() {
        let body = html! { p { "тело" } };
        let streamed = format!(
            "{}{}{}",
            document_open("T", "S").into_string(),
            body.clone().into_string(),
            document_close().into_string()
        );
        assert_eq!(streamed, document("T", "S", body).into_string());
    }

    #[test]
    fn fragment_targets_element() {
        let html = fragment("weather-block", html! { div { "x" } }).into_string();
        assert_eq!(
            html,
            r#"<template data-fragment-for="weather-block"><div>x</div></template><script>swapFragment("weather-block")</script>"#
        );
    }
}
