//! GET / — the form page, rendered from the current session.

use axum::{extract::State, response::Html};

use crate::generation::form::{Platform, Tone, Variations};
use crate::preferences::Theme;
use crate::session::SessionSnapshot;
use crate::state::AppState;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f7f7fb; color: #1d1d27; }
body[data-theme="dark"] { background: #15151d; color: #ececf4; }
.container { max-width: 760px; margin: 0 auto; padding: 2rem 1rem; }
textarea { width: 100%; min-height: 7rem; }
.options-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin: 1rem 0; }
.error { color: #c0392b; }
.loading { font-style: italic; }
.post { border: 1px solid #8884; border-radius: 8px; padding: 1rem; margin: 1rem 0; white-space: pre-wrap; }
"#;

const SCRIPT: &str = r#"
async function postJson(url, body) {
  const res = await fetch(url, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: body === undefined ? undefined : JSON.stringify(body),
  });
  return res.json();
}
document.getElementById("theme-toggle").addEventListener("change", async () => {
  const { theme } = await postJson("/api/v1/theme/toggle");
  document.body.setAttribute("data-theme", theme);
  document.getElementById("theme-label").textContent = theme === "dark" ? "Dark Mode" : "Light Mode";
});
document.getElementById("post-form").addEventListener("submit", async (event) => {
  event.preventDefault();
  const f = event.target;
  document.getElementById("generate").disabled = true;
  await postJson("/api/v1/posts/generate", {
    topic: f.topic.value,
    platform: f.platform.value,
    tone: f.tone.value,
    variations: Number(f.variations.value),
    include_thread: f.include_thread.checked,
    include_hashtags: f.include_hashtags.checked,
    include_emojis: f.include_emojis.checked,
  });
  location.reload();
});
document.querySelectorAll(".copy").forEach((button) => {
  button.addEventListener("click", async () => {
    const text = button.parentElement.querySelector("p").textContent;
    const result = await postJson("/api/v1/clipboard", { text });
    if (result.copied) {
      button.textContent = "Copied!";
      setTimeout(() => { button.textContent = "Copy"; }, 2000);
    } else {
      location.reload();
    }
  });
});
"#;

pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.session.lock().await.snapshot();
    Html(render_page(&snapshot))
}

pub fn render_page(snapshot: &SessionSnapshot) -> String {
    let form = &snapshot.form;
    let theme = snapshot.theme;

    let platform_options: String = Platform::ALL
        .iter()
        .map(|p| option(p.id(), p.label(), *p == form.platform))
        .collect();
    let tone_options: String = Tone::ALL
        .iter()
        .map(|t| option(t.id(), t.label(), *t == form.tone))
        .collect();
    let variation_options: String = (Variations::MIN..=Variations::MAX)
        .map(|n| {
            let label = format!("{n} variation{}", if n > 1 { "s" } else { "" });
            option(&n.to_string(), &label, n == form.variations.get())
        })
        .collect();

    let error = snapshot
        .error
        .as_deref()
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    let posts: String = snapshot
        .posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            format!(
                r#"<div class="post"><h3>Variation {}</h3><p>{}</p><button class="copy" type="button">Copy</button></div>"#,
                i + 1,
                escape_html(post)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>PostGen AI</title>
<style>{STYLE}</style>
</head>
<body data-theme="{theme_id}">
<div class="theme-toggle">
<label class="switch"><input id="theme-toggle" type="checkbox"{dark_checked}><span class="slider"></span></label>
<span id="theme-label">{theme_label}</span>
</div>
<div class="container">
<header><h1>PostGen AI</h1><p class="subtitle">Craft Your Perfect Post with AI Magic</p></header>
<form id="post-form">
<textarea name="topic" placeholder="What's on your mind? Enter your topic or idea here...">{topic}</textarea>
<div class="options-grid">
<label>Choose Platform <select name="platform">{platform_options}</select></label>
<label>Select Tone <select name="tone">{tone_options}</select></label>
<label>Post Variations <select name="variations">{variation_options}</select></label>
</div>
<label><input type="checkbox" name="include_thread"{thread}> Create Thread</label>
<label><input type="checkbox" name="include_hashtags"{hashtags}> Add Hashtags</label>
<label><input type="checkbox" name="include_emojis"{emojis}> Include Emojis</label>
<button id="generate" type="submit"{disabled}>{button_label}</button>
</form>
{loading}{error}
<section class="results">{posts}</section>
</div>
<script>{SCRIPT}</script>
</body>
</html>"#,
        theme_id = theme.id(),
        theme_label = theme.label(),
        dark_checked = checked(theme == Theme::Dark),
        topic = escape_html(&form.topic),
        thread = checked(form.include_thread),
        hashtags = checked(form.include_hashtags),
        emojis = checked(form.include_emojis),
        loading = if snapshot.is_loading {
            r#"<p class="loading">Crafting your perfect posts...</p>"#
        } else {
            ""
        },
        disabled = if snapshot.is_loading { " disabled" } else { "" },
        button_label = if snapshot.is_loading {
            "Generating..."
        } else {
            "Generate Posts"
        },
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(r#"<option value="{value}"{selected}>{label}</option>"#)
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
