// String helpers for the post renderer.

struct CalloutKind {
    name: &'static str,
    icon: &'static str,
    title: &'static str,
}

const CALLOUTS: [CalloutKind; 5] = [
    CalloutKind { name: "note", icon: "📝", title: "Note" },
    CalloutKind { name: "warning", icon: "⚠️", title: "Warning" },
    CalloutKind { name: "tip", icon: "💡", title: "Tip" },
    CalloutKind { name: "info", icon: "ℹ️", title: "Info" },
    CalloutKind { name: "important", icon: "❗", title: "Important" },
];

const FENCE: &str = ":::";

/// Rewrites `:::kind body :::` blocks into callout markup before markdown rendering.
/// A block without a closing fence is left as written.
pub fn expand_callouts(source: &str) -> String {
    let mut text = source.to_string();
    for kind in &CALLOUTS {
        text = expand_kind(&text, kind);
    }
    text
}

fn expand_kind(source: &str, kind: &CalloutKind) -> String {
    let open = format!("{}{}", FENCE, kind.name);
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find(&open) {
        let after_open = &rest[start + open.len()..];
        let Some(close) = after_open.find(FENCE) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&format!(
            "<div class=\"callout callout-{}\">\n<div class=\"callout-title\">{} {}</div>\n<div>{}</div>\n</div>",
            kind.name,
            kind.icon,
            kind.title,
            after_open[..close].trim()
        ));
        rest = &after_open[close + FENCE.len()..];
    }
    out.push_str(rest);
    out
}

/// Heading id: lower-cased, every run of non-word characters collapsed to `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_gap = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }
    slug
}
