use yew::prelude::*;

use crate::config::{self, DARK_CLASS};
use crate::model::Theme;

fn apply_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .class_list()
            .toggle_with_force(DARK_CLASS, theme == Theme::Dark);
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(config::load_theme);

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            config::store_theme(next);
            theme.set(next);
        })
    };

    html! {
        <button id="theme-toggle" data-tooltip={theme.tooltip()} {onclick}>{ theme.icon() }</button>
    }
}
