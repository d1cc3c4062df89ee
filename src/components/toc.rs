use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub level: u8,
}

#[derive(Properties, PartialEq, Clone)]
pub struct TableOfContentsProps {
    pub entries: Vec<TocEntry>,
}

#[function_component(TableOfContents)]
pub fn table_of_contents(props: &TableOfContentsProps) -> Html {
    if props.entries.is_empty() {
        return html! {};
    }
    html! {<aside class="toc">
        <h4>{"Contents"}</h4>
        <ul id="toc-list">
            { for props.entries.iter().map(|e| html! {
                <li class={classes!(format!("toc-h{}", e.level))}>
                    <a href={format!("#{}", e.id)}>{ e.text.clone() }</a>
                </li>
            }) }
        </ul>
    </aside>}
}
