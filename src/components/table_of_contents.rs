//! Generated table of contents block.

use enhance::toc::{self, TableOfContents};
use leptos::prelude::*;

/// Static list of links to the page's headings.
#[component]
pub fn TableOfContentsBlock(table: TableOfContents) -> impl IntoView {
    view! {
        <h3>{toc::TITLE}</h3>
        <ul>
            {table
                .entries
                .into_iter()
                .map(|entry| {
                    let href = entry.href();
                    let level = entry.level.css_class();
                    view! {
                        <li class=level>
                            <a href=href class={toc::LINK_CLASS}>
                                {entry.text}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
