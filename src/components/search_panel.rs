//! In-page search box and results panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Typing schedules a search through a [`Debouncer`]; only the last input of
//! a burst runs. The content region is rescanned on every run so results
//! reflect the page as currently rendered.

#[cfg(test)]
#[path = "search_panel_test.rs"]
mod search_panel_test;

use enhance::config::SearchConfig;
use enhance::schedule::Debouncer;
use enhance::search::{self, SearchOutcome, SearchResult, Segment};
use leptos::either::{Either, EitherOf3};
use leptos::prelude::*;

use crate::util::page_scan;
use crate::util::timer::BrowserTimer;

/// CSS `display` value of the results panel for `outcome`.
pub fn results_display(outcome: &SearchOutcome) -> &'static str {
    if outcome.is_visible() { "block" } else { "none" }
}

#[component]
pub fn SearchPanel(config: SearchConfig, content_selector: String) -> impl IntoView {
    let outcome = RwSignal::new(SearchOutcome::Hidden);
    let debouncer = StoredValue::new_local(Debouncer::new(BrowserTimer, config.debounce_ms));
    let config = StoredValue::new(config);
    let content_selector = StoredValue::new(content_selector);

    let on_input = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        debouncer.with_value(|debouncer| {
            debouncer.call(move || {
                let config = config.get_value();
                let next = content_selector.with_value(|selector| {
                    search::execute(&query, &config, || {
                        page_scan::collect_search_nodes(selector)
                    })
                });
                if let Some(next) = next {
                    outcome.set(next);
                }
            });
        });
    };

    view! {
        <input
            type="text"
            class={search::INPUT_CLASS}
            placeholder={search::PLACEHOLDER}
            on:input=on_input
        />
        <div class={search::RESULTS_CLASS} style:display=move || outcome.with(results_display)>
            {move || render_outcome(outcome.get())}
        </div>
    }
}

fn render_outcome(outcome: SearchOutcome) -> impl IntoView {
    match outcome {
        SearchOutcome::Hidden => EitherOf3::A(()),
        SearchOutcome::Empty => EitherOf3::B(view! { <p>{search::NO_RESULTS}</p> }),
        SearchOutcome::Results { query, results } => EitherOf3::C(
            results
                .into_iter()
                .map(|result| render_result(result, &query))
                .collect_view(),
        ),
    }
}

fn render_result(result: SearchResult, query: &str) -> impl IntoView + use<> {
    let href = result.href();
    let title = render_segments(search::highlight(&result.title, query));
    let snippet = render_segments(search::highlight(&result.snippet, query));
    view! {
        <div class={search::RESULT_CLASS}>
            <h4>
                <a href=href>{title}</a>
            </h4>
            <p>{snippet}</p>
        </div>
    }
}

fn render_segments(segments: Vec<Segment>) -> impl IntoView {
    segments
        .into_iter()
        .map(|segment| {
            if segment.marked {
                Either::Left(view! { <mark>{segment.text}</mark> })
            } else {
                Either::Right(segment.text)
            }
        })
        .collect_view()
}
