//! Generic list/create panel over one backend collection.
//!
//! Instantiated once per entity type; everything entity-specific comes from
//! the [`Entity`] descriptor: endpoint segment, form fields, row formatting.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::form::{FieldKind, FieldSpec, build_payload};
use crate::model::Entity;
use crate::net::api;
use crate::state::config::ConfigState;
use crate::state::sync::FetchSequence;

/// List-and-create view for one collection.
///
/// Fetches on mount and on every base-URL change, replaces the whole list
/// with each response, and appends records through the form below the list.
/// A response whose ticket has been superseded is dropped, so a slow fetch
/// against an old base URL never overwrites newer data.
pub fn entity_panel<E: Entity>() -> impl IntoView {
    let config = expect_context::<RwSignal<ConfigState>>();

    let records = RwSignal::new(Vec::<E>::new());
    let failure = RwSignal::new(None::<String>);
    let sequence = RwSignal::new(FetchSequence::default());
    let drafts: Vec<RwSignal<String>> = E::FIELDS
        .iter()
        .map(|field| RwSignal::new(field.kind.blank().to_owned()))
        .collect();

    let refresh = move |base: String| {
        let ticket = sequence.try_update(FetchSequence::issue).unwrap_or_default();
        spawn_local(async move {
            let result = api::fetch_collection::<E>(&base).await;
            let current = sequence
                .try_with_untracked(|s| s.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("{}: dropping superseded response (ticket {ticket})", E::SEGMENT);
                return;
            }
            match result {
                Ok(items) => {
                    records.set(items);
                    failure.set(None);
                }
                Err(err) => {
                    log::warn!("{}: list fetch failed: {err}", E::SEGMENT);
                    failure.set(Some(err.to_string()));
                }
            }
        });
    };

    // Mount and reconfiguration both land here.
    Effect::new(move || {
        let base = config.get().base_url;
        refresh(base);
    });

    let submit_drafts = drafts.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let base = config.get_untracked().base_url;
        let values: Vec<String> = submit_drafts.iter().map(|d| d.get_untracked()).collect();
        let payload = build_payload(E::FIELDS, &values);
        let drafts = submit_drafts.clone();
        spawn_local(async move {
            match api::create_record(&base, E::SEGMENT, &payload).await {
                Ok(()) => {
                    for (field, draft) in E::FIELDS.iter().zip(&drafts) {
                        draft.set(field.kind.blank().to_owned());
                    }
                    failure.set(None);
                    refresh(base);
                }
                Err(err) => {
                    // Drafts are retained so the entry can be resubmitted.
                    log::warn!("{}: create failed: {err}", E::SEGMENT);
                    failure.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="entity-panel">
            <h2>{E::TITLE}</h2>
            {move || {
                failure
                    .get()
                    .map(|message| view! { <p class="entity-panel__failure">{message}</p> })
            }}
            <ul>
                <For
                    each=move || records.get()
                    key=|record: &E| record.id().to_owned()
                    children=move |record: E| view! { <li>{record.row()}</li> }
                />
            </ul>
            <form on:submit=on_submit>
                {E::FIELDS
                    .iter()
                    .zip(drafts)
                    .map(|(field, draft)| field_input(field, draft))
                    .collect::<Vec<_>>()}
                <button type="submit">{E::SUBMIT}</button>
            </form>
        </div>
    }
}

/// Input element for one field, bound to its draft signal.
fn field_input(field: &'static FieldSpec, draft: RwSignal<String>) -> impl IntoView {
    match field.kind {
        FieldKind::Flag => view! {
            <label>
                {field.placeholder}
                <input
                    type="checkbox"
                    prop:checked=move || draft.get() == "true"
                    on:change=move |_| {
                        let flipped = if draft.get_untracked() == "true" { "false" } else { "true" };
                        draft.set(flipped.to_owned());
                    }
                />
            </label>
        }
        .into_any(),
        FieldKind::Integer => view! {
            <input
                type="number"
                placeholder=field.placeholder
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Text | FieldKind::OptionalRef => view! {
            <input
                type="text"
                placeholder=field.placeholder
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
        }
        .into_any(),
    }
}
