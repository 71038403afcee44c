//! Aggregated view mounting every entity panel.

use leptos::prelude::*;

use crate::components::entity_panel::entity_panel;
use crate::model::{Block, Dispatcher, Endplate, Module, Signal, Switch, Train, YardMaster};

/// All eight collection panels, stacked in fixed order.
///
/// Panels are independent: each owns its list and form state and talks to
/// its own collection endpoint.
#[component]
pub fn PanelsPage() -> impl IntoView {
    view! {
        {entity_panel::<Module>()}
        {entity_panel::<Endplate>()}
        {entity_panel::<Signal>()}
        {entity_panel::<Switch>()}
        {entity_panel::<Block>()}
        {entity_panel::<Dispatcher>()}
        {entity_panel::<Train>()}
        {entity_panel::<YardMaster>()}
    }
}
