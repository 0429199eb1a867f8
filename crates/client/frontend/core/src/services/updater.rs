//! Folds background results into the view model.
use camtel_api::{EventSource, MediaAsset};

use crate::event::{DashboardUpdate, EventImpact};
use crate::page::Page;
use crate::view_model::{EventCard, ViewModel};

/// Stateless service applying [`DashboardUpdate`]s to a [`ViewModel`].
pub struct ViewModelUpdater;

impl ViewModelUpdater {
    /// Apply one update and report whether the screen needs a redraw.
    ///
    /// Failed polls keep whatever was displayed before. Query results that
    /// arrive while the browser is not shown, or that were sent from an
    /// earlier visit to it, are dropped.
    pub fn update(
        view_model: &mut ViewModel,
        update: DashboardUpdate,
        source: &dyn EventSource,
    ) -> EventImpact {
        let resolve = |asset: Option<&MediaAsset>| source.media_url(asset);

        match update {
            DashboardUpdate::Persons(Ok(events)) => {
                let cards = events
                    .iter()
                    .map(|event| EventCard::from_person(event, resolve))
                    .collect();
                view_model.live.replace_persons(cards);
                Self::redraw_if(view_model.page == Page::Live)
            }
            DashboardUpdate::Vehicles(Ok(events)) => {
                let cards = events
                    .iter()
                    .map(|event| EventCard::from_vehicle(event, resolve))
                    .collect();
                view_model.live.replace_vehicles(cards);
                Self::redraw_if(view_model.page == Page::Live)
            }
            DashboardUpdate::Persons(Err(_)) | DashboardUpdate::Vehicles(Err(_)) => {
                EventImpact::none()
            }
            DashboardUpdate::Filtered { generation, result } => {
                if view_model.page != Page::Events
                    || generation != view_model.browser.generation
                {
                    tracing::debug!("Dropping stale query result (generation {generation})");
                    return EventImpact::none();
                }
                match result {
                    Ok(events) => view_model.browser.apply_results(&events),
                    Err(_) => view_model.browser.request_failed(),
                }
                EventImpact::redraw()
            }
            DashboardUpdate::Health(result) => {
                Self::redraw_if(view_model.backend.record_health(result.as_ref().ok()))
            }
            DashboardUpdate::Metrics(Ok(metrics)) => {
                Self::redraw_if(view_model.backend.record_metrics(metrics))
            }
            DashboardUpdate::Metrics(Err(_)) => EventImpact::none(),
        }
    }

    fn redraw_if(changed: bool) -> EventImpact {
        if changed {
            EventImpact::redraw()
        } else {
            EventImpact::none()
        }
    }
}
