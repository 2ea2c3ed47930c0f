use leptos::prelude::*;

use super::controller::ListQueryController;
use super::state::ListSnapshot;
use super::ListApi;

/// Bind a controller to the current component.
///
/// Snapshots are mirrored into a signal for the table to render, the first
/// page is requested right away and the controller is disposed together with
/// the component, so no fetch or debounce timer outlives the screen.
pub fn use_list_controller<A>(controller: &ListQueryController<A>) -> ReadSignal<ListSnapshot<A::Item>>
where
    A: ListApi + 'static,
    A::Item: Send + Sync,
{
    let (snapshot, set_snapshot) = signal(controller.snapshot());
    let subscription = controller.subscribe(move |next| set_snapshot.set(next.clone()));

    let stored = StoredValue::new_local(controller.clone());
    on_cleanup(move || {
        stored.try_with_value(|controller| {
            controller.unsubscribe(subscription);
            controller.dispose();
        });
    });

    controller.refresh();
    snapshot
}
