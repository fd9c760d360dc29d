use blog_content::{ListingController, PageResult};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ListingState {
    pub(crate) controller: RwSignal<ListingController>,
}

impl ListingState {
    pub(crate) fn new(initial: PageResult) -> Self {
        Self {
            controller: RwSignal::new(ListingController::new(initial)),
        }
    }

    pub(crate) fn has_more(&self) -> bool {
        self.controller.with(ListingController::has_more)
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.controller.with(ListingController::is_loading)
    }

    pub(crate) fn failure(&self) -> Option<String> {
        self.controller
            .with(|controller| controller.failure().map(str::to_string))
    }

    /// Запускает подгрузку следующей страницы; повторный клик во время
    /// запроса ничего не делает.
    pub(crate) fn load_more(&self) {
        let mut ticket = None;
        self.controller
            .update(|controller| ticket = controller.begin_load());
        let Some(ticket) = ticket else {
            return;
        };

        let controller = self.controller;
        spawn_local(async move {
            let outcome = api::fetch_page(ticket.url()).await;
            controller.update(|state| {
                state.complete(ticket, outcome);
            });
        });
    }
}
