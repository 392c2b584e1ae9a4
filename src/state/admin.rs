//! Admin dashboard state: one entity kind listed at a time.
//!
//! DESIGN
//! ======
//! List fetches are tagged with a monotonically increasing sequence number.
//! A response is applied only if its number is still the latest issued, so a
//! slow response for an old search can never overwrite a newer one.
//!
//! Total count comes from the API when it reports one. Otherwise it is
//! estimated from the returned page: everything before this page plus what
//! came back, with one more page assumed when the page came back full.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde_json::Value;

use super::Shared;
use super::entity::{EntityKind, FormMode, FormState};
use super::notice::{NoticeLevel, NoticeState};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{ListPage, ListQuery, RecordId};

#[derive(Clone, Debug, PartialEq)]
pub struct AdminState {
    pub kind: EntityKind,
    pub search: String,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub records: Vec<Value>,
    pub server_total: Option<u64>,
    pub loading: bool,
    pub latest_request: u64,
    pub pending_delete: Option<RecordId>,
    pub form: Option<FormState>,
    pub saving: bool,
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Issued by [`AdminState::begin_fetch`]; hand it back with the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub kind: EntityKind,
    pub query: ListQuery,
}

impl AdminState {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            kind: EntityKind::default(),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            records: Vec::new(),
            server_total: None,
            loading: false,
            latest_request: 0,
            pending_delete: None,
            form: None,
            saving: false,
        }
    }

    /// Switch entity kind: back to page 1, stale rows and dialogs dropped.
    pub fn select_kind(&mut self, kind: EntityKind) {
        if self.kind == kind {
            return;
        }
        self.kind = kind;
        self.page = 1;
        self.records.clear();
        self.server_total = None;
        self.pending_delete = None;
        self.form = None;
    }

    /// New search text always restarts from the first page.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_request += 1;
        self.loading = true;
        FetchTicket {
            seq: self.latest_request,
            kind: self.kind,
            query: ListQuery::for_page(self.page, self.page_size, &self.search),
        }
    }

    /// Apply a list result. Returns `false` (and changes nothing) when a newer
    /// fetch has been issued since `ticket`.
    pub fn finish_fetch(&mut self, ticket: &FetchTicket, result: Result<ListPage, ApiError>) -> Result<bool, ApiError> {
        if ticket.seq != self.latest_request {
            return Ok(false);
        }
        self.loading = false;
        let page = result?;
        self.records = page.items;
        self.server_total = page.total;
        Ok(true)
    }

    fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Row count for the pager.
    #[must_use]
    pub fn total(&self) -> u64 {
        if let Some(total) = self.server_total {
            return total;
        }
        let seen = self.skip() + self.records.len() as u64;
        if self.page_full() { seen + u64::from(self.page_size) } else { seen }
    }

    fn page_full(&self) -> bool {
        self.records.len() as u64 >= u64::from(self.page_size)
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size);
        let pages = self.total().div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        match self.server_total {
            Some(total) => self.skip() + (self.records.len() as u64) < total,
            None => self.page_full(),
        }
    }

    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    /// After a delete emptied a later page, move back one page. Returns
    /// whether the page changed.
    pub fn step_back_if_empty(&mut self) -> bool {
        if self.records.is_empty() && self.page > 1 && !self.loading {
            self.page -= 1;
            return true;
        }
        false
    }

    pub fn request_delete(&mut self, id: RecordId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn open_create(&mut self) {
        self.form = Some(FormState::for_create(self.kind));
    }

    /// Open the edit dialog for the record with `id`. No-op if it is not on
    /// the current page.
    pub fn open_edit(&mut self, id: &RecordId) {
        let kind = self.kind;
        self.form = self
            .records
            .iter()
            .find(|r| kind.record_id(r).as_ref() == Some(id))
            .and_then(|r| FormState::for_edit(kind, r));
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.saving = false;
    }
}

/// Fetch the current page. Failures become an error notice; the previous
/// rows stay on screen.
pub async fn load_page<T: Transport>(
    api: &ApiClient<T>,
    admin: &impl Shared<AdminState>,
    notices: &impl Shared<NoticeState>,
) {
    let mut issued = None;
    admin.update_with(|s| issued = Some(s.begin_fetch()));
    let Some(ticket) = issued else {
        return;
    };
    let result = api.list(ticket.kind, &ticket.query).await;
    let mut outcome = Ok(false);
    admin.update_with(|s| outcome = s.finish_fetch(&ticket, result));
    if let Err(e) = outcome {
        leptos::logging::warn!("{} list failed: {e}", ticket.kind.slug());
        notices.update_with(|n| {
            n.push(NoticeLevel::Error, e.user_message(&format!("Could not load {}", ticket.kind.slug())));
        });
    }
}

/// Resolve the delete confirmation dialog.
///
/// Declining only closes the dialog. Confirming issues the delete and, on
/// success, reloads the page.
pub async fn resolve_delete<T: Transport>(
    api: &ApiClient<T>,
    admin: &impl Shared<AdminState>,
    notices: &impl Shared<NoticeState>,
    confirmed: bool,
) {
    let mut target = None;
    admin.update_with(|s| target = s.pending_delete.take().map(|id| (s.kind, id)));
    let Some((kind, id)) = target else {
        return;
    };
    if !confirmed {
        return;
    }
    match api.delete(kind, &id).await {
        Ok(()) => {
            notices.update_with(|n| {
                n.push(NoticeLevel::Success, format!("{} deleted", kind.noun()));
            });
            load_page(api, admin, notices).await;
            let mut stepped = false;
            admin.update_with(|s| stepped = s.step_back_if_empty());
            if stepped {
                load_page(api, admin, notices).await;
            }
        }
        Err(e) => {
            leptos::logging::warn!("delete {} {id} failed: {e}", kind.slug());
            notices.update_with(|n| {
                n.push(NoticeLevel::Error, e.user_message(&format!("Could not delete {}", kind.noun().to_lowercase())));
            });
        }
    }
}

/// Submit the open form as a create or update.
///
/// Local validation errors stay in the form. Server errors become a notice and
/// leave the form open for another try; success closes it and reloads.
pub async fn submit_form<T: Transport>(
    api: &ApiClient<T>,
    admin: &impl Shared<AdminState>,
    notices: &impl Shared<NoticeState>,
) {
    let Some(form) = admin.read_with(|s| s.form.clone()) else {
        return;
    };
    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(message) => {
            admin.update_with(|s| {
                if let Some(f) = s.form.as_mut() {
                    f.error = Some(message);
                }
            });
            return;
        }
    };

    admin.update_with(|s| s.saving = true);
    let kind = form.kind;
    let (result, verb) = match &form.mode {
        FormMode::Create => (api.create(kind, &payload).await, "created"),
        FormMode::Edit(id) => (api.update(kind, id, &payload).await, "updated"),
    };

    match result {
        Ok(_) => {
            admin.update_with(AdminState::close_form);
            notices.update_with(|n| {
                n.push(NoticeLevel::Success, format!("{} {verb}", kind.noun()));
            });
            load_page(api, admin, notices).await;
        }
        Err(e) => {
            leptos::logging::warn!("save {} failed: {e}", kind.slug());
            admin.update_with(|s| s.saving = false);
            notices.update_with(|n| {
                n.push(NoticeLevel::Error, e.user_message(&format!("Could not save {}", kind.noun().to_lowercase())));
            });
        }
    }
}
