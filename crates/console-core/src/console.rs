//! The Buyer Console state machine.
//!
//! Pure and synchronous. Timers and network calls live in
//! [`crate::driver`]; this type only decides what should happen and records
//! what did. Every scheduled fetch is identified by a [`Ticket`], and every
//! issued request carries the ticket's sequence number plus the query
//! generation it was built from, so responses to superseded requests can be
//! recognized and dropped.

use shared_types::{
    AppError, DashboardView, Fabric, FabricKey, FindFabricsParams, FindFabricsResponse,
    QueryPatch, SearchQuery, SearchResultPage, SelectionSet, DEFAULT_PAGE_SIZE,
};
use tracing::{debug, warn};

/// Handle for one scheduled fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// A fetch the caller should perform now.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub seq: u64,
    pub generation: u64,
    pub page: u32,
    pub params: FindFabricsParams,
}

/// What happened when a response was handed back.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    Applied,
    /// The fetch failed; results were left as they were.
    Failed(AppError),
    /// The response belonged to a superseded request and was ignored.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct BuyerConsole {
    view: DashboardView,
    sidebar_open: bool,
    query: SearchQuery,
    page: u32,
    page_size: u32,
    results: SearchResultPage,
    selection: SelectionSet,
    mockup: Option<Fabric>,
    techpack: Option<Fabric>,

    generation: u64,
    next_seq: u64,
    pending: Option<Ticket>,
    last_issued: Option<u64>,
    in_flight: Option<u64>,
}

impl Default for BuyerConsole {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BuyerConsole {
    pub fn new(page_size: u32) -> Self {
        Self {
            view: DashboardView::default(),
            sidebar_open: false,
            query: SearchQuery::default(),
            page: 1,
            page_size: page_size.max(1),
            results: SearchResultPage::default(),
            selection: SelectionSet::new(),
            mockup: None,
            techpack: None,
            generation: 0,
            next_seq: 1,
            pending: None,
            last_issued: None,
            in_flight: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn view(&self) -> DashboardView {
        self.view
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// The page the next (or current) fetch targets.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn results(&self) -> &SearchResultPage {
        &self.results
    }

    pub fn items(&self) -> &[Fabric] {
        &self.results.items
    }

    pub fn has_more(&self) -> bool {
        self.results.has_more
    }

    pub fn total(&self) -> i64 {
        self.results.total
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn mockup_target(&self) -> Option<&Fabric> {
        self.mockup.as_ref()
    }

    pub fn techpack_target(&self) -> Option<&Fabric> {
        self.techpack.as_ref()
    }

    /// True only while a request is on the wire. The debounce delay does not count.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True while a fetch is scheduled but its timer has not fired.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ── Navigation ───────────────────────────────────────────────────

    pub fn set_view(&mut self, view: DashboardView) {
        self.view = view;
    }

    /// Sidebar navigation. On a compact viewport the sidebar closes too.
    pub fn navigate(&mut self, view: DashboardView, compact: bool) {
        self.set_view(view);
        if compact {
            self.sidebar_open = false;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Close the sidebar in response to a click outside it.
    /// Returns whether anything changed.
    pub fn dismiss_sidebar(&mut self) -> bool {
        if self.sidebar_open {
            self.sidebar_open = false;
            true
        } else {
            false
        }
    }

    // ── Search ───────────────────────────────────────────────────────

    /// Merge `patch` into the query and reset paging.
    ///
    /// Returns a ticket to schedule when the resulting query is active. When
    /// it is empty the results are cleared on the spot and nothing is
    /// scheduled; the caller should cancel any pending timer.
    pub fn update_query(&mut self, patch: QueryPatch) -> Option<Ticket> {
        self.query.apply(patch);
        self.generation += 1;
        self.page = 1;
        self.results.reset();
        self.in_flight = None;

        if !self.query.is_active() {
            self.pending = None;
            debug!(generation = self.generation, "search cleared");
            return None;
        }
        Some(self.schedule())
    }

    /// Request the next page. No-op unless more results exist and nothing is
    /// already scheduled or in flight.
    pub fn load_more(&mut self) -> Option<Ticket> {
        if !self.results.has_more || self.pending.is_some() || self.in_flight.is_some() {
            return None;
        }
        self.page = self.results.page + 1;
        Some(self.schedule())
    }

    fn schedule(&mut self) -> Ticket {
        let ticket = Ticket { seq: self.next_seq };
        self.next_seq += 1;
        self.pending = Some(ticket);
        ticket
    }

    /// The debounce timer for `ticket` elapsed.
    ///
    /// Returns the request to issue, or `None` if the ticket was superseded
    /// or the query is empty (results are cleared in that case).
    pub fn fire(&mut self, ticket: Ticket) -> Option<FetchRequest> {
        if self.pending != Some(ticket) {
            debug!(seq = ticket.seq, "timer fired for superseded ticket");
            return None;
        }
        self.pending = None;

        if !self.query.is_active() {
            self.results.reset();
            self.page = 1;
            return None;
        }

        self.last_issued = Some(ticket.seq);
        self.in_flight = Some(ticket.seq);
        debug!(seq = ticket.seq, page = self.page, "issuing fabric search");
        Some(FetchRequest {
            seq: ticket.seq,
            generation: self.generation,
            page: self.page,
            params: FindFabricsParams::new(&self.query, self.page, self.page_size),
        })
    }

    /// The task behind `ticket` went away before settling: its timer was
    /// cancelled or its future dropped. Clears whatever the ticket still
    /// holds so later searches are not blocked. Returns whether anything
    /// changed.
    pub fn abandon(&mut self, ticket: Ticket) -> bool {
        let mut changed = false;
        if self.pending == Some(ticket) {
            self.pending = None;
            changed = true;
        }
        if self.in_flight == Some(ticket.seq) {
            self.in_flight = None;
            changed = true;
        }
        if changed {
            self.page = self.results.page;
            debug!(seq = ticket.seq, "search abandoned");
        }
        changed
    }

    /// Drop the scheduled fetch, if any. A request already on the wire is
    /// left to settle.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending {
            Some(ticket) => self.abandon(ticket),
            None => false,
        }
    }

    /// Hand back the outcome of `request`.
    pub fn complete(
        &mut self,
        request: FetchRequest,
        result: Result<FindFabricsResponse, AppError>,
    ) -> MergeOutcome {
        if self.in_flight == Some(request.seq) {
            self.in_flight = None;
        }

        if self.last_issued != Some(request.seq) || request.generation != self.generation {
            debug!(
                seq = request.seq,
                generation = request.generation,
                current_generation = self.generation,
                "discarding stale search response"
            );
            return MergeOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                self.results.merge(request.page, response);
                self.page = self.results.page;
                MergeOutcome::Applied
            }
            Err(error) => {
                warn!(page = request.page, seq = request.seq, %error, "fabric search failed");
                self.page = self.results.page;
                MergeOutcome::Failed(error)
            }
        }
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Returns whether the fabric is selected afterwards.
    pub fn toggle_select(&mut self, fabric: Fabric) -> bool {
        self.selection.toggle(fabric)
    }

    pub fn deselect(&mut self, key: &FabricKey) -> Option<Fabric> {
        self.selection.remove(key)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, fabric: &Fabric) -> bool {
        self.selection.is_selected(fabric)
    }

    // ── Modals ───────────────────────────────────────────────────────

    pub fn open_mockup(&mut self, fabric: Fabric) {
        self.mockup = Some(fabric);
    }

    pub fn close_mockup(&mut self) {
        self.mockup = None;
    }

    pub fn open_techpack(&mut self, fabric: Fabric) {
        self.techpack = Some(fabric);
    }

    pub fn close_techpack(&mut self) {
        self.techpack = None;
    }
}
