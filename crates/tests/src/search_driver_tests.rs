use std::time::Duration;

use pretty_assertions::assert_eq;
use shared_types::{AppError, QueryPatch};
use tokio::task::LocalSet;

use crate::common::{advance, driver, fabric, page, shown, spawn};

/// Keystrokes inside the debounce window collapse into one request for the
/// final text.
#[tokio::test(start_paused = true)]
async fn typing_fetches_once_for_the_last_term() {
    let (console, driver) = driver();

    LocalSet::new()
        .run_until(async {
            for term in ["c", "co", "cot", "cotton"] {
                assert!(spawn(driver.update_query(QueryPatch::term(term))));
                advance(100).await;
                assert_eq!(driver.search().call_count(), 0);
            }
            assert!(console.borrow().is_pending());
            assert!(!console.borrow().is_loading());
            advance(400).await;
        })
        .await;

    let calls = driver.search().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].search.as_deref(), Some("cotton"));
    assert_eq!(calls[0].page, 1);
    assert_eq!(calls[0].limit, 20);
    assert!(!console.borrow().is_pending());
}

/// Clearing every criterion empties the library without a request.
#[tokio::test(start_paused = true)]
async fn clearing_the_term_skips_the_request() {
    let (console, driver) = driver();
    driver.search().respond(Ok(page(&["A", "B"], false, 2)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("cotton")));
            advance(301).await;
            assert_eq!(shown(&console), vec!["A", "B"]);

            assert!(!spawn(driver.update_query(QueryPatch::term(""))));
            assert!(console.borrow().items().is_empty());
            assert!(!console.borrow().has_more());
            assert_eq!(console.borrow().total(), 0);
            assert!(!console.borrow().is_loading());
            advance(1_000).await;
        })
        .await;

    assert_eq!(driver.search().call_count(), 1);
}

/// A scheduled search is dropped if the box is emptied before it fires.
#[tokio::test(start_paused = true)]
async fn clearing_before_the_timer_cancels_it() {
    let (console, driver) = driver();

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("fleece")));
            advance(150).await;
            spawn(driver.update_query(QueryPatch::term("")));
            assert!(!console.borrow().is_pending());
            advance(1_000).await;
        })
        .await;

    assert_eq!(driver.search().call_count(), 0);
}

/// Whitespace alone is not a search.
#[tokio::test(start_paused = true)]
async fn whitespace_term_is_inactive() {
    let (_console, driver) = driver();

    LocalSet::new()
        .run_until(async {
            assert!(!spawn(driver.update_query(QueryPatch::term("   "))));
            advance(1_000).await;
        })
        .await;

    assert_eq!(driver.search().call_count(), 0);
}

/// "cotton": first page [A,B] with more to come, then load more appends
/// [C,D] and the list is complete.
#[tokio::test(start_paused = true)]
async fn load_more_appends_the_next_page() {
    let (console, driver) = driver();
    driver.search().respond(Ok(page(&["A", "B"], true, 4)));
    driver.search().respond(Ok(page(&["C", "D"], false, 4)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("cotton")));
            advance(301).await;
            assert_eq!(shown(&console), vec!["A", "B"]);
            assert!(console.borrow().has_more());
            assert_eq!(console.borrow().total(), 4);

            assert!(spawn(driver.load_more()));
            assert_eq!(console.borrow().page(), 2);
            advance(301).await;
        })
        .await;

    assert_eq!(shown(&console), vec!["A", "B", "C", "D"]);
    assert!(!console.borrow().has_more());

    let calls = driver.search().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].page, 2);
    assert_eq!(calls[1].search.as_deref(), Some("cotton"));
}

/// Load more does nothing when the last page said there is nothing more,
/// or while a search is already scheduled.
#[tokio::test(start_paused = true)]
async fn load_more_is_a_noop_without_more_or_while_pending() {
    let (console, driver) = driver();
    driver.search().respond(Ok(page(&["A"], false, 1)));
    driver.search().respond(Ok(page(&["A", "B"], true, 9)));

    LocalSet::new()
        .run_until(async {
            assert!(!spawn(driver.load_more()));

            spawn(driver.update_query(QueryPatch::term("linen")));
            advance(301).await;
            assert!(!spawn(driver.load_more()));
            assert_eq!(console.borrow().page(), 1);

            spawn(driver.update_query(QueryPatch::term("linen blend")));
            advance(301).await;
            assert!(console.borrow().has_more());

            assert!(spawn(driver.load_more()));
            // Second click while the first is still waiting on its timer.
            assert!(!spawn(driver.load_more()));
            advance(301).await;
        })
        .await;

    let pages: Vec<u32> = driver.search().calls().iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 1, 2]);
}

/// A failed append keeps what is on screen and lets the user retry the
/// same page.
#[tokio::test(start_paused = true)]
async fn failed_page_keeps_results_and_allows_retry() {
    let (console, driver) = driver();
    driver.search().respond(Ok(page(&["A", "B"], true, 4)));
    driver
        .search()
        .respond(Err(AppError::network("connection reset")));
    driver.search().respond(Ok(page(&["C", "D"], false, 4)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("cotton")));
            advance(301).await;

            spawn(driver.load_more());
            advance(301).await;
            assert_eq!(shown(&console), vec!["A", "B"]);
            assert!(!console.borrow().is_loading());
            assert_eq!(console.borrow().page(), 1);
            assert!(console.borrow().has_more());

            assert!(spawn(driver.load_more()));
            advance(301).await;
        })
        .await;

    assert_eq!(shown(&console), vec!["A", "B", "C", "D"]);
    let pages: Vec<u32> = driver.search().calls().iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 2, 2]);
}

/// A failed first page leaves the library empty and idle.
#[tokio::test(start_paused = true)]
async fn failed_first_page_leaves_library_empty() {
    let (console, driver) = driver();
    driver.search().respond(Err(AppError::http(500, "boom")));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("denim")));
            advance(301).await;
        })
        .await;

    let console = console.borrow();
    assert!(console.items().is_empty());
    assert!(!console.is_loading());
    assert!(!console.is_pending());
}

/// A slow answer for an older query never overwrites a newer one.
#[tokio::test(start_paused = true)]
async fn slow_response_for_old_query_is_discarded() {
    let (console, driver) = driver();
    driver
        .search()
        .respond_after(Duration::from_millis(500), Ok(page(&["OLD"], false, 1)));
    driver.search().respond(Ok(page(&["NEW"], false, 1)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("cot")));
            // Fired at 300, answer due at 800.
            advance(400).await;
            assert!(console.borrow().is_loading());

            spawn(driver.update_query(QueryPatch::term("cotton")));
            // New request fires at 700; the old answer lands at 800.
            advance(1_000).await;
        })
        .await;

    assert_eq!(shown(&console), vec!["NEW"]);
    assert_eq!(driver.search().call_count(), 2);
    assert!(!console.borrow().is_loading());
}

/// An answer that lands after the query changed, but before the new search
/// fired, is also ignored.
#[tokio::test(start_paused = true)]
async fn response_after_query_change_is_ignored_while_pending() {
    let (console, driver) = driver();
    driver
        .search()
        .respond_after(Duration::from_millis(100), Ok(page(&["OLD"], false, 1)));
    driver.search().respond(Ok(page(&["NEW"], false, 1)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("wool")));
            advance(350).await;
            spawn(driver.update_query(QueryPatch::term("wool blend")));
            // Old answer arrives at 400; new search fires at 650.
            advance(100).await;
            assert!(console.borrow().items().is_empty());
            assert!(console.borrow().is_pending());
            advance(300).await;
        })
        .await;

    assert_eq!(shown(&console), vec!["NEW"]);
}

/// The loading flag covers exactly the time a request is outstanding.
#[tokio::test(start_paused = true)]
async fn loading_tracks_the_request_in_flight() {
    let (console, driver) = driver();
    driver
        .search()
        .respond_after(Duration::from_millis(200), Ok(page(&["A"], false, 1)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("poplin")));
            advance(299).await;
            assert!(!console.borrow().is_loading());
            advance(2).await;
            assert!(console.borrow().is_loading());
            advance(250).await;
            assert!(!console.borrow().is_loading());
        })
        .await;

    assert_eq!(shown(&console), vec!["A"]);
}

/// Filter values map onto `group` and `weight`; the type filter only makes
/// the search active.
#[tokio::test(start_paused = true)]
async fn filters_map_to_request_parameters() {
    let (_console, driver) = driver();

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::fabric_type("knit")));
            advance(301).await;
            spawn(driver.update_query(QueryPatch::fabrication("Jersey")));
            spawn(driver.update_query(QueryPatch::gsm_range("heavy")));
            advance(301).await;
        })
        .await;

    let calls = driver.search().calls();
    assert_eq!(calls.len(), 2);

    assert_eq!(calls[0].search, None);
    assert_eq!(calls[0].group, None);
    assert_eq!(calls[0].weight, None);

    assert_eq!(calls[1].group.as_deref(), Some("Jersey"));
    assert_eq!(calls[1].weight.as_deref(), Some("heavy"));
    let names: Vec<&str> = calls[1].query_pairs().iter().map(|(k, _)| *k).collect();
    assert_eq!(names, vec!["page", "limit", "group", "weight"]);
}

/// Selecting twice is a round trip; selection survives a new search.
#[tokio::test(start_paused = true)]
async fn selection_survives_new_searches() {
    let (console, driver) = driver();
    driver.search().respond(Ok(page(&["A", "B"], false, 2)));
    driver.search().respond(Ok(page(&["C"], false, 1)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("twill")));
            advance(301).await;

            assert!(console.borrow_mut().toggle_select(fabric("A")));
            assert!(console.borrow_mut().toggle_select(fabric("B")));
            assert!(!console.borrow_mut().toggle_select(fabric("B")));
            assert_eq!(console.borrow().selection().len(), 1);

            spawn(driver.update_query(QueryPatch::term("canvas")));
            advance(301).await;
        })
        .await;

    assert_eq!(shown(&console), vec!["C"]);
    let console = console.borrow();
    assert!(console.is_selected(&fabric("A")));
    assert_eq!(console.selection().len(), 1);
}

/// Dropping the driver's pending timer leaves nothing running and nothing
/// waiting.
#[tokio::test(start_paused = true)]
async fn cancel_pending_drops_the_timer() {
    let (console, driver) = driver();

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("satin")));
            driver.cancel_pending();
            assert!(!console.borrow().is_pending());
            advance(1_000).await;
        })
        .await;

    assert_eq!(driver.search().call_count(), 0);
    assert!(console.borrow().items().is_empty());
    assert!(!console.borrow().is_pending());
}

/// Cancelling a scheduled next page keeps the results and allows asking
/// again.
#[tokio::test(start_paused = true)]
async fn cancel_pending_load_more_allows_retry() {
    let (console, driver) = driver();
    driver.search().respond(Ok(page(&["A"], true, 2)));
    driver.search().respond(Ok(page(&["B"], false, 2)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("satin")));
            advance(301).await;

            assert!(spawn(driver.load_more()));
            driver.cancel_pending();
            assert_eq!(console.borrow().page(), 1);

            assert!(spawn(driver.load_more()));
            advance(301).await;
        })
        .await;

    assert_eq!(shown(&console), vec!["A", "B"]);
}

/// A search task dropped before its timer fires gives its slot back.
#[tokio::test(start_paused = true)]
async fn dropped_task_during_debounce_releases_the_search() {
    let (console, driver) = driver();
    driver.search().respond(Ok(page(&["A"], false, 1)));

    LocalSet::new()
        .run_until(async {
            let task = driver
                .update_query(QueryPatch::term("cotton"))
                .expect("active query schedules a fetch");
            let handle = tokio::task::spawn_local(task);
            advance(100).await;
            handle.abort();
            advance(10).await;

            assert!(!console.borrow().is_pending());
            assert!(!console.borrow().is_loading());
            advance(1_000).await;
            assert_eq!(driver.search().call_count(), 0);

            spawn(driver.update_query(QueryPatch::term("cotton twill")));
            advance(301).await;
        })
        .await;

    assert_eq!(shown(&console), vec!["A"]);
}

/// A search task dropped while its request is out clears the loading flag
/// and leaves load more usable.
#[tokio::test(start_paused = true)]
async fn dropped_task_during_fetch_clears_loading() {
    let (console, driver) = driver();
    driver.search().respond(Ok(page(&["A", "B"], true, 4)));
    driver
        .search()
        .respond_after(Duration::from_millis(500), Ok(page(&["LOST"], true, 4)));
    driver.search().respond(Ok(page(&["C", "D"], false, 4)));

    LocalSet::new()
        .run_until(async {
            spawn(driver.update_query(QueryPatch::term("cotton")));
            advance(301).await;

            let task = driver.load_more().expect("more pages exist");
            let handle = tokio::task::spawn_local(task);
            advance(350).await;
            assert!(console.borrow().is_loading());

            handle.abort();
            advance(10).await;

            assert!(!console.borrow().is_loading());
            assert_eq!(console.borrow().page(), 1);
            assert_eq!(shown(&console), vec!["A", "B"]);

            assert!(spawn(driver.load_more()));
            advance(301).await;
        })
        .await;

    assert_eq!(shown(&console), vec!["A", "B", "C", "D"]);
    let pages: Vec<u32> = driver.search().calls().iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![1, 2, 2]);
}
