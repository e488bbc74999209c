//! Shared fixtures and the `query_contract_tests!` suite.
//!
//! The suite checks the query service contract (page size, page count,
//! ordering, card totals) against any `DashboardStore`.
//!
//! ```rust,ignore
//! #[macro_use]
//! mod contract;
//!
//! query_contract_tests!(InMemoryStore::new());
//! ```

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use dashboard_data::models::{Customer, CustomerSnapshot, Invoice, InvoiceStatus, Revenue};

/// Invoice whose date is `day` days after 2023-01-01, so fixtures sort predictably.
pub fn invoice(id: usize, name: &str, amount: i64, status: &str, day: i64) -> Invoice {
    let slug = name.to_lowercase().replace(' ', ".");
    Invoice {
        id: format!("inv-{id:04}"),
        customer: CustomerSnapshot {
            customer_id: format!("cust-{slug}"),
            name: name.to_string(),
            email: format!("{slug}@example.com"),
            image_url: format!("/customers/{slug}.png"),
        },
        amount,
        status: InvoiceStatus::from(status),
        date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + Duration::days(day),
    }
}

pub fn customer(name: &str) -> Customer {
    let slug = name.to_lowercase().replace(' ', ".");
    Customer {
        id: format!("cust-{slug}"),
        name: name.to_string(),
        email: format!("{slug}@example.com"),
        image_url: format!("/customers/{slug}.png"),
        invoices: Vec::new(),
    }
}

/// 13 invoices for "Acme Corp" (ids 0..13) and 4 for "Globex" (ids 100..104).
pub fn acme_and_globex() -> Vec<Invoice> {
    let mut invoices: Vec<Invoice> = (0..13)
        .map(|i| invoice(i, "Acme Corp", 1000 + i as i64, "pending", i as i64))
        .collect();
    invoices.extend((0..4).map(|i| invoice(100 + i, "Globex", 500, "paid", 50 + i as i64)));
    invoices
}

pub fn revenue() -> Vec<Revenue> {
    ["Jan", "Feb", "Mar"]
        .iter()
        .zip([2000, 1800, 2200])
        .map(|(month, revenue)| Revenue {
            month: month.to_string(),
            revenue,
        })
        .collect()
}

/// Generate the query-service conformance suite for a store.
///
/// `$factory` is evaluated once per test inside an async context and must
/// yield an empty store implementing `DashboardStore`.
macro_rules! query_contract_tests {
    ($factory:expr) => {
        mod query_contract_tests {
            use super::*;
            use dashboard_data::db::DashboardStore;
            use dashboard_data::query::pagination::PAGE_SIZE;
            use dashboard_data::QueryService;
            use crate::contract::*;

            // ==================================================================
            // Filtered invoices
            // ==================================================================

            #[tokio::test]
            async fn test_thirteen_matches_give_three_pages() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                let page = service.fetch_filtered_invoices("acme", 3).await.unwrap();
                assert_eq!(page.invoices.len(), 1);
                assert_eq!(page.total_pages, 3);
                assert_eq!(page.total_matching, 13);
                // Oldest Acme invoice lands on the last page
                assert_eq!(page.invoices[0].id, "inv-0000");
            }

            #[tokio::test]
            async fn test_page_size_and_minimum_page_count() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                for term in ["", "acme", "GLOBEX", "paid", "no-such-customer", "500"] {
                    for page in 0..=5 {
                        let result = service.fetch_filtered_invoices(term, page).await.unwrap();
                        assert!((result.invoices.len() as u64) <= PAGE_SIZE, "{term:?} page {page}");
                        assert!(result.total_pages >= 1, "{term:?} page {page}");
                    }
                }
            }

            #[tokio::test]
            async fn test_total_pages_follow_match_count() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                // term -> matches counted by hand from the fixture
                let cases = [("", 17_u64), ("acme", 13), ("globex", 4), ("paid", 4), ("pending", 13), ("example.com", 17)];
                for (term, matches) in cases {
                    let page = service.fetch_filtered_invoices(term, 1).await.unwrap();
                    assert_eq!(page.total_matching, matches, "{term:?}");
                    assert_eq!(u64::from(page.total_pages), matches.div_ceil(6), "{term:?}");
                    assert_eq!(
                        service.fetch_invoices_pages(term).await.unwrap(),
                        page.total_pages,
                        "{term:?}"
                    );
                }
            }

            #[tokio::test]
            async fn test_page_past_the_end_is_empty() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                let first = service.fetch_filtered_invoices("acme", 1).await.unwrap();
                let beyond = service.fetch_filtered_invoices("acme", 9).await.unwrap();
                assert!(beyond.invoices.is_empty());
                assert_eq!(beyond.total_pages, first.total_pages);
            }

            #[tokio::test]
            async fn test_non_numeric_term_never_matches_amount() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                let page = service.fetch_filtered_invoices("qwerty", 1).await.unwrap();
                assert!(page.invoices.is_empty());
                assert_eq!(page.total_matching, 0);
                assert_eq!(page.total_pages, 1);
            }

            #[tokio::test]
            async fn test_numeric_term_matches_exact_amount() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                let page = service.fetch_filtered_invoices("1007", 1).await.unwrap();
                assert_eq!(page.total_matching, 1);
                assert_eq!(page.invoices[0].amount, 1007);

                let page = service.fetch_filtered_invoices("500", 1).await.unwrap();
                assert_eq!(page.total_matching, 4);
            }

            #[tokio::test]
            async fn test_regex_characters_are_literal() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                let page = service.fetch_filtered_invoices(".*", 1).await.unwrap();
                assert_eq!(page.total_matching, 0);

                let page = service.fetch_filtered_invoices("acme.corp@", 1).await.unwrap();
                assert_eq!(page.total_matching, 13);
            }

            #[tokio::test]
            async fn test_pages_are_newest_first_without_overlap() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                let mut seen = Vec::new();
                for page in 1..=3 {
                    let result = service.fetch_filtered_invoices("", page).await.unwrap();
                    seen.extend(result.invoices);
                }

                assert_eq!(seen.len(), 17);
                assert!(seen.windows(2).all(|w| w[0].date >= w[1].date));
                let mut ids: Vec<&str> = seen.iter().map(|i| i.id.as_str()).collect();
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), 17);
            }

            #[tokio::test]
            async fn test_empty_store_has_one_page() {
                let service = QueryService::new($factory);

                let page = service.fetch_filtered_invoices("", 1).await.unwrap();
                assert!(page.invoices.is_empty());
                assert_eq!(page.total_pages, 1);
            }

            // ==================================================================
            // Cards, latest invoices, revenue
            // ==================================================================

            #[tokio::test]
            async fn test_card_data_on_empty_store() {
                let service = QueryService::new($factory);

                let cards = service.fetch_card_data().await.unwrap();
                assert_eq!(cards.number_of_invoices, 0);
                assert_eq!(cards.number_of_customers, 0);
                assert_eq!(cards.total_paid_invoices, 0);
                assert_eq!(cards.total_pending_invoices, 0);
            }

            #[tokio::test]
            async fn test_card_data_sums_by_status() {
                let store = $factory;
                store
                    .insert_invoices(&[
                        invoice(1, "Acme Corp", 100, "paid", 1),
                        invoice(2, "Acme Corp", 200, "paid", 2),
                        invoice(3, "Globex", 300, "pending", 3),
                    ])
                    .await
                    .unwrap();
                store
                    .insert_customers(&[customer("Acme Corp"), customer("Globex")])
                    .await
                    .unwrap();
                let service = QueryService::new(store);

                let cards = service.fetch_card_data().await.unwrap();
                assert_eq!(cards.number_of_invoices, 3);
                assert_eq!(cards.number_of_customers, 2);
                assert_eq!(cards.total_paid_invoices, 300);
                assert_eq!(cards.total_pending_invoices, 300);
                assert_eq!(cards.formatted_paid(), "$3.00");
            }

            #[tokio::test]
            async fn test_card_data_tolerates_missing_status() {
                let store = $factory;
                store
                    .insert_invoices(&[
                        invoice(1, "Acme Corp", 700, "paid", 1),
                        invoice(2, "Acme Corp", 900, "overdue", 2),
                    ])
                    .await
                    .unwrap();
                let service = QueryService::new(store);

                let cards = service.fetch_card_data().await.unwrap();
                assert_eq!(cards.number_of_invoices, 2);
                assert_eq!(cards.total_paid_invoices, 700);
                assert_eq!(cards.total_pending_invoices, 0);
            }

            #[tokio::test]
            async fn test_latest_invoices_are_five_newest() {
                let store = $factory;
                store.insert_invoices(&acme_and_globex()).await.unwrap();
                let service = QueryService::new(store);

                let latest = service.fetch_latest_invoices().await.unwrap();
                let ids: Vec<&str> = latest.iter().map(|i| i.id.as_str()).collect();
                assert_eq!(ids, ["inv-0103", "inv-0102", "inv-0101", "inv-0100", "inv-0012"]);
                assert_eq!(latest[0].name, "Globex");
                assert_eq!(latest[0].amount, "$5.00");
            }

            #[tokio::test]
            async fn test_revenue_returns_all_rows() {
                let store = $factory;
                store.insert_revenue(&revenue()).await.unwrap();
                let service = QueryService::new(store);

                let mut rows = service.fetch_revenue().await.unwrap();
                rows.sort_by_key(|r| r.revenue);
                let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
                assert_eq!(months, ["Feb", "Jan", "Mar"]);
            }

            // ==================================================================
            // Seeded placeholder data
            // ==================================================================

            #[tokio::test]
            async fn test_seeded_placeholder_data() {
                let store = $factory;
                dashboard_data::seed::Seeder::default().seed(&store).await.unwrap();
                let service = QueryService::new(store);

                let page = service.fetch_filtered_invoices("delba", 1).await.unwrap();
                assert_eq!(page.total_matching, 2);
                assert!(page.invoices.iter().all(|i| i.customer.name == "Delba de Oliveira"));

                let cards = service.fetch_card_data().await.unwrap();
                assert_eq!(cards.number_of_customers, 10);
                assert!(cards.total_paid_invoices > 0);
                assert!(cards.total_pending_invoices > 0);
            }
        }
    };
}
