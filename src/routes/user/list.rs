use actix_web::{get, web};
use sea_orm::Order;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{ListParams, ListQuery, ListRes, Pagination, SortBy};
use crate::utils::webutils::Actor;

const DEFAULT_PER_PAGE: u64 = 10;
const MAX_PER_PAGE: u64 = 100;

// Listing takes any authenticated caller; there is no ownership gate on the
// roster itself, only on individual records.
#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    _actor: Actor,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ListQuery>,
) -> ApiResult<ListRes> {
    let params = clean_params(&query);

    let (items, totals) = db.list_users(&params).await?;
    let last_page = totals.number_of_pages.max(1);

    let pagination = Pagination {
        total: totals.number_of_items,
        current_page: params.page,
        last_page,
        per_page: params.per_page,
        next_page_url: (params.page < last_page).then(|| page_url(&params, params.page + 1)),
        prev_page_url: (params.page > 1).then(|| page_url(&params, params.page - 1)),
    };

    Ok(ApiResponse::Ok(ListRes {
        status: "success".to_string(),
        data: items,
        pagination,
    }))
}

fn clean_params(query: &ListQuery) -> ListParams {
    // unknown sort keys fall back to id rather than erroring
    let sort_by = match query.sort_by.as_deref() {
        Some("name") => SortBy::Name,
        Some("email") => SortBy::Email,
        _ => SortBy::Id,
    };
    let sort_order = match query.sort_order.as_deref() {
        Some("desc") => Order::Desc,
        _ => Order::Asc,
    };

    ListParams {
        name_contains: query.name.clone().filter(|v| !v.is_empty()),
        email_contains: query.email.clone().filter(|v| !v.is_empty()),
        sort_by,
        sort_order,
        page: query.page.unwrap_or(1).max(1),
        per_page: query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
    }
}

fn page_url(params: &ListParams, page: u64) -> String {
    let mut url = format!("/users?page={}&per_page={}", page, params.per_page);

    let sort_key = match params.sort_by {
        SortBy::Id => "id",
        SortBy::Name => "name",
        SortBy::Email => "email",
    };
    let order_key = match params.sort_order {
        Order::Desc => "desc",
        _ => "asc",
    };
    if params.sort_by != SortBy::Id || matches!(params.sort_order, Order::Desc) {
        url.push_str(&format!("&sort_by={}&sort_order={}", sort_key, order_key));
    }

    if let Some(ref name) = params.name_contains {
        url.push_str(&format!("&name={}", urlencoding::encode(name)));
    }
    if let Some(ref email) = params.email_contains {
        url.push_str(&format!("&email={}", urlencoding::encode(email)));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> ListQuery {
        ListQuery {
            page: None,
            per_page: None,
            sort_by: None,
            sort_order: None,
            name: None,
            email: None,
        }
    }

    #[test]
    fn defaults_are_first_page_of_ten_by_id() {
        let params = clean_params(&query());
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 10);
        assert_eq!(params.sort_by, SortBy::Id);
        assert!(matches!(params.sort_order, Order::Asc));
    }

    #[test]
    fn per_page_is_clamped_to_a_hundred() {
        let mut q = query();
        q.per_page = Some(5000);
        assert_eq!(clean_params(&q).per_page, 100);
        q.per_page = Some(0);
        assert_eq!(clean_params(&q).per_page, 1);
    }

    #[test]
    fn unknown_sort_key_falls_back_to_id() {
        let mut q = query();
        q.sort_by = Some("password_hash".to_string());
        assert_eq!(clean_params(&q).sort_by, SortBy::Id);
    }

    #[test]
    fn page_urls_carry_filters_and_sort() {
        let mut q = query();
        q.sort_by = Some("name".to_string());
        q.sort_order = Some("desc".to_string());
        q.name = Some("ali ce".to_string());
        let params = clean_params(&q);

        let url = page_url(&params, 2);
        assert!(url.starts_with("/users?page=2&per_page=10"));
        assert!(url.contains("sort_by=name"));
        assert!(url.contains("sort_order=desc"));
        assert!(url.contains("name=ali%20ce"));
    }
}
