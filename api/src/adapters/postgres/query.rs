//! Translation of domain query descriptions into SeaORM selects

use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, Condition, EntityTrait, Iterable, PrimaryKeyToColumn, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use crate::domain::query::{LoanApplicationFilter, Page};
use crate::entity::demandes;

/// Order by primary key, then apply the page window.
///
/// Without the ordering, page boundaries would depend on the planner.
pub fn paginate<E: EntityTrait>(select: Select<E>, page: Page) -> Select<E> {
    E::PrimaryKey::iter()
        .fold(select, |query, key| query.order_by_asc(key.into_column()))
        .offset(page.skip)
        .limit(page.limit)
}

/// Select loan applications matching `filter`.
///
/// An empty filter adds no WHERE clause at all.
pub fn filtered_applications(filter: &LoanApplicationFilter) -> Select<demandes::Entity> {
    let query = demandes::Entity::find();
    if filter.is_empty() {
        query
    } else {
        query.filter(loan_application_condition(filter))
    }
}

/// Build the WHERE clause for a loan application listing
pub fn loan_application_condition(filter: &LoanApplicationFilter) -> Condition {
    Condition::all()
        .add_option(
            filter
                .operation_amount
                .map(|v| demandes::Column::MontantOperation.eq(v)),
        )
        .add_option(filter.duration.map(|v| demandes::Column::Duree.eq(v)))
        .add_option(filter.client_id.map(|v| demandes::Column::NumeroClient.eq(v.0)))
        .add_option(filter.branch_id.map(|v| demandes::Column::NumeroAgence.eq(v.0)))
        .add_option(
            filter
                .processing_duration
                .map(|v| demandes::Column::DureeDeTraitement.eq(v)),
        )
        .add_option(filter.approval_code.map(|v| demandes::Column::CodeAccord.eq(v)))
        .add_option(filter.approval_flag.as_deref().map(approval_flag_contains))
}

/// Case-insensitive substring match on `accord`
fn approval_flag_contains(needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));

    Expr::expr(Func::lower(Expr::col((
        demandes::Entity,
        demandes::Column::Accord,
    ))))
    .like(LikeExpr::new(pattern).escape('\\'))
}

/// Escape LIKE wildcards so user input matches literally
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
